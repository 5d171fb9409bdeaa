use std::collections::BTreeSet;

use thiserror::Error;

use crate::error::EditError;
use crate::id::{self, SentenceId};
use crate::types::{Part, Sentence, Word};

/// A sentence together with the words it currently owns.
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceEntry {
    pub sentence: Sentence,
    pub words: Vec<Word>,
}

/// A consistency problem found by [`PartModel::verify`].
///
/// These only fire if the engine has a bug or the loaded payload was already
/// broken; the command methods themselves never leave the model in a state
/// that fails verification.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvariantViolation {
    #[error("sentence {0} has no words")]
    EmptySentence(SentenceId),

    #[error("words out of order in sentence {0}")]
    WordOrder(SentenceId),

    #[error("sentence {0} starts before its predecessor ends")]
    SentenceOrder(SentenceId),

    #[error("derived stats stale on sentence {0}")]
    StaleStats(SentenceId),

    #[error("word set changed: missing {missing:?}, unexpected {unexpected:?}")]
    PartitionMismatch {
        missing: Vec<i64>,
        unexpected: Vec<i64>,
    },

    #[error("word {0} owned by more than one sentence")]
    DuplicateWord(i64),
}

/// The authoritative in-memory tree for one part being edited.
///
/// Owns the part header and its ordered sentences, each owning its ordered
/// words. All editing commands (see `engine` and `overlay`) are methods on
/// this type; they either apply fully or reject without touching anything.
#[derive(Debug, Clone, PartialEq)]
pub struct PartModel {
    part: Part,
    entries: Vec<SentenceEntry>,
}

impl PartModel {
    /// Build a model from a loaded payload. Sentences and words are sorted by
    /// start time and derived stats recomputed, so downstream logic can rely
    /// on chronological order and fresh stats even if the payload disagreed.
    pub fn new(part: Part, mut entries: Vec<SentenceEntry>) -> Self {
        for entry in &mut entries {
            entry
                .words
                .sort_by(|a, b| a.starts_at.total_cmp(&b.starts_at));
            Self::recompute_derived(entry);
        }
        entries.sort_by(|a, b| {
            let a_start = a.words.first().map_or(a.sentence.starts_at, |w| w.starts_at);
            let b_start = b.words.first().map_or(b.sentence.starts_at, |w| w.starts_at);
            a_start.total_cmp(&b_start)
        });
        Self { part, entries }
    }

    pub fn part(&self) -> &Part {
        &self.part
    }

    pub fn sentences(&self) -> &[SentenceEntry] {
        &self.entries
    }

    /// The sentence currently owning `word_id`.
    pub fn find_sentence_containing(&self, word_id: i64) -> Result<&SentenceEntry, EditError> {
        self.entries
            .iter()
            .find(|e| e.words.iter().any(|w| w.id == word_id))
            .ok_or(EditError::WordNotFound(word_id))
    }

    pub fn find_word(&self, word_id: i64) -> Result<&Word, EditError> {
        self.entries
            .iter()
            .flat_map(|e| e.words.iter())
            .find(|w| w.id == word_id)
            .ok_or(EditError::WordNotFound(word_id))
    }

    /// Visible transcript text of one sentence: effective word texts joined
    /// with single spaces, hidden words skipped.
    pub fn sentence_text(entry: &SentenceEntry) -> String {
        entry
            .words
            .iter()
            .filter(|w| !w.hidden)
            .map(Word::effective_text)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Visible transcript text of the whole part.
    pub fn part_text(&self) -> String {
        self.entries
            .iter()
            .map(Self::sentence_text)
            .collect::<Vec<_>>()
            .join(" ")
    }

    // ── Internal accessors for the engine ────────────────────────────────────

    pub(crate) fn entries_mut(&mut self) -> &mut Vec<SentenceEntry> {
        &mut self.entries
    }

    pub(crate) fn part_mut(&mut self) -> &mut Part {
        &mut self.part
    }

    pub(crate) fn index_of_word(&self, word_id: i64) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.words.iter().any(|w| w.id == word_id))
    }

    pub(crate) fn index_of_sentence(&self, id: SentenceId) -> Option<usize> {
        self.entries.iter().position(|e| e.sentence.id == id)
    }

    pub(crate) fn fresh_synthetic_id(&self) -> SentenceId {
        id::fresh_synthetic(self.entries.iter().map(|e| e.sentence.id))
    }

    /// Recompute the derived fields of one sentence from its word list.
    ///
    /// Must run after every structural mutation before the model is read
    /// again. A zero duration cannot occur when the ordering invariants hold,
    /// but is guarded to 0.0 wps rather than dividing to NaN.
    pub(crate) fn recompute_derived(entry: &mut SentenceEntry) {
        let Some(first) = entry.words.first() else {
            return;
        };
        let last = entry.words.last().expect("non-empty");

        entry.sentence.starts_at = first.starts_at;
        entry.sentence.ends_at = last.ends_at;

        let duration = entry.sentence.ends_at - entry.sentence.starts_at;
        entry.sentence.words_per_second = if duration > 0.0 {
            entry.words.len() as f64 / duration
        } else {
            0.0
        };
    }

    // ── Consistency checks ───────────────────────────────────────────────────

    /// Check structural invariants: no empty sentence, chronological word
    /// order within each sentence, chronological non-overlapping sentence
    /// order, derived stats matching the word lists.
    pub fn verify(&self) -> Result<(), InvariantViolation> {
        let mut prev_end = f64::NEG_INFINITY;

        for entry in &self.entries {
            let id = entry.sentence.id;

            let Some(first) = entry.words.first() else {
                return Err(InvariantViolation::EmptySentence(id));
            };
            let last = entry.words.last().expect("non-empty");

            if entry
                .words
                .windows(2)
                .any(|pair| pair[0].starts_at > pair[1].starts_at)
            {
                return Err(InvariantViolation::WordOrder(id));
            }

            if first.starts_at < prev_end {
                return Err(InvariantViolation::SentenceOrder(id));
            }
            prev_end = last.ends_at;

            if entry.sentence.starts_at != first.starts_at || entry.sentence.ends_at != last.ends_at
            {
                return Err(InvariantViolation::StaleStats(id));
            }

            let duration = last.ends_at - first.starts_at;
            let expected_wps = if duration > 0.0 {
                entry.words.len() as f64 / duration
            } else {
                0.0
            };
            if (entry.sentence.words_per_second - expected_wps).abs() > 1e-9 {
                return Err(InvariantViolation::StaleStats(id));
            }
        }

        Ok(())
    }

    /// Check that the sentences partition exactly `expected` word ids, each
    /// owned once. `expected` is the id set captured when the part was loaded.
    pub fn verify_partition(
        &self,
        expected: &BTreeSet<i64>,
    ) -> Result<(), InvariantViolation> {
        let mut seen = BTreeSet::new();
        for word in self.entries.iter().flat_map(|e| e.words.iter()) {
            if !seen.insert(word.id) {
                return Err(InvariantViolation::DuplicateWord(word.id));
            }
        }

        if &seen != expected {
            return Err(InvariantViolation::PartitionMismatch {
                missing: expected.difference(&seen).copied().collect(),
                unexpected: seen.difference(expected).copied().collect(),
            });
        }

        Ok(())
    }

    /// Convenience for tests: the full id set currently owned by sentences.
    pub fn word_ids(&self) -> BTreeSet<i64> {
        self.entries
            .iter()
            .flat_map(|e| e.words.iter().map(|w| w.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{entry, part, word};

    #[test]
    fn construction_sorts_sentences_and_words() {
        let scrambled = vec![
            entry(20, &[word(3, 1.0, 1.5, "friend")]),
            entry(
                10,
                &[word(2, 0.5, 1.0, "there"), word(1, 0.0, 0.5, "Hi")],
            ),
        ];
        let model = PartModel::new(part(), scrambled);

        assert_eq!(model.sentences()[0].sentence.id.raw(), 10);
        assert_eq!(model.sentences()[0].words[0].id, 1);
        assert_eq!(model.sentences()[1].sentence.id.raw(), 20);
        assert!(model.verify().is_ok());
    }

    #[test]
    fn lookups_report_not_found() {
        let model = PartModel::new(part(), vec![entry(10, &[word(1, 0.0, 0.5, "Hi")])]);

        assert!(model.find_word(1).is_ok());
        assert_eq!(model.find_word(99), Err(EditError::WordNotFound(99)));
        assert_eq!(
            model.find_sentence_containing(99),
            Err(EditError::WordNotFound(99))
        );
    }

    #[test]
    fn recompute_guards_zero_duration() {
        let mut e = entry(10, &[word(1, 1.0, 1.0, "x")]);
        PartModel::recompute_derived(&mut e);
        assert_eq!(e.sentence.words_per_second, 0.0);
        assert_eq!(e.sentence.starts_at, 1.0);
        assert_eq!(e.sentence.ends_at, 1.0);
    }

    #[test]
    fn sentence_text_skips_hidden_and_applies_overwrites() {
        let mut e = entry(
            10,
            &[
                word(1, 0.0, 0.5, "Hi"),
                word(2, 0.5, 1.0, "thre"),
                word(3, 1.0, 1.5, "um"),
            ],
        );
        e.words[1].overwrite = "there".into();
        e.words[2].hidden = true;
        let model = PartModel::new(part(), vec![e]);

        assert_eq!(PartModel::sentence_text(&model.sentences()[0]), "Hi there");
        assert_eq!(model.part_text(), "Hi there");
    }

    #[test]
    fn verify_flags_stale_words_per_second() {
        let mut model = PartModel::new(
            part(),
            vec![entry(10, &[word(1, 0.0, 0.5, "Hi"), word(2, 0.5, 1.0, "there")])],
        );
        assert!(model.verify().is_ok());

        // Boundary times still match the words; only the rate is wrong.
        model.entries_mut()[0].sentence.words_per_second = 9.0;
        assert!(matches!(
            model.verify(),
            Err(InvariantViolation::StaleStats(_))
        ));
    }

    #[test]
    fn verify_partition_flags_loss_and_duplication() {
        let model = PartModel::new(
            part(),
            vec![entry(10, &[word(1, 0.0, 0.5, "Hi"), word(2, 0.5, 1.0, "there")])],
        );

        let expected: BTreeSet<i64> = [1, 2].into();
        assert!(model.verify_partition(&expected).is_ok());

        let too_many: BTreeSet<i64> = [1, 2, 3].into();
        assert!(matches!(
            model.verify_partition(&too_many),
            Err(InvariantViolation::PartitionMismatch { .. })
        ));
    }

    #[test]
    fn verify_rejects_overlapping_sentences() {
        let model = PartModel::new(
            part(),
            vec![
                entry(10, &[word(1, 0.0, 1.0, "Hi")]),
                entry(20, &[word(2, 0.5, 1.5, "there")]),
            ],
        );
        assert!(matches!(
            model.verify(),
            Err(InvariantViolation::SentenceOrder(_))
        ));
    }
}
