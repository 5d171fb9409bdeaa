//! Re-segmentation commands.
//!
//! Each command is a total function over the in-memory model: it either
//! applies fully or rejects with an [`EditError`] and leaves the model
//! bit-identical. Expected edge cases (stale ids, no neighbor to merge into,
//! a move that would empty its source while creating a new sentence) are
//! rejections, not panics, so the UI stays usable and just ignores the action.

use crate::error::EditError;
use crate::model::{PartModel, SentenceEntry};
use crate::types::{Direction, PartType, Sentence, Word};
use crate::id::SentenceId;

impl PartModel {
    /// Move a run of words out of the sentence owning `word_id`.
    ///
    /// `Direction::Up` peels off the target word and everything before it in
    /// its sentence; `Direction::Down` the target word and everything after
    /// it. With `create` the run becomes a fresh synthetic sentence spliced
    /// next to the source; without it the run merges into the existing
    /// neighbor (prepended to the source's position for `Up` targets means
    /// appended to the previous sentence, and mirrored for `Down`).
    ///
    /// The cut uses the target word's times rather than its index: a word can
    /// never be split from itself, and the partition stays correct for any
    /// chronologically ordered word list.
    pub fn move_words(
        &mut self,
        word_id: i64,
        direction: Direction,
        create: bool,
    ) -> Result<(), EditError> {
        let Some(src) = self.index_of_word(word_id) else {
            tracing::warn!(word_id, "move rejected: no sentence owns this word");
            return Err(EditError::WordNotFound(word_id));
        };

        let (cut_start, cut_end) = {
            let source = &self.sentences()[src];
            let word = source
                .words
                .iter()
                .find(|w| w.id == word_id)
                .expect("index_of_word found it");
            (word.starts_at, word.ends_at)
        };

        let source_words = &self.sentences()[src].words;
        let (moved, kept): (Vec<Word>, Vec<Word>) = match direction {
            Direction::Up => (
                source_words
                    .iter()
                    .filter(|w| w.starts_at < cut_end)
                    .cloned()
                    .collect(),
                source_words
                    .iter()
                    .filter(|w| w.starts_at > cut_start)
                    .cloned()
                    .collect(),
            ),
            Direction::Down => (
                source_words
                    .iter()
                    .filter(|w| w.ends_at > cut_start)
                    .cloned()
                    .collect(),
                source_words
                    .iter()
                    .filter(|w| w.starts_at < cut_start)
                    .cloned()
                    .collect(),
            ),
        };

        if create {
            self.split_off(src, direction, moved, kept)
        } else {
            self.merge_into_neighbor(src, direction, moved, kept)
        }
    }

    fn split_off(
        &mut self,
        src: usize,
        direction: Direction,
        moved: Vec<Word>,
        kept: Vec<Word>,
    ) -> Result<(), EditError> {
        if kept.is_empty() {
            tracing::debug!(
                sentence = %self.sentences()[src].sentence.id,
                "split rejected: source sentence would be left empty"
            );
            return Err(EditError::InvalidOperation(
                "splitting off every word would empty the source sentence",
            ));
        }

        let target = SentenceEntry {
            sentence: Sentence::synthetic(self.fresh_synthetic_id()),
            words: moved,
        };

        let insert_at = match direction {
            Direction::Up => src,
            Direction::Down => src + 1,
        };
        let src_after = match direction {
            Direction::Up => src + 1,
            Direction::Down => src,
        };

        let entries = self.entries_mut();
        entries[src].words = kept;
        entries.insert(insert_at, target);

        Self::recompute_derived(&mut entries[insert_at]);
        Self::recompute_derived(&mut entries[src_after]);
        Ok(())
    }

    fn merge_into_neighbor(
        &mut self,
        src: usize,
        direction: Direction,
        moved: Vec<Word>,
        kept: Vec<Word>,
    ) -> Result<(), EditError> {
        let tgt = match direction {
            Direction::Up => src.checked_sub(1),
            Direction::Down => (src + 1 < self.sentences().len()).then_some(src + 1),
        };
        let Some(tgt) = tgt else {
            tracing::debug!(?direction, "merge rejected: no neighbor sentence");
            return Err(EditError::InvalidOperation(
                "no neighbor sentence in that direction",
            ));
        };

        let source_id = self.sentences()[src].sentence.id;
        let target_id = self.sentences()[tgt].sentence.id;

        // Emptying a persisted sentence into a synthetic neighbor would
        // silently destroy the persisted row while keeping the pending one.
        // Run the mirrored move on the neighbor's boundary word instead, so
        // the persisted sentence absorbs the synthetic one and survives.
        if kept.is_empty() && !source_id.is_synthetic() && target_id.is_synthetic() {
            let neighbor = &self.sentences()[tgt];
            let boundary = match direction {
                Direction::Up => neighbor.words.first(),
                Direction::Down => neighbor.words.last(),
            };
            let Some(boundary_id) = boundary.map(|w| w.id) else {
                return Err(EditError::SentenceNotFound(target_id));
            };
            return self.move_words(boundary_id, direction.opposite(), false);
        }

        let entries = self.entries_mut();
        let tgt = if kept.is_empty() {
            entries.remove(src);
            if tgt > src { tgt - 1 } else { tgt }
        } else {
            entries[src].words = kept;
            tgt
        };

        match direction {
            Direction::Up => entries[tgt].words.extend(moved),
            Direction::Down => {
                entries[tgt].words.splice(0..0, moved);
            }
        }

        Self::recompute_derived(&mut entries[tgt]);
        if let Some(entry) = entries.iter_mut().find(|e| e.sentence.id == source_id) {
            Self::recompute_derived(entry);
        }
        Ok(())
    }

    /// Flip a single word's visibility. Timing and statistics are unaffected;
    /// hidden words only drop out of the rendered text.
    pub fn toggle_word_hidden(&mut self, word_id: i64) -> Result<(), EditError> {
        let Some(word) = self
            .entries_mut()
            .iter_mut()
            .flat_map(|e| e.words.iter_mut())
            .find(|w| w.id == word_id)
        else {
            tracing::warn!(word_id, "toggle rejected: word not found");
            return Err(EditError::WordNotFound(word_id));
        };
        word.hidden = !word.hidden;
        Ok(())
    }

    /// Hide or show a whole sentence with hide-wins precedence: if any word
    /// is still visible the sentence hides, otherwise it shows.
    pub fn toggle_sentence_hidden(&mut self, sentence_id: SentenceId) -> Result<(), EditError> {
        let Some(idx) = self.index_of_sentence(sentence_id) else {
            tracing::warn!(sentence = %sentence_id, "toggle rejected: sentence not found");
            return Err(EditError::SentenceNotFound(sentence_id));
        };

        let words = &mut self.entries_mut()[idx].words;
        let hide = words.iter().any(|w| !w.hidden);
        for word in words.iter_mut() {
            word.hidden = hide;
        }
        Ok(())
    }

    /// Record a human correction for a word. A correction identical to the
    /// recognizer's text means "nothing to fix" and clears the override, so
    /// the persisted diff stays minimal.
    pub fn overwrite_word(&mut self, word_id: i64, new_text: &str) -> Result<(), EditError> {
        let Some(word) = self
            .entries_mut()
            .iter_mut()
            .flat_map(|e| e.words.iter_mut())
            .find(|w| w.id == word_id)
        else {
            tracing::warn!(word_id, "overwrite rejected: word not found");
            return Err(EditError::WordNotFound(word_id));
        };

        if new_text == word.text {
            word.overwrite.clear();
        } else {
            word.overwrite = new_text.to_string();
        }
        Ok(())
    }

    /// Reassign the part's default speaker.
    pub fn set_part_speaker(&mut self, episode_speaker_id: i64) {
        self.part_mut().episode_speaker_id = episode_speaker_id;
    }

    /// Override one sentence's speaker. Overriding with the part's own
    /// speaker clears the override so the sentence inherits again.
    pub fn set_sentence_speaker(
        &mut self,
        sentence_id: SentenceId,
        episode_speaker_id: i64,
    ) -> Result<(), EditError> {
        let Some(idx) = self.index_of_sentence(sentence_id) else {
            tracing::warn!(sentence = %sentence_id, "speaker change rejected: sentence not found");
            return Err(EditError::SentenceNotFound(sentence_id));
        };

        let part_speaker = self.part().episode_speaker_id;
        let sentence = &mut self.entries_mut()[idx].sentence;
        sentence.speaker_override = if episode_speaker_id == part_speaker {
            None
        } else {
            Some(episode_speaker_id)
        };
        Ok(())
    }

    pub fn set_part_type(&mut self, part_type: PartType) {
        self.part_mut().part_type = part_type;
    }
}
