//! Word-level diff against the originally loaded snapshot.
//!
//! The incremental persistence strategy sends one update per changed word.
//! "Changed" is always judged against the snapshot captured when the part
//! was loaded, never against an intermediate state, so undoing an edit by
//! hand drops the word back out of the diff.

use std::collections::HashMap;

use crate::id::SentenceId;
use crate::model::PartModel;
use crate::types::Word;

/// One word that differs from the loaded snapshot, tagged with the sentence
/// that currently owns it (possibly synthetic).
#[derive(Debug, Clone, PartialEq)]
pub struct WordChange {
    pub sentence_id: SentenceId,
    pub word: Word,
}

/// Words whose content or ownership changed since `original` was loaded,
/// in ascending start-time order.
pub fn changed_words(original: &PartModel, current: &PartModel) -> Vec<WordChange> {
    let mut before: HashMap<i64, (SentenceId, &Word)> = HashMap::new();
    for entry in original.sentences() {
        for word in &entry.words {
            before.insert(word.id, (entry.sentence.id, word));
        }
    }

    let mut changes = Vec::new();
    for entry in current.sentences() {
        for word in &entry.words {
            let changed = match before.get(&word.id) {
                Some((owner, original_word)) => {
                    *owner != entry.sentence.id || *original_word != word
                }
                // A word the snapshot never had should not happen, but if it
                // does it is certainly a change.
                None => true,
            };
            if changed {
                changes.push(WordChange {
                    sentence_id: entry.sentence.id,
                    word: word.clone(),
                });
            }
        }
    }
    changes
}

/// Whether the edit went beyond per-word field changes: words moved between
/// sentences, sentences appeared or disappeared, or a pending-move marker
/// was set. Such edits need the whole-part persistence strategy; the
/// word-level endpoint cannot express them.
pub fn has_structural_changes(original: &PartModel, current: &PartModel) -> bool {
    if current
        .sentences()
        .iter()
        .any(|e| e.sentence.id.is_synthetic() || e.sentence.move_marker.is_some())
    {
        return true;
    }

    let before_ids: Vec<SentenceId> = original.sentences().iter().map(|e| e.sentence.id).collect();
    let after_ids: Vec<SentenceId> = current.sentences().iter().map(|e| e.sentence.id).collect();
    if before_ids != after_ids {
        return true;
    }

    let mut before_owner: HashMap<i64, SentenceId> = HashMap::new();
    for entry in original.sentences() {
        for word in &entry.words {
            before_owner.insert(word.id, entry.sentence.id);
        }
    }
    current.sentences().iter().any(|entry| {
        entry
            .words
            .iter()
            .any(|w| before_owner.get(&w.id) != Some(&entry.sentence.id))
    })
}
