//! Shared builders for the crate's tests.

use crate::id::SentenceId;
use crate::model::SentenceEntry;
use crate::types::{Part, PartType, Sentence, Word};

pub(crate) fn word(id: i64, starts_at: f64, ends_at: f64, text: &str) -> Word {
    Word {
        id,
        text: text.to_string(),
        overwrite: String::new(),
        starts_at,
        ends_at,
        probability: 0.95,
        hidden: false,
    }
}

/// A sentence entry with derived stats already consistent with its words.
pub(crate) fn entry(sentence_id: i64, words: &[Word]) -> SentenceEntry {
    let words = words.to_vec();
    let starts_at = words.first().map_or(0.0, |w| w.starts_at);
    let ends_at = words.last().map_or(0.0, |w| w.ends_at);
    let duration = ends_at - starts_at;
    let words_per_second = if duration > 0.0 {
        words.len() as f64 / duration
    } else {
        0.0
    };

    SentenceEntry {
        sentence: Sentence {
            id: SentenceId::from_raw(sentence_id),
            text: String::new(),
            starts_at,
            ends_at,
            words_per_second,
            speaker_override: None,
            move_marker: None,
        },
        words,
    }
}

pub(crate) fn part() -> Part {
    Part {
        id: 7,
        episode_id: 1,
        episode_speaker_id: 3,
        part_type: PartType::Speech,
        text: String::new(),
        starts_at: 0.0,
        ends_at: 0.0,
    }
}
