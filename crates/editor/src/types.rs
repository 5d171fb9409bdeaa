use crate::id::SentenceId;

/// One recognized word with its timing and confidence.
///
/// `text` is the recognizer output and never changes; human corrections go
/// into `overwrite` (empty string = no correction). `hidden` removes the word
/// from rendered transcript text but not from the timeline.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, specta::Type)]
pub struct Word {
    pub id: i64,
    pub text: String,
    pub overwrite: String,
    pub starts_at: f64,
    pub ends_at: f64,
    pub probability: f64,
    pub hidden: bool,
}

impl Word {
    /// The text an exported transcript shows for this word.
    pub fn effective_text(&self) -> &str {
        if self.overwrite.is_empty() {
            &self.text
        } else {
            &self.overwrite
        }
    }
}

/// Editor intent to relocate a boundary sentence to an adjacent part.
///
/// Recorded as metadata only; the actual relocation happens upstream when the
/// part is saved. The string forms are the wire values the update endpoint
/// expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
pub enum MoveMarker {
    /// Append this sentence to the previous part.
    #[strum(serialize = "up")]
    ToPrevious,
    /// Move this sentence out into a brand-new part before this one.
    #[strum(serialize = "upnew")]
    ToPreviousAsNew,
    /// Move this sentence out into a brand-new part after this one.
    #[strum(serialize = "downnew")]
    ToNextAsNew,
    /// Prepend this sentence to the next part.
    #[strum(serialize = "down")]
    ToNext,
}

impl MoveMarker {
    /// Markers pointing at the previous part may only sit on the first
    /// sentence; markers pointing at the next part only on the last.
    pub fn points_to_previous(self) -> bool {
        matches!(self, Self::ToPrevious | Self::ToPreviousAsNew)
    }
}

/// Which neighbor a word run moves toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub(crate) fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

/// Part-level classification. Stored upstream as a small integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartType {
    #[default]
    Speech,
    Jingle,
}

impl PartType {
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Self::Jingle,
            _ => Self::Speech,
        }
    }

    pub fn raw(self) -> i32 {
        match self {
            Self::Speech => 0,
            Self::Jingle => 1,
        }
    }
}

/// An editor-manipulable grouping of consecutive words.
///
/// `starts_at`, `ends_at` and `words_per_second` are derived from the word
/// list and recomputed after every structural change; they are kept on the
/// sentence because the upstream schema stores them denormalized.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    pub id: SentenceId,
    pub text: String,
    pub starts_at: f64,
    pub ends_at: f64,
    pub words_per_second: f64,
    /// Episode-speaker override for this sentence only. `None` inherits the
    /// part's speaker.
    pub speaker_override: Option<i64>,
    pub move_marker: Option<MoveMarker>,
}

impl Sentence {
    /// A freshly split-off sentence: no summary text yet, stats zeroed until
    /// the first recompute.
    pub(crate) fn synthetic(id: SentenceId) -> Self {
        Self {
            id,
            text: String::new(),
            starts_at: 0.0,
            ends_at: 0.0,
            words_per_second: 0.0,
            speaker_override: None,
            move_marker: None,
        }
    }
}

/// A contiguous, speaker-attributed unit of transcript within an episode.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub id: i64,
    pub episode_id: i64,
    pub episode_speaker_id: i64,
    pub part_type: PartType,
    pub text: String,
    pub starts_at: f64,
    pub ends_at: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_text_prefers_overwrite() {
        let mut w = Word {
            id: 1,
            text: "helo".into(),
            overwrite: String::new(),
            starts_at: 0.0,
            ends_at: 0.5,
            probability: 0.8,
            hidden: false,
        };
        assert_eq!(w.effective_text(), "helo");

        w.overwrite = "hello".into();
        assert_eq!(w.effective_text(), "hello");
    }

    #[test]
    fn move_marker_wire_strings_roundtrip() {
        for (marker, wire) in [
            (MoveMarker::ToPrevious, "up"),
            (MoveMarker::ToPreviousAsNew, "upnew"),
            (MoveMarker::ToNextAsNew, "downnew"),
            (MoveMarker::ToNext, "down"),
        ] {
            assert_eq!(marker.to_string(), wire);
            assert_eq!(wire.parse::<MoveMarker>().unwrap(), marker);
        }
        assert!("sideways".parse::<MoveMarker>().is_err());
    }

    #[test]
    fn part_type_raw_mapping() {
        assert_eq!(PartType::from_raw(0), PartType::Speech);
        assert_eq!(PartType::from_raw(1), PartType::Jingle);
        // Unknown tags degrade to ordinary speech.
        assert_eq!(PartType::from_raw(7), PartType::Speech);
        assert_eq!(PartType::Jingle.raw(), 1);
    }
}
