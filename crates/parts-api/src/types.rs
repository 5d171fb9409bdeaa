use pod_editor::{
    MoveMarker, Part, PartModel, PartType, Sentence, SentenceEntry, SentenceId, Word,
};

/// The `parts/{id}/display` payload: one part with its sentences, each
/// embedding its words. Also the body of the whole-part update POST.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, specta::Type)]
pub struct PartDisplay {
    pub part: PartRecord,
    pub sentences: Vec<SentenceDisplay>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, specta::Type)]
pub struct SentenceDisplay {
    pub sentence: SentenceRecord,
    pub words: Vec<Word>,
    /// Pending-move marker, wire-encoded (`up`/`upnew`/`downnew`/`down`).
    /// Absent when the sentence stays in this part.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub move_sentence: Option<String>,
}

/// The part row as the upstream API serializes it. Timestamps are ISO-8601
/// strings and ride along untouched; the editor never interprets them.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, specta::Type)]
pub struct PartRecord {
    pub id: i64,
    pub episode_id: i64,
    pub episode_speaker_id: i64,
    pub part_type: i32,
    pub text: String,
    pub starts_at: f64,
    pub ends_at: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// The sentence row. Synthetic sentences created during editing serialize
/// with their negative id and no timestamps; the upstream update handler
/// turns them into real rows.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, specta::Type)]
pub struct SentenceRecord {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_id: Option<i64>,
    pub text: String,
    pub starts_at: f64,
    pub ends_at: f64,
    pub words_per_second: f64,
    /// Sentence-level speaker override; absent means the part's speaker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_speaker_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl PartDisplay {
    /// Seed a fresh editing model from this payload.
    pub fn to_model(&self) -> PartModel {
        let part = Part {
            id: self.part.id,
            episode_id: self.part.episode_id,
            episode_speaker_id: self.part.episode_speaker_id,
            part_type: PartType::from_raw(self.part.part_type),
            text: self.part.text.clone(),
            starts_at: self.part.starts_at,
            ends_at: self.part.ends_at,
        };

        let entries = self
            .sentences
            .iter()
            .map(|s| SentenceEntry {
                sentence: Sentence {
                    id: SentenceId::from_raw(s.sentence.id),
                    text: s.sentence.text.clone(),
                    starts_at: s.sentence.starts_at,
                    ends_at: s.sentence.ends_at,
                    words_per_second: s.sentence.words_per_second,
                    speaker_override: s.sentence.episode_speaker_id,
                    move_marker: s
                        .move_sentence
                        .as_deref()
                        .and_then(|m| m.parse::<MoveMarker>().ok()),
                },
                words: s.words.clone(),
            })
            .collect();

        PartModel::new(part, entries)
    }

    /// Serialize an edited model back to the wire shape, carrying row
    /// metadata (timestamps, part linkage) over from the loaded payload.
    /// Sentence and part texts are refreshed from the visible words so the
    /// upstream rows match what the editor saw.
    pub fn from_model(model: &PartModel, loaded: &PartDisplay) -> Self {
        let part = PartRecord {
            id: model.part().id,
            episode_id: model.part().episode_id,
            episode_speaker_id: model.part().episode_speaker_id,
            part_type: model.part().part_type.raw(),
            text: model.part_text(),
            starts_at: model.part().starts_at,
            ends_at: model.part().ends_at,
            created_at: loaded.part.created_at.clone(),
            updated_at: loaded.part.updated_at.clone(),
        };

        let sentences = model
            .sentences()
            .iter()
            .map(|entry| {
                let loaded_record = loaded
                    .sentences
                    .iter()
                    .map(|s| &s.sentence)
                    .find(|s| s.id == entry.sentence.id.raw());

                SentenceDisplay {
                    sentence: SentenceRecord {
                        id: entry.sentence.id.raw(),
                        part_id: loaded_record.and_then(|r| r.part_id),
                        text: PartModel::sentence_text(entry),
                        starts_at: entry.sentence.starts_at,
                        ends_at: entry.sentence.ends_at,
                        words_per_second: entry.sentence.words_per_second,
                        episode_speaker_id: entry.sentence.speaker_override,
                        created_at: loaded_record.and_then(|r| r.created_at.clone()),
                        updated_at: loaded_record.and_then(|r| r.updated_at.clone()),
                    },
                    words: entry.words.clone(),
                    move_sentence: entry.sentence.move_marker.map(|m| m.to_string()),
                }
            })
            .collect();

        Self { part, sentences }
    }
}
