//! Pending-move markers.
//!
//! Relocating a sentence to the adjacent part needs coordination with that
//! part's own editing session, so it does not happen here. The overlay only
//! records the editor's intent as sentence metadata; the persistence layer
//! acts on it at save time. Markers are non-destructive and freely
//! reversible until then.

use crate::error::EditError;
use crate::id::SentenceId;
use crate::model::PartModel;
use crate::types::MoveMarker;

impl PartModel {
    /// Mark a boundary sentence for relocation, or clear the mark.
    ///
    /// Only the first sentence may point at the previous part and only the
    /// last at the next. Issuing the marker a sentence already carries acts
    /// as a toggle and clears it.
    pub fn set_move_marker(
        &mut self,
        sentence_id: SentenceId,
        marker: MoveMarker,
    ) -> Result<(), EditError> {
        let Some(idx) = self.index_of_sentence(sentence_id) else {
            tracing::warn!(sentence = %sentence_id, "move marker rejected: sentence not found");
            return Err(EditError::SentenceNotFound(sentence_id));
        };

        let boundary_ok = if marker.points_to_previous() {
            idx == 0
        } else {
            idx == self.sentences().len() - 1
        };
        if !boundary_ok {
            tracing::debug!(
                sentence = %sentence_id,
                %marker,
                "move marker rejected: not a boundary sentence for that direction"
            );
            return Err(EditError::InvalidOperation(
                "only the first sentence may move to the previous part and only the last to the next",
            ));
        }

        let slot = &mut self.entries_mut()[idx].sentence.move_marker;
        *slot = if *slot == Some(marker) { None } else { Some(marker) };
        Ok(())
    }

    pub fn clear_move_marker(&mut self, sentence_id: SentenceId) -> Result<(), EditError> {
        let Some(idx) = self.index_of_sentence(sentence_id) else {
            return Err(EditError::SentenceNotFound(sentence_id));
        };
        self.entries_mut()[idx].sentence.move_marker = None;
        Ok(())
    }
}
