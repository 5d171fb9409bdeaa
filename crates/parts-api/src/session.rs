use pod_editor::{PartModel, changed_words, has_structural_changes};
use pod_http::HttpClient;

use crate::client::PartsApiClient;
use crate::error::Error;
use crate::types::PartDisplay;

/// What an incremental save actually sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveOutcome {
    pub words_sent: usize,
}

/// One editing session over one part.
///
/// Owns the live model plus the pristine payload it was seeded from; diffs
/// for the incremental strategy are always taken against that snapshot.
/// Every mutation is local until one of the save methods runs; dropping
/// the session is cancel, with no partial writes.
pub struct EditSession {
    episode_id: i64,
    snapshot: PartDisplay,
    snapshot_model: PartModel,
    model: PartModel,
}

impl EditSession {
    pub fn new(episode_id: i64, display: PartDisplay) -> Self {
        let model = display.to_model();
        Self {
            episode_id,
            snapshot_model: model.clone(),
            snapshot: display,
            model,
        }
    }

    /// Fetch the display payload and open a session over it.
    pub async fn load<C: HttpClient>(
        client: &PartsApiClient<C>,
        episode_id: i64,
        part_id: i64,
    ) -> Result<Self, Error> {
        let display = client.get_display(episode_id, part_id).await?;
        Ok(Self::new(episode_id, display))
    }

    pub fn model(&self) -> &PartModel {
        &self.model
    }

    /// The editing surface: every engine and overlay command goes through
    /// here.
    pub fn model_mut(&mut self) -> &mut PartModel {
        &mut self.model
    }

    pub fn part_id(&self) -> i64 {
        self.snapshot.part.id
    }

    /// Whether anything differs from the loaded snapshot.
    pub fn is_dirty(&self) -> bool {
        self.model != self.snapshot_model
    }

    /// Send only the words that changed since load, one PUT each.
    ///
    /// Refuses with [`Error::RequiresFullSave`] if the edit restructured
    /// sentences: the word endpoint rejects words whose owning sentence
    /// changed. On any upstream failure the session stays intact for retry.
    pub async fn save_incremental<C: HttpClient>(
        &self,
        client: &PartsApiClient<C>,
    ) -> Result<SaveOutcome, Error> {
        if has_structural_changes(&self.snapshot_model, &self.model) {
            tracing::debug!(
                part_id = self.part_id(),
                "incremental save refused: structural changes present"
            );
            return Err(Error::RequiresFullSave);
        }

        let changes = changed_words(&self.snapshot_model, &self.model);
        let part_id = self.part_id();
        for change in &changes {
            client
                .put_word(self.episode_id, part_id, change.sentence_id.raw(), &change.word)
                .await?;
        }

        Ok(SaveOutcome {
            words_sent: changes.len(),
        })
    }

    /// Persist the whole edited tree in one POST. Handles every kind of
    /// edit, including synthetic sentences and pending-move markers.
    pub async fn save_full<C: HttpClient>(
        &self,
        client: &PartsApiClient<C>,
    ) -> Result<(), Error> {
        let display = PartDisplay::from_model(&self.model, &self.snapshot);
        client
            .update_part(self.episode_id, self.part_id(), &display)
            .await
    }
}
