use pod_editor::Word;
use pod_http::HttpClient;

use crate::error::Error;
use crate::types::PartDisplay;

/// Typed client for the part editing endpoints.
///
/// Paths mirror the upstream routes; the `HttpClient` implementation owns
/// the host and credentials.
pub struct PartsApiClient<C> {
    http: C,
}

impl<C: HttpClient> PartsApiClient<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    /// Fetch the display payload that seeds an editing session.
    pub async fn get_display(&self, episode_id: i64, part_id: i64) -> Result<PartDisplay, Error> {
        let path = format!("/api/episodes/{episode_id}/parts/{part_id}/display");
        let bytes = self.http.get(&path).await.map_err(Error::Http)?;
        let display: PartDisplay = serde_json::from_slice(&bytes)?;
        Ok(display)
    }

    /// Persist the whole edited tree in one request.
    ///
    /// The update handler reports validation failures as a JSON body with an
    /// `error` field rather than a transport failure; those surface as
    /// [`Error::Api`].
    pub async fn update_part(
        &self,
        episode_id: i64,
        part_id: i64,
        display: &PartDisplay,
    ) -> Result<(), Error> {
        let path = format!("/api/episodes/{episode_id}/parts/{part_id}/update");
        let body = serde_json::to_vec(display)?;
        let response = self
            .http
            .post(&path, body, "application/json")
            .await
            .map_err(Error::Http)?;

        if let Ok(value) = serde_json::from_slice::<serde_json::Value>(&response)
            && let Some(message) = value.get("error").and_then(|e| e.as_str())
        {
            return Err(Error::Api(message.to_string()));
        }
        Ok(())
    }

    /// Persist a single changed word.
    pub async fn put_word(
        &self,
        episode_id: i64,
        part_id: i64,
        sentence_id: i64,
        word: &Word,
    ) -> Result<(), Error> {
        let path = format!(
            "/api/episodes/{episode_id}/parts/{part_id}/sentences/{sentence_id}/words/{}",
            word.id
        );
        let body = serde_json::to_vec(word)?;
        self.http.put(&path, body).await.map_err(Error::Http)?;
        Ok(())
    }
}
