//! Persistence adapter for the part editing endpoints.
//!
//! Wire records mirror the upstream JSON exactly; [`client::PartsApiClient`]
//! is a thin typed client over any [`pod_http::HttpClient`]; and
//! [`session::EditSession`] ties a loaded part, its pristine snapshot, and
//! the two save strategies together.

mod client;
mod error;
mod session;
#[cfg(test)]
pub(crate) mod testkit;
mod types;

pub use client::PartsApiClient;
pub use error::Error;
pub use session::{EditSession, SaveOutcome};
pub use types::{PartDisplay, PartRecord, SentenceDisplay, SentenceRecord};
