//! # Sentence re-segmentation core
//!
//! In-memory editing model for one transcript part: a time-ordered word
//! sequence partitioned into sentences, plus the commands an editor uses to
//! restructure that partition (move word runs between sentences, split off
//! new sentences, hide words, correct recognizer output).
//!
//! Everything here is pure and synchronous. The model is built once from a
//! loaded display payload, mutated locally through the command methods on
//! [`PartModel`], and either discarded (cancel) or handed to a persistence
//! adapter (save). No command performs I/O, and a rejected command leaves the
//! model untouched.

pub mod diff;
pub mod engine;
pub mod error;
pub mod id;
pub mod model;
pub mod overlay;
pub mod types;

#[cfg(test)]
pub(crate) mod testkit;

pub use diff::{WordChange, changed_words, has_structural_changes};
pub use error::EditError;
pub use id::SentenceId;
pub use model::{InvariantViolation, PartModel, SentenceEntry};
pub use types::{Direction, MoveMarker, Part, PartType, Sentence, Word};
