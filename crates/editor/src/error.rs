use crate::id::SentenceId;
use thiserror::Error;

/// Why an engine command was rejected.
///
/// None of these are fatal: a rejected command is a no-op and the model stays
/// exactly as it was. `NotFound` variants cover stale UI references (a word
/// id that a structural change already moved or removed); `InvalidOperation`
/// covers structurally disallowed requests that the UI surfaces as a
/// disabled or ignored action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("no sentence owns word {0}")]
    WordNotFound(i64),

    #[error("sentence {0} does not exist in this part")]
    SentenceNotFound(SentenceId),

    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),
}
