/// Sentence identity.
///
/// Persisted sentences carry the positive database id they were loaded with.
/// Sentences created during an editing session get synthetic negative ids so
/// the persistence layer can tell them apart from existing rows. The two
/// cases are an explicit sum type rather than a sign convention so that a
/// comparison against the wrong kind of id cannot typecheck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SentenceId {
    /// A sentence that exists upstream (id > 0).
    Persisted(i64),
    /// A sentence created in this session, not yet persisted (id < 0).
    Synthetic(i64),
}

impl SentenceId {
    /// Classify a raw wire id by sign. Zero is treated as synthetic; the
    /// upstream schema never issues it for a real row.
    pub fn from_raw(raw: i64) -> Self {
        if raw > 0 {
            Self::Persisted(raw)
        } else {
            Self::Synthetic(raw)
        }
    }

    pub fn raw(self) -> i64 {
        match self {
            Self::Persisted(id) | Self::Synthetic(id) => id,
        }
    }

    pub fn is_synthetic(self) -> bool {
        matches!(self, Self::Synthetic(_))
    }
}

impl std::fmt::Display for SentenceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw())
    }
}

/// Allocate a fresh synthetic id, strictly below every id already in use.
///
/// `min(0, existing…) - 1`, so the first synthetic sentence in a session is
/// `-1` and later ones count down. Ids stay disjoint from persisted ids even
/// if the caller passes a mixed set.
pub(crate) fn fresh_synthetic(existing: impl Iterator<Item = SentenceId>) -> SentenceId {
    let floor = existing.map(SentenceId::raw).min().unwrap_or(0).min(0);
    SentenceId::Synthetic(floor - 1)
}
