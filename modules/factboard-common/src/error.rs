use std::fmt;

use thiserror::Error;

/// Every unmet submission condition, surfaced to the user as one combined
/// message rather than itemized per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub reasons: Vec<String>,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid fact: {}", self.reasons.join("; "))
    }
}

#[derive(Debug, Error)]
pub enum FactboardError {
    /// Local, synchronous rejection of a candidate fact. No request issued,
    /// no state change.
    #[error("{0}")]
    Validation(ValidationFailure),

    /// A remote read failed. The previous fact list is preserved.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// A remote create/vote write failed. The fact list is unchanged and the
    /// mutation gate has been released.
    #[error("Mutation error: {0}")]
    Mutation(String),

    /// A create or vote was attempted while another write was in flight.
    /// Rejected before any request is issued.
    #[error("another create or vote is already in flight")]
    Busy,
}
