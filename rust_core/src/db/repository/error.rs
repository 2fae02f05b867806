//! Errors surfaced by truck repositories.

use crate::db::models::TruckId;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// The store could not be reached.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Truck {0} not found")]
    NotFound(TruckId),

    /// The store answered but refused the request as sent, e.g. a batch
    /// read with more ids than it accepts per call.
    #[error("Store rejected request: {0}")]
    Rejected(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl RepositoryError {
    /// Whether the same call may succeed if retried later.
    pub fn is_transient(&self) -> bool {
        matches!(self, RepositoryError::Unavailable(_))
    }
}
