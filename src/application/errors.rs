use crate::core::ports::LedgerStateError;
use thiserror::Error;

// The transparent State variant is the propagation path for host store
// failures: callers see the underlying error unmodified.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContractError {
    #[error(transparent)]
    State(#[from] LedgerStateError),

    #[error("identity not found: {0}")]
    NotFound(String),

    #[error("domain rejected: {0}")]
    Domain(String),

    #[error("unexpected: {0}")]
    Unexpected(String),
}
