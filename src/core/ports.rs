// Ports define what the contract needs from the outside world, without implementing it.
//
// Purpose
// - Describe the host ledger's key-value state store as a trait (LedgerState).
//
// Responsibilities
// - Keep the contract independent of any concrete world-state backend by coding
//   against the trait. Consensus, ordering and durable persistence live behind it.
//
// Boundaries
// - No concrete input or output here. Adapters implement the trait in the adapters layer.
//
// Testing guidance
// - Use the in-memory implementation as a stand-in for the host store.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerStateError {
    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait LedgerState: Send + Sync {
    async fn put_state(&self, key: &str, value: &[u8]) -> Result<(), LedgerStateError>;
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerStateError>;
}
