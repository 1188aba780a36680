// Issuance command handler.
//
// Responsibilities
// - Forward the id/hash pair verbatim to the ledger state as a single
//   key/value put. The hash string is stored as raw bytes.
// - No local validation, no retry, no recovery: whether a key is acceptable
//   is the store's call, and a repeated put overwrites (last-write-wins).

use crate::application::errors::ContractError;
use crate::core::identity::command::IssueId;
use crate::core::ports::LedgerState;
use std::sync::Arc;

pub struct IssueIdHandler<TState>
where
    TState: LedgerState + Send + Sync + 'static,
{
    state: Arc<TState>,
}

impl<TState> IssueIdHandler<TState>
where
    TState: LedgerState + Send + Sync + 'static,
{
    pub fn new(state: Arc<TState>) -> Self {
        Self { state }
    }

    pub async fn handle(&self, command: IssueId) -> Result<(), ContractError> {
        self.state
            .put_state(&command.id, command.hash.as_bytes())
            .await?;
        Ok(())
    }
}
