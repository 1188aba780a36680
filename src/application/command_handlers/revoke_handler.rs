// Revocation command handler orchestrates the revoke flow.
//
// Responsibilities
// - Load the issued value and the revocation marker from the ledger state.
// - Fold them into the derived identity state and call the decider.
// - Write the versioned revocation record under the composite key.

use crate::application::errors::ContractError;
use crate::core::identity::command::RevokeId;
use crate::core::identity::decide::{DecideError, decide_revoke};
use crate::core::identity::keys::revocation_key;
use crate::core::identity::revocation::RevocationRecord;
use crate::core::identity::state::IdentityState;
use crate::core::ports::LedgerState;
use std::sync::Arc;

pub struct RevokeIdHandler<TState>
where
    TState: LedgerState + Send + Sync + 'static,
{
    state: Arc<TState>,
}

impl<TState> RevokeIdHandler<TState>
where
    TState: LedgerState + Send + Sync + 'static,
{
    pub fn new(state: Arc<TState>) -> Self {
        Self { state }
    }

    pub async fn handle(&self, command: RevokeId) -> Result<(), ContractError> {
        let id = command.id.clone();
        let marker_key = revocation_key(&id);

        let hash = self.state.get_state(&id).await?;
        let marker = self.state.get_state(&marker_key).await?;
        let revocation = marker
            .map(|bytes| serde_json::from_slice::<RevocationRecord>(&bytes))
            .transpose()
            .map_err(|err| ContractError::Unexpected(format!("corrupt revocation record: {err}")))?;

        let current = IdentityState::from_ledger(hash, revocation);
        let record = decide_revoke(&current, command).map_err(|err| match err {
            DecideError::NotIssued => ContractError::NotFound(id.clone()),
            DecideError::AlreadyRevoked => ContractError::Domain(err.to_string()),
        })?;

        let bytes = serde_json::to_vec(&record)
            .map_err(|err| ContractError::Unexpected(err.to_string()))?;
        self.state.put_state(&marker_key, &bytes).await?;
        Ok(())
    }
}
