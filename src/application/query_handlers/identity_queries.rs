// Read side for anchored identities.
//
// Purpose
// - Resolve a previously issued identifier into a view assembled from the
//   two ledger reads. The write path never depends on this module.

use crate::application::errors::ContractError;
use crate::core::identity::keys::revocation_key;
use crate::core::identity::revocation::RevocationRecord;
use crate::core::identity::state::IdentityState;
use crate::core::ports::LedgerState;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct IdentityView {
    pub id: String,
    pub hash: String,
    pub revoked: bool,
    pub revoked_at: Option<i64>,
    pub reason: Option<String>,
}

pub struct IdentityQueries<TState>
where
    TState: LedgerState + Send + Sync + 'static,
{
    state: Arc<TState>,
}

impl<TState> IdentityQueries<TState>
where
    TState: LedgerState + Send + Sync + 'static,
{
    pub fn new(state: Arc<TState>) -> Self {
        Self { state }
    }

    pub async fn resolve(&self, id: &str) -> Result<Option<IdentityView>, ContractError> {
        let Some(hash) = self.state.get_state(id).await? else {
            return Ok(None);
        };
        let marker = self.state.get_state(&revocation_key(id)).await?;
        let revocation = marker
            .map(|bytes| serde_json::from_slice::<RevocationRecord>(&bytes))
            .transpose()
            .map_err(|err| ContractError::Unexpected(format!("corrupt revocation record: {err}")))?;

        let view = match IdentityState::from_ledger(Some(hash), revocation) {
            IdentityState::None => return Ok(None),
            IdentityState::Issued { hash } => IdentityView {
                id: id.to_string(),
                hash: String::from_utf8_lossy(&hash).into_owned(),
                revoked: false,
                revoked_at: None,
                reason: None,
            },
            IdentityState::Revoked {
                hash,
                revoked_at,
                reason,
            } => IdentityView {
                id: id.to_string(),
                hash: String::from_utf8_lossy(&hash).into_owned(),
                revoked: true,
                revoked_at: Some(revoked_at),
                reason,
            },
        };
        Ok(Some(view))
    }
}
