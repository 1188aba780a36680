// Pure decision function for revocation.
//
// Purpose
// - Validate the command against the current state and produce the record to
//   store on success.
//
// Responsibilities
// - Enforce rules: only an issued identifier can be revoked, and only once.
// - Never perform input or output.
//
// Note
// - Issuance deliberately has no decision function: the issuance handler
//   forwards the put verbatim and a repeated put overwrites (last-write-wins).

use crate::core::identity::{
    command::RevokeId,
    revocation::{RevocationRecord, RevocationV1},
    state::IdentityState,
};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("identity has not been issued")]
    NotIssued,
    #[error("identity is already revoked")]
    AlreadyRevoked,
}

pub fn decide_revoke(
    state: &IdentityState,
    command: RevokeId,
) -> Result<RevocationRecord, DecideError> {
    match state {
        IdentityState::None => Err(DecideError::NotIssued),
        IdentityState::Revoked { .. } => Err(DecideError::AlreadyRevoked),
        IdentityState::Issued { .. } => Ok(RevocationRecord::RevocationV1(RevocationV1 {
            revoked_at: command.revoked_at,
            reason: command.reason,
        })),
    }
}
