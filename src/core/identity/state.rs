// IdentityState is the derived domain state of one identifier.
//
// Purpose
// - Fold the two ledger reads (issued value, revocation marker) into one
//   state the decision logic can pattern match on.
//
// Boundaries
// - This file must not perform input or output. The handlers read the
//   ledger; this fold stays pure.
//
// Notes
// - The state is never stored. The ledger holds only the raw hash bytes
//   under the id and the revocation record under the composite key.

use crate::core::identity::revocation::RevocationRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityState {
    None,
    Issued {
        hash: Vec<u8>,
    },
    Revoked {
        hash: Vec<u8>,
        revoked_at: i64,
        reason: Option<String>,
    },
}

impl IdentityState {
    // Issuance is the source of truth: a marker without an issued value
    // cannot arise through the handlers and folds to None.
    pub fn from_ledger(hash: Option<Vec<u8>>, revocation: Option<RevocationRecord>) -> Self {
        match (hash, revocation) {
            (None, _) => IdentityState::None,
            (Some(hash), None) => IdentityState::Issued { hash },
            (Some(hash), Some(RevocationRecord::RevocationV1(record))) => IdentityState::Revoked {
                hash,
                revoked_at: record.revoked_at,
                reason: record.reason,
            },
        }
    }
}

#[cfg(test)]
mod identity_state_tests {
    use super::*;
    use crate::core::identity::revocation::RevocationV1;
    use rstest::{fixture, rstest};

    #[fixture]
    fn revocation() -> RevocationRecord {
        RevocationRecord::RevocationV1(RevocationV1 {
            revoked_at: 1_700_000_000_000,
            reason: None,
        })
    }

    #[rstest]
    fn it_should_fold_to_none_when_nothing_was_issued() {
        assert_eq!(IdentityState::from_ledger(None, None), IdentityState::None);
    }

    #[rstest]
    fn it_should_fold_to_issued_when_only_the_hash_exists() {
        let state = IdentityState::from_ledger(Some(b"9f86d081".to_vec()), None);
        assert_eq!(
            state,
            IdentityState::Issued {
                hash: b"9f86d081".to_vec()
            }
        );
    }

    #[rstest]
    fn it_should_fold_to_revoked_when_the_marker_exists(revocation: RevocationRecord) {
        let state = IdentityState::from_ledger(Some(b"9f86d081".to_vec()), Some(revocation));
        assert_eq!(
            state,
            IdentityState::Revoked {
                hash: b"9f86d081".to_vec(),
                revoked_at: 1_700_000_000_000,
                reason: None,
            }
        );
    }

    #[rstest]
    fn it_should_fold_to_none_when_a_marker_has_no_issued_value(revocation: RevocationRecord) {
        assert_eq!(
            IdentityState::from_ledger(None, Some(revocation)),
            IdentityState::None
        );
    }
}
