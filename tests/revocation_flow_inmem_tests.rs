// End to end in memory test for the revocation flow.
//
// Issues, revokes and resolves through the handlers to check the marker
// lifecycle, including the interaction with reissuance.

use std::sync::Arc;

use id_issuance::adapters::in_memory::in_memory_ledger_state::InMemoryLedgerState;
use id_issuance::application::command_handlers::issue_handler::IssueIdHandler;
use id_issuance::application::command_handlers::revoke_handler::RevokeIdHandler;
use id_issuance::application::errors::ContractError;
use id_issuance::application::query_handlers::identity_queries::IdentityQueries;
use id_issuance::core::identity::command::{IssueId, RevokeId};

struct Flow {
    issue: IssueIdHandler<InMemoryLedgerState>,
    revoke: RevokeIdHandler<InMemoryLedgerState>,
    queries: IdentityQueries<InMemoryLedgerState>,
}

fn make_flow() -> Flow {
    let ledger = Arc::new(InMemoryLedgerState::new());
    Flow {
        issue: IssueIdHandler::new(ledger.clone()),
        revoke: RevokeIdHandler::new(ledger.clone()),
        queries: IdentityQueries::new(ledger),
    }
}

fn issue_command(id: &str, hash: &str) -> IssueId {
    IssueId {
        id: id.to_string(),
        hash: hash.to_string(),
    }
}

fn revoke_command(id: &str) -> RevokeId {
    RevokeId {
        id: id.to_string(),
        revoked_at: 1_700_000_000_000,
        reason: Some("document reported stolen".to_string()),
    }
}

#[tokio::test]
async fn it_should_resolve_a_revoked_identity_as_revoked() {
    let flow = make_flow();
    flow.issue
        .handle(issue_command("ID-1", "9f86d081"))
        .await
        .unwrap();
    flow.revoke.handle(revoke_command("ID-1")).await.unwrap();

    let view = flow.queries.resolve("ID-1").await.unwrap().unwrap();
    assert!(view.revoked);
    assert_eq!(view.hash, "9f86d081");
    assert_eq!(view.revoked_at, Some(1_700_000_000_000));
    assert_eq!(view.reason.as_deref(), Some("document reported stolen"));
}

#[tokio::test]
async fn it_should_reject_revocation_of_an_unknown_identity() {
    let flow = make_flow();
    let result = flow.revoke.handle(revoke_command("ID-UNKNOWN")).await;
    assert_eq!(
        result,
        Err(ContractError::NotFound("ID-UNKNOWN".to_string()))
    );
}

#[tokio::test]
async fn it_should_reject_a_second_revocation() {
    let flow = make_flow();
    flow.issue
        .handle(issue_command("ID-1", "9f86d081"))
        .await
        .unwrap();
    flow.revoke.handle(revoke_command("ID-1")).await.unwrap();

    let result = flow.revoke.handle(revoke_command("ID-1")).await;
    assert_eq!(
        result,
        Err(ContractError::Domain(
            "identity is already revoked".to_string()
        ))
    );
}

#[tokio::test]
async fn it_should_keep_the_marker_standing_when_the_id_is_reissued() {
    let flow = make_flow();
    flow.issue
        .handle(issue_command("ID-1", "first-hash"))
        .await
        .unwrap();
    flow.revoke.handle(revoke_command("ID-1")).await.unwrap();
    flow.issue
        .handle(issue_command("ID-1", "second-hash"))
        .await
        .unwrap();

    let view = flow.queries.resolve("ID-1").await.unwrap().unwrap();
    assert!(view.revoked);
    assert_eq!(view.hash, "second-hash");
}
