use crate::adapters::in_memory::in_memory_ledger_state::InMemoryLedgerState;
use crate::application::command_handlers::issue_handler::IssueIdHandler;
use crate::application::command_handlers::revoke_handler::RevokeIdHandler;
use crate::application::query_handlers::identity_queries::IdentityQueries;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub issue_handler: Arc<IssueIdHandler<InMemoryLedgerState>>,
    pub revoke_handler: Arc<RevokeIdHandler<InMemoryLedgerState>>,
    pub queries: Arc<IdentityQueries<InMemoryLedgerState>>,
    pub ledger: Arc<InMemoryLedgerState>,
}

impl AppState {
    // In-memory deps for now; a host-backed LedgerState adapter slots in here.
    pub fn in_memory() -> Self {
        let ledger = Arc::new(InMemoryLedgerState::new());
        Self {
            issue_handler: Arc::new(IssueIdHandler::new(ledger.clone())),
            revoke_handler: Arc::new(RevokeIdHandler::new(ledger.clone())),
            queries: Arc::new(IdentityQueries::new(ledger.clone())),
            ledger,
        }
    }
}
