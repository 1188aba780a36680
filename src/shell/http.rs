use axum::{
    Router,
    routing::{get, post},
};

use crate::adapters::inbound::{health, issue_id, resolve_id, revoke_id};
use crate::shell::state::AppState;

// Route registration is the contract's transaction-function surface: one
// named function per route.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/issue-id", post(issue_id::handle))
        .route("/revoke-id", post(revoke_id::handle))
        .route("/resolve-id", get(resolve_id::handle))
        .route("/healthz", get(health::handle))
        .with_state(state)
}
