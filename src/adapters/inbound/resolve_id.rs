use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::application::errors::ContractError;
use crate::core::ports::LedgerStateError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ResolveIdParams {
    pub id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ResolveIdParams>,
) -> impl IntoResponse {
    match state.queries.resolve(&params.id).await {
        Ok(Some(view)) => Json(view).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(ContractError::State(LedgerStateError::InvalidKey(_))) => {
            StatusCode::BAD_REQUEST.into_response()
        }
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
