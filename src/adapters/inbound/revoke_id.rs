use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::errors::ContractError;
use crate::core::identity::command::RevokeId;
use crate::core::ports::LedgerStateError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RevokeIdBody {
    pub id: String,
    pub reason: Option<String>,
}

#[derive(Serialize)]
pub struct RevokeIdResponse {
    pub id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RevokeIdBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let tx_id = Uuid::now_v7();
    let command = RevokeId {
        id: body.id,
        revoked_at: Utc::now().timestamp_millis(),
        reason: body.reason,
    };

    match state.revoke_handler.handle(command.clone()).await {
        Ok(()) => {
            tracing::info!(%tx_id, id = %command.id, "identity revoked");
            (StatusCode::OK, Json(RevokeIdResponse { id: command.id })).into_response()
        }
        Err(ContractError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(ContractError::Domain(_)) => StatusCode::CONFLICT.into_response(),
        Err(ContractError::State(LedgerStateError::InvalidKey(_))) => {
            StatusCode::BAD_REQUEST.into_response()
        }
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
