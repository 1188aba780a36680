use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::errors::ContractError;
use crate::core::identity::command::IssueId;
use crate::core::ports::LedgerStateError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct IssueIdBody {
    pub id: String,
    pub hash: String,
}

#[derive(Serialize)]
pub struct IssueIdResponse {
    pub id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<IssueIdBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let tx_id = Uuid::now_v7();
    let command = IssueId {
        id: body.id,
        hash: body.hash,
    };

    match state.issue_handler.handle(command.clone()).await {
        Ok(()) => {
            tracing::info!(%tx_id, id = %command.id, "identity anchored");
            (
                StatusCode::CREATED,
                Json(IssueIdResponse { id: command.id }),
            )
                .into_response()
        }
        Err(ContractError::State(LedgerStateError::InvalidKey(_))) => {
            StatusCode::BAD_REQUEST.into_response()
        }
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
