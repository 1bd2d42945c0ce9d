use crate::interface_adapters::protocol::{
    ChatRequest, ChatResponse, ErrorResponse, StatusResponse, TickRequest,
};
use crate::interface_adapters::state::AppState;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};
use tokio::sync::mpsc::error::TrySendError;
use tracing::warn;

// Queues a heartbeat for the world task without waiting for it to run.
pub async fn heartbeat(
    State(state): State<AppState>,
    Json(payload): Json<TickRequest>,
) -> impl IntoResponse {
    match state.heartbeat_tx.try_send(payload.tick) {
        Ok(()) => StatusCode::ACCEPTED.into_response(),
        Err(TrySendError::Full(tick)) => {
            // The previous tick is still awaiting host commands.
            warn!(tick, "heartbeat queue full, dropping tick");
            error_response(StatusCode::SERVICE_UNAVAILABLE, "heartbeat queue full")
        }
        Err(TrySendError::Closed(tick)) => {
            warn!(tick, "world task stopped");
            error_response(StatusCode::SERVICE_UNAVAILABLE, "world task stopped")
        }
    }
}

// Answers whether the host should hide the chat message.
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let verdict = state.chat_router.on_message(&payload.message);
    Json(ChatResponse {
        suppress: verdict.suppress,
    })
}

pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let snapshot = state.status_rx.borrow().clone();
    Json(StatusResponse::from(&snapshot))
}

fn error_response(status: StatusCode, message: &str) -> axum::response::Response {
    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
        .into_response()
}
