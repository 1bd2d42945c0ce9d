use crate::interface_adapters::handlers::{chat, heartbeat, status};
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/tick", post(heartbeat))
        .route("/chat", post(chat))
        .route("/status", get(status))
        .with_state(state)
}
