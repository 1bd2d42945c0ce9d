use crate::use_cases::{ChatCommandRouter, StatusSnapshot};
use tokio::sync::{mpsc, watch};

#[derive(Clone)]
pub struct AppState {
    // Heartbeats flowing from the host into the world task.
    pub heartbeat_tx: mpsc::Sender<u64>,
    // Latest round status published by the world task.
    pub status_rx: watch::Receiver<StatusSnapshot>,
    // Chat commands are answered here, outside the world task.
    pub chat_router: ChatCommandRouter,
}
