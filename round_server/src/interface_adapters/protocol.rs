// JSON payloads for the host-facing HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::use_cases::StatusSnapshot;

// Heartbeat delivered by the host once per game tick.
#[derive(Debug, Deserialize)]
pub struct TickRequest {
    pub tick: u64,
}

// Chat message delivered before the host shows it to players.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub suppress: bool,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub tick: u64,
    pub phase: &'static str,
    pub remaining_seconds: i64,
    pub leader: Option<String>,
    pub leader_score: i64,
    pub known_players: usize,
}

impl From<&StatusSnapshot> for StatusResponse {
    fn from(status: &StatusSnapshot) -> Self {
        Self {
            tick: status.tick,
            phase: status.phase.as_str(),
            remaining_seconds: status.remaining_seconds,
            leader: status.leader.clone(),
            leader_score: status.leader_score,
            known_players: status.known_players,
        }
    }
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
