// Use-case level settings and outputs for the round loop.

use crate::domain::GamePhase;

/// Tunables for one round controller.
#[derive(Debug, Clone)]
pub struct GameSettings {
    /// Seconds on the clock when a round starts.
    pub round_length_seconds: i64,
    /// Phase logic only runs on heartbeats divisible by this.
    pub check_interval_ticks: u64,
    /// Heartbeats per real-time second; the timer decrements once per this many.
    pub ticks_per_second: u64,
    /// Clone a private arena per player at round start.
    pub arenas_enabled: bool,
    /// X distance between neighbouring arena copies.
    pub arena_spacing: i32,
    /// Drop records of players missing from the snapshot so a rejoin is admitted again.
    pub forget_departed_players: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            round_length_seconds: 180,
            check_interval_ticks: 5,
            ticks_per_second: 20,
            arenas_enabled: true,
            arena_spacing: 100,
            forget_departed_players: false,
        }
    }
}

// Read-only view published after every handled heartbeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub tick: u64,
    pub phase: GamePhase,
    pub remaining_seconds: i64,
    pub leader: Option<String>,
    pub leader_score: i64,
    pub known_players: usize,
}
