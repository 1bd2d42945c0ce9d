// Domain layer: round state, scoring rules, and the environment port.

pub mod commands;
pub mod phase;
pub mod player;
pub mod ports;
pub mod score;
pub mod state;
pub mod timer;

pub use phase::{GamePhase, PhaseError};
pub use player::{PlayerHandle, PlayerRecord, PlayerRegistry};
pub use ports::{CommandError, CommandResult, Environment};
pub use score::{BlockLocation, Container, ItemStack, ScoreEntry, WinningRecord};
pub use state::GameState;
pub use timer::{RoundTimer, TimerTick};
