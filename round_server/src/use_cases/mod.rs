// Use cases layer: the tick-driven round workflow and chat commands.

pub mod chat;
pub mod errors;
pub mod game;
pub mod gateway;
pub mod round;
pub mod scoring;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use chat::{ChatCommand, ChatCommandRouter, ChatVerdict};
pub use errors::TickError;
pub use game::{GamePhaseOrchestrator, world_task};
pub use gateway::CommandGateway;
pub use scoring::ScoreAggregator;
pub use types::{GameSettings, StatusSnapshot};
