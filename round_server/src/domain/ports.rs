use async_trait::async_trait;
use thiserror::Error;

use crate::domain::player::PlayerHandle;
use crate::domain::score::{BlockLocation, Container};

// Outcome of a command that did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    // The command ran but its selector matched nothing (e.g. `testfor` with no targets).
    #[error("command matched no targets")]
    NoMatch,
    #[error("environment failure: {0}")]
    Failure(String),
}

// Success carries the environment's success count.
pub type CommandResult = Result<u32, CommandError>;

// Port for the host world the round controller drives.
#[async_trait]
pub trait Environment: Send + Sync {
    async fn run_command(&self, command: &str) -> CommandResult;
    async fn run_player_command(&self, player: &PlayerHandle, command: &str) -> CommandResult;
    // Snapshot of the live player set, in the host's order.
    async fn players(&self) -> Result<Vec<PlayerHandle>, CommandError>;
    // `None` when there is no container block at the location.
    async fn container_at(&self, location: BlockLocation)
    -> Result<Option<Container>, CommandError>;
}
