// Outbound command delivery: awaited, suppressed, and fire-and-forget.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{BlockLocation, CommandError, Container, Environment, PlayerHandle};
use crate::use_cases::errors::TickError;

/// Thin wrapper around the [`Environment`] port used by every use case.
///
/// Awaited calls surface failures as [`TickError`] so callers can `?` them.
/// Suppressed calls are for commands that may legitimately fail, such as
/// removing an objective that was never created. Dispatched calls run on a
/// detached task; nothing joins them and their outcome is never observed.
#[derive(Clone)]
pub struct CommandGateway {
    env: Arc<dyn Environment>,
}

impl CommandGateway {
    pub fn new(env: Arc<dyn Environment>) -> Self {
        Self { env }
    }

    pub async fn run(&self, command: &str) -> Result<u32, TickError> {
        debug!(command, "run command");
        self.env
            .run_command(command)
            .await
            .map_err(|source| TickError::command(command, source))
    }

    pub async fn run_for(&self, player: &PlayerHandle, command: &str) -> Result<u32, TickError> {
        debug!(player_id = %player.id, command, "run player command");
        self.env
            .run_player_command(player, command)
            .await
            .map_err(|source| TickError::command(command, source))
    }

    pub async fn run_suppressed(&self, command: &str) -> Option<u32> {
        let outcome = self.env.run_command(command).await;
        suppress(command, outcome)
    }

    pub async fn run_for_suppressed(&self, player: &PlayerHandle, command: &str) -> Option<u32> {
        let outcome = self.env.run_player_command(player, command).await;
        suppress(command, outcome)
    }

    pub fn dispatch(&self, command: impl Into<String>) {
        let env = Arc::clone(&self.env);
        let command = command.into();
        tokio::spawn(async move {
            let _ = env.run_command(&command).await;
        });
    }

    pub async fn players(&self) -> Result<Vec<PlayerHandle>, TickError> {
        self.env.players().await.map_err(TickError::Players)
    }

    pub async fn container_at(
        &self,
        location: BlockLocation,
    ) -> Result<Option<Container>, TickError> {
        self.env
            .container_at(location)
            .await
            .map_err(|source| TickError::Container { location, source })
    }
}

fn suppress(command: &str, outcome: Result<u32, CommandError>) -> Option<u32> {
    match outcome {
        Ok(count) => Some(count),
        Err(CommandError::NoMatch) => {
            debug!(command, "suppressed command matched nothing");
            None
        }
        Err(CommandError::Failure(reason)) => {
            warn!(command, %reason, "suppressed command failed");
            None
        }
    }
}
