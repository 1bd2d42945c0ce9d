// Privileged in-chat commands, handled outside the phase machine.

use tracing::{debug, info, warn};

use crate::domain::commands;
use crate::use_cases::errors::TickError;
use crate::use_cases::gateway::CommandGateway;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatCommand {
    // Announce and wipe the play area around the lobby.
    Clear,
}

impl ChatCommand {
    // The whole body after the prefix must match; no arguments or padding.
    pub fn parse(body: &str) -> Option<Self> {
        match body {
            "clear" => Some(ChatCommand::Clear),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatVerdict {
    // True when the host should not deliver the message to other players.
    pub suppress: bool,
}

/// Routes chat messages that start with the reserved prefix.
///
/// Every prefixed message is suppressed, known token or not. Commands never
/// touch round state: `!clear` mid-round wipes the area and the timer keeps
/// running.
#[derive(Clone)]
pub struct ChatCommandRouter {
    gateway: CommandGateway,
    prefix: char,
}

impl ChatCommandRouter {
    pub fn new(gateway: CommandGateway, prefix: char) -> Self {
        Self { gateway, prefix }
    }

    /// Decides suppression immediately and runs any command on a detached task.
    pub fn on_message(&self, message: &str) -> ChatVerdict {
        let Some(command) = self.route(message) else {
            return ChatVerdict {
                suppress: message.starts_with(self.prefix),
            };
        };

        let gateway = self.gateway.clone();
        tokio::spawn(async move {
            if let Err(error) = execute(&gateway, command).await {
                warn!(?command, %error, "chat command failed");
            }
        });
        ChatVerdict { suppress: true }
    }

    /// Parses a recognized command out of a prefixed message.
    pub fn route(&self, message: &str) -> Option<ChatCommand> {
        let body = message.strip_prefix(self.prefix)?;
        let command = ChatCommand::parse(body);
        if command.is_none() {
            debug!(body, "ignoring unknown chat command");
        }
        command
    }
}

pub async fn execute(gateway: &CommandGateway, command: ChatCommand) -> Result<(), TickError> {
    match command {
        ChatCommand::Clear => {
            info!("clearing play area on request");
            gateway.run(commands::CLEANUP_NOTICE).await?;
            gateway.dispatch(commands::WIPE_PLAY_AREA);
        }
    }
    Ok(())
}
