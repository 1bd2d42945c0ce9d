use thiserror::Error;

use crate::domain::{BlockLocation, CommandError, PhaseError};

// Reasons a gated tick stopped early. State is only committed after the
// commands that define it succeed, so the next gated tick retries the work.
#[derive(Debug, Error)]
pub enum TickError {
    #[error("command `{command}` failed: {source}")]
    Command {
        command: String,
        #[source]
        source: CommandError,
    },
    #[error("player snapshot failed: {0}")]
    Players(#[source] CommandError),
    #[error("reading container at {location:?} failed: {source}")]
    Container {
        location: BlockLocation,
        #[source]
        source: CommandError,
    },
    #[error(transparent)]
    Phase(#[from] PhaseError),
}

impl TickError {
    pub(crate) fn command(command: &str, source: CommandError) -> Self {
        TickError::Command {
            command: command.to_string(),
            source,
        }
    }

    pub fn is_no_match(&self) -> bool {
        matches!(
            self,
            TickError::Command {
                source: CommandError::NoMatch,
                ..
            }
        )
    }
}
