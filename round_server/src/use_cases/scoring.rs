// Per-tick score tally over each player's scoring container.

use tracing::{debug, warn};

use crate::domain::commands;
use crate::domain::score::container_score;
use crate::domain::{PlayerHandle, ScoreEntry, WinningRecord};
use crate::use_cases::errors::TickError;
use crate::use_cases::gateway::CommandGateway;

/// Recomputes every score from scratch each pass, so edits made to the
/// containers outside the game are corrected on the next tally.
#[derive(Debug, Clone, Copy)]
pub struct ScoreAggregator {
    arena_spacing: i32,
}

impl ScoreAggregator {
    pub fn new(arena_spacing: i32) -> Self {
        Self { arena_spacing }
    }

    /// Scores roster players that are still present and pushes each value to
    /// the host scoreboard. Roster index is the arena slot.
    pub async fn tally(
        &self,
        gateway: &CommandGateway,
        roster: &[PlayerHandle],
        present: &[PlayerHandle],
    ) -> Result<Vec<ScoreEntry>, TickError> {
        let mut entries = Vec::with_capacity(roster.len());
        for (slot, player) in roster.iter().enumerate() {
            if !present.iter().any(|candidate| candidate.id == player.id) {
                debug!(player_id = %player.id, "skipping absent player");
                continue;
            }

            let location = commands::scoring_container(self.arena_spacing, slot);
            let value = match gateway.container_at(location).await? {
                Some(container) => container_score(&container),
                None => {
                    warn!(player_id = %player.id, ?location, "no scoring container");
                    0
                }
            };

            gateway
                .run_for(player, &commands::set_player_score(value))
                .await?;
            entries.push(ScoreEntry {
                player_name: player.name.clone(),
                value,
            });
        }
        Ok(entries)
    }

    /// Folds a finished tally into the leader. Returns true if the leader changed.
    pub fn record_leader(winner: &mut WinningRecord, entries: &[ScoreEntry]) -> bool {
        entries
            .iter()
            .fold(false, |changed, entry| winner.observe(entry) || changed)
    }
}
