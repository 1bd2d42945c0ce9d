use std::collections::HashMap;

// Opaque handle for a player currently present in the host world.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerHandle {
    pub id: String,
    pub name: String,
}

impl PlayerHandle {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

// Per-player admission record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    pub id: String,
    pub name: String,
    pub joined: bool,
}

/// Tracks which players have completed one-time join setup.
///
/// Records are keyed by the host's stable player id. The host does not report
/// leave events, so a record lives until [`PlayerRegistry::retain_present`] is
/// asked to drop absent players.
#[derive(Debug, Default)]
pub struct PlayerRegistry {
    records: HashMap<String, PlayerRecord>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Players from the snapshot that still need admission setup, in snapshot order.
    pub fn newcomers<'a>(&self, players: &'a [PlayerHandle]) -> Vec<&'a PlayerHandle> {
        players
            .iter()
            .filter(|player| !self.is_joined(&player.id))
            .collect()
    }

    /// Flips `joined` for the player. Returns false if they were already joined.
    pub fn mark_joined(&mut self, player: &PlayerHandle) -> bool {
        let record = self
            .records
            .entry(player.id.clone())
            .or_insert_with(|| PlayerRecord {
                id: player.id.clone(),
                name: player.name.clone(),
                joined: false,
            });
        if record.joined {
            return false;
        }
        record.name = player.name.clone();
        record.joined = true;
        true
    }

    pub fn is_joined(&self, player_id: &str) -> bool {
        self.records
            .get(player_id)
            .is_some_and(|record| record.joined)
    }

    /// Drops records for players missing from the snapshot. Returns how many were dropped.
    pub fn retain_present(&mut self, players: &[PlayerHandle]) -> usize {
        let before = self.records.len();
        self.records
            .retain(|id, _| players.iter().any(|player| &player.id == id));
        before - self.records.len()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
