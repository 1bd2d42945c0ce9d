use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::commands::{TEST_READY, UNTAG_READY_ALL, UNTAG_READY_SELF};
use crate::domain::{
    BlockLocation, CommandError, CommandResult, Container, Environment, PlayerHandle,
};

// One command as the fake host world received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SentCommand {
    pub player_id: Option<String>,
    pub command: String,
}

#[derive(Default)]
struct FakeWorld {
    players: Vec<PlayerHandle>,
    ready: HashSet<String>,
    containers: HashMap<BlockLocation, Container>,
    // Command prefix -> forced outcome.
    failures: Vec<(String, CommandError)>,
    player_query_fails: bool,
    broken_containers: HashSet<BlockLocation>,
    sent: Vec<SentCommand>,
}

// In-memory host world that records every command for use-case tests.
#[derive(Clone, Default)]
pub(crate) struct RecordingEnvironment {
    world: Arc<Mutex<FakeWorld>>,
}

impl RecordingEnvironment {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_players(players: &[(&str, &str)]) -> Self {
        let env = Self::new();
        env.set_players(players);
        env
    }

    pub(crate) fn as_environment(&self) -> Arc<dyn Environment> {
        Arc::new(self.clone())
    }

    pub(crate) fn set_players(&self, players: &[(&str, &str)]) {
        let mut world = self.world.lock().expect("world mutex poisoned");
        world.players = players
            .iter()
            .map(|(id, name)| PlayerHandle::new(*id, *name))
            .collect();
    }

    pub(crate) fn mark_ready(&self, player_id: &str) {
        let mut world = self.world.lock().expect("world mutex poisoned");
        world.ready.insert(player_id.to_string());
    }

    pub(crate) fn is_ready(&self, player_id: &str) -> bool {
        let world = self.world.lock().expect("world mutex poisoned");
        world.ready.contains(player_id)
    }

    pub(crate) fn set_container(&self, location: BlockLocation, container: Container) {
        let mut world = self.world.lock().expect("world mutex poisoned");
        world.containers.insert(location, container);
    }

    pub(crate) fn fail_command(&self, prefix: &str, error: CommandError) {
        let mut world = self.world.lock().expect("world mutex poisoned");
        world.failures.push((prefix.to_string(), error));
    }

    pub(crate) fn clear_failures(&self) {
        let mut world = self.world.lock().expect("world mutex poisoned");
        world.failures.clear();
        world.player_query_fails = false;
        world.broken_containers.clear();
    }

    pub(crate) fn fail_player_query(&self) {
        let mut world = self.world.lock().expect("world mutex poisoned");
        world.player_query_fails = true;
    }

    pub(crate) fn fail_container(&self, location: BlockLocation) {
        let mut world = self.world.lock().expect("world mutex poisoned");
        world.broken_containers.insert(location);
    }

    pub(crate) fn sent(&self) -> Vec<SentCommand> {
        let world = self.world.lock().expect("world mutex poisoned");
        world.sent.clone()
    }

    pub(crate) fn commands(&self) -> Vec<String> {
        self.sent().into_iter().map(|sent| sent.command).collect()
    }

    pub(crate) fn count(&self, command: &str) -> usize {
        self.sent()
            .iter()
            .filter(|sent| sent.command == command)
            .count()
    }

    pub(crate) fn commands_for(&self, player_id: &str) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter(|sent| sent.player_id.as_deref() == Some(player_id))
            .map(|sent| sent.command)
            .collect()
    }

    pub(crate) fn clear_log(&self) {
        let mut world = self.world.lock().expect("world mutex poisoned");
        world.sent.clear();
    }

    fn respond(&self, player: Option<&PlayerHandle>, command: &str) -> CommandResult {
        let mut world = self.world.lock().expect("world mutex poisoned");
        world.sent.push(SentCommand {
            player_id: player.map(|player| player.id.clone()),
            command: command.to_string(),
        });

        if let Some((_, error)) = world
            .failures
            .iter()
            .find(|(prefix, _)| command.starts_with(prefix.as_str()))
        {
            return Err(error.clone());
        }

        match (player, command) {
            (None, TEST_READY) => {
                let tagged = world
                    .players
                    .iter()
                    .filter(|player| world.ready.contains(&player.id))
                    .count();
                if tagged == 0 {
                    Err(CommandError::NoMatch)
                } else {
                    Ok(tagged as u32)
                }
            }
            (None, UNTAG_READY_ALL) => {
                world.ready.clear();
                Ok(1)
            }
            (Some(player), UNTAG_READY_SELF) => {
                world.ready.remove(&player.id);
                Ok(1)
            }
            _ => Ok(1),
        }
    }
}

#[async_trait]
impl Environment for RecordingEnvironment {
    async fn run_command(&self, command: &str) -> CommandResult {
        self.respond(None, command)
    }

    async fn run_player_command(&self, player: &PlayerHandle, command: &str) -> CommandResult {
        self.respond(Some(player), command)
    }

    async fn players(&self) -> Result<Vec<PlayerHandle>, CommandError> {
        let world = self.world.lock().expect("world mutex poisoned");
        if world.player_query_fails {
            return Err(CommandError::Failure("player query failed".to_string()));
        }
        Ok(world.players.clone())
    }

    async fn container_at(
        &self,
        location: BlockLocation,
    ) -> Result<Option<Container>, CommandError> {
        let world = self.world.lock().expect("world mutex poisoned");
        if world.broken_containers.contains(&location) {
            return Err(CommandError::Failure("chunk not loaded".to_string()));
        }
        Ok(world.containers.get(&location).cloned())
    }
}

// Lets detached fire-and-forget tasks run on the current-thread test runtime.
pub(crate) async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}
