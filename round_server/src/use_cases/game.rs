use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use super::errors::TickError;
use super::gateway::CommandGateway;
use super::round;
use super::scoring::ScoreAggregator;
use super::types::{GameSettings, StatusSnapshot};
use crate::domain::commands;
use crate::domain::{GamePhase, GameState, PlayerHandle, TimerTick};

/// Drives one round controller from host heartbeats.
///
/// Each call to [`on_tick`](Self::on_tick) first runs world setup (once per
/// process), then, on gated heartbeats only, walks a fixed order: admit new
/// players, check the ready gate, start the round, advance the timer, tally
/// scores. An unexpected command failure stops the rest of that heartbeat; no
/// phase is committed before the commands that define it succeed, so the next
/// gated heartbeat picks the work up again.
pub struct GamePhaseOrchestrator {
    gateway: CommandGateway,
    settings: GameSettings,
    scoring: ScoreAggregator,
    state: GameState,
    last_tick: u64,
    // Whole-second tick boundaries already charged to the running timer.
    seconds_charged: u64,
}

impl GamePhaseOrchestrator {
    pub fn new(gateway: CommandGateway, settings: GameSettings) -> Self {
        Self {
            gateway,
            scoring: ScoreAggregator::new(settings.arena_spacing),
            settings,
            state: GameState::new(),
            last_tick: 0,
            seconds_charged: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> StatusSnapshot {
        let winner = &self.state.winner;
        StatusSnapshot {
            tick: self.last_tick,
            phase: self.state.phase,
            remaining_seconds: self.state.timer.remaining_seconds(),
            leader: winner.has_winner().then(|| winner.player_name.clone()),
            leader_score: winner.score,
            known_players: self.state.registry.len(),
        }
    }

    pub async fn on_tick(&mut self, tick: u64) -> Result<(), TickError> {
        self.last_tick = tick;

        if !self.state.initialized {
            self.state.initialized = true;
            let setup = round::world_setup(&self.gateway).await;
            self.state.advance(GamePhase::Lobby)?;
            setup?;
        }

        if tick % self.settings.check_interval_ticks.max(1) != 0 {
            return Ok(());
        }

        let players = self.gateway.players().await?;

        // Admission clears tags and inventory, so it must finish before the ready check.
        self.admit_newcomers(&players).await?;

        if self.state.phase == GamePhase::Lobby && self.any_player_ready().await? {
            self.state.advance(GamePhase::ReadyCheck)?;
            info!(tick, "ready marker seen");
        }

        if self.state.phase == GamePhase::ReadyCheck {
            self.start_round(tick, &players).await?;
        }

        self.advance_timer(tick).await?;

        if self.state.phase == GamePhase::Active {
            self.update_scores(&players).await?;
        }

        Ok(())
    }

    async fn admit_newcomers(&mut self, players: &[PlayerHandle]) -> Result<(), TickError> {
        if self.settings.forget_departed_players {
            let dropped = self.state.registry.retain_present(players);
            if dropped > 0 {
                debug!(dropped, "forgot departed players");
            }
        }

        for player in self.state.registry.newcomers(players) {
            round::admit_player(&self.gateway, player).await?;
            self.state.registry.mark_joined(player);
            info!(player_id = %player.id, name = %player.name, "player admitted");
        }
        Ok(())
    }

    async fn any_player_ready(&self) -> Result<bool, TickError> {
        match self.gateway.run(commands::TEST_READY).await {
            Ok(count) => Ok(count > 0),
            Err(error) if error.is_no_match() => Ok(false),
            Err(error) => Err(error),
        }
    }

    async fn start_round(&mut self, tick: u64, players: &[PlayerHandle]) -> Result<(), TickError> {
        round::round_start(&self.gateway, players, &self.settings).await?;

        self.state.roster = players.to_vec();
        self.state.winner.reset();
        self.state.timer.start(self.settings.round_length_seconds);
        // Boundaries before the start tick belong to no round.
        self.seconds_charged = tick.div_ceil(self.ticks_per_second());
        self.state.advance(GamePhase::Active)?;
        info!(
            tick,
            players = players.len(),
            seconds = self.settings.round_length_seconds,
            "round started"
        );
        Ok(())
    }

    async fn advance_timer(&mut self, tick: u64) -> Result<(), TickError> {
        let Some(countdown) = self.state.timer.countdown() else {
            return Ok(());
        };
        // Unordered against everything else this tick.
        self.gateway.dispatch(commands::actionbar(&countdown));

        // Charges every boundary up to this tick, including ones whose heartbeat
        // was dropped or fell between gated ticks. A tick counter that went
        // backwards charges nothing and restarts the count from there.
        let boundaries = tick / self.ticks_per_second() + 1;
        let due = boundaries.saturating_sub(self.seconds_charged);
        self.seconds_charged = boundaries;

        for _ in 0..due {
            match self.state.timer.tick_second() {
                TimerTick::Expired => return self.end_round(tick).await,
                TimerTick::Running { .. } => {}
                TimerTick::Idle => break,
            }
        }
        Ok(())
    }

    fn ticks_per_second(&self) -> u64 {
        self.settings.ticks_per_second.max(1)
    }

    // Runs once per round: the timer is already stopped and the reset below is
    // committed even when a cleanup command fails.
    async fn end_round(&mut self, tick: u64) -> Result<(), TickError> {
        self.state.advance(GamePhase::Ended)?;
        let cleanup = round::round_end(&self.gateway, &self.state.winner).await;
        info!(
            tick,
            winner = %self.state.winner.player_name,
            score = self.state.winner.score,
            "round ended"
        );

        self.state.winner.reset();
        self.state.roster.clear();
        self.state.advance(GamePhase::Lobby)?;
        cleanup
    }

    async fn update_scores(&mut self, players: &[PlayerHandle]) -> Result<(), TickError> {
        let entries = self
            .scoring
            .tally(&self.gateway, &self.state.roster, players)
            .await?;
        if ScoreAggregator::record_leader(&mut self.state.winner, &entries) {
            debug!(
                leader = %self.state.winner.player_name,
                score = self.state.winner.score,
                "new leader"
            );
        }
        Ok(())
    }
}

/// Single owner of the orchestrator. Heartbeats are handled strictly in
/// arrival order; a heartbeat that arrives while one is in flight waits in the
/// channel.
pub async fn world_task(
    mut heartbeat_rx: mpsc::Receiver<u64>,
    mut orchestrator: GamePhaseOrchestrator,
    status_tx: watch::Sender<StatusSnapshot>,
) {
    while let Some(tick) = heartbeat_rx.recv().await {
        if let Err(error) = orchestrator.on_tick(tick).await {
            warn!(tick, %error, "tick aborted");
        }
        let _ = status_tx.send(orchestrator.status());
    }
    info!("heartbeat channel closed");
}
