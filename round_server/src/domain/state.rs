// Process-wide round state, owned by the orchestrator.

use crate::domain::phase::{GamePhase, PhaseError};
use crate::domain::player::{PlayerHandle, PlayerRegistry};
use crate::domain::score::WinningRecord;
use crate::domain::timer::RoundTimer;

#[derive(Debug, Default)]
pub struct GameState {
    // Flipped before world setup runs so it can never run twice.
    pub initialized: bool,
    pub phase: GamePhase,
    pub timer: RoundTimer,
    pub winner: WinningRecord,
    pub registry: PlayerRegistry,
    // Player order captured at round start; index is the arena slot.
    pub roster: Vec<PlayerHandle>,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, next: GamePhase) -> Result<(), PhaseError> {
        self.phase.advance_to(next)
    }

    // Timer runs iff the round is active.
    pub fn is_consistent(&self) -> bool {
        self.timer.is_active() == (self.phase == GamePhase::Active)
    }
}
