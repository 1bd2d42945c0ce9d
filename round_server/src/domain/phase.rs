use thiserror::Error;

/// Coarse state of the round controller.
///
/// Phases only move forward along
/// `Uninitialized -> Lobby -> ReadyCheck -> Active -> Ended -> Lobby`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    /// World setup has not run yet.
    #[default]
    Uninitialized,
    /// Waiting for at least one player to carry the ready marker.
    Lobby,
    /// A ready player was seen; the round starts on the next step.
    ReadyCheck,
    /// The round timer is running and scores are being tallied.
    Active,
    /// The timer expired and end-of-round cleanup is running.
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("illegal phase transition {from:?} -> {to:?}")]
pub struct PhaseError {
    pub from: GamePhase,
    pub to: GamePhase,
}

impl GamePhase {
    /// The only phase this one may advance to.
    pub fn successor(self) -> GamePhase {
        match self {
            GamePhase::Uninitialized => GamePhase::Lobby,
            GamePhase::Lobby => GamePhase::ReadyCheck,
            GamePhase::ReadyCheck => GamePhase::Active,
            GamePhase::Active => GamePhase::Ended,
            GamePhase::Ended => GamePhase::Lobby,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GamePhase::Uninitialized => "uninitialized",
            GamePhase::Lobby => "lobby",
            GamePhase::ReadyCheck => "ready_check",
            GamePhase::Active => "active",
            GamePhase::Ended => "ended",
        }
    }

    pub(crate) fn advance_to(&mut self, next: GamePhase) -> Result<(), PhaseError> {
        if self.successor() != next {
            return Err(PhaseError {
                from: *self,
                to: next,
            });
        }
        *self = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_phase() -> impl Strategy<Value = GamePhase> {
        prop_oneof![
            Just(GamePhase::Uninitialized),
            Just(GamePhase::Lobby),
            Just(GamePhase::ReadyCheck),
            Just(GamePhase::Active),
            Just(GamePhase::Ended),
        ]
    }

    #[test]
    fn when_ready_check_tries_to_end_then_transition_is_rejected() {
        let mut phase = GamePhase::ReadyCheck;

        let result = phase.advance_to(GamePhase::Ended);

        assert_eq!(
            result,
            Err(PhaseError {
                from: GamePhase::ReadyCheck,
                to: GamePhase::Ended,
            })
        );
        assert_eq!(phase, GamePhase::ReadyCheck);
    }

    #[test]
    fn when_round_ends_then_cycle_returns_to_lobby() {
        let mut phase = GamePhase::Uninitialized;

        for next in [
            GamePhase::Lobby,
            GamePhase::ReadyCheck,
            GamePhase::Active,
            GamePhase::Ended,
            GamePhase::Lobby,
        ] {
            phase.advance_to(next).expect("expected forward transition");
        }

        assert_eq!(phase, GamePhase::Lobby);
    }

    proptest! {
        #[test]
        fn phase_only_ever_moves_to_its_successor(targets in prop::collection::vec(any_phase(), 0..64)) {
            let mut phase = GamePhase::Uninitialized;
            for target in targets {
                let before = phase;
                match phase.advance_to(target) {
                    Ok(()) => {
                        prop_assert_eq!(phase, before.successor());
                    }
                    Err(_) => {
                        prop_assert_eq!(phase, before);
                    }
                }
                if before != GamePhase::Uninitialized {
                    prop_assert_ne!(phase, GamePhase::Uninitialized);
                }
            }
        }
    }
}
