//! Game phase state machine
//!
//! Splash -> Playing -> GameOver -> Splash, driven by taps and collisions.

/// Game phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Splash,
    Playing,
    GameOver,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseAction {
    /// Tap while the round is not over
    Tap,
    /// Fatal collision
    Collided,
    /// Tap on the game-over screen after the player has landed
    Restart,
}

/// Result of a phase transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from: GamePhase,
    pub to: GamePhase,
    pub action: PhaseAction,
}

/// Phase finite state machine
#[derive(Debug, Clone)]
pub struct PhaseMachine {
    phase: GamePhase,
}

impl PhaseMachine {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Splash,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: PhaseAction) -> bool {
        self.next_phase(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: PhaseAction) -> TransitionResult {
        let from = self.phase;
        match self.next_phase(action) {
            Some(to) => {
                self.phase = to;
                log::debug!("phase {:?} -> {:?} on {:?}", from, to, action);
                TransitionResult {
                    success: true,
                    from,
                    to,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from,
                to: from,
                action,
            },
        }
    }

    fn next_phase(&self, action: PhaseAction) -> Option<GamePhase> {
        match (self.phase, action) {
            (GamePhase::Splash, PhaseAction::Tap) => Some(GamePhase::Playing),
            (GamePhase::Playing, PhaseAction::Collided) => Some(GamePhase::GameOver),
            (GamePhase::GameOver, PhaseAction::Restart) => Some(GamePhase::Splash),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        self.phase = GamePhase::Splash;
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

impl Default for PhaseMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase() {
        let fsm = PhaseMachine::new();
        assert_eq!(fsm.phase(), GamePhase::Splash);
    }

    #[test]
    fn test_full_round() {
        let mut fsm = PhaseMachine::new();
        assert!(fsm.transition(PhaseAction::Tap).success);
        assert!(fsm.is_playing());
        assert!(fsm.transition(PhaseAction::Collided).success);
        assert!(fsm.is_game_over());
        let result = fsm.transition(PhaseAction::Restart);
        assert_eq!(result.from, GamePhase::GameOver);
        assert_eq!(result.to, GamePhase::Splash);
    }

    #[test]
    fn test_invalid_transitions_keep_phase() {
        let mut fsm = PhaseMachine::new();
        let result = fsm.transition(PhaseAction::Collided);
        assert!(!result.success);
        assert_eq!(fsm.phase(), GamePhase::Splash);

        fsm.transition(PhaseAction::Tap);
        assert!(!fsm.can_transition(PhaseAction::Tap), "Taps while playing are flaps");
        assert!(!fsm.can_transition(PhaseAction::Restart));
    }

    #[test]
    fn test_reset() {
        let mut fsm = PhaseMachine::new();
        fsm.transition(PhaseAction::Tap);
        fsm.reset();
        assert_eq!(fsm.phase(), GamePhase::Splash);
    }
}
