//! Match State Machine
//!
//! Drives the countdown / playing / game-over flow around the physics core.

/// Match states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// 3-2-1 before a serve, physics paused
    Countdown,
    Playing,
    GameOver,
    Quit,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    CountdownDone,
    Scored,
    Missed,
    Restart,
    Quit,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: MatchState,
    pub to_state: MatchState,
}

/// Match Finite State Machine
#[derive(Debug)]
pub struct MatchFsm {
    state: MatchState,
}

impl MatchFsm {
    /// A new match opens with a countdown
    pub fn new() -> Self {
        Self {
            state: MatchState::Countdown,
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Attempt a transition; invalid ones leave the state unchanged
    pub fn transition(&mut self, action: MatchAction) -> TransitionResult {
        let from_state = self.state;

        match self.next_state(action) {
            Some(next_state) => {
                self.state = next_state;
                tracing::debug!(?from_state, ?next_state, ?action, "match transition");
                TransitionResult {
                    success: true,
                    from_state,
                    to_state: next_state,
                }
            }
            None => TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
            },
        }
    }

    fn next_state(&self, action: MatchAction) -> Option<MatchState> {
        match (self.state, action) {
            (MatchState::Quit, _) => None,
            (_, MatchAction::Quit) => Some(MatchState::Quit),

            (MatchState::Countdown, MatchAction::CountdownDone) => Some(MatchState::Playing),

            (MatchState::Playing, MatchAction::Scored) => Some(MatchState::Countdown),
            (MatchState::Playing, MatchAction::Missed) => Some(MatchState::GameOver),

            (MatchState::GameOver, MatchAction::Restart) => Some(MatchState::Countdown),

            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state == MatchState::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.state == MatchState::GameOver
    }

    pub fn should_quit(&self) -> bool {
        self.state == MatchState::Quit
    }
}

impl Default for MatchFsm {
    fn default() -> Self {
        Self::new()
    }
}
