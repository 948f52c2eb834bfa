use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One completed exchange in a training conversation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConversationTurn {
    pub user_text: String,
    pub bot_text: String,
}

/// Lifecycle state of a training session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Accepting turns
    Active,
    /// The trainee disclosed credentials; terminal
    CompromisedEnd,
    /// The trainee withstood the permitted number of attempts; terminal
    SurvivedEnd,
}

impl SessionStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionStatus::CompromisedEnd | SessionStatus::SurvivedEnd)
    }
}

/// What a submitted turn did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnDisposition {
    /// Credentials were disclosed; session ended
    Compromised,
    /// Attempt limit reached without disclosure; session ended
    Survived,
    /// Session stays active; an adversarial reply is owed
    Continue,
}

/// Mutable state of one training conversation
///
/// Owned exclusively by its session for the session's lifetime. The
/// transition logic is pure so it can be exercised without a running
/// service or generator.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionState {
    /// Completed exchanges, append-only
    pub history: Vec<ConversationTurn>,
    /// Turns evaluated without a disclosure
    pub attempts: u32,
    pub credentials_revealed: bool,
    pub status: SessionStatus,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
            attempts: 0,
            credentials_revealed: false,
            status: SessionStatus::Active,
        }
    }

    /// Apply one submitted user turn to the session.
    ///
    /// The disclosure check runs before the attempt counter moves, so a
    /// disclosure on the final permitted attempt still registers as a
    /// compromise rather than a survival. Terminal outcomes never
    /// increment past the limit and never owe a bot reply.
    ///
    /// Callers must not invoke this on a terminal session.
    pub fn evaluate_turn(&mut self, revealed: bool, max_attempts: u32) -> TurnDisposition {
        debug_assert!(!self.status.is_terminal());

        if revealed {
            self.credentials_revealed = true;
            self.status = SessionStatus::CompromisedEnd;
            return TurnDisposition::Compromised;
        }

        self.attempts += 1;
        if self.attempts >= max_attempts {
            self.status = SessionStatus::SurvivedEnd;
            return TurnDisposition::Survived;
        }

        TurnDisposition::Continue
    }

    /// Append a completed exchange to the history
    pub fn record_exchange(&mut self, user_text: String, bot_text: String) {
        self.history.push(ConversationTurn {
            user_text,
            bot_text,
        });
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disclosure_ends_session_before_attempt_increment() {
        let mut state = SessionState::new();

        let disposition = state.evaluate_turn(true, 4);

        assert_eq!(disposition, TurnDisposition::Compromised);
        assert_eq!(state.status, SessionStatus::CompromisedEnd);
        assert!(state.credentials_revealed);
        // Checked before the counter moves
        assert_eq!(state.attempts, 0);
    }

    #[test]
    fn test_survival_on_fourth_turn_exactly() {
        let mut state = SessionState::new();

        for expected_attempt in 1..=3u32 {
            let disposition = state.evaluate_turn(false, 4);
            assert_eq!(disposition, TurnDisposition::Continue);
            assert_eq!(state.attempts, expected_attempt);
            assert_eq!(state.status, SessionStatus::Active);
        }

        let disposition = state.evaluate_turn(false, 4);
        assert_eq!(disposition, TurnDisposition::Survived);
        assert_eq!(state.status, SessionStatus::SurvivedEnd);
        assert_eq!(state.attempts, 4);
    }

    #[test]
    fn test_disclosure_on_final_attempt_is_compromise() {
        let mut state = SessionState::new();

        for _ in 0..3 {
            state.evaluate_turn(false, 4);
        }

        // Fourth submitted turn discloses; survival must not win
        let disposition = state.evaluate_turn(true, 4);
        assert_eq!(disposition, TurnDisposition::Compromised);
        assert_eq!(state.status, SessionStatus::CompromisedEnd);
        assert_eq!(state.attempts, 3);
    }

    #[test]
    fn test_record_exchange_appends_in_order() {
        let mut state = SessionState::new();
        state.record_exchange("hi".to_string(), "hello, IT support here".to_string());
        state.record_exchange("why?".to_string(), "we detected an issue".to_string());

        assert_eq!(state.history.len(), 2);
        assert_eq!(state.history[0].user_text, "hi");
        assert_eq!(state.history[1].bot_text, "we detected an issue");
    }
}
