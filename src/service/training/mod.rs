//! Phishing awareness training sessions
//!
//! Drives a simulated credential-harvesting conversation: the model
//! plays an adversarial IT-support persona while the disclosure
//! detector watches every user turn. A disclosure ends the session as
//! compromised; withstanding the configured number of attempts ends it
//! as survived.

pub mod error;
pub mod prompts;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::{SessionState, SessionStatus, TrainingConfig, TurnDisposition};
use crate::service::detection::{DisclosureDetector, DisclosureResult};
use crate::service::llm::{ChatTurn, Generator};
use prompts::{COMPROMISED_DEBRIEF, SURVIVED_DEBRIEF, TRAINING_SYSTEM_PROMPT};

pub use error::TrainingError;

/// Environment variable for the training model (defaults to gpt-4o-mini)
pub const ENV_TRAINING_MODEL: &str = "TRAINING_MODEL";

/// One stored session with its bookkeeping
#[derive(Debug, Clone)]
pub struct SessionEntry {
    pub state: SessionState,
    pub created_at: DateTime<Utc>,
}

/// Result of one submitted training turn
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub status: SessionStatus,
    pub attempts: u32,
    pub disclosure: DisclosureResult,
    /// Next adversarial message, present only while the session stays active
    pub bot_message: Option<String>,
    /// Closing message, present only on a terminal transition
    pub debrief: Option<&'static str>,
}

/// Service owning all in-memory training sessions
///
/// Each session is checked out of the map for the duration of its turn,
/// so exactly one writer touches a session at a time; a concurrent
/// submission for a busy session is rejected rather than queued.
pub struct TrainingSessionService {
    generator: Arc<dyn Generator>,
    detector: DisclosureDetector,
    max_attempts: u32,
    sessions: Mutex<HashMap<Uuid, Option<SessionEntry>>>,
}

impl TrainingSessionService {
    pub fn new(
        generator: Arc<dyn Generator>,
        detector: DisclosureDetector,
        config: &TrainingConfig,
    ) -> Self {
        tracing::info!(
            max_attempts = config.max_attempts,
            "Training session service initialized"
        );

        Self {
            generator,
            detector,
            max_attempts: config.max_attempts,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Start a new active session and return its id
    pub fn create_session(&self) -> Uuid {
        let id = Uuid::new_v4();
        let entry = SessionEntry {
            state: SessionState::new(),
            created_at: Utc::now(),
        };

        self.sessions
            .lock()
            .expect("session map lock poisoned")
            .insert(id, Some(entry));

        tracing::info!(session_id = %id, "Training session created");
        id
    }

    /// Snapshot a session for display
    pub fn get_session(&self, id: Uuid) -> Result<SessionEntry, TrainingError> {
        let sessions = self.sessions.lock().expect("session map lock poisoned");
        match sessions.get(&id) {
            Some(Some(entry)) => Ok(entry.clone()),
            Some(None) => Err(TrainingError::TurnInProgress(id)),
            None => Err(TrainingError::SessionNotFound(id)),
        }
    }

    /// Submit one user turn to a session.
    ///
    /// Transition order: disclosure check first (before the attempt
    /// counter moves), then the attempt limit, then the adversarial
    /// reply. Terminal transitions make no generation call. If the
    /// generation call fails, the session is restored to its pre-turn
    /// state so the same turn can be resubmitted.
    pub async fn submit_turn(
        &self,
        id: Uuid,
        user_text: &str,
    ) -> Result<TurnOutcome, TrainingError> {
        let mut entry = self.check_out(id)?;
        let before = entry.state.clone();

        let disclosure = self.detector.scan(user_text);
        let disposition = entry.state.evaluate_turn(disclosure.revealed(), self.max_attempts);

        match disposition {
            TurnDisposition::Compromised => {
                tracing::info!(
                    session_id = %id,
                    attempts = entry.state.attempts,
                    "Session ended: credentials disclosed"
                );
                let outcome = TurnOutcome {
                    status: entry.state.status,
                    attempts: entry.state.attempts,
                    disclosure,
                    bot_message: None,
                    debrief: Some(COMPROMISED_DEBRIEF),
                };
                self.check_in(id, entry);
                Ok(outcome)
            }
            TurnDisposition::Survived => {
                tracing::info!(
                    session_id = %id,
                    attempts = entry.state.attempts,
                    "Session ended: trainee survived all attempts"
                );
                let outcome = TurnOutcome {
                    status: entry.state.status,
                    attempts: entry.state.attempts,
                    disclosure,
                    bot_message: None,
                    debrief: Some(SURVIVED_DEBRIEF),
                };
                self.check_in(id, entry);
                Ok(outcome)
            }
            TurnDisposition::Continue => {
                let history = flatten_history(&entry.state);
                let start_time = std::time::Instant::now();

                match self
                    .generator
                    .generate(TRAINING_SYSTEM_PROMPT, &history, user_text)
                    .await
                {
                    Ok(bot_message) => {
                        tracing::info!(
                            session_id = %id,
                            attempts = entry.state.attempts,
                            elapsed_ms = start_time.elapsed().as_millis(),
                            "Adversarial reply generated"
                        );

                        entry
                            .state
                            .record_exchange(user_text.to_string(), bot_message.clone());
                        let outcome = TurnOutcome {
                            status: entry.state.status,
                            attempts: entry.state.attempts,
                            disclosure,
                            bot_message: Some(bot_message),
                            debrief: None,
                        };
                        self.check_in(id, entry);
                        Ok(outcome)
                    }
                    Err(e) => {
                        tracing::error!(
                            session_id = %id,
                            elapsed_ms = start_time.elapsed().as_millis(),
                            error = %e,
                            "Adversarial reply generation failed, rolling back turn"
                        );
                        // Same turn can be resubmitted
                        entry.state = before;
                        self.check_in(id, entry);
                        Err(e.into())
                    }
                }
            }
        }
    }

    /// Take exclusive ownership of a session for one turn
    fn check_out(&self, id: Uuid) -> Result<SessionEntry, TrainingError> {
        let mut sessions = self.sessions.lock().expect("session map lock poisoned");

        let slot = sessions
            .get_mut(&id)
            .ok_or(TrainingError::SessionNotFound(id))?;

        match slot.take() {
            Some(entry) if entry.state.status.is_terminal() => {
                *slot = Some(entry);
                Err(TrainingError::SessionFinished(id))
            }
            Some(entry) => Ok(entry),
            None => Err(TrainingError::TurnInProgress(id)),
        }
    }

    /// Return a checked-out session to the map
    fn check_in(&self, id: Uuid, entry: SessionEntry) {
        self.sessions
            .lock()
            .expect("session map lock poisoned")
            .insert(id, Some(entry));
    }
}

/// Flatten completed exchanges into the generator's message sequence
fn flatten_history(state: &SessionState) -> Vec<ChatTurn> {
    let mut history = Vec::with_capacity(state.history.len() * 2);
    for turn in &state.history {
        history.push(ChatTurn::user(turn.user_text.clone()));
        history.push(ChatTurn::assistant(turn.bot_text.clone()));
    }
    history
}
