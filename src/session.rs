use crate::error::GameError;
use crate::evaluator::{Feedback, evaluate};
use std::fmt;

/// Guesses allowed per round.
pub const ATTEMPT_BUDGET: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundState {
    InProgress,
    Won,
    Lost,
}

impl RoundState {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(label)
    }
}

/// One accepted guess and the feedback it earned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: String,
    pub feedback: Feedback,
}

/// State of a single round.
///
/// History only grows through `submit`, and only while the round is in
/// progress; `Won` and `Lost` are terminal until `reset`.
#[derive(Clone, Debug)]
pub struct GameSession {
    secret: String,
    history: Vec<GuessRecord>,
    state: RoundState,
}

impl GameSession {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            history: Vec::with_capacity(ATTEMPT_BUDGET),
            state: RoundState::InProgress,
        }
    }

    #[must_use]
    pub fn state(&self) -> RoundState {
        self.state
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub fn secret_len(&self) -> usize {
        self.secret.chars().count()
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        ATTEMPT_BUDGET - self.history.len()
    }

    /// The secret, but only once the round is over.
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&str> {
        self.state.is_terminal().then_some(self.secret.as_str())
    }

    /// Score and record `guess`. Rejected guesses leave the round untouched.
    pub fn submit(&mut self, guess: &str) -> Result<Feedback, GameError> {
        if self.state.is_terminal() {
            return Err(GameError::GameOver);
        }
        let feedback = evaluate(&self.secret, guess)?;
        if self.history.iter().any(|r| r.guess == guess) {
            return Err(GameError::DuplicateGuess(guess.to_string()));
        }

        self.history.push(GuessRecord {
            guess: guess.to_string(),
            feedback: feedback.clone(),
        });
        if feedback.is_all_exact() {
            self.state = RoundState::Won;
        } else if self.history.len() == ATTEMPT_BUDGET {
            self.state = RoundState::Lost;
        }
        Ok(feedback)
    }

    pub(crate) fn reset(&mut self, new_secret: impl Into<String>) {
        self.secret = new_secret.into();
        self.history.clear();
        self.state = RoundState::InProgress;
    }
}
