//! Round orchestration: picks secrets from the pool, normalises player
//! input and reports round progress back to the UI.

use crate::error::GameError;
use crate::evaluator::Feedback;
use crate::session::{GameSession, RoundState};
use crate::wordbank::WordPool;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;

/// What the UI needs to know about the round after each guess.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub state: RoundState,
    pub attempts_used: usize,
    pub attempts_remaining: usize,
    pub secret_length: usize,
    pub revealed_secret: Option<String>,
}

impl SessionSnapshot {
    fn of(session: &GameSession) -> Self {
        Self {
            state: session.state(),
            attempts_used: session.attempts_used(),
            attempts_remaining: session.attempts_remaining(),
            secret_length: session.secret_len(),
            revealed_secret: session.revealed_secret().map(str::to_string),
        }
    }
}

/// Owns one player's round. Not shared between players; wrap in a mutex
/// if a single game must be reached from several threads.
#[derive(Debug)]
pub struct GameController {
    pool: Arc<WordPool>,
    session: GameSession,
    rng: StdRng,
    rounds_started: usize,
}

impl GameController {
    /// Start the first round with an entropy-seeded generator.
    pub fn start_round(pool: Arc<WordPool>) -> Result<Self, GameError> {
        Self::with_rng(pool, StdRng::from_entropy())
    }

    pub fn with_seed(pool: Arc<WordPool>, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(pool, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(pool: Arc<WordPool>, mut rng: StdRng) -> Result<Self, GameError> {
        let secret = pool.select(&mut rng)?;
        let session = GameSession::new(secret);
        log::info!(
            "round 1 started ({} characters, pool of {})",
            session.secret_len(),
            pool.len()
        );
        Ok(Self {
            pool,
            session,
            rng,
            rounds_started: 1,
        })
    }

    /// Submit raw player input. Input is trimmed and lowercased first.
    pub fn guess(&mut self, raw_input: &str) -> Result<(Feedback, SessionSnapshot), GameError> {
        let guess = normalize_guess(raw_input);
        let feedback = match self.session.submit(&guess) {
            Ok(feedback) => feedback,
            Err(e) => {
                log::debug!("guess '{guess}' rejected: {e}");
                return Err(e);
            }
        };
        let snapshot = self.snapshot();
        match snapshot.state {
            RoundState::Won => log::info!(
                "round {} won in {} attempts",
                self.rounds_started,
                snapshot.attempts_used
            ),
            RoundState::Lost => log::info!("round {} lost", self.rounds_started),
            RoundState::InProgress => {}
        }
        Ok((feedback, snapshot))
    }

    /// Abandon or finish the current round and start another.
    ///
    /// Allowed at any time. The new secret may repeat the old one.
    pub fn new_round(&mut self) -> Result<(), GameError> {
        let secret = self.pool.select(&mut self.rng)?;
        if !self.session.state().is_terminal() {
            log::info!("round {} abandoned", self.rounds_started);
        }
        self.session.reset(secret);
        self.rounds_started += 1;
        log::info!(
            "round {} started ({} characters)",
            self.rounds_started,
            self.session.secret_len()
        );
        Ok(())
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::of(&self.session)
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn pool(&self) -> &WordPool {
        &self.pool
    }

    #[must_use]
    pub fn rounds_started(&self) -> usize {
        self.rounds_started
    }
}

/// Trim surrounding whitespace and lowercase.
#[must_use]
pub fn normalize_guess(raw: &str) -> String {
    raw.trim().to_lowercase()
}
