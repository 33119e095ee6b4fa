// Library interface for playerdle
// This allows integration tests to access internal modules

pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod evaluator;
pub mod game_state;
pub mod logging;
pub mod provider;
pub mod session;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use controller::{GameController, SessionSnapshot};
pub use error::{GameError, ProviderError};
pub use evaluator::{Feedback, Mark, evaluate};
pub use game_state::{GameInterface, RoundTally, UserAction, game_loop};
pub use session::{ATTEMPT_BUDGET, GameSession, RoundState};
pub use wordbank::{DEFAULT_PLAYERS, WordPool, acquire, cached_pool, parse_name_list};
