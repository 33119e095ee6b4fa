use thiserror::Error;

/// Reasons a round operation can be refused.
///
/// Apart from `EmptyPool`, every variant is recoverable: the round is left
/// exactly as it was and the message is shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("cannot start round: the word pool is empty")]
    EmptyPool,
    #[error("guess must be {expected} characters long (got {actual})")]
    InvalidLength { expected: usize, actual: usize },
    #[error("'{0}' has already been guessed this round")]
    DuplicateGuess(String),
    #[error("round already finished, start a new one")]
    GameOver,
}

/// Failures reported by external collaborators (name lists, answer backends).
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("provider command exited with {status}")]
    CommandFailed { status: String },
    #[error("provider returned no content")]
    Empty,
    #[error("no provider configured")]
    Unavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(
            GameError::InvalidLength { expected: 5, actual: 3 }.to_string(),
            "guess must be 5 characters long (got 3)"
        );
        assert_eq!(
            GameError::GameOver.to_string(),
            "round already finished, start a new one"
        );
        assert!(GameError::EmptyPool.to_string().starts_with("cannot start round"));
        assert!(GameError::DuplicateGuess("saka".into()).to_string().contains("saka"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ProviderError = io.into();
        assert!(matches!(err, ProviderError::Io(_)));
    }
}
