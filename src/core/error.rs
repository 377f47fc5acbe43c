//! Error types for session operations.
//!
//! Every rejection is locally recoverable: the operation returns an error
//! and leaves session state unchanged.

use thiserror::Error;

use super::player::PlayerId;

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, GameError>;

/// Errors returned by rejected session operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("player name must not be empty")]
    EmptyPlayerName,
    #[error("unknown player: {0}")]
    UnknownPlayer(PlayerId),
    #[error("roster and settings are locked once the game has started")]
    GameAlreadyStarted,
    #[error("game has not started")]
    GameNotStarted,
    #[error("game is finished")]
    GameFinished,
    #[error("at least one player is required to start")]
    NoPlayers,
    #[error("game length must be one of 3, 4 or 5 years (got {0})")]
    InvalidMaxYears(u32),
    #[error("{player} has not selected a pool")]
    PoolNotSelected { player: String },
    #[error("cannot end the game before a year has run")]
    NoYearResolved,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            GameError::UnknownPlayer(PlayerId::new(3)).to_string(),
            "unknown player: Player 3"
        );
        assert_eq!(
            GameError::PoolNotSelected {
                player: "Ana".to_string()
            }
            .to_string(),
            "Ana has not selected a pool"
        );
        assert_eq!(
            GameError::InvalidMaxYears(7).to_string(),
            "game length must be one of 3, 4 or 5 years (got 7)"
        );
    }
}
