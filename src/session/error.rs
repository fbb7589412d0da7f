//! Tracker errors.
//!
//! Every error is a rejected call: the tracker's state is exactly what it
//! was before the call, and no event was emitted.

use crate::core::{ArrangementError, PlayerId};

/// Why a tracker call was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    /// `start_new_game` while the player already has an active game.
    GameAlreadyInProgress(PlayerId),
    /// `make_attempt` without an active game.
    GameNotStarted(PlayerId),
    /// The submitted arrangement failed validation.
    InvalidBottleArrangement(ArrangementError),
    /// The session already holds the maximum number of attempts.
    ///
    /// Automatic restart makes this unreachable for a consistent session;
    /// it is reported rather than ignored if a session is ever found in
    /// that state.
    MaxAttemptsReached { player: PlayerId, attempts: u8 },
}

impl GameError {
    /// Stable name of the error kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::GameAlreadyInProgress(_) => "GameAlreadyInProgress",
            Self::GameNotStarted(_) => "GameNotStarted",
            Self::InvalidBottleArrangement(_) => "InvalidBottleArrangement",
            Self::MaxAttemptsReached { .. } => "MaxAttemptsReached",
        }
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GameAlreadyInProgress(player) => {
                write!(f, "{}: {} already has a game in progress", self.kind(), player)
            }
            Self::GameNotStarted(player) => {
                write!(f, "{}: {} has no active game", self.kind(), player)
            }
            Self::InvalidBottleArrangement(reason) => write!(f, "{}: {}", self.kind(), reason),
            Self::MaxAttemptsReached { player, attempts } => write!(
                f,
                "{}: {} has already made {} attempts",
                self.kind(),
                player,
                attempts
            ),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidBottleArrangement(reason) => Some(reason),
            _ => None,
        }
    }
}

impl From<ArrangementError> for GameError {
    fn from(err: ArrangementError) -> Self {
        Self::InvalidBottleArrangement(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_kinds() {
        let p = PlayerId::new(1);
        assert_eq!(GameError::GameAlreadyInProgress(p).kind(), "GameAlreadyInProgress");
        assert_eq!(GameError::GameNotStarted(p).kind(), "GameNotStarted");
        assert_eq!(
            GameError::MaxAttemptsReached { player: p, attempts: 5 }.kind(),
            "MaxAttemptsReached"
        );
        let err: GameError = ArrangementError::Duplicate { value: 2 }.into();
        assert_eq!(err.kind(), "InvalidBottleArrangement");
    }

    #[test]
    fn test_error_display() {
        let err = GameError::GameNotStarted(PlayerId::new(3));
        assert_eq!(err.to_string(), "GameNotStarted: Player 3 has no active game");

        let err = GameError::from(ArrangementError::WrongLength { expected: 5, actual: 2 });
        assert_eq!(
            err.to_string(),
            "InvalidBottleArrangement: expected 5 bottles, got 2"
        );
    }

    #[test]
    fn test_error_source() {
        let err = GameError::from(ArrangementError::Duplicate { value: 4 });
        assert!(err.source().is_some());
        assert!(GameError::GameNotStarted(PlayerId::new(0)).source().is_none());
    }
}
