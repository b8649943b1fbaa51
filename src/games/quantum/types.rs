//! Core domain types for quantum tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Mark a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Symbol {
    /// Symbol X (moves first by default).
    X,
    /// Symbol O.
    O,
}

impl Symbol {
    /// Returns the other symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

/// Current status of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum GameStatus {
    /// Round is ongoing.
    #[default]
    #[display("In progress")]
    InProgress,
    /// Round ended with a winning line.
    #[display("Player {_0} wins!")]
    Won(Symbol),
    /// Every cell collapsed without a winning line.
    #[display("Draw")]
    Draw,
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Symbol> {
        match self {
            GameStatus::Won(symbol) => Some(symbol),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    /// Returns true once the round has ended.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Symbol::X.opponent(), Symbol::O);
        assert_eq!(Symbol::O.opponent(), Symbol::X);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(GameStatus::Won(Symbol::X).to_string(), "Player X wins!");
        assert_eq!(GameStatus::Draw.to_string(), "Draw");
        assert!(!GameStatus::InProgress.is_over());
        assert_eq!(GameStatus::Won(Symbol::O).winner(), Some(Symbol::O));
    }
}
