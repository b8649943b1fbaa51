//! Moves, input events and move results.
//!
//! Moves are domain events: the symbol a player placed and where. Input
//! events are what the frontend feeds the session after it has mapped raw
//! pointer or key input onto grid cells.

use super::{GameStatus, Position, Symbol};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A tentative mark placed by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The symbol placed.
    pub symbol: Symbol,
    /// The cell the mark went into.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(symbol: Symbol, position: Position) -> Self {
        Self { symbol, position }
    }

    /// Returns the symbol placed by this move.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Returns the cell of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.symbol, self.position.label())
    }
}

/// Discrete input delivered to the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Place the current player's mark in a cell.
    Move(Position),
    /// Pointer or cursor is over a cell.
    PointerHover(Position),
    /// Pointer left the grid.
    PointerLeave,
    /// Stop the game loop.
    Quit,
}

/// Result of handing a move to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The cell was already resolved, or the round is waiting for reset.
    Ignored,
    /// The mark was placed and the round continues.
    Placed {
        /// The accepted move.
        action: Move,
        /// Whether a collapse pass ran after the move.
        collapsed: bool,
    },
    /// The move finished the round.
    RoundOver {
        /// The accepted move.
        action: Move,
        /// Final status of the round (won or drawn).
        status: GameStatus,
    },
}

impl MoveOutcome {
    /// Returns the accepted move, if the move was not ignored.
    pub fn action(&self) -> Option<Move> {
        match self {
            MoveOutcome::Ignored => None,
            MoveOutcome::Placed { action, .. } | MoveOutcome::RoundOver { action, .. } => {
                Some(*action)
            }
        }
    }

    /// Returns the winner if this move won the round.
    pub fn winner(&self) -> Option<Symbol> {
        match self {
            MoveOutcome::RoundOver { status, .. } => status.winner(),
            MoveOutcome::Ignored | MoveOutcome::Placed { .. } => None,
        }
    }
}

/// Error returned when a mark cannot be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// The cell has collapsed and accepts no more marks this round.
    #[display("Cell {} is already resolved", _0)]
    CellResolved(Position),
}

impl std::error::Error for PlaceError {}
