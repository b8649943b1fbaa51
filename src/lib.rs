//! Quantum tic-tac-toe library.
//!
//! A two-player tic-tac-toe variant where a cell collects tentative marks
//! until a collapse pass resolves it to a single symbol.
//!
//! # Architecture
//!
//! - **Board**: tentative marks per cell plus the resolved grid
//! - **Rules**: collapse, win and draw detection
//! - **Session**: turn alternation, move acceptance and round reset
//! - **Config**: TOML settings for collapse behaviour and pacing
//!
//! # Example
//!
//! ```
//! use quantum_tictactoe::{CollapseRules, GameSession, Position, RngPicker, Symbol};
//!
//! let mut session = GameSession::new(RngPicker::seeded(Some(1)), CollapseRules::default());
//! session.apply_move(Position::Center);
//! assert_eq!(session.board().resolved(Position::Center), Some(Symbol::X));
//! assert_eq!(session.current_symbol(), Symbol::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game types
pub use games::quantum::{
    Board, CandidatePicker, CollapsePolicy, CollapseRules, CollapseTrigger, GameSession,
    GameStatus, InputEvent, Move, MoveOutcome, Phase, PlaceError, Position, ResolvedGrid,
    RngPicker, Symbol,
};

// Crate-level exports - Rules
pub use games::quantum::rules::{LINES, check_winner, collapse, is_draw, winning_line};
