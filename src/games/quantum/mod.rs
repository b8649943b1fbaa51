//! Quantum tic-tac-toe: cells hold tentative marks until a collapse
//! pass resolves them.

mod action;
mod board;
mod position;
pub mod rules;
mod session;
mod types;

pub use action::{InputEvent, Move, MoveOutcome, PlaceError};
pub use board::{Board, ResolvedGrid};
pub use position::Position;
pub use rules::{CandidatePicker, CollapsePolicy, CollapseTrigger, RngPicker};
pub use session::{CollapseRules, GameSession, Phase};
pub use types::{GameStatus, Symbol};
