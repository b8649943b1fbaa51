//! Game rules for quantum tic-tac-toe.
//!
//! This module contains the functions that evaluate and advance board
//! state: collapsing tentative marks, and detecting wins and draws.
//! Rules are kept apart from board storage so the session can compose
//! them under different collapse settings.

pub mod collapse;
pub mod draw;
pub mod win;

pub use collapse::{CandidatePicker, CollapsePolicy, CollapseTrigger, RngPicker, collapse};
pub use draw::is_draw;
pub use win::{LINES, check_winner, winning_line};
