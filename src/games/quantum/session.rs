//! Turn control for a quantum tic-tac-toe session.
//!
//! [`GameSession`] owns the board and the turn counter. Each accepted
//! move appends a tentative mark, advances the turn, runs a collapse pass
//! when one is due, and checks the resolved grid for a finished round.
//! A finished round waits in [`Phase::AwaitingReset`] until the frontend
//! acknowledges it.

use super::action::{Move, MoveOutcome};
use super::rules::{CandidatePicker, CollapsePolicy, CollapseTrigger, collapse, is_draw, winning_line};
use super::{Board, GameStatus, Position, Symbol};
use tracing::{debug, info, instrument};

/// Whether the session accepts moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Moves are accepted.
    #[default]
    InProgress,
    /// The round is over; moves are ignored until reset.
    AwaitingReset,
}

/// Collapse settings for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CollapseRules {
    /// What happens to tentative marks after a cell collapses.
    pub policy: CollapsePolicy,
    /// When collapse passes run.
    pub trigger: CollapseTrigger,
}

impl CollapseRules {
    /// Creates collapse settings.
    pub fn new(policy: CollapsePolicy, trigger: CollapseTrigger) -> Self {
        Self { policy, trigger }
    }
}

/// A running game: board, turn counter and round status.
#[derive(Debug, Clone)]
pub struct GameSession<P> {
    board: Board,
    turn: u32,
    status: GameStatus,
    history: Vec<Move>,
    hovered: Option<Position>,
    first_symbol: Symbol,
    rules: CollapseRules,
    picker: P,
}

impl<P: CandidatePicker> GameSession<P> {
    /// Creates a session with an empty board; X moves first.
    #[instrument(skip(picker))]
    pub fn new(picker: P, rules: CollapseRules) -> Self {
        Self {
            board: Board::new(),
            turn: 0,
            status: GameStatus::InProgress,
            history: Vec::new(),
            hovered: None,
            first_symbol: Symbol::X,
            rules,
            picker,
        }
    }

    /// Sets the symbol that moves on even turns.
    pub fn with_first_symbol(mut self, symbol: Symbol) -> Self {
        self.first_symbol = symbol;
        self
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of accepted moves this round.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Returns the round status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        if self.status.is_over() {
            Phase::AwaitingReset
        } else {
            Phase::InProgress
        }
    }

    /// Accepted moves this round, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the collapse settings.
    pub fn rules(&self) -> CollapseRules {
        self.rules
    }

    /// Returns the candidate picker.
    pub fn picker(&self) -> &P {
        &self.picker
    }

    /// Symbol that moves on even turns.
    pub fn first_symbol(&self) -> Symbol {
        self.first_symbol
    }

    /// Symbol placed by the next accepted move.
    pub fn current_symbol(&self) -> Symbol {
        if self.turn % 2 == 0 {
            self.first_symbol
        } else {
            self.first_symbol.opponent()
        }
    }

    /// Cell under the pointer or keyboard cursor.
    pub fn hovered(&self) -> Option<Position> {
        self.hovered
    }

    /// Updates the hovered cell.
    pub fn set_hovered(&mut self, hovered: Option<Position>) {
        self.hovered = hovered;
    }

    /// The winning line of a won round.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        match self.status {
            GameStatus::Won(_) => winning_line(self.board.resolved_grid()).map(|(_, line)| line),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    /// Places the current symbol at `position`.
    ///
    /// Moves on resolved cells, and any move after the round has ended,
    /// are ignored without changing state.
    #[instrument(skip(self), fields(turn = self.turn, symbol = %self.current_symbol()))]
    pub fn apply_move(&mut self, position: Position) -> MoveOutcome {
        if self.phase() == Phase::AwaitingReset {
            debug!("Round is over, ignoring move");
            return MoveOutcome::Ignored;
        }

        let symbol = self.current_symbol();
        if let Err(e) = self.board.place(position, symbol) {
            debug!(error = %e, "Ignoring move");
            return MoveOutcome::Ignored;
        }

        let action = Move::new(symbol, position);
        self.history.push(action);
        self.turn += 1;

        if !self.rules.trigger.should_collapse(&self.board) {
            debug!(%action, "Mark placed, no collapse due");
            return MoveOutcome::Placed {
                action,
                collapsed: false,
            };
        }

        collapse(&mut self.board, &mut self.picker, self.rules.policy);

        let grid = self.board.resolved_grid();
        if let Some((winner, line)) = winning_line(grid) {
            info!(%winner, ?line, "Player {} wins!", winner);
            self.status = GameStatus::Won(winner);
        } else if is_draw(grid) {
            info!("Every cell collapsed without a winner");
            self.status = GameStatus::Draw;
        } else {
            return MoveOutcome::Placed {
                action,
                collapsed: true,
            };
        }

        MoveOutcome::RoundOver {
            action,
            status: self.status,
        }
    }

    /// Starts a fresh round once the finished one has been shown.
    ///
    /// Returns `false` (and changes nothing) while a round is in progress.
    #[instrument(skip(self))]
    pub fn acknowledge_reset(&mut self) -> bool {
        if self.phase() == Phase::InProgress {
            return false;
        }

        debug!(status = %self.status, turns = self.turn, "Resetting board");
        self.board = Board::new();
        self.turn = 0;
        self.history.clear();
        self.status = GameStatus::InProgress;
        true
    }
}
