//! Tentative and resolved cell storage.
//!
//! Each cell keeps an ordered list of tentative marks. Once a collapse
//! pass resolves a cell, the resolved grid holds its symbol and the cell
//! rejects further marks for the rest of the round.

use super::action::PlaceError;
use super::{Position, Symbol};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Resolved symbols, row-major.
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_more::From)]
pub struct ResolvedGrid {
    cells: [Option<Symbol>; 9],
}

impl ResolvedGrid {
    /// Creates a grid with nothing resolved.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolved symbol at `pos`, if any.
    pub fn get(&self, pos: Position) -> Option<Symbol> {
        self.cells[pos.to_index()]
    }

    /// Writes a resolution, replacing whatever was there.
    pub fn set(&mut self, pos: Position, symbol: Symbol) {
        self.cells[pos.to_index()] = Some(symbol);
    }

    /// Checks whether `pos` has been resolved.
    pub fn is_resolved(&self, pos: Position) -> bool {
        self.get(pos).is_some()
    }

    /// Checks whether every cell has been resolved.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns all cells as an array.
    pub fn cells(&self) -> &[Option<Symbol>; 9] {
        &self.cells
    }
}

/// 3x3 quantum board: tentative marks plus the resolved grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    tentative: [Vec<Symbol>; 9],
    resolved: ResolvedGrid,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a tentative mark to an unresolved cell.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::CellResolved`] if the cell has already been
    /// resolved; the board is left untouched.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, symbol: Symbol) -> Result<(), PlaceError> {
        if self.is_resolved(pos) {
            return Err(PlaceError::CellResolved(pos));
        }
        let entry = &mut self.tentative[pos.to_index()];
        entry.push(symbol);
        debug!(marks = entry.len(), "Tentative mark added");
        Ok(())
    }

    /// Checks whether `pos` has been resolved.
    pub fn is_resolved(&self, pos: Position) -> bool {
        self.resolved.is_resolved(pos)
    }

    /// Tentative marks at `pos` in placement order.
    pub fn tentative(&self, pos: Position) -> &[Symbol] {
        &self.tentative[pos.to_index()]
    }

    /// Resolved symbol at `pos`, if any.
    pub fn resolved(&self, pos: Position) -> Option<Symbol> {
        self.resolved.get(pos)
    }

    /// Returns the resolved grid.
    pub fn resolved_grid(&self) -> &ResolvedGrid {
        &self.resolved
    }

    /// Checks whether any cell holds more than one tentative mark.
    pub fn has_superposition(&self) -> bool {
        self.tentative.iter().any(|entry| entry.len() > 1)
    }

    /// Checks whether every cell has been resolved.
    pub fn is_fully_resolved(&self) -> bool {
        self.resolved.is_full()
    }

    /// Cells with tentative marks but no resolution yet.
    pub fn pending(&self) -> Vec<Position> {
        Position::iter()
            .filter(|&pos| !self.tentative(pos).is_empty() && !self.is_resolved(pos))
            .collect()
    }

    pub(super) fn resolve(&mut self, pos: Position, symbol: Symbol) {
        self.resolved.set(pos, symbol);
    }

    pub(super) fn clear_tentative(&mut self, pos: Position) {
        self.tentative[pos.to_index()].clear();
    }

    /// Formats the board as a human-readable string.
    ///
    /// Resolved cells show their symbol, pending cells their marks in
    /// brackets, untouched cells a dot.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            let cells: Vec<String> = (0..3)
                .filter_map(|col| Position::from_row_col(row, col))
                .map(|pos| match (self.resolved(pos), self.tentative(pos)) {
                    (Some(symbol), _) => symbol.to_string(),
                    (None, []) => ".".to_string(),
                    (None, marks) => {
                        let marks: String = marks.iter().map(Symbol::to_string).collect();
                        format!("[{}]", marks)
                    }
                })
                .collect();
            result.push_str(&cells.join("|"));
            if row < 2 {
                result.push('\n');
            }
        }
        result
    }
}
