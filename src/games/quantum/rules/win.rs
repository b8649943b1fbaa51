//! Win detection over the resolved grid.

use super::super::{Position, ResolvedGrid, Symbol};
use tracing::instrument;

/// All winning lines in scan order: rows, columns, main diagonal,
/// anti-diagonal.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first winning line and its symbol.
///
/// Only resolved cells count; an unresolved cell never matches. When
/// several lines win at once, the first in [`LINES`] order is returned.
#[instrument]
pub fn winning_line(grid: &ResolvedGrid) -> Option<(Symbol, [Position; 3])> {
    LINES.into_iter().find_map(|line @ [a, b, c]| match grid.get(a) {
        Some(symbol) if grid.get(b) == Some(symbol) && grid.get(c) == Some(symbol) => {
            Some((symbol, line))
        }
        _ => None,
    })
}

/// Checks if there is a winner on the resolved grid.
///
/// Returns `Some(symbol)` if a line holds three of the same resolved
/// symbol, `None` otherwise.
#[instrument]
pub fn check_winner(grid: &ResolvedGrid) -> Option<Symbol> {
    winning_line(grid).map(|(symbol, _)| symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_grid() {
        let grid = ResolvedGrid::new();
        assert_eq!(check_winner(&grid), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut grid = ResolvedGrid::new();
        grid.set(Position::TopLeft, Symbol::X);
        grid.set(Position::TopCenter, Symbol::X);
        grid.set(Position::TopRight, Symbol::X);
        assert_eq!(check_winner(&grid), Some(Symbol::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut grid = ResolvedGrid::new();
        grid.set(Position::TopRight, Symbol::O);
        grid.set(Position::Center, Symbol::O);
        grid.set(Position::BottomLeft, Symbol::O);
        assert_eq!(
            winning_line(&grid),
            Some((
                Symbol::O,
                [Position::TopRight, Position::Center, Position::BottomLeft]
            ))
        );
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut grid = ResolvedGrid::new();
        grid.set(Position::TopLeft, Symbol::X);
        grid.set(Position::TopCenter, Symbol::O);
        grid.set(Position::TopRight, Symbol::X);
        assert_eq!(check_winner(&grid), None);
    }
}
