//! Draw detection for quantum tic-tac-toe.

use super::super::ResolvedGrid;
use super::win::check_winner;
use tracing::instrument;

/// Checks whether every cell is resolved without a winning line.
///
/// A fully resolved grid rejects every move, so the round cannot go on.
#[instrument]
pub fn is_draw(grid: &ResolvedGrid) -> bool {
    grid.is_full() && check_winner(grid).is_none()
}
