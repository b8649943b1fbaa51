//! Collapse of tentative marks into resolved symbols.

use super::super::{Board, Position, Symbol};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Source of candidate choices for collapsing a cell.
///
/// Implementors must return an index in `0..len`; `len` is always at
/// least 2.
pub trait CandidatePicker {
    /// Picks one of `len` candidates.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform picker backed by a `rand` generator.
#[derive(Clone)]
pub struct RngPicker<R> {
    rng: R,
}

impl<R: Rng> RngPicker<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngPicker<StdRng> {
    /// Creates a picker from an optional seed; without one the seed is random.
    #[instrument]
    pub fn seeded(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random::<u64>);
        debug!(seed, "Seeding collapse generator");
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> CandidatePicker for RngPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

impl<R> std::fmt::Debug for RngPicker<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RngPicker").finish_non_exhaustive()
    }
}

/// What happens to a cell's tentative marks after it collapses.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    derive_more::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum CollapsePolicy {
    /// Marks are kept; later passes re-sample from every mark the cell
    /// has ever received.
    #[default]
    #[display("accumulate")]
    Accumulate,
    /// Marks are cleared once the cell resolves.
    #[display("clear-after-collapse")]
    ClearAfterCollapse,
}

/// When the session runs a collapse pass.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    derive_more::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum CollapseTrigger {
    /// After every accepted move.
    #[default]
    #[display("every-move")]
    EveryMove,
    /// After an accepted move, once some cell holds more than one mark.
    #[display("on-superposition")]
    OnSuperposition,
}

impl CollapseTrigger {
    /// Checks whether a collapse pass is due for `board`.
    pub fn should_collapse(self, board: &Board) -> bool {
        match self {
            CollapseTrigger::EveryMove => true,
            CollapseTrigger::OnSuperposition => board.has_superposition(),
        }
    }
}

/// Resolves every cell that holds at least one tentative mark.
///
/// A cell with a single mark resolves to it without consulting `picker`.
/// Cells with several marks resolve to the one `picker` selects. The
/// result overwrites any earlier resolution of the cell. Cells without
/// marks stay unresolved.
///
/// Returns the number of cells written.
#[instrument(skip(board, picker))]
pub fn collapse<P>(board: &mut Board, picker: &mut P, policy: CollapsePolicy) -> usize
where
    P: CandidatePicker + ?Sized,
{
    let mut written = 0;

    for pos in Position::ALL {
        let chosen: Symbol = match board.tentative(pos) {
            [] => continue,
            [only] => *only,
            candidates => candidates[picker.pick(candidates.len())],
        };
        trace!(?pos, %chosen, "Cell collapsed");

        board.resolve(pos, chosen);
        if policy == CollapsePolicy::ClearAfterCollapse {
            board.clear_tentative(pos);
        }
        written += 1;
    }

    debug!(written, board = %board.display(), "Collapse pass finished");
    written
}
