//! Move validation and status for a single snapshot

use super::grid::{evaluate_winner, winning_line, CellIndex, Grid};
use super::Mark;
use tracing::debug;

/// A view of one history step
///
/// The board does not own game state; it holds a copy of the viewed grid and
/// the turn flag, and reports completed moves through a callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    x_is_next: bool,
}

impl Board {
    pub fn new(grid: Grid, x_is_next: bool) -> Self {
        Board { grid, x_is_next }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The mark the next activation would place
    pub fn active_mark(&self) -> Mark {
        Mark::for_turn(self.x_is_next)
    }

    pub fn winner(&self) -> Option<Mark> {
        evaluate_winner(&self.grid)
    }

    pub fn winning_line(&self) -> Option<[CellIndex; 3]> {
        winning_line(&self.grid)
    }

    /// Try to place the active player's mark at `index`
    ///
    /// Ignored when the cell is occupied or the grid already has a winner;
    /// `on_move` is then never called. Otherwise `on_move` receives the new grid.
    pub fn activate_cell<F: FnOnce(Grid)>(&self, index: CellIndex, on_move: F) {
        if !self.grid.get(index).is_empty() {
            debug!(cell = %index, "ignoring activation of occupied cell");
            return;
        }
        if self.winner().is_some() {
            debug!(cell = %index, "ignoring activation after game end");
            return;
        }

        on_move(self.grid.with_mark(index, self.active_mark()));
    }

    /// Whether `next` is what `activate_cell` could have produced from this board
    pub fn is_next_move(&self, next: &Grid) -> bool {
        if self.winner().is_some() {
            return false;
        }
        match self.grid.diff(next).as_slice() {
            [cell] => self.grid.get(*cell).is_empty() && next.get(*cell) == self.active_mark(),
            _ => false,
        }
    }

    /// The status line, using `glyph` to display a mark
    ///
    /// A full board without a winner still reports whose turn it would be.
    pub fn status<G: Fn(Mark) -> String>(&self, glyph: G) -> String {
        match self.winner() {
            Some(winner) => format!("Winner: {}", glyph(winner)),
            None => format!("Next player: {}", glyph(self.active_mark())),
        }
    }
}
