//! The game controller
//!
//! [`Game`] is the single owner of game state: the snapshot [`History`] and the
//! step currently being viewed. Everything else ([`Board`], the panes) is
//! derived from it on every render.
//!
//! # State machine
//!
//! ```text
//!            play(grid)                       jump_to(k)
//! step s ─────────────────▶ step s+1      step s ─────────▶ step k
//!  (history cut to 0..=s, grid appended)   (history untouched)
//! ```
//!
//! There is no terminal state: a finished game can still be browsed, and a
//! move from an earlier step starts a new timeline.

use super::board::Board;
use super::errors::NavigationError;
use super::grid::Grid;
use crate::snapshot::History;
use tracing::{debug, info};

/// Label for the history entry of the empty starting grid
pub const NEW_GAME_LABEL: &str = "A New Game!";

/// Owns the move history and the viewed step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    history: History,
    current_step: usize,
}

impl Game {
    pub fn new() -> Self {
        Game {
            history: History::new(),
            current_step: 0,
        }
    }

    /// Record a move made while viewing the current step
    ///
    /// Any snapshots after the current step are discarded before `grid` is
    /// appended, and the new snapshot becomes the viewed step.
    ///
    /// # Panics
    ///
    /// If `grid` is not one legal move from the current grid. Pass only grids
    /// handed to the `on_move` callback of [`Board::activate_cell`].
    pub fn play(&mut self, grid: Grid) {
        assert!(
            self.board().is_next_move(&grid),
            "grid played at step {} is not a single legal move",
            self.current_step
        );
        let discarded = self.history.branch(self.current_step, grid);
        self.current_step = self.history.last_step();

        if discarded > 0 {
            info!(
                from_step = self.current_step - 1,
                discarded, "branched history, dropping later moves"
            );
        }
        info!(step = self.current_step, "move played");
        if let Some(winner) = self.board().winner() {
            info!(?winner, step = self.current_step, "game won");
        }
    }

    /// View `step` without touching history
    ///
    /// # Panics
    ///
    /// If `step` is not a valid history index.
    pub fn jump_to(&mut self, step: usize) {
        assert!(
            step < self.history.len(),
            "jump to step {} out of range (history has {} steps)",
            step,
            self.history.len()
        );
        debug!(from = self.current_step, to = step, "jump");
        self.current_step = step;
    }

    /// True iff the viewed step is even
    pub fn x_is_next(&self) -> bool {
        self.current_step % 2 == 0
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// The grid at the viewed step
    pub fn current_grid(&self) -> &Grid {
        self.history
            .get(self.current_step)
            .unwrap_or_else(|| panic!("current step {} outside history", self.current_step))
    }

    /// The board bound to the viewed step
    pub fn board(&self) -> Board {
        Board::new(*self.current_grid(), self.x_is_next())
    }

    /// One label per history entry, in order
    pub fn move_labels(&self) -> Vec<String> {
        (0..self.history.len()).map(move_label).collect()
    }

    // ========== Time-travel helpers ==========

    /// Step back one move
    pub fn step_backward(&mut self) -> Result<(), NavigationError> {
        if self.current_step == 0 {
            return Err(NavigationError::AtStart);
        }
        self.jump_to(self.current_step - 1);
        Ok(())
    }

    /// Step forward one move through existing history
    pub fn step_forward(&mut self) -> Result<(), NavigationError> {
        if self.current_step >= self.history.last_step() {
            return Err(NavigationError::AtEnd);
        }
        self.jump_to(self.current_step + 1);
        Ok(())
    }

    pub fn rewind_to_start(&mut self) {
        self.jump_to(0);
    }

    pub fn jump_to_end(&mut self) {
        self.jump_to(self.history.last_step());
    }

    pub fn is_at_start(&self) -> bool {
        self.current_step == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.current_step == self.history.last_step()
    }

    /// Throw away all history and start over
    pub fn restart(&mut self) {
        info!(moves = self.history.last_step(), "restarting");
        *self = Game::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// The history-list label for `step`
pub fn move_label(step: usize) -> String {
    if step == 0 {
        NEW_GAME_LABEL.to_string()
    } else {
        format!("Go to move #{}", step)
    }
}
