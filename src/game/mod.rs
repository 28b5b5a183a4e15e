//! Rules of the game
//!
//! This module provides the core game abstractions:
//! - [`grid`]: the 9-cell board snapshot, cell indices and win evaluation
//! - [`board`]: move validation and the status line for one snapshot
//! - [`controller`]: the [`Game`] that owns history and the viewed step
//! - [`errors`]: navigation errors for the time-travel helpers
//!
//! # Layout
//!
//! Cells are numbered row-major:
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```
//!
//! Player one ([`Mark::X`]) moves on even steps, player two ([`Mark::O`]) on odd steps.

pub mod board;
pub mod controller;
pub mod errors;
pub mod grid;

pub use board::Board;
pub use controller::Game;
pub use errors::NavigationError;
pub use grid::{evaluate_winner, winning_line, CellIndex, Grid, WINNING_LINES};

/// The contents of one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    /// Player one
    X,
    /// Player two
    O,
}

impl Mark {
    /// The mark placed by whoever moves next
    pub fn for_turn(x_is_next: bool) -> Self {
        if x_is_next {
            Mark::X
        } else {
            Mark::O
        }
    }

    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }
}
