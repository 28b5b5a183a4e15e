//! Errors for history navigation
//!
//! Moving on the board never fails: an invalid activation is simply ignored.
//! The only recoverable failures are the step helpers running off either end
//! of the history.

use thiserror::Error;

/// Why a step through history could not be taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// Already viewing the initial empty grid
    #[error("already at the start of the game")]
    AtStart,

    /// Already viewing the latest move
    #[error("already at the latest move")]
    AtEnd,
}
