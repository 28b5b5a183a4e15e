//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`board`]: status line and the 3×3 grid of cells
//! - [`cell`]: a single clickable cell
//! - [`history`]: the list of history-jump entries
//! - [`status`]: status bar with keybindings and position badges
//!
//! # Architecture
//!
//! Render functions are called with state borrowed from the app. Panes that
//! accept clicks return the areas they drew ([`CellButton`], [`HistoryEntry`])
//! so the app can hit-test mouse events against the last frame.

pub mod board;
pub mod cell;
pub mod history;
pub mod status;

// Re-export render functions for convenience
pub use board::render_board_pane;
pub use cell::CellButton;
pub use history::{render_history_pane, HistoryEntry};
pub use status::render_status_bar;
