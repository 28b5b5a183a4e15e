//! # Introduction
//!
//! tictactoe-tty is a two-player tic-tac-toe game for the terminal that keeps
//! every board position. Any earlier position can be revisited, and playing a
//! move from it starts a new timeline. The UI is built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Data flow
//!
//! ```text
//! key / click → App → Board::activate_cell → Game::play → History
//!                 ▲                                           │
//!                 └──────────────── render ◀──────────────────┘
//! ```
//!
//! 1. [`game`] — marks, grids, win evaluation, the [`game::Board`] view and the
//!    [`game::Game`] controller that owns all state.
//! 2. [`snapshot`] — the append-or-branch [`snapshot::History`] of grids.
//! 3. [`config`] — command-line options and glyph settings.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.

pub mod config;
pub mod errors;
pub mod game;
pub mod snapshot;
pub mod ui;
