//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, event loop, keyboard and mouse handling, replay
//! - **[`panes`]** — render functions for each visible pane (board, history list,
//!   status bar); they return the clickable areas they drew
//! - **[`theme`]** — centralized color palette used by all panes
//! - **[`terminal`]** — raw mode, alternate screen and the panic hook that undoes them
//!
//! The entry point for consumers is [`App`]: construct it with a [`Config`] and
//! call [`App::run`] to start the event loop.
//!
//! [`Config`]: crate::config::Config
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod terminal;
pub mod theme;

pub use app::App;
