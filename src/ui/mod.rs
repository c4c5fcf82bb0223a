//! Transcript browser built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, pane focus,
//!   line-by-line transcript reveal
//! - **[`panes`]** — stateless render functions for the catalog pane, the
//!   transcript pane, and the status bar
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The browser never blocks on stdin: demonstrations are replayed against
//! their sample input and the recorded transcript is what gets displayed.
//!
//! The entry point for consumers is [`App`]: construct it with [`App::new`]
//! and call [`App::run`] to start the event loop.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
