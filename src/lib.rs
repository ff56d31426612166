//! Console tic-tac-toe against a heuristic computer opponent.
//!
//! The game rules live in [`ttt_core`]; this crate supplies the
//! peripheral pieces around them.
//!
//! # Architecture
//!
//! - **CLI**: [`Cli`] flags resolved into [`Settings`]
//! - **Session**: [`session::play`] drives rounds and matches through the
//!   [`MoveInput`] and [`Renderer`] collaborator traits
//! - **Console**: [`ConsoleIo`] implements both traits on a line-based stream

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod console;
pub mod session;
mod settings;

pub use cli::Cli;
pub use console::{ConsoleIo, join_or, render_board};
pub use session::{MoveInput, Renderer, SessionSummary};
pub use settings::Settings;
