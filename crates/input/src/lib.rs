//! Keyboard input for the terminal runner.
//!
//! Translates crossterm key events into [`GameCommand`]s; the runner
//! forwards them to the engine.
//!
//! [`GameCommand`]: tetros_types::GameCommand

mod map;

pub use map::{handle_key_event, should_quit};
pub use tetros_types as types;
