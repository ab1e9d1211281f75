//! Terminal presentation for a cell grid.
//!
//! Paints any [`CellGrid`](tetros_core::CellGrid) to a raw-mode terminal
//! with a bordered playfield and a status line.

mod renderer;

pub use renderer::{encode_frame, TerminalRenderer};
