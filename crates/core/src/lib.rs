//! Core game logic: pure, deterministic, and host-agnostic.
//!
//! Everything the Tetros mini-game needs to run lives here, with zero
//! dependencies on terminals, timers, or I/O:
//!
//! - [`catalog`]: the seven piece shapes as fixed offset tables with
//!   type tags, selected by index
//! - [`geometry`]: pure translation and centroid rotation over cell sets
//! - [`grid`]: the [`CellGrid`] capability the engine borrows per
//!   operation, plus the in-memory [`MemoryGrid`]
//! - [`selector`]: the [`PieceSelector`] capability with seeded and
//!   scripted implementations
//! - [`game`]: the [`Tetros`] engine: gravity, movement, rotation, row
//!   collapse, game-over detection
//!
//! # Example
//!
//! ```
//! use tetros_core::{GamePhase, MemoryGrid, Prompt, SequenceSelector, Tetros};
//!
//! struct Silent;
//! impl Prompt for Silent {
//!     fn message(&mut self, _text: &str) {}
//! }
//!
//! let mut grid = MemoryGrid::new(20, 10);
//! let mut game = Tetros::new(SequenceSelector::new([0, 1, 2]));
//! game.start(&mut grid, &mut Silent);
//! assert_eq!(game.phase(), GamePhase::Running);
//!
//! // Gravity is driven by the host delivering discrete ticks.
//! assert!(game.on_tick(&mut grid, &mut Silent));
//! ```

pub mod catalog;
pub mod game;
pub mod geometry;
pub mod grid;
pub mod selector;

use arrayvec::ArrayVec;
use tetros_types::CellLocation;

pub use tetros_types as types;

/// Fixed-capacity cell set for one piece (always four entries).
pub type PieceCells = ArrayVec<CellLocation, 4>;

// Re-export commonly used items for convenience.
pub use catalog::{create_piece, PieceTemplate, PIECE_COUNT};
pub use game::{GamePhase, Prompt, Tetros};
pub use grid::{CellGrid, MemoryGrid};
pub use selector::{PieceSelector, RandomSelector, SequenceSelector, SimpleRng};
