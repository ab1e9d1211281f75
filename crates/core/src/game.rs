//! The Tetros engine: active piece state, movement, gravity, and row
//! collapse.
//!
//! The engine is tick-driven. It owns the falling piece and the piece
//! selector, borrows the host grid for the duration of each operation,
//! and reports through return values plus the [`Prompt`] channel. All
//! operations run to completion; there is no partially committed state
//! between two external calls.

use tetros_types::{CellLocation, CellValue};

use crate::catalog;
use crate::geometry;
use crate::grid::CellGrid;
use crate::selector::PieceSelector;
use crate::PieceCells;

/// Message channel back to the host UI.
///
/// Receives exactly one message per lost game, with the literal text
/// `"Game Over!"`.
pub trait Prompt {
    fn message(&mut self, text: &str);
}

/// Engine lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// No game has been started yet.
    Idle,
    /// A piece is in play and ticks advance it.
    Running,
    /// The last game ended on a spawn collision. The grid and the piece
    /// state have already been cleared; `start` is accepted again.
    GameOver,
}

/// The falling-piece engine.
#[derive(Debug)]
pub struct Tetros<S> {
    phase: GamePhase,
    /// Type tag of the piece in flight, written into every cell it
    /// occupies.
    falling_type: u8,
    /// Absolute locations of the piece in flight, all rendered on the
    /// grid while the game runs.
    contents: PieceCells,
    selector: S,
}

impl<S: PieceSelector> Tetros<S> {
    /// Create an idle engine around a piece selector.
    pub fn new(selector: S) -> Self {
        Self {
            phase: GamePhase::Idle,
            falling_type: 0,
            contents: PieceCells::new(),
            selector,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Absolute locations of the falling piece.
    pub fn contents(&self) -> &[CellLocation] {
        &self.contents
    }

    /// Type tag of the falling piece, 0 while no piece is in flight.
    pub fn falling_type(&self) -> u8 {
        self.falling_type
    }

    /// Start a game: enter `Running` and spawn the first piece.
    ///
    /// A spawn collision ends the game immediately, before a single
    /// playable frame. Starting while already running is a no-op.
    pub fn start<G: CellGrid>(&mut self, grid: &mut G, prompt: &mut dyn Prompt) {
        if self.phase == GamePhase::Running {
            return;
        }
        self.phase = GamePhase::Running;
        if self.spawn(grid) {
            self.lose(grid, prompt);
        }
    }

    /// Advance the game by one external tick.
    ///
    /// Drops the piece one row; a landed piece triggers the next spawn,
    /// and a colliding spawn ends the game. Every tick finishes with one
    /// row-collapse pass. Returns whether an action occurred: ticks
    /// outside `Running` are no-ops reporting `false`.
    pub fn on_tick<G: CellGrid>(&mut self, grid: &mut G, prompt: &mut dyn Prompt) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        if self.advance(grid) {
            if self.spawn(grid) {
                self.lose(grid, prompt);
            }
        }
        self.collapse_rows(grid);
        true
    }

    /// Shift the piece horizontally by `dx` columns.
    ///
    /// `-1` is west, `+1` east. The value `2` is the hard-drop sentinel
    /// and performs a full drop instead of a shift. A shift that would
    /// leave the grid is rejected silently. Ignored unless running.
    pub fn move_piece<G: CellGrid>(&mut self, grid: &mut G, dx: i32) {
        if self.phase != GamePhase::Running {
            return;
        }
        if dx == 2 {
            self.full_drop(grid);
            return;
        }
        let candidate = geometry::translated(&self.contents, 0, dx);
        if !in_bounds(grid, &candidate) {
            return;
        }
        self.unrender(grid);
        self.render(grid, &candidate);
        self.contents = candidate;
    }

    /// Turn the piece about its truncated centroid.
    ///
    /// `direction` is `+1` or `-1`. A turn that would leave the grid is
    /// rejected silently. Ignored unless running.
    pub fn rotate<G: CellGrid>(&mut self, grid: &mut G, direction: i32) {
        if self.phase != GamePhase::Running {
            return;
        }
        let candidate = geometry::rotated(&self.contents, direction);
        if !in_bounds(grid, &candidate) {
            return;
        }
        self.unrender(grid);
        self.render(grid, &candidate);
        self.contents = candidate;
    }

    /// Drop the piece until it lands. Ignored unless running.
    ///
    /// The landed piece stays in flight; the next tick spawns its
    /// successor.
    pub fn hard_drop<G: CellGrid>(&mut self, grid: &mut G) {
        if self.phase != GamePhase::Running {
            return;
        }
        self.full_drop(grid);
    }

    /// One gravity step. Returns true when the piece landed, false when
    /// it advanced a row.
    fn advance<G: CellGrid>(&mut self, grid: &mut G) -> bool {
        let candidate = geometry::translated(&self.contents, 1, 0);
        // The piece comes off the grid first so it cannot block its own
        // descent.
        self.unrender(grid);
        if candidate.iter().any(|&cell| is_stopper(grid, cell)) {
            self.render(grid, &self.contents);
            return true;
        }
        self.render(grid, &candidate);
        self.contents = candidate;
        false
    }

    fn full_drop<G: CellGrid>(&mut self, grid: &mut G) {
        while !self.advance(grid) {}
    }

    /// Spawn the next piece at the catalog offsets.
    ///
    /// Returns true when any spawn cell is already occupied, which is
    /// the lose condition; the colliding piece is not rendered.
    fn spawn<G: CellGrid>(&mut self, grid: &mut G) -> bool {
        self.contents.clear();
        let piece = catalog::create_piece(self.selector.pick());
        piece.append_to(&mut self.contents);
        self.falling_type = piece.tag();

        if self
            .contents
            .iter()
            .any(|&cell| !grid.value_at(cell).is_empty())
        {
            return true;
        }
        self.render(grid, &self.contents);
        false
    }

    /// Report the loss, then clear the grid and all piece state.
    fn lose<G: CellGrid>(&mut self, grid: &mut G, prompt: &mut dyn Prompt) {
        prompt.message("Game Over!");
        for row in 0..grid.rows() {
            for column in 0..grid.columns() {
                grid.update(CellLocation::new(row, column), CellValue::Empty);
            }
        }
        self.contents.clear();
        self.falling_type = 0;
        self.phase = GamePhase::GameOver;
    }

    /// Clear the piece's current cells from the grid.
    fn unrender<G: CellGrid>(&self, grid: &mut G) {
        for &cell in &self.contents {
            grid.update(cell, CellValue::Empty);
        }
    }

    /// Paint the falling type into every cell of `cells`.
    fn render<G: CellGrid>(&self, grid: &mut G, cells: &[CellLocation]) {
        for &cell in cells {
            grid.update(cell, CellValue::Filled(self.falling_type));
        }
    }

    /// Collapse full rows, scanning from the bottom of the grid upward.
    ///
    /// On a full row, every row above it is copied down one step, except
    /// that a destination cell is skipped when its source cell (one row
    /// up) belongs to the falling piece: in-flight cells count as
    /// occupancy for the fullness check but are never shiftable source
    /// material. Row 0 is never rewritten. A collapsed row is examined
    /// again before the scan moves up, so stacked full rows cascade one
    /// at a time.
    fn collapse_rows<G: CellGrid>(&self, grid: &mut G) {
        let mut row = grid.rows() - 1;
        while row >= 0 {
            let full = (0..grid.columns())
                .all(|column| !grid.value_at(CellLocation::new(row, column)).is_empty());
            if !full {
                row -= 1;
                continue;
            }
            for row_x in (1..=row).rev() {
                for column in 0..grid.columns() {
                    let source = CellLocation::new(row_x - 1, column);
                    if self.contents.contains(&source) {
                        continue;
                    }
                    let value = grid.value_at(source);
                    grid.update(CellLocation::new(row_x, column), value);
                }
            }
        }
    }
}

/// Whether every candidate cell lies inside the grid.
///
/// Shifts and turns use strict containment so a candidate that merely
/// touches settled cells is still accepted; only leaving the grid
/// rejects it.
fn in_bounds<G: CellGrid>(grid: &G, cells: &[CellLocation]) -> bool {
    cells.iter().all(|&cell| grid.contains(cell))
}

/// Whether `location` blocks downward movement: past the south or east
/// extents, or already holding a value.
fn is_stopper<G: CellGrid>(grid: &G, location: CellLocation) -> bool {
    if location.row >= grid.rows() || location.column >= grid.columns() {
        return true;
    }
    !grid.value_at(location).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::MemoryGrid;

    #[test]
    fn test_is_stopper_past_extents() {
        let grid = MemoryGrid::new(4, 4);
        assert!(is_stopper(&grid, CellLocation::new(4, 0)));
        assert!(is_stopper(&grid, CellLocation::new(0, 4)));
        assert!(!is_stopper(&grid, CellLocation::new(3, 3)));
    }

    #[test]
    fn test_is_stopper_on_occupied_cell() {
        let mut grid = MemoryGrid::new(4, 4);
        let location = CellLocation::new(2, 2);
        assert!(!is_stopper(&grid, location));
        grid.update(location, CellValue::Filled(1));
        assert!(is_stopper(&grid, location));
    }

    #[test]
    fn test_in_bounds_requires_every_cell() {
        let grid = MemoryGrid::new(4, 4);
        let inside = [CellLocation::new(0, 0), CellLocation::new(3, 3)];
        let outside = [CellLocation::new(0, 0), CellLocation::new(0, -1)];
        assert!(in_bounds(&grid, &inside));
        assert!(!in_bounds(&grid, &outside));
    }
}
