//! End-to-end: a whole game on a 4x4 grid with a scripted selector.
//!
//! Squares only: spawn, descend to the floor, respawn, stack, and lose
//! when the third spawn collides with the stack.

use tetros::core::{CellGrid, GamePhase, MemoryGrid, Prompt, SequenceSelector, Tetros};
use tetros::types::{CellLocation, CellValue};

#[derive(Default)]
struct RecordingPrompt {
    messages: Vec<String>,
}

impl Prompt for RecordingPrompt {
    fn message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }
}

fn loc(row: i32, column: i32) -> CellLocation {
    CellLocation::new(row, column)
}

#[test]
fn test_full_game_on_small_grid() {
    let mut grid = MemoryGrid::new(4, 4);
    let mut game = Tetros::new(SequenceSelector::new([4]));
    let mut prompt = RecordingPrompt::default();

    // The first spawn renders exactly four cells with the square's tag.
    game.start(&mut grid, &mut prompt);
    assert_eq!(game.phase(), GamePhase::Running);
    assert_eq!(game.falling_type(), 3);
    assert_eq!(grid.occupied_count(), 4);
    for &cell in game.contents() {
        assert_eq!(grid.value_at(cell), CellValue::Filled(3));
    }

    // Three ticks: two advances, then a floor landing and a respawn.
    for _ in 0..3 {
        assert!(game.on_tick(&mut grid, &mut prompt));
    }
    for location in [loc(2, 0), loc(2, 1), loc(3, 0), loc(3, 1)] {
        assert_eq!(grid.value_at(location), CellValue::Filled(3));
    }
    assert_eq!(
        game.contents(),
        &[loc(0, 0), loc(0, 1), loc(1, 0), loc(1, 1)]
    );
    assert!(prompt.messages.is_empty());

    // Keep ticking until the stack reaches the spawn cells; at most ten
    // ticks end the game.
    let mut ticks = 0;
    while game.phase() == GamePhase::Running && ticks < 10 {
        game.on_tick(&mut grid, &mut prompt);
        ticks += 1;
    }

    assert_eq!(game.phase(), GamePhase::GameOver);
    assert_eq!(prompt.messages, vec!["Game Over!"]);
    assert!(grid.is_blank());
    assert!(game.contents().is_empty());

    // Ticks after the loss report that nothing happened.
    assert!(!game.on_tick(&mut grid, &mut prompt));
    assert_eq!(prompt.messages.len(), 1);
}
