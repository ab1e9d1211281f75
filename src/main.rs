//! Terminal Tetros runner (default binary).
//!
//! Owns the grid, the engine, and the gravity timer. The engine only
//! ever sees discrete tick events and key commands; wall-clock timing
//! stays out here.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tetros::core::{GamePhase, MemoryGrid, Prompt, RandomSelector, Tetros};
use tetros::input::{handle_key_event, should_quit};
use tetros::term::TerminalRenderer;
use tetros::types::{GameCommand, DEFAULT_COLUMNS, DEFAULT_ROWS, TICK_MS};

/// Keeps the engine's last message for the status line.
#[derive(Default)]
struct StatusLine {
    message: Option<String>,
}

impl Prompt for StatusLine {
    fn message(&mut self, text: &str) {
        self.message = Some(text.to_string());
    }
}

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut grid = MemoryGrid::new(DEFAULT_ROWS, DEFAULT_COLUMNS);
    let mut game = Tetros::new(RandomSelector::new(std::process::id()));
    let mut status = StatusLine::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS);

    loop {
        term.draw(&grid, status_text(&game, &status))?;

        // Input with timeout until the next gravity step.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        apply(&mut game, &mut grid, &mut status, command);
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.on_tick(&mut grid, &mut status);
        }
    }
}

fn apply(
    game: &mut Tetros<RandomSelector>,
    grid: &mut MemoryGrid,
    status: &mut StatusLine,
    command: GameCommand,
) {
    match command {
        GameCommand::Start => {
            status.message = None;
            game.start(grid, status);
        }
        GameCommand::MoveLeft => game.move_piece(grid, -1),
        GameCommand::MoveRight => game.move_piece(grid, 1),
        GameCommand::RotateLeft => game.rotate(grid, -1),
        GameCommand::RotateRight => game.rotate(grid, 1),
        GameCommand::HardDrop => game.hard_drop(grid),
    }
}

fn status_text<'a>(game: &Tetros<RandomSelector>, status: &'a StatusLine) -> &'a str {
    if let Some(message) = &status.message {
        return message;
    }
    match game.phase() {
        GamePhase::Running => "a/d move  q/e rotate  s drop  esc quit",
        GamePhase::Idle | GamePhase::GameOver => "enter to start  esc to quit",
    }
}
