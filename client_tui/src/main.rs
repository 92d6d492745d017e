//! Terminal client for Jousty.
//!
//! Owns everything the simulation treats as external: the "window" (a raw
//! mode terminal), the 50 Hz tick timer, keyboard plumbing, the settings
//! toggles, and message rendering. The simulation itself lives in
//! `game_core` and is driven one tick at a time.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use game_core::{Config, Dir, InputEvent, Match, Params, Side};

mod render;

use render::Screen;

/// The rate every tick-denominated constant in `game_core::Params`
/// assumes.
const TICK: Duration = Duration::from_millis(1000 / Params::TICK_HZ as u64);

/// What a key press means to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UiAction {
    Game(InputEvent),
    ToggleLava,
    ToggleBackground,
    TogglePlatforms,
}

fn main() -> Result<()> {
    let mut screen = Screen::new()?;
    let result = run(&mut screen);

    // Always try to restore the terminal state.
    let _ = screen.restore();
    result
}

fn run(screen: &mut Screen) -> Result<()> {
    let mut game = Match::new(Config::new());
    let mut last_tick = Instant::now();

    loop {
        screen.draw(&game.snapshot())?;

        // Input with timeout until the next tick.
        let timeout = TICK
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = map_key(key.code) {
                        apply(action, &mut game);
                    }
                }
            }
        }

        if last_tick.elapsed() >= TICK {
            last_tick = Instant::now();
            game.tick();
        }
    }
}

/// A/S fly the left bird, K/L the right one, Enter starts and pauses.
/// 1/2/3 stand in for the settings checkboxes.
fn map_key(code: KeyCode) -> Option<UiAction> {
    let event = match code {
        KeyCode::Char('a') | KeyCode::Char('A') => InputEvent::Move {
            side: Side::Left,
            dir: Dir::Left,
        },
        KeyCode::Char('s') | KeyCode::Char('S') => InputEvent::Move {
            side: Side::Left,
            dir: Dir::Right,
        },
        KeyCode::Char('k') | KeyCode::Char('K') => InputEvent::Move {
            side: Side::Right,
            dir: Dir::Left,
        },
        KeyCode::Char('l') | KeyCode::Char('L') => InputEvent::Move {
            side: Side::Right,
            dir: Dir::Right,
        },
        KeyCode::Enter => InputEvent::TogglePause,
        KeyCode::Char('1') => return Some(UiAction::ToggleLava),
        KeyCode::Char('2') => return Some(UiAction::ToggleBackground),
        KeyCode::Char('3') => return Some(UiAction::TogglePlatforms),
        _ => return None,
    };
    Some(UiAction::Game(event))
}

/// Option toggles flip config directly (read by the sim at the top of the
/// next tick); game events go through the input queue.
fn apply(action: UiAction, game: &mut Match) {
    match action {
        UiAction::Game(event) => game.push_input(event),
        UiAction::ToggleLava => game.config.lava_enabled = !game.config.lava_enabled,
        UiAction::ToggleBackground => {
            game.config.background_enabled = !game.config.background_enabled
        }
        UiAction::TogglePlatforms => {
            game.config.moving_platforms_enabled = !game.config.moving_platforms_enabled
        }
    }
}

fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
