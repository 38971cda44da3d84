//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal — all intelligence lives in the pure layers.
//!
//! Single-threaded: each key is read, mapped, applied (which recomputes
//! the estimate synchronously) and the frame is redrawn before the next
//! key is read.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{debug, info};

use crate::error::Result;
use crate::types::{Inputs, ThemeName};

use super::state::{Action, App, Screen};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// While `editing`, printable keys become [`Action::Char`] so that
/// letters like `q` are typed rather than interpreted.
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent, editing: bool) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if editing {
        return match key.code {
            KeyCode::Char(c) => Some(Action::Char(c)),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Enter => Some(Action::Enter),
            KeyCode::Esc => Some(Action::Back),
            _ => None,
        };
    }

    match key.code {
        // Focus
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => Some(Action::FocusPrev),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => Some(Action::FocusNext),

        // Values
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => Some(Action::Decrease),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') | KeyCode::Char('=') => {
            Some(Action::Increase)
        }
        KeyCode::Char(' ') | KeyCode::Char('t') => Some(Action::Toggle),
        KeyCode::Enter | KeyCode::Char('e') => Some(Action::Enter),
        KeyCode::Esc => Some(Action::Back),

        // Actions
        KeyCode::Char('c') => Some(Action::Contact),
        KeyCode::Char('q') => Some(Action::Quit),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the interactive calculator until the user quits.
pub fn run(inputs: Inputs, theme: ThemeName) -> Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    info!(%theme, "calculator started");

    let result = event_loop(&mut terminal, App::new(inputs, theme));

    restore_terminal()?;
    info!("calculator closed");
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(&app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        let key = match event::read()? {
            // Windows reports releases too
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            _ => continue, // ignore mouse, resize, etc.
        };

        let editing = matches!(app.screen, Screen::Editing { .. });
        let Some(action) = map_key(key, editing) else {
            continue;
        };

        let screen = std::mem::take(&mut app.screen);
        let transition = update(screen, &action, app.calc.inputs());
        debug!(?action, ?transition, "transition");
        app.apply(transition);
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ctrl_c_maps_to_quit() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c, false), Some(Action::Quit));
        assert_eq!(map_key(ctrl_c, true), Some(Action::Quit));
    }

    #[test]
    fn vim_keys_map_to_focus_and_values() {
        assert_eq!(map_key(key(KeyCode::Char('j')), false), Some(Action::FocusNext));
        assert_eq!(map_key(key(KeyCode::Char('k')), false), Some(Action::FocusPrev));
        assert_eq!(map_key(key(KeyCode::Char('h')), false), Some(Action::Decrease));
        assert_eq!(map_key(key(KeyCode::Char('l')), false), Some(Action::Increase));
    }

    #[test]
    fn arrow_keys_map_to_focus_and_values() {
        assert_eq!(map_key(key(KeyCode::Up), false), Some(Action::FocusPrev));
        assert_eq!(map_key(key(KeyCode::Down), false), Some(Action::FocusNext));
        assert_eq!(map_key(key(KeyCode::Left), false), Some(Action::Decrease));
        assert_eq!(map_key(key(KeyCode::Right), false), Some(Action::Increase));
    }

    #[test]
    fn space_toggles() {
        assert_eq!(map_key(key(KeyCode::Char(' ')), false), Some(Action::Toggle));
    }

    #[test]
    fn c_presses_contact_button() {
        assert_eq!(map_key(key(KeyCode::Char('c')), false), Some(Action::Contact));
    }

    #[test]
    fn editing_turns_letters_into_chars() {
        assert_eq!(map_key(key(KeyCode::Char('q')), true), Some(Action::Char('q')));
        assert_eq!(map_key(key(KeyCode::Char('7')), true), Some(Action::Char('7')));
        assert_eq!(map_key(key(KeyCode::Backspace), true), Some(Action::Backspace));
        assert_eq!(map_key(key(KeyCode::Esc), true), Some(Action::Back));
        assert_eq!(map_key(key(KeyCode::Up), true), None);
    }

    #[test]
    fn unmapped_key_returns_none() {
        assert_eq!(map_key(key(KeyCode::Char('z')), false), None);
    }

    #[test]
    fn key_sequence_drives_calculator() {
        let mut app = App::new(Inputs::default(), ThemeName::Forest);
        let keys = [
            KeyCode::Down,      // hours per week
            KeyCode::Enter,     // start editing "10"
            KeyCode::Backspace,
            KeyCode::Backspace,
            KeyCode::Char('2'),
            KeyCode::Char('0'),
            KeyCode::Enter,     // commit 20
            KeyCode::Down,      // hourly cost
            KeyCode::Right,     // 55
            KeyCode::Down,      // data tool switch
            KeyCode::Char(' '), // on
        ];
        for code in keys {
            let editing = matches!(app.screen, Screen::Editing { .. });
            let action = map_key(key(code), editing).expect("mapped key");
            let screen = std::mem::take(&mut app.screen);
            let transition = update(screen, &action, app.calc.inputs());
            app.apply(transition);
        }

        let inputs = app.calc.inputs();
        assert_eq!(inputs.hours_per_week, 20);
        assert_eq!(inputs.hourly_cost, 55);
        assert!(inputs.using_data_tool);
        // 20 * 55 * 52 + 500 * 12
        assert_eq!(app.calc.estimate().total_annual_cost, 63_200);
        assert_eq!(app.calc.estimate().roi, 700);
    }
}
