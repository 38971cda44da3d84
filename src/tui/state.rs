//! TUI state algebra: pure types, zero effects.
//!
//! These types define the entire TUI state space. The transition function
//! (`update`) and the rendering layer (`view`) both program against them.
//!
//! Design principle: Screen variants carry only per-screen transient state
//! (focus, the text being typed). The calculator inputs and their estimate
//! live in [`App::calc`], which is the single owner of input state.

use crate::inputs::InputState;
use crate::types::{Field, Inputs, ThemeName};

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// Current screen — carries per-screen focus/editing state.
    pub screen: Screen,

    /// Inputs and the estimate derived from them.
    pub calc: InputState,

    /// Visual theme. Behaviour is identical across themes.
    pub theme: ThemeName,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

// ============================================================================
// SCREENS
// ============================================================================

/// The current TUI screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// The calculator form with one focused control.
    Form { focus: Field },

    /// Free-text entry into a numeric field. Committed through
    /// [`InputState::set_from_text`]; never rejected.
    Editing { field: Field, buffer: String },

    /// Call-to-action notice. Inert: no request is made.
    Contact { focus: Field },
}

/// Default screen is the form focused on its first control.
impl Default for Screen {
    fn default() -> Self {
        Screen::form()
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Focus the previous visible control.
    FocusPrev,
    /// Focus the next visible control.
    FocusNext,
    /// Step the focused slider/stepper down.
    Decrease,
    /// Step the focused slider/stepper up.
    Increase,
    /// Flip the data-tool switch.
    Toggle,
    /// Start editing / commit an edit / dismiss a notice.
    Enter,
    /// Typed character while editing.
    Char(char),
    /// Delete last typed character.
    Backspace,
    /// Cancel an edit / dismiss a notice.
    Back,
    /// Press the call-to-action button.
    Contact,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// Follows the Elm/TEA pattern: pure code describes WHAT should happen,
/// the effects boundary applies it to [`App::calc`].
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Render this screen (may be the same or a different screen).
    Screen(Screen),
    /// Apply an input change, then render `screen`.
    Apply { change: InputChange, screen: Screen },
    /// Quit the application.
    Quit,
}

/// A requested mutation of the calculator inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputChange {
    /// Move a numeric field by this many steps.
    Step { field: Field, steps: i64 },
    /// Commit free text to a numeric field.
    Text { field: Field, text: String },
    /// Flip the data-tool switch.
    ToggleDataTool,
}

impl InputChange {
    /// Apply this change to the state holder, which recomputes.
    pub fn apply(self, calc: &mut InputState) {
        match self {
            InputChange::Step { field, steps } => calc.step(field, steps),
            InputChange::Text { field, text } => calc.set_from_text(field, &text),
            InputChange::ToggleDataTool => calc.toggle_data_tool(),
        }
    }
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// Create an App on the form with the given starting inputs.
    pub fn new(inputs: Inputs, theme: ThemeName) -> Self {
        App {
            screen: Screen::form(),
            calc: InputState::new(inputs),
            theme,
            should_quit: false,
        }
    }

    /// Route a transition into the model.
    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Screen(screen) => self.screen = screen,
            Transition::Apply { change, screen } => {
                change.apply(&mut self.calc);
                self.screen = screen;
            }
            Transition::Quit => self.should_quit = true,
        }
    }
}

impl Screen {
    /// The form focused on the first control.
    pub fn form() -> Self {
        Screen::Form {
            focus: Field::ALL[0],
        }
    }

    /// An edit of `field` starting from its current value.
    pub fn editing(field: Field, current: u32) -> Self {
        Screen::Editing {
            field,
            buffer: current.to_string(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
