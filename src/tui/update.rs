//! Pure state transitions: (Screen, Action, &Inputs) → Transition.
//!
//! This is the core logic of the TUI. Fully testable without a terminal.
//! Each screen defines which actions it accepts. Unhandled actions
//! return the current screen unchanged (no-op).

use crate::types::{Field, Inputs};

use super::state::{Action, InputChange, Screen, Transition};

/// Longest text accepted in a numeric edit buffer.
const MAX_EDIT_LEN: usize = 9;

/// Pure state transition function.
///
/// `inputs` is read-only: it decides which controls are visible and what
/// an edit starts from. Mutations are returned as [`Transition::Apply`].
pub fn update(screen: Screen, action: &Action, inputs: &Inputs) -> Transition {
    match screen {
        Screen::Form { focus } => update_form(focus, action, inputs),
        Screen::Editing { field, buffer } => update_editing(field, buffer, action),
        Screen::Contact { focus } => update_contact(focus, action),
    }
}

// ============================================================================
// PER-SCREEN HANDLERS
// ============================================================================

/// Form: focus movement, slider steps, toggle, edit, CTA.
fn update_form(focus: Field, action: &Action, inputs: &Inputs) -> Transition {
    let stay = || Transition::Screen(Screen::Form { focus });

    match action {
        Action::FocusPrev => Transition::Screen(Screen::Form {
            focus: neighbour(focus, inputs, -1),
        }),
        Action::FocusNext => Transition::Screen(Screen::Form {
            focus: neighbour(focus, inputs, 1),
        }),
        Action::Decrease | Action::Increase if focus.is_numeric() => {
            let steps = if *action == Action::Increase { 1 } else { -1 };
            Transition::Apply {
                change: InputChange::Step { field: focus, steps },
                screen: Screen::Form { focus },
            }
        }
        // Left/right/space/enter on the switch all flip it
        Action::Decrease | Action::Increase | Action::Enter
            if focus == Field::UsingDataTool =>
        {
            toggle(focus, inputs)
        }
        Action::Toggle => toggle(focus, inputs),
        Action::Enter => match focus.value(inputs) {
            Some(current) => Transition::Screen(Screen::editing(focus, current)),
            None => stay(),
        },
        Action::Contact => Transition::Screen(Screen::Contact { focus }),
        Action::Quit => Transition::Quit,
        _ => stay(),
    }
}

/// Editing: type digits, commit on Enter, discard on Back.
fn update_editing(field: Field, mut buffer: String, action: &Action) -> Transition {
    match action {
        Action::Char(c) if is_edit_char(*c, &buffer) => {
            if buffer.len() < MAX_EDIT_LEN {
                buffer.push(*c);
            }
            Transition::Screen(Screen::Editing { field, buffer })
        }
        Action::Backspace => {
            buffer.pop();
            Transition::Screen(Screen::Editing { field, buffer })
        }
        Action::Enter => Transition::Apply {
            change: InputChange::Text { field, text: buffer },
            screen: Screen::Form { focus: field },
        },
        Action::Back => Transition::Screen(Screen::Form { focus: field }),
        // Only Ctrl-C maps to Quit while editing
        Action::Quit => Transition::Quit,
        _ => Transition::Screen(Screen::Editing { field, buffer }),
    }
}

/// Contact notice: any dismissal returns to the form.
fn update_contact(focus: Field, action: &Action) -> Transition {
    match action {
        Action::Enter | Action::Back | Action::Contact => {
            Transition::Screen(Screen::Form { focus })
        }
        Action::Quit => Transition::Quit,
        _ => Transition::Screen(Screen::Contact { focus }),
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Flip the switch. If the tool-cost control is focused it is about to be
/// hidden, so focus falls back to the switch.
fn toggle(focus: Field, inputs: &Inputs) -> Transition {
    let focus = if focus == Field::MonthlyToolCost && inputs.using_data_tool {
        Field::UsingDataTool
    } else {
        focus
    };
    Transition::Apply {
        change: InputChange::ToggleDataTool,
        screen: Screen::Form { focus },
    }
}

/// Next visible control in `direction`, wrapping around.
fn neighbour(focus: Field, inputs: &Inputs, direction: isize) -> Field {
    let visible: Vec<Field> = Field::ALL
        .iter()
        .copied()
        .filter(|f| f.is_visible(inputs))
        .collect();

    let Some(pos) = visible.iter().position(|&f| f == focus) else {
        return visible.first().copied().unwrap_or(focus);
    };

    let len = visible.len() as isize;
    let next = (pos as isize + direction).rem_euclid(len) as usize;
    visible[next]
}

/// Digits anywhere, a sign only as the first character.
fn is_edit_char(c: char, buffer: &str) -> bool {
    c.is_ascii_digit() || (c == '-' && buffer.is_empty())
}

// ============================================================================
// TESTS
// ============================================================================
