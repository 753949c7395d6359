//! Login form key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::LoginFormState;

/// Outcome of a key press on the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAction {
    None,
    /// Submit was requested. The reducer still applies the validity and
    /// busy gates before emitting a network effect.
    Submit,
}

pub fn handle_key(form: &mut LoginFormState, key: KeyEvent) -> LoginAction {
    if key.kind != KeyEventKind::Press {
        return LoginAction::None;
    }

    match key.code {
        KeyCode::Enter => LoginAction::Submit,
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            form.toggle_focus();
            LoginAction::None
        }
        _ => {
            form.focused_field_mut().handle_key(key);
            LoginAction::None
        }
    }
}
