//! Editor key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::{EditorField, EditorFormState};

/// Outcome of a key press on the editor form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    None,
    /// Submit was requested; the reducer applies the validity and busy gates.
    Submit,
    /// Leave edit mode, discarding uncommitted changes.
    CancelEdit,
    /// Hand focus back to the article list.
    FocusList,
}

pub fn handle_key(form: &mut EditorFormState, key: KeyEvent) -> EditorAction {
    if key.kind != KeyEventKind::Press {
        return EditorAction::None;
    }

    match key.code {
        KeyCode::Enter => EditorAction::Submit,
        KeyCode::Esc => {
            if form.editing.is_some() {
                EditorAction::CancelEdit
            } else {
                EditorAction::FocusList
            }
        }
        KeyCode::Tab | KeyCode::BackTab => {
            form.cycle_focus();
            EditorAction::None
        }
        KeyCode::Left | KeyCode::Right if form.focus == EditorField::Topic => {
            form.cycle_topic(key.code == KeyCode::Right);
            EditorAction::None
        }
        _ if form.focus != EditorField::Topic => {
            form.focused_text_mut().handle_key(key);
            EditorAction::None
        }
        _ => EditorAction::None,
    }
}

impl EditorFormState {
    fn focused_text_mut(&mut self) -> &mut crate::common::TextField {
        match self.focus {
            EditorField::Text => &mut self.text,
            _ => &mut self.title,
        }
    }
}
