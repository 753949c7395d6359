//! Article list key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::ArticlesState;

/// Outcome of a key press on the article list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticlesAction {
    None,
    /// Re-fetch the collection from the server.
    Refresh,
    /// Load the selected article into the editor.
    Edit,
    /// Delete the selected article.
    Delete,
    /// Clear the editor and start a new article.
    New,
    /// Hand focus to the editor pane.
    FocusEditor,
    /// End the session.
    Logout,
    /// Quit the application.
    Quit,
}

pub fn handle_key(list: &mut ArticlesState, key: KeyEvent) -> ArticlesAction {
    if key.kind != KeyEventKind::Press {
        return ArticlesAction::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('l') => ArticlesAction::Logout,
            _ => ArticlesAction::None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            list.select_previous();
            ArticlesAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            list.select_next();
            ArticlesAction::None
        }
        KeyCode::Enter | KeyCode::Char('e') => ArticlesAction::Edit,
        KeyCode::Char('d') => ArticlesAction::Delete,
        KeyCode::Char('r') => ArticlesAction::Refresh,
        KeyCode::Char('n') => ArticlesAction::New,
        KeyCode::Tab => ArticlesAction::FocusEditor,
        KeyCode::Char('q') => ArticlesAction::Quit,
        _ => ArticlesAction::None,
    }
}

#[cfg(test)]
mod tests {
    use scrawl_core::article::{Article, Topic};

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn seeded() -> ArticlesState {
        let mut state = ArticlesState::default();
        state.apply(super::super::ArticlesMutation::ReplaceAll(
            (1..=3)
                .map(|id| Article {
                    article_id: id,
                    title: format!("a{id}"),
                    text: "body".to_string(),
                    topic: Topic::React,
                })
                .collect(),
        ));
        state
    }

    #[test]
    fn test_navigation_moves_selection() {
        let mut list = seeded();
        handle_key(&mut list, press(KeyCode::Down));
        handle_key(&mut list, press(KeyCode::Char('j')));
        assert_eq!(list.selected, 2);
        handle_key(&mut list, press(KeyCode::Down));
        assert_eq!(list.selected, 2);
        handle_key(&mut list, press(KeyCode::Up));
        assert_eq!(list.selected, 1);
    }

    #[test]
    fn test_action_keys() {
        let mut list = seeded();
        assert_eq!(handle_key(&mut list, press(KeyCode::Enter)), ArticlesAction::Edit);
        assert_eq!(handle_key(&mut list, press(KeyCode::Char('d'))), ArticlesAction::Delete);
        assert_eq!(handle_key(&mut list, press(KeyCode::Char('r'))), ArticlesAction::Refresh);
        assert_eq!(handle_key(&mut list, press(KeyCode::Char('q'))), ArticlesAction::Quit);
        assert_eq!(
            handle_key(
                &mut list,
                KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL)
            ),
            ArticlesAction::Logout
        );
    }
}
