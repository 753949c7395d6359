//! Top-level application state.

use crate::features::articles::ArticlesState;
use crate::features::editor::EditorFormState;
use crate::features::login::LoginFormState;

/// The two screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Articles,
}

/// Which pane of the articles screen has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Editor,
    List,
}

/// Status line state.
///
/// `busy` is the single in-flight flag: while set, submits and other
/// network-triggering actions are ignored. It is cleared when the
/// response event arrives.
#[derive(Debug, Default)]
pub struct StatusState {
    pub message: String,
    pub busy: bool,
    pub spinner_frame: usize,
}

impl StatusState {
    /// Marks a request as in flight and clears the previous outcome message.
    pub fn start_request(&mut self) {
        self.busy = true;
        self.message.clear();
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }
}

/// Full application state. Mutated only by the reducer.
#[derive(Debug)]
pub struct AppState {
    pub should_quit: bool,
    pub route: Route,
    pub token: Option<String>,
    pub login: LoginFormState,
    pub editor: EditorFormState,
    pub articles: ArticlesState,
    pub status: StatusState,
    pub pane: Pane,
}

impl AppState {
    /// Builds the initial state. A persisted token lands the user on the
    /// articles screen directly.
    pub fn new(token: Option<String>) -> Self {
        let route = if token.is_some() { Route::Articles } else { Route::Login };
        Self {
            should_quit: false,
            route,
            token,
            login: LoginFormState::new(),
            editor: EditorFormState::new(),
            articles: ArticlesState::default(),
            status: StatusState::default(),
            pane: Pane::List,
        }
    }
}
