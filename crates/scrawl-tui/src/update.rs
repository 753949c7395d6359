//! The reducer: folds events into [`AppState`] and returns effects.
//!
//! This is the only place application state changes. It performs no I/O;
//! network work and token persistence are returned as [`UiEffect`]s for the
//! runtime to execute.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use scrawl_core::api::ApiError;

use crate::effects::UiEffect;
use crate::events::{ApiEvent, UiEvent};
use crate::features::articles::{self, ArticlesAction, ArticlesMutation};
use crate::features::editor::{self, EditorAction};
use crate::features::login::{self, LoginAction};
use crate::state::{AppState, Pane, Route};

const LOGIN_FAILED_MESSAGE: &str = "An error occurred during login";
const GOODBYE_MESSAGE: &str = "Goodbye!";

pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    enforce_route_guard(app);

    let effects = match event {
        UiEvent::Started => handle_started(app),
        UiEvent::Tick => {
            if app.status.busy {
                app.status.spinner_frame = app.status.spinner_frame.wrapping_add(1);
            }
            Vec::new()
        }
        UiEvent::Terminal(event) => handle_terminal(app, event),
        UiEvent::Api(event) => handle_api(app, event),
    };

    enforce_route_guard(app);
    effects
}

/// The articles screen requires a token. Anything that drops the token
/// lands the user back on the login screen.
fn enforce_route_guard(app: &mut AppState) {
    if app.route == Route::Articles && app.token.is_none() {
        app.route = Route::Login;
    }
}

fn handle_started(app: &mut AppState) -> Vec<UiEffect> {
    if app.token.is_some() {
        app.status.start_request();
        vec![UiEffect::FetchArticles]
    } else {
        Vec::new()
    }
}

fn handle_terminal(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    let Event::Key(key) = event else {
        return Vec::new();
    };
    if key.kind != KeyEventKind::Press {
        return Vec::new();
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return vec![UiEffect::Quit];
    }

    match app.route {
        Route::Login => handle_login_key(app, key),
        Route::Articles => match app.pane {
            Pane::List => handle_list_key(app, key),
            Pane::Editor => handle_editor_key(app, key),
        },
    }
}

fn handle_login_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match login::handle_key(&mut app.login, key) {
        LoginAction::Submit if !app.status.busy && app.login.can_submit() => {
            let credentials = app.login.credentials();
            app.status.start_request();
            vec![UiEffect::Login {
                username: credentials.username,
                password: credentials.password,
            }]
        }
        _ => Vec::new(),
    }
}

fn handle_editor_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match editor::handle_key(&mut app.editor, key) {
        EditorAction::Submit if !app.status.busy => {
            let Some(draft) = app.editor.draft() else {
                return Vec::new();
            };
            if draft.validate().is_err() {
                return Vec::new();
            }
            app.status.start_request();
            match app.editor.editing {
                Some(article_id) => vec![UiEffect::UpdateArticle { article_id, draft }],
                None => vec![UiEffect::CreateArticle { draft }],
            }
        }
        EditorAction::CancelEdit => {
            app.editor.reset();
            Vec::new()
        }
        EditorAction::FocusList => {
            app.pane = Pane::List;
            Vec::new()
        }
        _ => Vec::new(),
    }
}

fn handle_list_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match articles::handle_key(&mut app.articles, key) {
        ArticlesAction::Refresh if !app.status.busy => {
            app.status.start_request();
            vec![UiEffect::FetchArticles]
        }
        ArticlesAction::Edit => {
            if let Some(article) = app.articles.selected_article() {
                let article = article.clone();
                app.editor.load(&article);
                app.pane = Pane::Editor;
            }
            Vec::new()
        }
        ArticlesAction::Delete if !app.status.busy => {
            match app.articles.selected_article() {
                Some(article) => {
                    let article_id = article.article_id;
                    app.status.start_request();
                    vec![UiEffect::DeleteArticle { article_id }]
                }
                None => Vec::new(),
            }
        }
        ArticlesAction::New => {
            app.editor.reset();
            app.pane = Pane::Editor;
            Vec::new()
        }
        ArticlesAction::FocusEditor => {
            app.pane = Pane::Editor;
            Vec::new()
        }
        ArticlesAction::Logout => logout(app),
        ArticlesAction::Quit => {
            app.should_quit = true;
            vec![UiEffect::Quit]
        }
        _ => Vec::new(),
    }
}

/// Ends the session locally. Safe to run with no session; the server is
/// never consulted.
fn logout(app: &mut AppState) -> Vec<UiEffect> {
    app.token = None;
    app.route = Route::Login;
    app.pane = Pane::List;
    app.login.reset();
    app.editor.reset();
    app.status.busy = false;
    app.status.set_message(GOODBYE_MESSAGE);
    vec![UiEffect::ClearToken]
}

/// Expired or invalid session reported by the server: drop the token and
/// return to login, keeping the error message visible.
fn force_logout(app: &mut AppState, error: &ApiError) -> Vec<UiEffect> {
    app.token = None;
    app.route = Route::Login;
    app.pane = Pane::List;
    app.login.reset();
    app.editor.reset();
    app.status.set_message(error.message.clone());
    vec![UiEffect::ClearToken]
}

fn handle_api(app: &mut AppState, event: ApiEvent) -> Vec<UiEffect> {
    // Release the in-flight flag before anything else, success or failure.
    app.status.busy = false;

    match event {
        ApiEvent::LoggedIn(Ok(outcome)) => {
            let token = outcome.token;
            app.token = Some(token.clone());
            app.login.reset();
            app.route = Route::Articles;
            app.pane = Pane::List;
            app.status.set_message(outcome.message);
            app.status.busy = true;
            vec![UiEffect::PersistToken { token }, UiEffect::FetchArticles]
        }
        ApiEvent::LoggedIn(Err(_)) => {
            app.status.set_message(LOGIN_FAILED_MESSAGE);
            Vec::new()
        }
        ApiEvent::Listed(Ok(list)) => {
            app.articles.apply(ArticlesMutation::ReplaceAll(list.articles));
            if let Some(editing) = app.editor.editing
                && !app.articles.contains(editing)
            {
                app.editor.reset();
            }
            app.status.set_message(list.message);
            Vec::new()
        }
        ApiEvent::Created(Ok(saved)) => {
            app.articles.apply(ArticlesMutation::Append(saved.article));
            app.editor.reset();
            app.status.set_message(saved.message);
            Vec::new()
        }
        ApiEvent::Updated(Ok(saved)) => {
            app.articles.apply(ArticlesMutation::ReplaceById(saved.article));
            app.editor.reset();
            app.status.set_message(saved.message);
            Vec::new()
        }
        ApiEvent::Deleted {
            article_id,
            result: Ok(deleted),
        } => {
            app.articles.apply(ArticlesMutation::RemoveById(article_id));
            if app.editor.editing == Some(article_id) {
                app.editor.reset();
            }
            app.status.set_message(deleted.message);
            Vec::new()
        }
        ApiEvent::Listed(Err(e))
        | ApiEvent::Created(Err(e))
        | ApiEvent::Updated(Err(e))
        | ApiEvent::Deleted { result: Err(e), .. } => {
            if e.is_auth() {
                force_logout(app, &e)
            } else {
                app.status.set_message(e.message);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scrawl_core::api::{ApiError, ArticleList, ArticleSaved, Deleted, LoginOutcome};
    use scrawl_core::article::{Article, Topic};

    use super::*;

    fn press(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn article(id: i64, title: &str) -> Article {
        Article {
            article_id: id,
            title: title.to_string(),
            text: "body".to_string(),
            topic: Topic::Node,
        }
    }

    fn logged_in(articles: Vec<Article>) -> AppState {
        let mut app = AppState::new(Some("tok".to_string()));
        app.articles.apply(ArticlesMutation::ReplaceAll(articles));
        app
    }

    fn type_str(app: &mut AppState, s: &str) {
        for c in s.chars() {
            update(app, press(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_starts_on_login_without_token() {
        let app = AppState::new(None);
        assert_eq!(app.route, Route::Login);
    }

    #[test]
    fn test_started_fetches_when_session_persisted() {
        let mut app = AppState::new(Some("tok".to_string()));
        let effects = update(&mut app, UiEvent::Started);
        assert_eq!(effects, vec![UiEffect::FetchArticles]);
        assert!(app.status.busy);
    }

    #[test]
    fn test_started_is_quiet_without_session() {
        let mut app = AppState::new(None);
        assert!(update(&mut app, UiEvent::Started).is_empty());
        assert!(!app.status.busy);
    }

    #[test]
    fn test_login_submit_gated_on_validity() {
        let mut app = AppState::new(None);
        type_str(&mut app, "ab");
        update(&mut app, press(KeyCode::Tab));
        type_str(&mut app, "longenough1");
        assert!(update(&mut app, press(KeyCode::Enter)).is_empty());

        let mut app = AppState::new(None);
        type_str(&mut app, "abc");
        update(&mut app, press(KeyCode::Tab));
        type_str(&mut app, "short");
        assert!(update(&mut app, press(KeyCode::Enter)).is_empty());

        let mut app = AppState::new(None);
        type_str(&mut app, "abc");
        update(&mut app, press(KeyCode::Tab));
        type_str(&mut app, "longenough1");
        let effects = update(&mut app, press(KeyCode::Enter));
        assert_eq!(
            effects,
            vec![UiEffect::Login {
                username: "abc".to_string(),
                password: "longenough1".to_string(),
            }]
        );
        assert!(app.status.busy);
    }

    #[test]
    fn test_busy_blocks_second_submit() {
        let mut app = AppState::new(None);
        type_str(&mut app, "abc");
        update(&mut app, press(KeyCode::Tab));
        type_str(&mut app, "longenough1");
        assert_eq!(update(&mut app, press(KeyCode::Enter)).len(), 1);
        assert!(update(&mut app, press(KeyCode::Enter)).is_empty());
    }

    #[test]
    fn test_login_success_routes_to_articles_and_fetches() {
        let mut app = AppState::new(None);
        let effects = update(
            &mut app,
            UiEvent::Api(ApiEvent::LoggedIn(Ok(LoginOutcome {
                token: "t0k3n".to_string(),
                message: "Welcome back".to_string(),
            }))),
        );
        assert_eq!(app.route, Route::Articles);
        assert_eq!(app.token.as_deref(), Some("t0k3n"));
        assert_eq!(app.status.message, "Welcome back");
        assert!(app.status.busy);
        assert_eq!(
            effects,
            vec![
                UiEffect::PersistToken {
                    token: "t0k3n".to_string()
                },
                UiEffect::FetchArticles,
            ]
        );
    }

    #[test]
    fn test_login_failure_shows_generic_message() {
        let mut app = AppState::new(None);
        app.status.busy = true;
        update(
            &mut app,
            UiEvent::Api(ApiEvent::LoggedIn(Err(ApiError::auth("Invalid password")))),
        );
        assert_eq!(app.route, Route::Login);
        assert!(app.token.is_none());
        assert!(!app.status.busy);
        assert_eq!(app.status.message, LOGIN_FAILED_MESSAGE);
    }

    #[test]
    fn test_list_response_replaces_collection_fully() {
        let mut app = logged_in(vec![article(1, "stale"), article(2, "stale")]);
        update(
            &mut app,
            UiEvent::Api(ApiEvent::Listed(Ok(ArticleList {
                articles: vec![article(3, "fresh")],
                message: "1 article".to_string(),
            }))),
        );
        let ids: Vec<i64> = app.articles.articles.iter().map(|a| a.article_id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_list_response_resets_editor_when_edited_article_vanishes() {
        let mut app = logged_in(vec![article(1, "one")]);
        app.editor.load(&article(1, "one"));
        update(
            &mut app,
            UiEvent::Api(ApiEvent::Listed(Ok(ArticleList {
                articles: Vec::new(),
                message: String::new(),
            }))),
        );
        assert_eq!(app.editor.editing, None);
    }

    #[test]
    fn test_create_appends_exactly_one() {
        let mut app = logged_in(vec![article(1, "one")]);
        update(
            &mut app,
            UiEvent::Api(ApiEvent::Created(Ok(ArticleSaved {
                article: article(2, "two"),
                message: "Created".to_string(),
            }))),
        );
        let ids: Vec<i64> = app.articles.articles.iter().map(|a| a.article_id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(app.editor.editing, None);
        assert_eq!(app.editor.title.value(), "");
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut app = logged_in(vec![article(1, "one"), article(2, "two"), article(3, "three")]);
        app.editor.load(&article(2, "two"));
        update(
            &mut app,
            UiEvent::Api(ApiEvent::Updated(Ok(ArticleSaved {
                article: article(2, "revised"),
                message: "Saved".to_string(),
            }))),
        );
        let titles: Vec<&str> = app.articles.articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["one", "revised", "three"]);
        assert_eq!(app.editor.editing, None);
    }

    #[test]
    fn test_delete_removes_exactly_one_preserving_order() {
        let mut app = logged_in(vec![article(1, "one"), article(2, "two"), article(3, "three")]);
        update(
            &mut app,
            UiEvent::Api(ApiEvent::Deleted {
                article_id: 2,
                result: Ok(Deleted {
                    message: "Deleted".to_string(),
                }),
            }),
        );
        let ids: Vec<i64> = app.articles.articles.iter().map(|a| a.article_id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_delete_of_edited_article_clears_editor() {
        let mut app = logged_in(vec![article(1, "one")]);
        app.editor.load(&article(1, "one"));
        update(
            &mut app,
            UiEvent::Api(ApiEvent::Deleted {
                article_id: 1,
                result: Ok(Deleted {
                    message: String::new(),
                }),
            }),
        );
        assert_eq!(app.editor.editing, None);
    }

    #[test]
    fn test_auth_failure_forces_logout_keeping_collection_memory_clean() {
        let mut app = logged_in(vec![article(1, "one"), article(2, "two")]);
        app.status.busy = true;
        let effects = update(
            &mut app,
            UiEvent::Api(ApiEvent::Deleted {
                article_id: 1,
                result: Err(ApiError::auth("Session expired")),
            }),
        );
        assert_eq!(app.route, Route::Login);
        assert!(app.token.is_none());
        assert!(!app.status.busy);
        assert_eq!(app.status.message, "Session expired");
        assert_eq!(effects, vec![UiEffect::ClearToken]);
        // The collection itself is untouched; it is simply unreachable
        // until the next sign-in replaces it.
        assert_eq!(app.articles.articles.len(), 2);
    }

    #[test]
    fn test_non_auth_failure_keeps_session_and_collection() {
        let mut app = logged_in(vec![article(1, "one")]);
        app.status.busy = true;
        update(
            &mut app,
            UiEvent::Api(ApiEvent::Created(Err(ApiError::server("boom")))),
        );
        assert_eq!(app.route, Route::Articles);
        assert_eq!(app.token.as_deref(), Some("tok"));
        assert_eq!(app.status.message, "boom");
        assert_eq!(app.articles.articles.len(), 1);
    }

    #[test]
    fn test_logout_is_synchronous_and_idempotent() {
        let mut app = logged_in(vec![article(1, "one")]);
        let effects = update(
            &mut app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(
                KeyCode::Char('l'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert_eq!(app.route, Route::Login);
        assert!(app.token.is_none());
        assert_eq!(app.status.message, GOODBYE_MESSAGE);
        assert_eq!(effects, vec![UiEffect::ClearToken]);
    }

    #[test]
    fn test_edit_then_select_other_discards_uncommitted_changes() {
        let mut app = logged_in(vec![article(1, "one"), article(2, "two")]);
        update(&mut app, press(KeyCode::Enter));
        assert_eq!(app.editor.editing, Some(1));
        app.editor.title.set_value("half-finished edit");

        app.pane = Pane::List;
        update(&mut app, press(KeyCode::Down));
        update(&mut app, press(KeyCode::Enter));
        assert_eq!(app.editor.editing, Some(2));
        assert_eq!(app.editor.title.value(), "two");
    }

    #[test]
    fn test_editor_submit_dispatches_create_or_update() {
        let mut app = logged_in(vec![article(1, "one")]);
        app.pane = Pane::Editor;
        app.editor.title.set_value("new one");
        app.editor.text.set_value("body");
        app.editor.topic = Some(Topic::React);
        let effects = update(&mut app, press(KeyCode::Enter));
        assert!(matches!(effects[0], UiEffect::CreateArticle { .. }));

        app.status.busy = false;
        app.editor.load(&article(1, "one"));
        let effects = update(&mut app, press(KeyCode::Enter));
        assert!(matches!(
            effects[0],
            UiEffect::UpdateArticle { article_id: 1, .. }
        ));
    }

    #[test]
    fn test_delete_key_targets_selected_article() {
        let mut app = logged_in(vec![article(1, "one"), article(2, "two")]);
        update(&mut app, press(KeyCode::Down));
        let effects = update(&mut app, press(KeyCode::Char('d')));
        assert_eq!(effects, vec![UiEffect::DeleteArticle { article_id: 2 }]);
        assert!(app.status.busy);
    }

    #[test]
    fn test_route_guard_rejects_articles_without_token() {
        let mut app = AppState::new(Some("tok".to_string()));
        app.token = None;
        update(&mut app, UiEvent::Tick);
        assert_eq!(app.route, Route::Login);
    }

    #[test]
    fn test_ctrl_c_quits_from_anywhere() {
        let mut app = AppState::new(None);
        let effects = update(
            &mut app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert!(app.should_quit);
        assert_eq!(effects, vec![UiEffect::Quit]);
    }
}
