//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a
//! ratatui Frame, and never mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Stylize;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::features::articles::render_articles;
use crate::features::editor::render_editor;
use crate::features::login::render_login;
use crate::state::{AppState, Pane, Route};

/// Height of the server message bar at the top.
const MESSAGE_HEIGHT: u16 = 1;

/// Height of the status/hint line at the bottom.
const STATUS_HEIGHT: u16 = 1;

/// Spinner frames for the status line animation.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let [message_area, content_area, status_area] = Layout::vertical([
        Constraint::Length(MESSAGE_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .areas(frame.area());

    render_message_bar(app, frame, message_area);

    match app.route {
        Route::Login => render_login(frame, content_area, &app.login),
        Route::Articles => {
            let [editor_area, list_area] =
                Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                    .areas(content_area);
            render_editor(frame, editor_area, &app.editor, app.pane == Pane::Editor);
            render_articles(frame, list_area, &app.articles, app.pane == Pane::List);
        }
    }

    render_status_line(app, frame, status_area);
}

fn render_message_bar(app: &AppState, frame: &mut Frame, area: Rect) {
    if !app.status.message.is_empty() {
        frame.render_widget(
            Paragraph::new(app.status.message.as_str()).centered().bold(),
            area,
        );
    }
}

fn render_status_line(app: &AppState, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();

    if app.status.busy {
        let frame_idx = app.status.spinner_frame % SPINNER_FRAMES.len();
        spans.push(Span::raw(SPINNER_FRAMES[frame_idx]));
        spans.push(Span::raw(" working"));
    } else {
        let hints = match app.route {
            Route::Login => "Tab switch field | Enter sign in | Ctrl+C quit",
            Route::Articles => match app.pane {
                Pane::List => {
                    "j/k move | Enter edit | n new | d delete | r refresh | Ctrl+L logout | q quit"
                }
                Pane::Editor => "Tab next field | Enter submit | Esc back | Ctrl+C quit",
            },
        };
        spans.push(Span::raw(hints));
    }

    frame.render_widget(Paragraph::new(Line::from(spans).dim()), area);
}
