//! Editor rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use scrawl_core::article::Topic;

use super::{EditorField, EditorFormState};

pub fn render_editor(frame: &mut Frame, area: Rect, form: &EditorFormState, focused: bool) {
    let title = match form.editing {
        Some(id) => format!(" Edit article #{id} "),
        None => " New article ".to_string(),
    };
    let mut block = Block::default().borders(Borders::ALL).title(title);
    if focused {
        block = block.border_style(Style::default().add_modifier(Modifier::BOLD));
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [title_area, text_area, topic_area, _, submit_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    render_label(frame, title_area, "Title", focused && form.focus == EditorField::Title);
    frame.render_widget(
        Paragraph::new(form.title.value().to_string()),
        offset_row(title_area, 1),
    );

    render_label(frame, text_area, "Text", focused && form.focus == EditorField::Text);
    frame.render_widget(
        Paragraph::new(form.text.value().to_string()).wrap(Wrap { trim: false }),
        offset_row(text_area, 1),
    );

    render_label(frame, topic_area, "Topic", focused && form.focus == EditorField::Topic);
    frame.render_widget(
        Paragraph::new(topic_line(form.topic)),
        offset_row(topic_area, 1),
    );

    let submit_style = if form.can_submit() {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().dim()
    };
    let label = if form.editing.is_some() {
        "[ Enter to save ]"
    } else {
        "[ Enter to post ]"
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(label, submit_style))).centered(),
        submit_area,
    );

    if focused && form.focus != EditorField::Topic {
        let (field, field_area) = match form.focus {
            EditorField::Text => (&form.text, text_area),
            _ => (&form.title, title_area),
        };
        frame.set_cursor_position((field_area.x + field.cursor_width(), field_area.y + 1));
    }
}

fn topic_line(selected: Option<Topic>) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, topic) in Topic::all().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if Some(*topic) == selected {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default().dim()
        };
        spans.push(Span::styled(topic.label(), style));
    }
    Line::from(spans)
}

fn render_label(frame: &mut Frame, area: Rect, label: &str, focused: bool) {
    let style = if focused {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().dim()
    };
    frame.render_widget(Paragraph::new(Span::styled(label, style)), offset_row(area, 0));
}

fn offset_row(area: Rect, row: u16) -> Rect {
    Rect {
        x: area.x,
        y: area.y + row.min(area.height.saturating_sub(1)),
        width: area.width,
        height: area.height.saturating_sub(row).max(1),
    }
}
