//! Article list rendering.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::ArticlesState;

pub fn render_articles(frame: &mut Frame, area: Rect, state: &ArticlesState, focused: bool) {
    let title = format!(" Articles ({}) ", state.articles.len());
    let mut block = Block::default().borders(Borders::ALL).title(title);
    if focused {
        block = block.border_style(Style::default().add_modifier(Modifier::BOLD));
    }

    if state.articles.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new("No articles yet. Press 'n' to write one.").dim(),
            inner,
        );
        return;
    }

    let width = block.inner(area).width as usize;
    let items: Vec<ListItem> = state
        .articles
        .iter()
        .map(|a| {
            let topic = format!("[{}]", a.topic.label());
            // Topic labels are at most 10 chars, plus brackets and a space.
            let line = vec![
                Span::styled(topic, Style::default().dim()),
                Span::raw(" "),
                Span::raw(truncate(&a.title, width.saturating_sub(13))),
            ];
            ListItem::new(Line::from(line))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}
