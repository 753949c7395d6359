//! Login form rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::{LoginField, LoginFormState};

const FORM_WIDTH: u16 = 44;
const FORM_HEIGHT: u16 = 8;

pub fn render_login(frame: &mut Frame, area: Rect, form: &LoginFormState) {
    let [form_area] = Layout::horizontal([Constraint::Length(FORM_WIDTH)])
        .flex(Flex::Center)
        .areas(area);
    let [form_area] = Layout::vertical([Constraint::Length(FORM_HEIGHT)])
        .flex(Flex::Center)
        .areas(form_area);

    let block = Block::default().borders(Borders::ALL).title(" Sign in ");
    let inner = block.inner(form_area);
    frame.render_widget(block, form_area);

    let [username_area, password_area, _, submit_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    render_field(
        frame,
        username_area,
        "Username",
        form.username.value(),
        form.focus == LoginField::Username,
    );

    let masked: String = form.password.value().chars().map(|_| '*').collect();
    render_field(
        frame,
        password_area,
        "Password",
        &masked,
        form.focus == LoginField::Password,
    );

    let submit_style = if form.can_submit() {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().dim()
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled("[ Enter to sign in ]", submit_style))).centered(),
        submit_area,
    );

    let focused = match form.focus {
        LoginField::Username => &form.username,
        LoginField::Password => &form.password,
    };
    let field_area = match form.focus {
        LoginField::Username => username_area,
        LoginField::Password => password_area,
    };
    frame.set_cursor_position((
        field_area.x + focused.cursor_width(),
        field_area.y + 1,
    ));
}

fn render_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let label_style = if focused {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().dim()
    };
    let lines = vec![
        Line::from(Span::styled(label, label_style)),
        Line::from(value.to_string()),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
