//! Layout components (header, status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the header with the app name and current view
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let header = Line::from(vec![
        Span::styled(
            " bidboard ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            app.state.current_view.title(),
            Style::default().fg(Color::White),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Key hints for views that do not draw their own
fn view_hints(view: &View) -> &'static [(&'static str, &'static str)] {
    match view {
        View::Jobs => &[("↑↓", "select"), ("Enter", "open"), ("r", "sign up"), ("q", "quit")],
        View::JobDetail => &[
            ("Tab", "focus"),
            ("↑↓", "bids"),
            ("Enter", "press"),
            ("f", "favourite"),
            ("b", "book"),
            ("Esc", "back"),
        ],
        View::Booking => &[("Enter/Esc", "back")],
        View::Register => &[],
    }
}

/// Draw the status bar: the last status message, or key hints
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(message) = &app.status_message {
        Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Green),
        ))
    } else {
        let mut spans = vec![Span::raw(" ")];
        for (key, description) in view_hints(&app.state.current_view) {
            spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
            spans.push(Span::styled(
                format!(" {description}  "),
                Style::default().fg(Color::DarkGray),
            ));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line), area);
}
