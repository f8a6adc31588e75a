//! Job list and job detail views

use super::components::{
    ButtonColor, ButtonSize, ButtonStyle, CircleButton, HorizontalAnchor, RectButton,
    BUTTON_HEIGHT,
};
use super::widgets::render_scrollable_list;
use crate::app::App;
use crate::state::{format_price, DetailFocus, JobPost};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Draw the list of job posts
pub fn draw_list(frame: &mut Frame, area: Rect, app: &App) {
    let jobs = &app.state.jobs;

    let block = Block::default()
        .title(format!(" Jobs ({}) ", jobs.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if jobs.is_empty() {
        let message = Paragraph::new("No job posts available.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(message, area);
        return;
    }

    let items: Vec<ListItem> = jobs
        .iter()
        .map(|job| {
            let heart = if app.state.is_favorite(&job.id) {
                "♥ "
            } else {
                "  "
            };
            ListItem::new(Line::from(vec![
                Span::styled(heart, Style::default().fg(Color::Red)),
                Span::styled(
                    job.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", job.creator),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("  {}", job.price_label()),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    format!("  {} bids", job.bids.len()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    render_scrollable_list(frame, area, list, Some(app.state.selected_index));
}

/// Draw the detail view of the selected job
pub fn draw_detail(frame: &mut Frame, area: Rect, app: &App) {
    let Some(job) = app.state.selected_job() else {
        let message = Paragraph::new("Job not found")
            .style(Style::default().fg(Color::Red))
            .block(
                Block::default()
                    .title(" Job ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        frame.render_widget(message, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),             // Header
            Constraint::Length(6),             // Description
            Constraint::Min(3),                // Bids
            Constraint::Length(BUTTON_HEIGHT), // Booking button
        ])
        .split(area);

    draw_header(frame, chunks[0], app, job);
    draw_description(frame, chunks[1], job);
    draw_bids(frame, chunks[2], app, job);

    RectButton::new("Booking now")
        .style(
            ButtonStyle::default()
                .with_size(ButtonSize::Medium)
                .anchored(HorizontalAnchor::Center, 0),
        )
        .render(
            frame,
            chunks[3],
            app.state.detail_focus == DetailFocus::Book,
            true,
        );
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App, job: &JobPost) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let banner = Paragraph::new(vec![
        Line::from(Span::styled(
            job.name.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("by {}", job.creator),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(vec![
            Span::styled("Ends ", Style::default().fg(Color::DarkGray)),
            Span::raw(job.deadline.format("%d %B %Y").to_string()),
        ]),
    ])
    .alignment(Alignment::Center);
    let banner_area = Rect {
        y: inner.y + inner.height.saturating_sub(3) / 2,
        height: inner.height.min(3),
        ..inner
    };
    frame.render_widget(banner, banner_area);

    let focus = app.state.detail_focus;
    CircleButton::new("◀")
        .style(ButtonStyle::default().anchored(HorizontalAnchor::Left(1), 1))
        .render(frame, area, focus == DetailFocus::Back);

    let heart = if app.state.is_favorite(&job.id) {
        "♥"
    } else {
        "♡"
    };
    CircleButton::new(heart)
        .style(
            ButtonStyle::default()
                .with_color(ButtonColor::White)
                .anchored(HorizontalAnchor::Right(1), 1),
        )
        .render(frame, area, focus == DetailFocus::Favorite);
}

fn draw_description(frame: &mut Frame, area: Rect, job: &JobPost) {
    let content = vec![
        Line::from(vec![
            Span::styled(
                job.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(job.price_label(), Style::default().fg(Color::Green)),
        ]),
        Line::from(job.description.clone()),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Description ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn draw_bids(frame: &mut Frame, area: Rect, app: &App, job: &JobPost) {
    let is_focused = app.state.detail_focus == DetailFocus::Bids;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if !job.has_bids() {
        let empty = Paragraph::new("No bids yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    // The heading only appears once someone has bid
    let block = block.title(Span::styled(
        " Review ",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));

    let items: Vec<ListItem> = job
        .bids
        .iter()
        .map(|bid| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<24}", bid.name)),
                Span::styled(
                    format!("{:>10}", format_price(bid.price)),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    format!("  {}", bid.date.format("%d %b %Y")),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray));
    let selected = is_focused.then_some(app.state.selected_index);
    render_scrollable_list(frame, area, list, selected);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{bundled_jobs, AppState, FormDefaults, TracingSubmissionHandler};
    use ratatui::{backend::TestBackend, Terminal};

    fn app_showing(job_id: &str) -> App {
        let mut state = AppState::new(bundled_jobs().unwrap(), FormDefaults::default());
        state.selected_job_id = Some(job_id.to_string());
        App::with_handler(state, Box::new(TracingSubmissionHandler))
    }

    fn render_detail(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw_detail(frame, area, app);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_review_heading_shown_with_bids() {
        let screen = render_detail(&app_showing("JOB-01"));
        assert!(screen.contains("Review"));
        assert!(screen.contains("Booking now"));
    }

    #[test]
    fn test_review_heading_hidden_without_bids() {
        let screen = render_detail(&app_showing("JOB-03"));
        assert!(!screen.contains("Review"));
        assert!(screen.contains("No bids yet."));
    }

    #[test]
    fn test_unknown_job() {
        let screen = render_detail(&app_showing("JOB-99"));
        assert!(screen.contains("Job not found"));
    }
}
