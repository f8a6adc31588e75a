//! Booking summary for the selected job

use super::components::{ButtonSize, ButtonStyle, HorizontalAnchor, RectButton, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::format_price;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Booking ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let Some(job) = app.state.selected_job() else {
        let message = Paragraph::new("Job not found")
            .style(Style::default().fg(Color::Red))
            .block(block);
        frame.render_widget(message, area);
        return;
    };

    let label = Style::default().fg(Color::DarkGray);
    let mut content = vec![
        Line::from(Span::styled(
            job.name.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Posted by:    ", label),
            Span::raw(job.creator.clone()),
        ]),
        Line::from(vec![
            Span::styled("Offered:      ", label),
            Span::styled(job.price_label(), Style::default().fg(Color::Green)),
        ]),
    ];

    if let Some(bid) = job.lowest_bid() {
        content.push(Line::from(vec![
            Span::styled("Lowest bid:   ", label),
            Span::styled(format_price(bid.price), Style::default().fg(Color::Green)),
            Span::styled(format!(" ({})", bid.name), label),
        ]));
    }

    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "Payment is arranged directly with the poster.",
        label,
    )));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(BUTTON_HEIGHT)])
        .split(area);

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, chunks[0]);

    // Only control on the screen, so always focused
    RectButton::new("Back")
        .style(
            ButtonStyle::default()
                .with_size(ButtonSize::Small)
                .anchored(HorizontalAnchor::Center, 0),
        )
        .render(frame, chunks[1], true, true);
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

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw(frame, area, app);
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
    fn test_summary_shows_lowest_bid() {
        let screen = render(&app_showing("JOB-01"));
        assert!(screen.contains("Live-in Housekeeper"));
        assert!(screen.contains("$330.00"));
        assert!(screen.contains("Yuni Astuti"));
        assert!(screen.contains("Back"));
    }

    #[test]
    fn test_summary_without_bids() {
        let screen = render(&app_showing("JOB-03"));
        assert!(screen.contains("Elderly Companion"));
        assert!(!screen.contains("Lowest bid"));
    }

    #[test]
    fn test_unknown_job() {
        let screen = render(&app_showing("JOB-99"));
        assert!(screen.contains("Job not found"));
    }
}
