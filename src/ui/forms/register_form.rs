//! Sign-up form rendering

use super::field_renderer::{draw_field, draw_help_text, draw_value_field};
use super::pickers::{draw_country_picker, draw_date_picker};
use crate::app::App;
use crate::state::{Form, RegisterField};
use crate::ui::components::{
    ButtonColor, ButtonSize, ButtonStyle, CircleButton, HorizontalAnchor, RectButton,
    BUTTON_HEIGHT,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

const FORM_WIDTH: u16 = 56;

/// Draw the sign-up screen
pub fn draw_register(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.register_form;
    let active = form.active();

    // Back button floats in the top-left corner, last in tab order
    CircleButton::new("◀")
        .style(
            ButtonStyle::default()
                .with_color(ButtonColor::Muted)
                .anchored(HorizontalAnchor::Left(1), 0),
        )
        .render(frame, area, active == RegisterField::Back);

    let column = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(FORM_WIDTH),
            Constraint::Min(0),
        ])
        .split(area)[1];

    let mut constraints = vec![Constraint::Length(2)]; // Title
    constraints.extend(std::iter::repeat(Constraint::Length(3)).take(8)); // Fields
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Register
    constraints.push(Constraint::Length(1)); // Help text
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(column);

    let title = Paragraph::new("Sign Up")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(title, chunks[0]);

    for index in 0..6 {
        if let Some(field) = form.get_field(index) {
            draw_field(
                frame,
                chunks[index + 1],
                field,
                form.active_field() == index,
                form.password_visible,
            );
        }
    }

    let country_label = form.selected_country_label();
    draw_value_field(
        frame,
        chunks[7],
        "Country",
        country_label.as_deref(),
        "Select Country",
        active == RegisterField::Country,
    );

    let date_label = form.date_label();
    draw_value_field(
        frame,
        chunks[8],
        "Date",
        Some(&date_label),
        "",
        active == RegisterField::Date,
    );

    RectButton::new("Register")
        .style(
            ButtonStyle::default()
                .with_size(ButtonSize::Large)
                .anchored(HorizontalAnchor::Center, 0),
        )
        .render(frame, chunks[9], form.is_submit_active(), true);

    let reveal_hint = if form.password_visible {
        "hide password"
    } else {
        "show password"
    };
    draw_help_text(
        frame,
        chunks[10],
        &[
            ("Tab", "next"),
            (crate::platform::SUBMIT_SHORTCUT, "register"),
            (crate::platform::REVEAL_SHORTCUT, reveal_hint),
            ("Esc", "back"),
        ],
    );

    draw_country_picker(frame, form);
    draw_date_picker(frame, form);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{
        bundled_jobs, AppState, FormDefaults, RegisterForm, TracingSubmissionHandler,
    };
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    fn app_with_password(password: &str) -> App {
        let mut state = AppState::new(bundled_jobs().unwrap(), FormDefaults::default());
        let mut form = RegisterForm::with_date(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
        for c in password.chars() {
            form.password.push_char(c);
        }
        state.register_form = form;
        App::with_handler(state, Box::new(TracingSubmissionHandler))
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 36)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw_register(frame, area, app);
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
    fn test_password_is_masked_by_default() {
        let screen = render(&app_with_password("abc"));
        assert!(screen.contains("Password (hidden)"));
        assert!(screen.contains("•••"));
        assert!(!screen.contains("abc"));
    }

    #[test]
    fn test_password_revealed() {
        let mut app = app_with_password("abc");
        app.state.register_form.password_visible = true;
        let screen = render(&app);
        assert!(screen.contains("Password (shown)"));
        assert!(screen.contains("abc"));
        assert!(!screen.contains("•"));
    }

    #[test]
    fn test_country_placeholder_and_date_label() {
        let screen = render(&app_with_password(""));
        assert!(screen.contains("Select Country"));
        assert!(screen.contains("Sat Oct 17 2026"));
        assert!(screen.contains("Register"));
        assert!(screen.contains("◀"));
    }

    #[test]
    fn test_selected_country_replaces_placeholder() {
        let mut app = app_with_password("");
        app.state.register_form.select_country("+44");
        let screen = render(&app);
        assert!(screen.contains("United Kingdom (+44)"));
        assert!(!screen.contains("Select Country"));
    }
}
