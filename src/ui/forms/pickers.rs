//! Country dropdown and date picker overlays for the sign-up form

use crate::state::{RegisterForm, COUNTRIES};
use crate::ui::components::centered_rect;
use chrono::{Datelike, Months, NaiveDate};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Draw the country dropdown if it is open
pub fn draw_country_picker(frame: &mut Frame, form: &RegisterForm) {
    let Some(highlighted) = form.country_picker else {
        return;
    };

    let area = centered_rect(frame.area(), 36, COUNTRIES.len() as u16 + 2);
    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = COUNTRIES
        .iter()
        .map(|country| {
            let is_current = form.selected_country.as_deref() == Some(country.code);
            let marker = if is_current { "● " } else { "  " };
            ListItem::new(format!("{marker}{}", country.label()))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Select Country ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default().with_selected(Some(highlighted));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Weeks of the month containing `date`, Sunday first
pub fn month_grid(date: NaiveDate) -> Vec<[Option<u32>; 7]> {
    let Some(first) = date.with_day(1) else {
        return Vec::new();
    };
    let days_in_month = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31);

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut col = first.weekday().num_days_from_sunday() as usize;
    for day in 1..=days_in_month {
        week[col] = Some(day);
        col += 1;
        if col == 7 {
            weeks.push(week);
            week = [None; 7];
            col = 0;
        }
    }
    if col > 0 {
        weeks.push(week);
    }
    weeks
}

/// Draw the date picker if it is open
pub fn draw_date_picker(frame: &mut Frame, form: &RegisterForm) {
    if !form.date_picker_open {
        return;
    }

    let weeks = month_grid(form.date);
    // heading + weekday row + weeks + blank + hint + borders
    let height = 2 + weeks.len() as u16 + 2 + 2;
    let area = centered_rect(frame.area(), 30, height);
    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(Span::styled(
            form.date.format("%B %Y").to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Su Mo Tu We Th Fr Sa",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let selected_day = form.date.day();
    for week in weeks {
        let spans: Vec<Span> = week
            .iter()
            .enumerate()
            .flat_map(|(i, day)| {
                let cell = match day {
                    Some(d) => format!("{d:>2}"),
                    None => "  ".to_string(),
                };
                let style = if *day == Some(selected_day) {
                    Style::default().fg(Color::Black).bg(Color::Cyan)
                } else {
                    Style::default()
                };
                let gap = if i < 6 { " " } else { "" };
                [Span::styled(cell, style), Span::raw(gap)]
            })
            .collect();
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "←→ day  ↑↓ month  PgUp/PgDn year",
        Style::default().fg(Color::DarkGray),
    )));

    let picker = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Date ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(picker, area);
}
