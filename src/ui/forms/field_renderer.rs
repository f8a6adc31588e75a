//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn field_styles(is_active: bool) -> (Style, Style) {
    if is_active {
        (
            Style::default().fg(Color::Cyan),
            Style::default().fg(Color::Cyan),
        )
    } else {
        (
            Style::default().fg(Color::White),
            Style::default().fg(Color::DarkGray),
        )
    }
}

/// Draw a text field; secret fields are masked unless `reveal` is set
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool, reveal: bool) {
    let (text_style, border_style) = field_styles(is_active);

    let display_value = field.display_value(reveal);
    let cursor = if is_active { "▌" } else { "" };

    let spans = if field.is_empty() && !is_active {
        vec![Span::styled(
            field.label.clone(),
            Style::default().fg(Color::DarkGray),
        )]
    } else {
        vec![
            Span::styled(display_value, text_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]
    };

    let mut title = format!(" {} ", field.label);
    if field.is_secret() {
        title.push_str(if reveal { "(shown) " } else { "(hidden) " });
    }

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw a picker-backed field showing `value`, or `placeholder` when unset
pub fn draw_value_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: Option<&str>,
    placeholder: &str,
    is_active: bool,
) {
    let (text_style, border_style) = field_styles(is_active);

    let span = match value {
        Some(value) => Span::styled(value.to_string(), text_style),
        None => Span::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray)),
    };
    let marker = if is_active { " ▾" } else { "" };

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            span,
            Span::styled(marker, Style::default().fg(Color::Cyan)),
        ]))
        .block(block),
        area,
    );
}

/// Draw a help line of `(key, description)` pairs
pub fn draw_help_text(frame: &mut Frame, area: Rect, entries: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(entries.len() * 2);
    for (key, description) in entries {
        spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::raw(format!(": {description}  ")));
    }
    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
