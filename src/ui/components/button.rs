//! Button component for TUI
//!
//! Two shapes are offered: a small [`CircleButton`] holding a single glyph
//! and a [`RectButton`] holding a label. Both are styled through
//! [`ButtonStyle`], which fixes the recognised options to size, color and
//! position.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Width of a circle button (border + padded glyph + border)
pub const CIRCLE_BUTTON_WIDTH: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    /// Minimum outer width of a rect button
    pub fn min_width(&self) -> u16 {
        match self {
            Self::Small => 10,
            Self::Medium => 18,
            Self::Large => 28,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonColor {
    #[default]
    Primary,
    White,
    Muted,
}

impl ButtonColor {
    pub fn color(&self) -> Color {
        match self {
            Self::Primary => Color::Cyan,
            Self::White => Color::White,
            Self::Muted => Color::Gray,
        }
    }
}

/// Horizontal anchor with an offset from that edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAnchor {
    Left(u16),
    Right(u16),
    Center,
}

/// Where a button sits inside the area it is given
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonPosition {
    /// Fill the given area
    #[default]
    Inline,
    /// Float at a fixed offset inside the given area
    Anchored {
        horizontal: HorizontalAnchor,
        top: u16,
    },
}

/// Recognised styling options for buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonStyle {
    pub size: ButtonSize,
    pub color: ButtonColor,
    pub position: ButtonPosition,
}

impl ButtonStyle {
    pub fn with_size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_color(mut self, color: ButtonColor) -> Self {
        self.color = color;
        self
    }

    pub fn anchored(mut self, horizontal: HorizontalAnchor, top: u16) -> Self {
        self.position = ButtonPosition::Anchored { horizontal, top };
        self
    }

    /// Area the button occupies inside `parent`, clipped to it
    pub fn resolve_area(&self, parent: Rect, width: u16, height: u16) -> Rect {
        let width = width.min(parent.width);
        let height = height.min(parent.height);
        match self.position {
            ButtonPosition::Inline => parent,
            ButtonPosition::Anchored { horizontal, top } => {
                let max_x = parent.width - width;
                let x_offset = match horizontal {
                    HorizontalAnchor::Left(left) => left.min(max_x),
                    HorizontalAnchor::Right(right) => max_x.saturating_sub(right),
                    HorizontalAnchor::Center => max_x / 2,
                };
                Rect {
                    x: parent.x + x_offset,
                    y: parent.y + top.min(parent.height - height),
                    width,
                    height,
                }
            }
        }
    }
}

/// Round button showing a single glyph
#[derive(Debug, Clone)]
pub struct CircleButton<'a> {
    pub icon: &'a str,
    pub style: ButtonStyle,
}

impl<'a> CircleButton<'a> {
    pub fn new(icon: &'a str) -> Self {
        Self {
            icon,
            style: ButtonStyle::default().with_color(ButtonColor::White),
        }
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    pub fn render(&self, frame: &mut Frame, parent: Rect, is_selected: bool) {
        let area = self
            .style
            .resolve_area(parent, CIRCLE_BUTTON_WIDTH, BUTTON_HEIGHT);
        render_button(
            frame,
            area,
            self.icon,
            &self.style,
            BorderType::Rounded,
            is_selected,
            true,
        );
    }
}

/// Rectangular button with a text label
#[derive(Debug, Clone)]
pub struct RectButton<'a> {
    pub label: &'a str,
    pub style: ButtonStyle,
}

impl<'a> RectButton<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            style: ButtonStyle::default(),
        }
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    /// Outer width: label plus padding and borders, at least the size's minimum
    pub fn width(&self) -> u16 {
        let label_width = self.label.chars().count() as u16 + 4;
        label_width.max(self.style.size.min_width())
    }

    pub fn render(&self, frame: &mut Frame, parent: Rect, is_selected: bool, is_enabled: bool) {
        let area = self.style.resolve_area(parent, self.width(), BUTTON_HEIGHT);
        render_button(
            frame,
            area,
            self.label,
            &self.style,
            BorderType::Plain,
            is_selected,
            is_enabled,
        );
    }
}

/// Render a generic button with border
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    style: &ButtonStyle,
    border_type: BorderType,
    is_selected: bool,
    is_enabled: bool,
) {
    let color = style.color.color();

    let border_style = if is_selected {
        Style::default().fg(color)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if is_selected {
        Style::default()
            .fg(color)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(color)
    };

    let paragraph = Paragraph::new(content.to_string())
        .alignment(Alignment::Center)
        .style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn parent() -> Rect {
        Rect::new(10, 5, 40, 10)
    }

    mod resolve_area {
        use super::*;

        #[test]
        fn test_inline_fills_parent() {
            let style = ButtonStyle::default();
            assert_eq!(style.resolve_area(parent(), 5, 3), parent());
        }

        #[test]
        fn test_anchored_left() {
            let style = ButtonStyle::default().anchored(HorizontalAnchor::Left(2), 1);
            assert_eq!(style.resolve_area(parent(), 5, 3), Rect::new(12, 6, 5, 3));
        }

        #[test]
        fn test_anchored_right() {
            let style = ButtonStyle::default().anchored(HorizontalAnchor::Right(2), 0);
            assert_eq!(style.resolve_area(parent(), 5, 3), Rect::new(43, 5, 5, 3));
        }

        #[test]
        fn test_anchored_center() {
            let style = ButtonStyle::default().anchored(HorizontalAnchor::Center, 7);
            assert_eq!(style.resolve_area(parent(), 20, 3), Rect::new(20, 12, 20, 3));
        }

        #[test]
        fn test_anchored_is_clipped_to_parent() {
            let style = ButtonStyle::default().anchored(HorizontalAnchor::Left(100), 100);
            let area = style.resolve_area(parent(), 50, 20);
            assert_eq!(area, parent());
        }
    }

    mod rect_button {
        use super::*;

        #[test]
        fn test_width_uses_size_minimum() {
            let button =
                RectButton::new("Go").style(ButtonStyle::default().with_size(ButtonSize::Large));
            assert_eq!(button.width(), 28);
        }

        #[test]
        fn test_width_grows_with_label() {
            let button = RectButton::new("A rather long booking label")
                .style(ButtonStyle::default().with_size(ButtonSize::Small));
            assert_eq!(button.width(), 31);
        }

        #[test]
        fn test_renders_label() {
            let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
            terminal
                .draw(|frame| {
                    let area = frame.area();
                    RectButton::new("Booking now").render(frame, area, false, true);
                })
                .unwrap();
            let buffer = terminal.backend().buffer();
            let row: String = (0..30).map(|x| buffer[(x, 1)].symbol()).collect();
            assert!(row.contains("Booking now"));
            assert_eq!(buffer[(0, 0)].symbol(), "┌");
        }
    }

    mod circle_button {
        use super::*;

        #[test]
        fn test_renders_anchored_glyph() {
            let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
            terminal
                .draw(|frame| {
                    let area = frame.area();
                    CircleButton::new("♥")
                        .style(
                            ButtonStyle::default()
                                .with_color(ButtonColor::White)
                                .anchored(HorizontalAnchor::Right(1), 0),
                        )
                        .render(frame, area, false);
                })
                .unwrap();
            let buffer = terminal.backend().buffer();
            assert_eq!(buffer[(14, 0)].symbol(), "╭");
            assert_eq!(buffer[(16, 1)].symbol(), "♥");
            assert_eq!(buffer[(18, 2)].symbol(), "╯");
        }
    }
}
