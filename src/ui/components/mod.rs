//! Reusable UI components

mod button;
mod dialog;

pub use button::{
    ButtonColor, ButtonSize, ButtonStyle, CircleButton, HorizontalAnchor, RectButton,
    BUTTON_HEIGHT,
};
pub use dialog::{centered_rect, render_error_dialog};
