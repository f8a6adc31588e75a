//! UI module for rendering the TUI

mod booking;
mod components;
mod forms;
mod jobs;
mod layout;
mod widgets;

use crate::app::App;
use crate::state::View;
use components::render_error_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    match &app.state.current_view {
        View::Jobs => jobs::draw_list(frame, main_area, app),
        View::JobDetail => jobs::draw_detail(frame, main_area, app),
        View::Booking => booking::draw(frame, main_area, app),
        View::Register => forms::draw_register(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Alerts sit above everything else
    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message);
    }
}
