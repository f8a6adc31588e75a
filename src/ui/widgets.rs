//! Reusable UI widget helpers

use ratatui::{
    layout::Rect,
    widgets::{List, ListState},
    Frame,
};

/// Marker drawn in front of the highlighted row
pub const HIGHLIGHT_SYMBOL: &str = "▸ ";

/// Render a list with an optional highlighted row.
///
/// With a selection the list scrolls to keep that row visible; without one
/// it renders from the top and reserves no marker column.
pub fn render_scrollable_list(frame: &mut Frame, area: Rect, list: List, selected: Option<usize>) {
    let list = if selected.is_some() {
        list.highlight_symbol(HIGHLIGHT_SYMBOL)
    } else {
        list
    };
    let mut list_state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut list_state);
}
