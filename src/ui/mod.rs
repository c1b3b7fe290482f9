mod answer;
mod button;
pub mod layout;
mod status_bar;
mod theme;
mod title;

use crate::app::state::AppState;
use ratatui::prelude::*;

/// Draw the whole page: title, answer line, button, status bar.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let page = layout::compute_layout(area);

    title::render(frame, page.title);
    answer::render(frame, page.answer, state.answer);
    button::render(frame, page.button, state);
    status_bar::render(frame, page.status_bar, state);
}
