use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const TITLE: &str = "The best app";

/// Page heading with a rule underneath.
pub fn render(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(TITLE, Theme::page_title())),
        Line::from(Span::styled("─".repeat(TITLE.len()), Theme::rule())),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
