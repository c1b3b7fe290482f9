use crate::app::state::AppState;
use crate::config::AnswerMode;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const HINTS: &str = " Enter/Space/Click: new answer │ q: quit ";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Source mode
    let mode = match state.config.answers.mode {
        AnswerMode::Random => "random",
        AnswerMode::Fixed => "fixed",
        AnswerMode::Sequence => "sequence",
    };
    parts.push(Span::styled(format!(" [{}] ", mode), Theme::status_mode()));

    // Update counter + last-update time
    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    // Pad the middle so the hints sit flush right
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + HINTS.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(HINTS, Theme::status_hint()));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
