use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

const LABEL: &str = "Button";

/// The one interactive control. Renders highlighted while the press flash
/// armed by the handler is still counting down.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let pressed = state.button_pressed();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if pressed {
            Theme::border_pressed()
        } else {
            Theme::border()
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = Span::styled(
        LABEL,
        if pressed {
            Theme::button_pressed()
        } else {
            Theme::button_label()
        },
    );
    let paragraph = Paragraph::new(label).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_to_buffer(state: &AppState) -> ratatui::buffer::Buffer {
        let mut terminal = Terminal::new(TestBackend::new(12, 3)).unwrap();
        terminal.draw(|f| render(f, f.area(), state)).unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_shows_label_inside_border() {
        let state = AppState::new(AppConfig::default(), 0);
        let buffer = render_to_buffer(&state);
        let text: String = buffer.content.iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Button"));
    }

    #[test]
    fn test_pressed_state_changes_label_style() {
        let mut state = AppState::new(AppConfig::default(), 0);
        let idle = render_to_buffer(&state);
        state.press_button();
        let pressed = render_to_buffer(&state);
        // Same text, different styling
        let idle_text: String = idle.content.iter().map(|cell| cell.symbol()).collect();
        let pressed_text: String = pressed.content.iter().map(|cell| cell.symbol()).collect();
        assert_eq!(idle_text, pressed_text);
        assert_ne!(idle, pressed);
    }
}
