use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// The answer line: fixed label, then the value in bold.
///
/// Pure function of `answer`; no access to application state.
pub fn render(frame: &mut Frame, area: Rect, answer: i64) {
    let line = Line::from(vec![
        Span::styled("Answer: ", Theme::answer_label()),
        Span::styled(answer.to_string(), Theme::answer_value()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_to_text(answer: i64) -> String {
        let mut terminal = Terminal::new(TestBackend::new(30, 1)).unwrap();
        terminal
            .draw(|f| render(f, f.area(), answer))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_displays_label_and_value() {
        let text = render_to_text(42);
        assert!(text.contains("Answer: 42"));
    }

    #[test]
    fn test_value_is_not_transformed() {
        assert!(render_to_text(0).contains("Answer: 0"));
        assert!(render_to_text(-17).contains("Answer: -17"));
        assert!(render_to_text(i64::MAX).contains(&i64::MAX.to_string()));
    }

    #[test]
    fn test_same_input_yields_identical_output() {
        assert_eq!(render_to_text(7), render_to_text(7));
    }
}
