use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct PageLayout {
    pub title: Rect,
    pub answer: Rect,
    pub button: Rect,
    pub status_bar: Rect,
}

/// Split the terminal into the page regions. The handler hit-tests mouse
/// presses against the same rects, so this must stay a pure function of
/// `area`.
pub fn compute_layout(area: Rect) -> PageLayout {
    // Main vertical split: page content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(9),    // Page content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Indent the page column from the left edge
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(2), // Indent
            Constraint::Min(20),   // Page column
        ])
        .split(content);

    let column = h_chunks[1];

    // Page column: title | answer | button | filler
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + rule
            Constraint::Length(2), // Answer line
            Constraint::Length(3), // Button
            Constraint::Min(0),    // Filler
        ])
        .split(column);

    // The button is a small fixed-width block, not a full-width bar
    let button_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12), // Button
            Constraint::Min(0),
        ])
        .split(rows[2]);

    PageLayout {
        title: rows[0],
        answer: rows[1],
        button: button_row[0],
        status_bar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_rect_is_stable_for_hit_testing() {
        let page = compute_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(page.button.width, 12);
        assert_eq!(page.button.height, 3);
        // Below the title and answer rows, indented from the left edge
        assert_eq!(page.button.x, 2);
        assert_eq!(page.button.y, 5);
    }

    #[test]
    fn test_status_bar_is_the_last_row() {
        let area = Rect::new(0, 0, 80, 24);
        let page = compute_layout(area);
        assert_eq!(page.status_bar, Rect::new(0, 23, 80, 1));
    }
}
