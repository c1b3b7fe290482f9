use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub const ACCENT: Color = Color::Cyan;

    pub fn page_title() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn rule() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn answer_label() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn answer_value() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_pressed() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn button_label() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn button_pressed() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_mode() -> Style {
        Style::default().fg(Color::Green).bg(Color::DarkGray)
    }

    pub fn status_hint() -> Style {
        Style::default().fg(Color::Gray).bg(Color::DarkGray)
    }
}
