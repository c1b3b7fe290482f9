use crate::config::AppConfig;
use chrono::Local;
use ratatui::layout::Rect;

/// How many ticks the button stays highlighted after an activation.
pub const BUTTON_FLASH_TICKS: u8 = 3;

pub struct AppState {
    pub config: AppConfig,
    /// The one piece of page state: the most recently fetched answer.
    pub answer: i64,
    /// Control activations since startup. The initial fetch is not counted.
    pub updates: u64,
    /// Formatted time of the last replace, shown in the status bar.
    pub last_updated: Option<String>,
    /// Terminal size, maintained from resize events for mouse hit-testing.
    pub viewport: Rect,
    /// Remaining ticks of the pressed-button highlight.
    pub button_flash: u8,
    pub should_quit: bool,
    pub dirty: bool,
    timestamp_format: String,
}

impl AppState {
    pub fn new(config: AppConfig, initial_answer: i64) -> Self {
        let timestamp_format = config.ui.timestamp_format.clone();
        Self {
            config,
            answer: initial_answer,
            updates: 0,
            last_updated: None,
            viewport: Rect::default(),
            button_flash: 0,
            should_quit: false,
            dirty: true,
            timestamp_format,
        }
    }

    /// Replace the displayed answer with a freshly fetched value.
    pub fn set_answer(&mut self, answer: i64) {
        self.answer = answer;
        self.updates += 1;
        self.last_updated = Some(Local::now().format(&self.timestamp_format).to_string());
        self.dirty = true;
    }

    /// Arm the pressed-button highlight; ticks count it back down.
    pub fn press_button(&mut self) {
        self.button_flash = BUTTON_FLASH_TICKS;
        self.dirty = true;
    }

    pub fn button_pressed(&self) -> bool {
        self.button_flash > 0
    }

    pub fn status_line(&self) -> String {
        let mut s = format!("Updates: {}", self.updates);
        if let Some(ref at) = self.last_updated {
            s.push_str(&format!(" │ Last: {}", at));
        }
        s
    }
}
