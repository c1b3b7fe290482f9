//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub answers: AnswersConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// UI appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Format of the last-update time in the status bar (chrono syntax).
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
        }
    }
}

/// Which answer source the page is wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerMode {
    /// Uniform draw in `min..=max` on every activation.
    Random,
    /// Always `fixed`.
    Fixed,
    /// The `sequence` values in order, cycling at the end.
    Sequence,
}

/// Answer source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswersConfig {
    #[serde(default = "default_mode")]
    pub mode: AnswerMode,
    #[serde(default = "default_fixed")]
    pub fixed: i64,
    #[serde(default = "default_min")]
    pub min: i64,
    #[serde(default = "default_max")]
    pub max: i64,
    #[serde(default = "default_sequence")]
    pub sequence: Vec<i64>,
}

impl Default for AnswersConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            fixed: default_fixed(),
            min: default_min(),
            max: default_max(),
            sequence: default_sequence(),
        }
    }
}

/// Diagnostic logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// Default tracing level; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_timestamp_format() -> String {
    "%H:%M:%S".to_string()
}
fn default_mode() -> AnswerMode {
    AnswerMode::Random
}
fn default_fixed() -> i64 {
    42
}
fn default_min() -> i64 {
    0
}
fn default_max() -> i64 {
    100
}
fn default_sequence() -> Vec<i64> {
    vec![4, 8, 15, 16, 23, 42]
}
fn default_log_dir() -> String {
    "~/.local/share/bestapp/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.ui.timestamp_format, "%H:%M:%S");
        assert_eq!(cfg.answers.mode, AnswerMode::Random);
        assert_eq!(cfg.answers.fixed, 42);
        assert_eq!(cfg.answers.min, 0);
        assert_eq!(cfg.answers.max, 100);
        assert!(!cfg.logging.enabled);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_partial_toml_fills_missing_fields() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [answers]
            mode = "fixed"
            fixed = 7
            "#,
        )
        .unwrap();
        assert_eq!(cfg.answers.mode, AnswerMode::Fixed);
        assert_eq!(cfg.answers.fixed, 7);
        // Untouched sections keep their defaults
        assert_eq!(cfg.answers.max, 100);
        assert_eq!(cfg.ui.timestamp_format, "%H:%M:%S");
    }

    #[test]
    fn test_sequence_mode_parses_values() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [answers]
            mode = "sequence"
            sequence = [42, 7]
            "#,
        )
        .unwrap();
        assert_eq!(cfg.answers.mode, AnswerMode::Sequence);
        assert_eq!(cfg.answers.sequence, vec![42, 7]);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let result = toml::from_str::<AppConfig>("[answers]\nmode = \"oracle\"\n");
        assert!(result.is_err());
    }
}
