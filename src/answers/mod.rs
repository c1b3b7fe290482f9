//! Answer sources.
//!
//! The page never produces numbers itself; it asks an [`AnswerSource`].
//! Which source gets wired in comes from the `[answers]` config section:
//! random draws, one fixed value, or a cycling sequence.

use rand::RngExt;

use crate::config::{AnswerMode, AnswersConfig};

/// Supplier of the displayed number.
///
/// One operation, no arguments, no failure mode, callable at any time.
pub trait AnswerSource {
    fn next_answer(&mut self) -> i64;
}

/// Errors produced when building a source from configuration.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("invalid answer range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },

    #[error("sequence mode requires at least one value")]
    EmptySequence,
}

/// Uniform draw in `min..=max` on every call.
pub struct RandomSource {
    min: i64,
    max: i64,
}

impl RandomSource {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }
}

impl AnswerSource for RandomSource {
    fn next_answer(&mut self) -> i64 {
        let mut rng = rand::rng();
        rng.random_range(self.min..=self.max)
    }
}

/// Always the same value.
pub struct FixedSource(pub i64);

impl AnswerSource for FixedSource {
    fn next_answer(&mut self) -> i64 {
        self.0
    }
}

/// Yields the given values in order and starts over at the end.
///
/// `values` must be non-empty; [`from_config`] enforces this.
pub struct SequenceSource {
    values: Vec<i64>,
    next: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values, next: 0 }
    }
}

impl AnswerSource for SequenceSource {
    fn next_answer(&mut self) -> i64 {
        let value = self.values[self.next];
        self.next = (self.next + 1) % self.values.len();
        value
    }
}

/// Build the source selected by the `[answers]` config section.
pub fn from_config(cfg: &AnswersConfig) -> Result<Box<dyn AnswerSource>, SourceError> {
    match cfg.mode {
        AnswerMode::Random => {
            if cfg.min > cfg.max {
                return Err(SourceError::InvalidRange {
                    min: cfg.min,
                    max: cfg.max,
                });
            }
            Ok(Box::new(RandomSource::new(cfg.min, cfg.max)))
        }
        AnswerMode::Fixed => Ok(Box::new(FixedSource(cfg.fixed))),
        AnswerMode::Sequence => {
            if cfg.sequence.is_empty() {
                return Err(SourceError::EmptySequence);
            }
            Ok(Box::new(SequenceSource::new(cfg.sequence.clone())))
        }
    }
}
