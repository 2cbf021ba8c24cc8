//! Error types for the diagnostic engine.
//!
//! Bad user input is never an error here — missing or unusable ratings are
//! coerced before any lookup. Everything below signals a broken deployed
//! catalog, so operators can tell "bad form fill" apart from "bad
//! deployment" at a glance.

use thiserror::Error;

use super::types::Area;

/// Configuration defects surfaced at evaluation time.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The metric catalog has no bundle for a valid (question, rating) pair.
    #[error("metric catalog has no bundle for {question} rating {rating}")]
    MissingBundle { question: &'static str, rating: u8 },

    /// A bundle exists but lacks a metric the scoring formula requires.
    #[error("bundle for {question} rating {rating} is missing metric {metric}")]
    MissingMetric {
        question: &'static str,
        rating: u8,
        metric: &'static str,
    },
}

impl EngineError {
    pub fn missing_bundle(area: Area, rating: u8) -> Self {
        Self::MissingBundle {
            question: area.question_key(),
            rating,
        }
    }

    pub fn missing_metric(area: Area, rating: u8, metric: &'static str) -> Self {
        Self::MissingMetric {
            question: area.question_key(),
            rating,
            metric,
        }
    }

    /// Short error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingBundle { .. } => "missing_bundle",
            Self::MissingMetric { .. } => "missing_metric",
        }
    }
}
