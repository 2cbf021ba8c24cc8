//! Error types for catalog loading and validation.

use thiserror::Error;

/// Configuration defects detected while loading or validating a catalog.
///
/// All of these indicate a broken deployment artifact and should abort
/// startup; none are retryable and none are caused by user input.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file is not valid JSON of the expected shape.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A diagnostic question is missing from the metric catalog.
    #[error("metric catalog is missing question {question}")]
    MissingQuestion { question: &'static str },

    /// A question exists but lacks a bundle for a valid rating.
    #[error("question {question} is missing a bundle for rating {rating}")]
    MissingRating { question: &'static str, rating: u8 },

    /// A bundle lacks a metric the scoring formula requires.
    #[error("question {question} rating {rating} is missing metric {metric}")]
    MissingMetric {
        question: &'static str,
        rating: u8,
        metric: &'static str,
    },

    /// A metric definition carries a zero benchmark divisor.
    #[error("metric {metric} has a zero benchmark")]
    ZeroBenchmark { metric: &'static str },

    /// An area's sub-weights do not sum to 1.
    #[error("{area} sub-weights sum to {sum}, expected 1.0")]
    BadWeights { area: &'static str, sum: f64 },

    /// A play in the fix library has a blank name or description.
    #[error("play {index} in {area} has a blank name or description")]
    EmptyPlay { area: &'static str, index: usize },
}

impl CatalogError {
    /// Short error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "io_error",
            Self::Parse(_) => "parse_error",
            Self::MissingQuestion { .. } => "missing_question",
            Self::MissingRating { .. } => "missing_rating",
            Self::MissingMetric { .. } => "missing_metric",
            Self::ZeroBenchmark { .. } => "zero_benchmark",
            Self::BadWeights { .. } => "bad_weights",
            Self::EmptyPlay { .. } => "empty_play",
        }
    }
}
