//! Metric catalog: per-rating metric bundles, loaded from JSON.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::engine::metrics::metric_defs;
use crate::engine::types::Area;

use super::error::CatalogError;

/// Named metric values for one (question, rating) pair.
pub type MetricBundle = HashMap<String, f64>;

/// One diagnostic question's entry in the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionSpec {
    /// Question text shown by the wizard. Not used for scoring.
    #[serde(default)]
    pub prompt: Option<String>,
    /// Rating ("1".."5") to metric bundle.
    pub maps_to_metrics: HashMap<String, MetricBundle>,
}

/// Immutable mapping from (question, rating) to a metric bundle.
///
/// Loaded once per process and validated before the engine is built; after
/// that it is read-only for the process lifetime.
#[derive(Debug, Clone, Deserialize)]
pub struct MetricCatalog {
    /// Catalog content version, surfaced by `gtm validate`.
    #[serde(default)]
    pub version: Option<String>,
    /// Question key to question spec.
    pub questions: HashMap<String, QuestionSpec>,
}

impl MetricCatalog {
    /// Default on-disk location relative to the working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("data/metric_catalog.json")
    }

    /// Load and parse a catalog file. Does not validate; call
    /// [`MetricCatalog::validate`] (or build a `DiagnosticEngine`) before
    /// scoring with it.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&raw)
    }

    /// Parse a catalog from a JSON string.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Bundle for an area's question at a given rating.
    pub fn bundle(&self, area: Area, rating: u8) -> Option<&MetricBundle> {
        self.questions
            .get(area.question_key())?
            .maps_to_metrics
            .get(&rating.to_string())
    }

    /// Check the catalog covers every (question, rating, metric) the
    /// scoring formulas need, and that the formulas themselves are sane.
    ///
    /// Fails fast on the first defect; a partial catalog must never reach
    /// the scoring path.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for area in Area::ALL {
            let question = area.question_key();
            let defs = metric_defs(area);

            let mut weight_sum = 0.0;
            for def in defs {
                if def.benchmark == 0.0 {
                    return Err(CatalogError::ZeroBenchmark { metric: def.name });
                }
                weight_sum += def.weight;
            }
            if (weight_sum - 1.0).abs() > 1e-9 {
                return Err(CatalogError::BadWeights {
                    area: area.label(),
                    sum: weight_sum,
                });
            }

            let spec = self
                .questions
                .get(question)
                .ok_or(CatalogError::MissingQuestion { question })?;
            for rating in 1..=5u8 {
                let bundle = spec.maps_to_metrics.get(&rating.to_string()).ok_or(
                    CatalogError::MissingRating { question, rating },
                )?;
                for def in defs {
                    if !bundle.contains_key(def.name) {
                        return Err(CatalogError::MissingMetric {
                            question,
                            rating,
                            metric: def.name,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}
