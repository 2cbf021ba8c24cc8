//! The diagnostic engine.
//!
//! `DiagnosticEngine` composes the normalizer, area scorer, composite
//! scorer, pattern detector, and fix selector into one synchronous
//! `evaluate` operation. It holds only the two immutable catalogs, so calls
//! are reentrant and safe to run concurrently without locking.

pub mod error;
pub mod metrics;
pub mod patterns;
pub mod scoring;
pub mod selector;
pub mod types;

pub use error::EngineError;
pub use metrics::{format_metric_value, metric_defs, MetricDef, Polarity};
pub use patterns::Ratings;
pub use types::{
    AnswerSet, Area, CompositeResult, DetectedPattern, LoopScores, MetricHighlight,
    PatternPriority, Recommendation, TopChallenge,
};

use tracing::debug;

use crate::catalog::{CatalogError, FixLibrary, MetricBundle, MetricCatalog};

use scoring::{clamp_exposed, CompositeWeights};

/// Stateless scoring engine closed over two validated catalogs.
#[derive(Debug)]
pub struct DiagnosticEngine {
    metrics: MetricCatalog,
    fixes: FixLibrary,
}

impl DiagnosticEngine {
    /// Build an engine, validating both catalogs up front.
    ///
    /// A malformed catalog is a fatal startup condition; nothing here is
    /// retried or deferred to scoring time.
    pub fn new(metrics: MetricCatalog, fixes: FixLibrary) -> Result<Self, CatalogError> {
        metrics.validate()?;
        fixes.validate()?;
        Ok(Self { metrics, fixes })
    }

    /// Score one answer set.
    ///
    /// Pure: no storage writes, no notifications, no retained state. The
    /// only failure mode is a catalog defect that survived validation.
    pub fn evaluate(&self, answers: &AnswerSet) -> Result<CompositeResult, EngineError> {
        let ratings = Ratings::from_answers(answers);

        let raw_pipeline = self.raw_area_score(Area::Pipeline, ratings.pipeline)?;
        let raw_conversion = self.raw_area_score(Area::Conversion, ratings.conversion)?;
        let raw_expansion = self.raw_area_score(Area::Expansion, ratings.expansion)?;
        let raw_economics = self.raw_area_score(Area::Economics, ratings.economics)?;

        let weights = CompositeWeights::for_challenge(answers.challenge());
        let overall = raw_pipeline * weights.pipeline
            + raw_conversion * weights.conversion
            + raw_expansion * weights.expansion
            + raw_economics * weights.economics;
        debug!(
            raw_pipeline,
            raw_conversion, raw_expansion, raw_economics, overall, "raw scores before clamping"
        );

        let recommendations = selector::select_fixes(
            [
                (Area::Pipeline, raw_pipeline),
                (Area::Conversion, raw_conversion),
                (Area::Expansion, raw_expansion),
            ],
            &self.fixes,
        );

        Ok(CompositeResult {
            overall_score: overall.clamp(0.0, 1.0),
            loop_scores: LoopScores {
                pipeline: clamp_exposed(Area::Pipeline, raw_pipeline),
                conversion: clamp_exposed(Area::Conversion, raw_conversion),
                expansion: clamp_exposed(Area::Expansion, raw_expansion),
            },
            recommendations,
            patterns: patterns::detect(&ratings),
            metric_highlights: self.highlights(&ratings)?,
        })
    }

    fn bundle(&self, area: Area, rating: u8) -> Result<&MetricBundle, EngineError> {
        self.metrics
            .bundle(area, rating)
            .ok_or_else(|| EngineError::missing_bundle(area, rating))
    }

    fn raw_area_score(&self, area: Area, rating: u8) -> Result<f64, EngineError> {
        let bundle = self.bundle(area, rating)?;
        scoring::area_score(area, rating, bundle)
    }

    /// Per-metric breakdown for the headline metrics.
    fn highlights(&self, ratings: &Ratings) -> Result<Vec<MetricHighlight>, EngineError> {
        let mut out = Vec::with_capacity(metrics::HIGHLIGHTS.len());
        for (area, metric, display) in metrics::HIGHLIGHTS {
            let rating = match area {
                Area::Pipeline => ratings.pipeline,
                Area::Conversion => ratings.conversion,
                Area::Expansion => ratings.expansion,
                Area::Economics => ratings.economics,
            };
            let bundle = self.bundle(area, rating)?;
            // Highlight metrics are a subset of the metric defs; the
            // metrics module tests pin that down.
            let Some(def) = metric_defs(area).iter().find(|d| d.name == metric) else {
                continue;
            };
            let value = bundle
                .get(metric)
                .copied()
                .ok_or_else(|| EngineError::missing_metric(area, rating, def.name))?;
            out.push(MetricHighlight {
                name: display,
                area,
                value,
                score: scoring::contribution(value, def),
            });
        }
        Ok(out)
    }
}
