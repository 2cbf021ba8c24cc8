//! Normalization, area scoring, and composite weighting.
//!
//! Contributions are deliberately unclamped here so extreme catalog values
//! stay visible in logs and tests; clamping happens once at the exposed
//! score boundary in the orchestrator.

use tracing::warn;

use crate::catalog::MetricBundle;

use super::error::EngineError;
use super::metrics::{metric_defs, MetricDef, Polarity};
use super::types::{Area, TopChallenge};

/// Unit-less contribution of one raw metric value.
///
/// Direct metrics score `value / benchmark`; inverse metrics score
/// `1 - value / benchmark`. May be negative or exceed 1.
pub fn contribution(value: f64, def: &MetricDef) -> f64 {
    match def.polarity {
        Polarity::Direct => value / def.benchmark,
        Polarity::Inverse => 1.0 - value / def.benchmark,
    }
}

/// Weighted sum of an area's metric contributions, unclamped.
///
/// A metric missing from the bundle is a catalog defect; validation at load
/// time makes this unreachable for validated catalogs, but it is still
/// reported as a configuration error rather than papered over.
pub fn area_score(area: Area, rating: u8, bundle: &MetricBundle) -> Result<f64, EngineError> {
    let mut score = 0.0;
    for def in metric_defs(area) {
        let value = bundle
            .get(def.name)
            .copied()
            .ok_or_else(|| EngineError::missing_metric(area, rating, def.name))?;
        score += contribution(value, def) * def.weight;
    }
    Ok(score)
}

/// Composite weights over the four areas, always summing to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeWeights {
    pub pipeline: f64,
    pub conversion: f64,
    pub expansion: f64,
    pub economics: f64,
}

impl CompositeWeights {
    const BASE: CompositeWeights = CompositeWeights {
        pipeline: 0.30,
        conversion: 0.30,
        expansion: 0.25,
        economics: 0.15,
    };

    /// Emphasis multiplier applied to the focus area before renormalizing.
    const FOCUS_BOOST: f64 = 1.15;

    /// Base weights, rebalanced toward the challenge's focus area.
    ///
    /// An unrecognized challenge (including `other`) leaves the base weights
    /// untouched. Renormalization restores the sum-to-1 invariant whenever a
    /// focus fires.
    pub fn for_challenge(challenge: TopChallenge) -> Self {
        let mut w = Self::BASE;
        if let Some(focus) = challenge.focus() {
            *w.get_mut(focus) *= Self::FOCUS_BOOST;
            let total = w.sum();
            w.pipeline /= total;
            w.conversion /= total;
            w.expansion /= total;
            w.economics /= total;
        }
        w
    }

    pub fn get(&self, area: Area) -> f64 {
        match area {
            Area::Pipeline => self.pipeline,
            Area::Conversion => self.conversion,
            Area::Expansion => self.expansion,
            Area::Economics => self.economics,
        }
    }

    fn get_mut(&mut self, area: Area) -> &mut f64 {
        match area {
            Area::Pipeline => &mut self.pipeline,
            Area::Conversion => &mut self.conversion,
            Area::Expansion => &mut self.expansion,
            Area::Economics => &mut self.economics,
        }
    }

    pub fn sum(&self) -> f64 {
        self.pipeline + self.conversion + self.expansion + self.economics
    }
}

/// Clamp an exposed score into [0, 1], logging when the raw value was out.
pub fn clamp_exposed(area: Area, raw: f64) -> f64 {
    if !(0.0..=1.0).contains(&raw) {
        warn!(area = area.label(), raw, "raw area score clamped");
    }
    raw.clamp(0.0, 1.0)
}
