//! Metric definition registry.
//!
//! Fixed domain constants for every scored metric: benchmark divisor,
//! sub-weight within its area, and polarity. These are part of the scoring
//! formula, not catalog content, so they live in code; the per-rating metric
//! values live in `data/metric_catalog.json`.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::types::Area;

/// Whether a higher raw value is better (direct) or worse (inverse).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Higher raw value is better, e.g. win rate.
    Direct,
    /// Lower raw value is better, e.g. churn rate or cycle length.
    Inverse,
}

/// Scoring definition for one named metric.
#[derive(Debug, Clone, Copy)]
pub struct MetricDef {
    /// Metric key as it appears in catalog bundles.
    pub name: &'static str,
    /// Benchmark divisor. Must be nonzero; checked at catalog load.
    pub benchmark: f64,
    /// Sub-weight within the area. Per-area weights sum to 1.0.
    pub weight: f64,
    /// Direct or inverse.
    pub polarity: Polarity,
}

impl MetricDef {
    const fn direct(name: &'static str, benchmark: f64, weight: f64) -> Self {
        Self {
            name,
            benchmark,
            weight,
            polarity: Polarity::Direct,
        }
    }

    const fn inverse(name: &'static str, benchmark: f64, weight: f64) -> Self {
        Self {
            name,
            benchmark,
            weight,
            polarity: Polarity::Inverse,
        }
    }
}

// =============================================================================
// METRIC DEFINITIONS
// =============================================================================

// Benchmarks are the "good operator" reference values the raw metrics are
// divided by; a metric at benchmark contributes its full sub-weight.

const PIPELINE_METRICS: [MetricDef; 6] = [
    MetricDef::direct("lead_velocity_rate", 0.12, 0.25),
    MetricDef::direct("mql_to_sql_conversion", 0.28, 0.25),
    MetricDef::direct("marketing_contribution_pipeline", 0.38, 0.20),
    MetricDef::direct("pipeline_coverage_ratio", 3.8, 0.15),
    MetricDef::direct("inbound_lead_volume_growth", 0.25, 0.10),
    MetricDef::inverse("lead_response_time", 24.0, 0.05),
];

const CONVERSION_METRICS: [MetricDef; 6] = [
    MetricDef::direct("win_rate", 0.32, 0.30),
    MetricDef::inverse("sales_cycle_length", 180.0, 0.20),
    MetricDef::direct("sql_acceptance_rate", 0.9, 0.15),
    MetricDef::direct("demo_to_proposal_rate", 0.72, 0.15),
    MetricDef::direct("proposal_to_won_rate", 0.68, 0.10),
    MetricDef::direct("pipeline_conversion_rate", 0.42, 0.10),
];

const EXPANSION_METRICS: [MetricDef; 6] = [
    MetricDef::direct("nrr", 1.2, 0.30),
    MetricDef::direct("grr", 0.98, 0.20),
    MetricDef::inverse("churn_rate", 1.0, 0.20),
    MetricDef::direct("expansion_revenue_growth", 0.28, 0.15),
    MetricDef::direct("nps", 58.0, 0.10),
    MetricDef::inverse("time_to_first_value", 60.0, 0.05),
];

const ECONOMICS_METRICS: [MetricDef; 7] = [
    MetricDef::inverse("cac_payback_period", 26.0, 0.20),
    MetricDef::direct("ltv_cac", 5.8, 0.20),
    MetricDef::inverse("burn_multiple", 4.0, 0.15),
    MetricDef::inverse("sales_rep_ramp_time", 6.5, 0.10),
    MetricDef::direct("quota_attainment", 0.88, 0.15),
    MetricDef::direct("magic_number", 1.25, 0.10),
    MetricDef::direct("rule_of_40", 62.0, 0.10),
];

static DEFS_BY_AREA: OnceLock<HashMap<Area, &'static [MetricDef]>> = OnceLock::new();

fn init_defs() -> HashMap<Area, &'static [MetricDef]> {
    let mut map: HashMap<Area, &'static [MetricDef]> = HashMap::new();
    map.insert(Area::Pipeline, &PIPELINE_METRICS);
    map.insert(Area::Conversion, &CONVERSION_METRICS);
    map.insert(Area::Expansion, &EXPANSION_METRICS);
    map.insert(Area::Economics, &ECONOMICS_METRICS);
    map
}

/// Metric definitions for an area, in sub-weight order.
pub fn metric_defs(area: Area) -> &'static [MetricDef] {
    let map = DEFS_BY_AREA.get_or_init(init_defs);
    map[&area]
}

// =============================================================================
// Headline metrics
// =============================================================================

/// The metrics surfaced individually in the result, with display names.
pub const HIGHLIGHTS: [(Area, &str, &str); 9] = [
    (Area::Pipeline, "lead_velocity_rate", "Lead Velocity Rate"),
    (Area::Pipeline, "mql_to_sql_conversion", "MQL to SQL Conversion"),
    (Area::Pipeline, "lead_response_time", "Lead Response Time"),
    (Area::Conversion, "win_rate", "Win Rate"),
    (Area::Conversion, "sales_cycle_length", "Sales Cycle Length"),
    (Area::Expansion, "nrr", "Net Revenue Retention"),
    (Area::Expansion, "churn_rate", "Churn Rate"),
    (Area::Economics, "cac_payback_period", "CAC Payback Period"),
    (Area::Economics, "ltv_cac", "LTV:CAC Ratio"),
];

/// Format a metric value for display based on naming convention.
///
/// Rates and retention figures render as percentages, durations as day
/// counts, ratios as `x.x:1`, everything else with two decimals.
pub fn format_metric_value(display_name: &str, value: f64) -> String {
    if display_name.contains("Rate")
        || display_name.contains("Conversion")
        || display_name.contains("Retention")
    {
        format!("{}%", (value * 100.0).round() as i64)
    } else if display_name.contains("Time")
        || display_name.contains("Length")
        || display_name.contains("Period")
    {
        format!("{} days", value.round() as i64)
    } else if display_name.contains("Ratio") {
        format!("{value:.1}:1")
    } else {
        format!("{value:.2}")
    }
}
