//! Request/response types for the diagnostic engine.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Neutral fallback applied to missing or unparseable ratings.
pub const DEFAULT_RATING: u8 = 3;

// =============================================================================
// GTM areas
// =============================================================================

/// One of the four GTM dimensions scored by the engine.
///
/// Pipeline, Conversion, and Expansion are exposed to callers as "loop"
/// scores; Economics feeds the composite weighting only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Area {
    Pipeline,
    Conversion,
    Expansion,
    Economics,
}

impl Area {
    /// All four scored areas, in composite-weight order.
    pub const ALL: [Area; 4] = [
        Area::Pipeline,
        Area::Conversion,
        Area::Expansion,
        Area::Economics,
    ];

    /// The three loops exposed to callers, in tie-break precedence order.
    pub const LOOPS: [Area; 3] = [Area::Pipeline, Area::Conversion, Area::Expansion];

    /// Key of this area's diagnostic question in the metric catalog.
    pub fn question_key(self) -> &'static str {
        match self {
            Area::Pipeline => "pipeline_health",
            Area::Conversion => "sales_conversion",
            Area::Expansion => "customer_success",
            Area::Economics => "economics_efficiency",
        }
    }

    /// Display label, matching the wire format.
    pub fn label(self) -> &'static str {
        match self {
            Area::Pipeline => "Pipeline",
            Area::Conversion => "Conversion",
            Area::Expansion => "Expansion",
            Area::Economics => "Economics",
        }
    }
}

// =============================================================================
// Answer set
// =============================================================================

/// One submission's raw input, as the web layer hands it over.
///
/// Ratings arrive as free-form strings because they come from a partially
/// filled HTML form. Every field may be absent; coercion to usable values
/// happens inside the engine, never at the deserialization boundary.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AnswerSet {
    /// 1–5 self-assessment of pipeline health.
    #[serde(default)]
    pub pipeline_health: Option<String>,
    /// 1–5 self-assessment of sales conversion.
    #[serde(default)]
    pub sales_conversion: Option<String>,
    /// 1–5 self-assessment of customer success / retention.
    #[serde(default)]
    pub customer_success: Option<String>,
    /// 1–5 self-assessment of economics and efficiency.
    #[serde(default)]
    pub economics_efficiency: Option<String>,
    /// Stated top challenge: pipeline, conversion, retention, or other.
    #[serde(default)]
    pub top_challenge: Option<String>,

    // Qualifiers. Carried through for the caller; never affect scoring.
    #[serde(default)]
    pub arr: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub employees: Option<String>,
}

impl AnswerSet {
    /// Raw rating string for an area's diagnostic question.
    pub fn raw_rating(&self, area: Area) -> Option<&str> {
        match area {
            Area::Pipeline => self.pipeline_health.as_deref(),
            Area::Conversion => self.sales_conversion.as_deref(),
            Area::Expansion => self.customer_success.as_deref(),
            Area::Economics => self.economics_efficiency.as_deref(),
        }
    }

    /// Coerced rating for an area: 1..=5, defaulting to [`DEFAULT_RATING`].
    ///
    /// Absent answers coerce silently (partial form fills are the normal
    /// case); present-but-unusable answers are logged before coercion.
    pub fn rating(&self, area: Area) -> u8 {
        match self.raw_rating(area) {
            None => DEFAULT_RATING,
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(r) if (1..=5).contains(&r) => r as u8,
                _ => {
                    warn!(
                        question = area.question_key(),
                        raw, "unusable rating coerced to default"
                    );
                    DEFAULT_RATING
                }
            },
        }
    }

    /// Parsed top-challenge qualifier.
    pub fn challenge(&self) -> TopChallenge {
        TopChallenge::parse(self.top_challenge.as_deref())
    }
}

/// The respondent's stated top challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopChallenge {
    Pipeline,
    Conversion,
    Retention,
    Other,
}

impl TopChallenge {
    /// Parse a raw qualifier string.
    ///
    /// An absent or blank answer defaults to `Pipeline` — an unanswered
    /// challenge question still rebalances toward pipeline, the most common
    /// stated pain. Anything unrecognized (including `other`) maps to
    /// `Other` and leaves the composite weights untouched.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => TopChallenge::Pipeline,
            Some("pipeline") => TopChallenge::Pipeline,
            Some("conversion") => TopChallenge::Conversion,
            Some("retention") => TopChallenge::Retention,
            Some(_) => TopChallenge::Other,
        }
    }

    /// The area whose composite weight this challenge emphasizes, if any.
    pub fn focus(self) -> Option<Area> {
        match self {
            TopChallenge::Pipeline => Some(Area::Pipeline),
            TopChallenge::Conversion => Some(Area::Conversion),
            TopChallenge::Retention => Some(Area::Expansion),
            TopChallenge::Other => None,
        }
    }
}

// =============================================================================
// Composite result
// =============================================================================

/// The three exposed loop scores, clamped to [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoopScores {
    #[serde(rename = "Pipeline")]
    pub pipeline: f64,
    #[serde(rename = "Conversion")]
    pub conversion: f64,
    #[serde(rename = "Expansion")]
    pub expansion: f64,
}

/// One remediation play selected for this submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// Play name from the fix library.
    pub name: String,
    /// Loop the play was drawn for.
    #[serde(rename = "loop")]
    pub area: Area,
    /// Play description, unchanged from the catalog.
    pub description: String,
    /// Expected impact, when the catalog provides one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    /// Implementation note, when the catalog provides one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implementation: Option<String>,
}

/// Severity of a detected risk pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternPriority {
    High,
    Critical,
}

/// A cross-area risk condition detected from the raw ratings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectedPattern {
    /// Stable pattern identifier.
    pub pattern: &'static str,
    /// Human-readable summary.
    pub description: &'static str,
    /// Severity level.
    pub priority: PatternPriority,
}

/// One headline metric surfaced alongside the scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricHighlight {
    /// Display name, e.g. "Win Rate".
    pub name: &'static str,
    /// Loop the metric belongs to.
    #[serde(rename = "loop")]
    pub area: Area,
    /// Raw metric value from the catalog bundle.
    pub value: f64,
    /// Normalized contribution (unclamped).
    pub score: f64,
}

/// The engine's sole output value object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeResult {
    /// Weighted blend of all four area scores, clamped to [0, 1].
    pub overall_score: f64,
    /// Clamped Pipeline/Conversion/Expansion scores.
    pub loop_scores: LoopScores,
    /// Selected remediation plays, weakest loop first.
    pub recommendations: Vec<Recommendation>,
    /// Detected risk patterns, in rule-declaration order.
    pub patterns: Vec<DetectedPattern>,
    /// Headline metric breakdown for report rendering.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metric_highlights: Vec<MetricHighlight>,
}
