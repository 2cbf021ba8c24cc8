//! Cross-area risk pattern detection.
//!
//! Rules evaluate the raw discrete ratings, not the computed scores, so a
//! respondent's own assessment drives the flags. Rules are independent
//! predicates over one immutable rating tuple; all firing rules are returned
//! in declaration order.

use super::types::{AnswerSet, Area, DetectedPattern, PatternPriority};

/// The four coerced ratings, one per diagnostic question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ratings {
    pub pipeline: u8,
    pub conversion: u8,
    pub expansion: u8,
    pub economics: u8,
}

impl Ratings {
    pub fn from_answers(answers: &AnswerSet) -> Self {
        Self {
            pipeline: answers.rating(Area::Pipeline),
            conversion: answers.rating(Area::Conversion),
            expansion: answers.rating(Area::Expansion),
            economics: answers.rating(Area::Economics),
        }
    }
}

struct PatternRule {
    pattern: &'static str,
    description: &'static str,
    priority: PatternPriority,
    fires: fn(&Ratings) -> bool,
}

// Rating thresholds: >=4 reads as strong, <=2 as weak, exact comparisons.
const RULES: [PatternRule; 4] = [
    PatternRule {
        pattern: "pipeline_conversion_gap",
        description: "Strong pipeline but weak conversion - focus on sales enablement",
        priority: PatternPriority::High,
        fires: |r| r.pipeline >= 4 && r.conversion <= 2,
    },
    PatternRule {
        pattern: "leaky_bucket",
        description: "Acquiring customers but losing them - prioritize customer success",
        priority: PatternPriority::Critical,
        fires: |r| r.conversion >= 4 && r.expansion <= 2,
    },
    PatternRule {
        pattern: "systematic_issues",
        description: "Multiple weak areas suggest fundamental GTM challenges",
        priority: PatternPriority::Critical,
        fires: |r| r.pipeline <= 2 && r.conversion <= 2 && r.expansion <= 2,
    },
    PatternRule {
        pattern: "unit_economics_problem",
        description: "Operations functional but economics unsustainable",
        priority: PatternPriority::High,
        fires: |r| r.economics <= 2 && (r.pipeline >= 3 || r.conversion >= 3),
    },
];

/// Evaluate all rules against one rating tuple.
///
/// An empty result means no rule fired; that is the common case, not an
/// error.
pub fn detect(ratings: &Ratings) -> Vec<DetectedPattern> {
    RULES
        .iter()
        .filter(|rule| (rule.fires)(ratings))
        .map(|rule| DetectedPattern {
            pattern: rule.pattern,
            description: rule.description,
            priority: rule.priority,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratings(pipeline: u8, conversion: u8, expansion: u8, economics: u8) -> Ratings {
        Ratings {
            pipeline,
            conversion,
            expansion,
            economics,
        }
    }

    #[test]
    fn neutral_ratings_fire_nothing() {
        assert!(detect(&ratings(3, 3, 3, 3)).is_empty());
    }

    #[test]
    fn pipeline_conversion_gap_fires_alone() {
        let found = detect(&ratings(5, 1, 3, 3));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].pattern, "pipeline_conversion_gap");
        assert_eq!(found[0].priority, PatternPriority::High);
    }

    #[test]
    fn gap_rule_boundary_is_exact() {
        // 4/2 is exactly on the thresholds; 3/2 and 4/3 are off by one.
        assert_eq!(detect(&ratings(4, 2, 3, 3)).len(), 1);
        assert!(detect(&ratings(3, 2, 3, 3)).is_empty());
        assert!(detect(&ratings(4, 3, 3, 3)).is_empty());
    }

    #[test]
    fn leaky_bucket_is_critical() {
        let found = detect(&ratings(3, 4, 2, 3));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].pattern, "leaky_bucket");
        assert_eq!(found[0].priority, PatternPriority::Critical);
    }

    #[test]
    fn all_weak_fires_only_systematic_issues() {
        // The pairwise gap rules need one strong side, so (1,1,1,3) must not
        // trip them.
        let found = detect(&ratings(1, 1, 1, 3));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].pattern, "systematic_issues");
    }

    #[test]
    fn unit_economics_needs_a_functional_loop() {
        let found = detect(&ratings(3, 3, 3, 2));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].pattern, "unit_economics_problem");

        // Economics weak with everything weak: systematic wins, economics
        // rule cannot fire without a >=3 loop.
        let found = detect(&ratings(2, 2, 2, 2));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].pattern, "systematic_issues");
    }

    #[test]
    fn multiple_rules_fire_in_declaration_order() {
        // Strong conversion + weak expansion + weak economics with a strong
        // loop: leaky_bucket then unit_economics_problem.
        let found = detect(&ratings(3, 4, 2, 2));
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].pattern, "leaky_bucket");
        assert_eq!(found[1].pattern, "unit_economics_problem");
    }
}
