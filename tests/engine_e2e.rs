use gtm_diagnostic::engine::scoring::CompositeWeights;
use gtm_diagnostic::{
    AnswerSet, Area, DiagnosticEngine, FixLibrary, MetricCatalog, TopChallenge,
};

fn engine() -> DiagnosticEngine {
    let catalog = MetricCatalog::from_path(MetricCatalog::default_path()).unwrap();
    let library = FixLibrary::from_path(FixLibrary::default_path()).unwrap();
    DiagnosticEngine::new(catalog, library).unwrap()
}

fn answers(pipeline: &str, conversion: &str, expansion: &str, economics: &str) -> AnswerSet {
    AnswerSet {
        pipeline_health: Some(pipeline.to_string()),
        sales_conversion: Some(conversion.to_string()),
        customer_success: Some(expansion.to_string()),
        economics_efficiency: Some(economics.to_string()),
        ..AnswerSet::default()
    }
}

#[test]
fn all_exposed_scores_clamped_for_every_rating() {
    let engine = engine();
    for r in 1..=5u8 {
        let s = r.to_string();
        let result = engine.evaluate(&answers(&s, &s, &s, &s)).unwrap();
        let scores = [
            result.overall_score,
            result.loop_scores.pipeline,
            result.loop_scores.conversion,
            result.loop_scores.expansion,
        ];
        for score in scores {
            assert!((0.0..=1.0).contains(&score), "rating {r}: {score} out of range");
        }
    }
}

#[test]
fn rating_five_saturates_and_rating_one_floors() {
    let engine = engine();
    // Rating-5 pipeline exceeds 1.0 pre-clamp; rating-1 economics goes
    // negative pre-clamp. Both must be invisible to callers.
    let high = engine.evaluate(&answers("5", "5", "5", "5")).unwrap();
    assert_eq!(high.loop_scores.pipeline, 1.0);

    let low = engine.evaluate(&answers("1", "1", "1", "1")).unwrap();
    assert!(low.overall_score >= 0.0);
    assert!(low.loop_scores.pipeline > 0.0);
}

#[test]
fn evaluate_is_idempotent() {
    let engine = engine();
    let set = AnswerSet {
        pipeline_health: Some("4".to_string()),
        sales_conversion: Some("2".to_string()),
        customer_success: Some("3".to_string()),
        economics_efficiency: Some("1".to_string()),
        top_challenge: Some("conversion".to_string()),
        ..AnswerSet::default()
    };
    let a = engine.evaluate(&set).unwrap();
    let b = engine.evaluate(&set).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_vec(&a).unwrap(),
        serde_json::to_vec(&b).unwrap()
    );
}

#[test]
fn composite_weights_sum_to_one_for_any_challenge() {
    for challenge in [
        TopChallenge::Pipeline,
        TopChallenge::Conversion,
        TopChallenge::Retention,
        TopChallenge::Other,
    ] {
        let w = CompositeWeights::for_challenge(challenge);
        assert!((w.sum() - 1.0).abs() <= 1e-9, "{challenge:?}: {}", w.sum());
    }
    // Unrecognized qualifier strings go through the same Other path.
    let parsed = TopChallenge::parse(Some("something else entirely"));
    let w = CompositeWeights::for_challenge(parsed);
    assert!((w.sum() - 1.0).abs() <= 1e-9);
}

#[test]
fn strong_pipeline_weak_conversion_yields_exactly_the_gap_pattern() {
    let engine = engine();
    let result = engine.evaluate(&answers("5", "1", "3", "3")).unwrap();
    assert_eq!(result.patterns.len(), 1);
    assert_eq!(result.patterns[0].pattern, "pipeline_conversion_gap");
}

#[test]
fn all_weak_loops_yield_exactly_systematic_issues() {
    let engine = engine();
    let result = engine.evaluate(&answers("1", "1", "1", "3")).unwrap();
    assert_eq!(result.patterns.len(), 1);
    assert_eq!(result.patterns[0].pattern, "systematic_issues");
}

#[test]
fn fix_budget_favors_the_weakest_loop() {
    let engine = engine();
    // Distinct loop scores: conversion rated lowest.
    let result = engine.evaluate(&answers("4", "1", "5", "3")).unwrap();

    let per_area = |area: Area| {
        result
            .recommendations
            .iter()
            .filter(|r| r.area == area)
            .count()
    };
    assert_eq!(per_area(Area::Conversion), 2);
    assert_eq!(per_area(Area::Pipeline), 1);
    assert_eq!(per_area(Area::Expansion), 1);
    // Weakest loop's plays come first.
    assert_eq!(result.recommendations[0].area, Area::Conversion);
    assert_eq!(result.recommendations[1].area, Area::Conversion);
}

#[test]
fn absent_ratings_score_identically_to_explicit_threes() {
    let engine = engine();
    let defaulted = engine.evaluate(&AnswerSet::default()).unwrap();
    let explicit = engine.evaluate(&answers("3", "3", "3", "3")).unwrap();
    assert_eq!(defaulted, explicit);
}

#[test]
fn garbage_ratings_never_abort_scoring() {
    let engine = engine();
    let set = AnswerSet {
        pipeline_health: Some("banana".to_string()),
        sales_conversion: Some("0".to_string()),
        customer_success: Some("99".to_string()),
        economics_efficiency: Some("-2".to_string()),
        top_challenge: Some("??".to_string()),
        ..AnswerSet::default()
    };
    let coerced = engine.evaluate(&set).unwrap();
    // Same unrecognized-challenge class, neutral ratings.
    let neutral_set = AnswerSet {
        top_challenge: Some("other".to_string()),
        ..AnswerSet::default()
    };
    let neutral = engine.evaluate(&neutral_set).unwrap();
    assert_eq!(coerced, neutral);
}

#[test]
fn absent_challenge_rebalances_toward_pipeline() {
    let engine = engine();
    // Skipping the challenge question reads as a pipeline pain, so it must
    // score identically to answering "pipeline" and differently from an
    // unrecognized answer that leaves the base weights alone.
    let skipped = engine.evaluate(&answers("5", "2", "2", "2")).unwrap();

    let mut explicit_set = answers("5", "2", "2", "2");
    explicit_set.top_challenge = Some("pipeline".to_string());
    let explicit = engine.evaluate(&explicit_set).unwrap();
    assert_eq!(skipped, explicit);

    let mut unfocused_set = answers("5", "2", "2", "2");
    unfocused_set.top_challenge = Some("other".to_string());
    let unfocused = engine.evaluate(&unfocused_set).unwrap();
    assert!(skipped.overall_score > unfocused.overall_score);
}

#[test]
fn retention_challenge_end_to_end() {
    let engine = engine();
    let mut set = answers("2", "2", "2", "2");
    set.top_challenge = Some("retention".to_string());
    let result = engine.evaluate(&set).unwrap();

    assert!(result
        .patterns
        .iter()
        .any(|p| p.pattern == "systematic_issues"));

    // Retention emphasizes Expansion in the composite.
    let base = CompositeWeights::for_challenge(TopChallenge::Other);
    let rebalanced = CompositeWeights::for_challenge(TopChallenge::Retention);
    assert!(rebalanced.expansion > base.expansion);

    // Whatever loop came out weakest carries two plays.
    let weakest = result.recommendations[0].area;
    let weakest_count = result
        .recommendations
        .iter()
        .filter(|r| r.area == weakest)
        .count();
    assert_eq!(weakest_count, 2);
    assert_eq!(result.recommendations.len(), 4);
}

#[test]
fn wire_shape_matches_the_documented_contract() {
    let engine = engine();
    let result = engine.evaluate(&answers("4", "2", "3", "3")).unwrap();
    let json: serde_json::Value = serde_json::to_value(&result).unwrap();

    assert!(json["overall_score"].is_number());
    for loop_name in ["Pipeline", "Conversion", "Expansion"] {
        assert!(json["loop_scores"][loop_name].is_number(), "{loop_name}");
    }
    let rec = &json["recommendations"][0];
    assert!(rec["name"].is_string());
    assert!(rec["loop"].is_string());
    assert!(rec["description"].is_string());
    let pat = &json["patterns"][0];
    assert!(pat["pattern"].is_string());
    assert!(pat["description"].is_string());
    assert!(matches!(pat["priority"].as_str(), Some("high") | Some("critical")));
}

#[test]
fn highlights_cover_the_nine_headline_metrics() {
    let engine = engine();
    let result = engine.evaluate(&answers("3", "3", "3", "3")).unwrap();
    assert_eq!(result.metric_highlights.len(), 9);
    assert!(result
        .metric_highlights
        .iter()
        .any(|m| m.name == "Win Rate" && m.area == Area::Conversion));
    // Highlight scores are unclamped contributions.
    for m in &result.metric_highlights {
        assert!(m.score.is_finite());
    }
}
