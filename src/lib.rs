#![forbid(unsafe_code)]

//! # gtm-diagnostic
//!
//! Deterministic scoring and remediation engine for go-to-market diagnostics.
//!
//! A short questionnaire (four 1–5 self-assessments plus a "top challenge"
//! answer) is mapped through a versioned metric catalog into four weighted
//! area scores, a composite overall score, a set of detected cross-area risk
//! patterns, and a ranked slice of remediation plays biased toward the
//! weakest area. The engine is a pure function of the answer set and two
//! immutable catalogs: identical inputs always produce identical results.
//!
//! Catalog content lives in JSON (`data/metric_catalog.json`,
//! `data/fix_library.json`); benchmarks, sub-weights, and metric polarity are
//! fixed domain constants and live in code.

pub mod catalog;
pub mod engine;

pub use catalog::{CatalogError, FixLibrary, MetricCatalog, Play};
pub use engine::{
    AnswerSet, Area, CompositeResult, DetectedPattern, DiagnosticEngine, EngineError,
    PatternPriority, Recommendation, TopChallenge,
};
