//! Catalog loading and validation.
//!
//! Two JSON deployment artifacts feed the engine: the metric catalog
//! (per-rating metric bundles) and the fix library (remediation plays per
//! loop). Both load once at process start; a malformed or incomplete
//! catalog is a fatal startup condition, never a per-request error.

pub mod error;
pub mod fixes;
pub mod metrics;

pub use error::CatalogError;
pub use fixes::{FixLibrary, Play};
pub use metrics::{MetricBundle, MetricCatalog, QuestionSpec};
