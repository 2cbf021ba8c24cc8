//! Fix library: remediation plays per GTM loop, loaded from JSON.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::engine::types::Area;

use super::error::CatalogError;

/// One remediation play. Order within an area is the preference order.
#[derive(Debug, Clone, Deserialize)]
pub struct Play {
    pub name: String,
    pub description: String,
    /// Expected impact, free text.
    #[serde(default)]
    pub impact: Option<String>,
    /// Implementation note (effort, owner, timeline).
    #[serde(default)]
    pub implementation: Option<String>,
}

/// Ordered remediation plays per loop area.
///
/// Absent areas deserialize to empty lists; the selector treats them as
/// contributing nothing rather than as errors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixLibrary {
    /// Library content version, surfaced by `gtm validate`.
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub pipeline_fixes: Vec<Play>,
    #[serde(default)]
    pub conversion_fixes: Vec<Play>,
    #[serde(default)]
    pub expansion_fixes: Vec<Play>,
}

impl FixLibrary {
    /// Default on-disk location relative to the working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("data/fix_library.json")
    }

    /// Load and parse a fix library file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&raw)
    }

    /// Parse a fix library from a JSON string.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Plays for a loop area, in preference order. Economics carries no
    /// plays; it is a weighting-only input.
    pub fn plays_for(&self, area: Area) -> &[Play] {
        match area {
            Area::Pipeline => &self.pipeline_fixes,
            Area::Conversion => &self.conversion_fixes,
            Area::Expansion => &self.expansion_fixes,
            Area::Economics => &[],
        }
    }

    /// Reject plays with blank names or descriptions.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for area in Area::LOOPS {
            for (index, play) in self.plays_for(area).iter().enumerate() {
                if play.name.trim().is_empty() || play.description.trim().is_empty() {
                    return Err(CatalogError::EmptyPlay {
                        area: area.label(),
                        index,
                    });
                }
            }
        }
        Ok(())
    }
}
