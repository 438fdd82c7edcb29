//! Search result records as produced by the game search backend.

use crate::Result;
use serde::Deserialize;
use std::fmt;
use std::path::Path;

fn not_available() -> String {
    "N/A".to_string()
}

/// One search hit. Fields the backend could not fill are shown as `N/A`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResult {
    pub doc_id: String,
    #[serde(default = "not_available")]
    pub name: String,
    #[serde(default = "not_available")]
    pub price: String,
    #[serde(default = "not_available")]
    pub release_date: String,
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.doc_id, self.name, self.price, self.release_date
        )
    }
}

impl SearchResult {
    /// Parse a JSON array of results
    pub fn from_json(json: &str) -> Result<Vec<SearchResult>> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON array of results from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Vec<SearchResult>> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let results = Self::from_json(&raw)?;
        log::debug!("loaded {} results from {}", results.len(), path.as_ref().display());
        Ok(results)
    }
}
