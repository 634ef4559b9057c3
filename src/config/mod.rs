//! Configuration for stylometer
//!
//! Optional `stylometer.toml` next to the document being analyzed (or in
//! the working directory). Every field has a default, so the file is
//! only needed to override something.
//!
//! ```toml
//! [analysis]
//! parallel = true
//! syllable_cache_capacity = 50000
//!
//! [output]
//! format = "text"
//! ```

use crate::extractors::DEFAULT_SYLLABLE_CACHE_CAPACITY;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "stylometer.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Fan the four extractors out across threads
    pub parallel: bool,
    /// Upper bound on memoized syllable entries
    pub syllable_cache_capacity: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            syllable_cache_capacity: DEFAULT_SYLLABLE_CACHE_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format when the CLI does not specify one
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
        }
    }
}

impl AnalyzerConfig {
    /// Load `stylometer.toml` from a directory, falling back to defaults
    /// when the file does not exist.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            debug!("no {} in {}, using defaults", CONFIG_FILE_NAME, dir.display());
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }
}
