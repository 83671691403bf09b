//! Runner configuration
//!
//! Loaded from an optional JSON file; command-line flags override it.
//! Every field has a default, so `{}` is a valid configuration.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use stalk_catalog::PatternCatalog;
use stalk_chart::Locale;

use crate::error::{Result, RunnerError};

/// How forecasts are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(RunnerError::InvalidArgument(format!(
                "unknown format '{}' (expected table or json)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Language for chart labels
    #[serde(default)]
    pub locale: Locale,

    #[serde(default)]
    pub format: OutputFormat,

    /// Quiet period before a watched input is computed
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Replacement pattern catalog (JSON); built-in catalog when absent
    #[serde(default)]
    pub catalog_path: Option<String>,

    /// Also print one illustrative path
    #[serde(default)]
    pub sample: bool,

    /// Seed for the illustrative path; random when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_debounce_ms() -> u64 {
    500
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            format: OutputFormat::default(),
            debounce_ms: default_debounce_ms(),
            catalog_path: None,
            sample: false,
            seed: None,
        }
    }
}

impl RunnerConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| RunnerError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| RunnerError::Parse(e.to_string()))
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// The configured catalog, or the built-in one
    pub fn load_catalog(&self) -> Result<Arc<PatternCatalog>> {
        let catalog = match &self.catalog_path {
            Some(path) => {
                log::info!("Loading catalog from: {}", path);
                PatternCatalog::from_file(path)?
            }
            None => PatternCatalog::default(),
        };
        Ok(Arc::new(catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = RunnerConfig::from_json("{}").unwrap();
        assert_eq!(config, RunnerConfig::default());
        assert_eq!(config.debounce(), Duration::from_millis(500));
    }

    #[test]
    fn test_json_overrides() {
        let config = RunnerConfig::from_json(
            r#"{"locale": "fr", "format": "json", "debounce_ms": 250, "sample": true, "seed": 9}"#,
        )
        .unwrap();

        assert_eq!(config.locale, Locale::Fr);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.debounce_ms, 250);
        assert!(config.sample);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = RunnerConfig::from_json(r#"{"debounce_ms": "soon"}"#).unwrap_err();
        assert!(matches!(err, RunnerError::Parse(_)));
    }

    #[test]
    fn test_missing_catalog_file() {
        let config = RunnerConfig {
            catalog_path: Some("/nonexistent/catalog.json".to_string()),
            ..Default::default()
        };
        let err = config.load_catalog().unwrap_err();
        assert!(matches!(err, RunnerError::Catalog(_)));
    }

    #[test]
    fn test_format_parse() {
        assert_eq!(OutputFormat::parse("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::parse("xml").is_err());
    }
}
