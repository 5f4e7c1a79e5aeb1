use serde::Deserialize;
use std::path::Path;

use crate::common::errors::{ConfigError, ExtractError};

/// Extraction settings: which files to scan and how to pull names out of them
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    /// Substring that marks a registration line
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Zero-based index of the comma-separated field holding the name
    #[serde(default = "default_field")]
    pub field: usize,

    /// Source files, in output order
    #[serde(default = "default_sources")]
    pub sources: Vec<SourceConfig>,
}

/// One registration file and the list it produces
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SourceConfig {
    /// Heading printed above the list
    pub label: String,

    /// File name relative to the source directory
    pub file: String,

    /// Character removed from the extracted field
    pub strip: char,
}

pub const DEFAULT_SRC_DIR: &str = "./software/src/";
pub const OC_APPS_FILE: &str = "OC_apps.cpp";
pub const HEM_CONFIG_FILE: &str = "hemisphere_config.h";

fn default_marker() -> String {
    "DECLARE_APP".to_string()
}
fn default_field() -> usize {
    2
}
fn default_sources() -> Vec<SourceConfig> {
    vec![
        SourceConfig {
            label: "o_C APPS".to_string(),
            file: OC_APPS_FILE.to_string(),
            strip: '"',
        },
        SourceConfig {
            label: "Hemisphere APPS".to_string(),
            file: HEM_CONFIG_FILE.to_string(),
            strip: ')',
        },
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            field: default_field(),
            sources: default_sources(),
        }
    }
}

impl Config {
    /// Load config from a TOML file, or use the built-in defaults
    pub fn load(path: Option<&Path>) -> Result<Self, ExtractError> {
        let Some(path) = path else {
            return Ok(Config::default());
        };
        let contents = std::fs::read_to_string(path).map_err(|e| ExtractError::Config {
            path: path.to_path_buf(),
            message: format!("failed to read: {}", e),
        })?;
        Self::parse(&contents).map_err(|e| ExtractError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Parse config from TOML text
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        if config.marker.is_empty() {
            return Err(ConfigError::EmptyMarker);
        }
        Ok(config)
    }
}
