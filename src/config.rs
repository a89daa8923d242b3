use crate::error::Result;
use crate::heuristic::Heuristic;
use crate::pathfinding::DEFAULT_MAX_SEARCH_DISTANCE;
use log::{info, warn};
use serde::Deserialize;
use std::fs;

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct GridConfig {
    #[serde(default = "default_layout_path")]
    pub layout_path: String,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Heuristic name; unknown names fall back to Euclidean
    #[serde(default = "default_heuristic")]
    pub heuristic: String,
    #[serde(default = "default_max_search_distance")]
    pub max_search_distance: u32,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Where to dump visit notifications as JSON (disabled when unset)
    #[serde(default)]
    pub visit_log_path: Option<String>,
    #[serde(default = "default_show_grid")]
    pub show_grid: bool,
}

// Default values
fn default_layout_path() -> String { "layouts/default.txt".to_string() }
fn default_heuristic() -> String { Heuristic::Chebyshev.name().to_string() }
fn default_max_search_distance() -> u32 { DEFAULT_MAX_SEARCH_DISTANCE }
fn default_show_grid() -> bool { true }

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            layout_path: default_layout_path(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            heuristic: default_heuristic(),
            max_search_distance: default_max_search_distance(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            visit_log_path: None,
            show_grid: default_show_grid(),
        }
    }
}

impl SearchConfig {
    /// Resolve the configured heuristic name
    pub fn heuristic(&self) -> Heuristic {
        Heuristic::from_name(&self.heuristic)
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration from file, or use defaults if the file is missing or invalid
    pub fn load(path: &str) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => {
                    info!("Loaded configuration from {}", path);
                    config
                }
                Err(e) => {
                    warn!("Failed to parse {}: {}", path, e);
                    warn!("Using default configuration");
                    Config::default()
                }
            },
            Err(_) => {
                info!("No {} found, using default configuration", path);
                Config::default()
            }
        }
    }
}
