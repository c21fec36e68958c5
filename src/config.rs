use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Significance threshold used when the report labels a result.
    #[serde(default = "StatsConfig::default_alpha")]
    pub alpha: f64,
    /// Galaxy named in the headline sensitivity section. Phoenix A is the
    /// extreme point of the literature sample.
    #[serde(default = "StatsConfig::default_headline_exclusion")]
    pub headline_exclusion: String,
}

impl StatsConfig {
    fn default_alpha() -> f64 {
        0.05
    }
    fn default_headline_exclusion() -> String {
        "Phoenix A".to_string()
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            alpha: Self::default_alpha(),
            headline_exclusion: Self::default_headline_exclusion(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FigureConfig {
    #[serde(default = "FigureConfig::default_width")]
    pub width: u32,
    #[serde(default = "FigureConfig::default_height")]
    pub height: u32,
}

impl FigureConfig {
    fn default_width() -> u32 {
        1200
    }
    fn default_height() -> u32 {
        800
    }
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width: Self::default_width(),
            height: Self::default_height(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub stats: StatsConfig,
    #[serde(default)]
    pub figures: FigureConfig,
}

impl AnalysisConfig {
    /// Load from TOML, falling back to defaults when the file is absent.
    /// A malformed file is reported but not fatal.
    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if !path_obj.exists() {
            return Self::default();
        }
        match fs::read_to_string(path_obj) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    eprintln!("Failed to parse config {path}: {err}. Using defaults.");
                    Self::default()
                }
            },
            Err(err) => {
                eprintln!("Failed to read config {path}: {err}. Using defaults.");
                Self::default()
            }
        }
    }
}
