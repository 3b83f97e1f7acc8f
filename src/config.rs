//! Configuration loaded from `college-fit.toml`.
//!
//! Every field has a default, so a missing file or a partial file is fine.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub scoring: ScoringConfig,

    #[serde(default)]
    pub chart: ChartConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            max_connections: default_max_connections(),
        }
    }
}

fn default_max_connections() -> u32 {
    5
}

pub const MAX_ALTERNATIVES: usize = 2;

/// Knobs for ranking colleges.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Weight applied to the fit rate.
    #[serde(default = "default_fit_weight")]
    pub fit_weight: f64,

    /// Weight applied to `100 - switch_rate`.
    #[serde(default = "default_switch_weight")]
    pub switch_weight: f64,

    /// Colleges with fewer responses than this are left out.
    #[serde(default = "default_min_responses")]
    pub min_responses: usize,

    /// How many runners-up to report after the top college, at most
    /// [`MAX_ALTERNATIVES`].
    #[serde(default = "default_alternatives")]
    pub alternatives: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            fit_weight: default_fit_weight(),
            switch_weight: default_switch_weight(),
            min_responses: default_min_responses(),
            alternatives: default_alternatives(),
        }
    }
}

fn default_fit_weight() -> f64 {
    0.7
}

fn default_switch_weight() -> f64 {
    0.3
}

fn default_min_responses() -> usize {
    2
}

fn default_alternatives() -> usize {
    2
}

/// Canvas geometry for the scatter chart.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_width")]
    pub width: f64,

    #[serde(default = "default_height")]
    pub height: f64,

    /// Space kept free on every side for ticks and axis titles.
    #[serde(default = "default_margin")]
    pub margin: f64,

    /// Vertical distance between labels of points sharing a position.
    #[serde(default = "default_label_spacing")]
    pub label_spacing: f64,

    #[serde(default = "default_grid_lines")]
    pub grid_lines: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            margin: default_margin(),
            label_spacing: default_label_spacing(),
            grid_lines: default_grid_lines(),
        }
    }
}

fn default_width() -> f64 {
    680.0
}

fn default_height() -> f64 {
    360.0
}

fn default_margin() -> f64 {
    48.0
}

fn default_label_spacing() -> f64 {
    14.0
}

fn default_grid_lines() -> usize {
    4
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("scoring weight `{name}` must be a finite, non-negative number (got {value})")]
    InvalidWeight { name: &'static str, value: f64 },
    #[error("alternatives must be at most {max} (got {value})")]
    TooManyAlternatives { value: usize, max: usize },
    #[error("min_responses must be at least 1")]
    ZeroMinResponses,
    #[error("chart canvas {width}x{height} leaves no room inside a {margin}px margin")]
    CanvasTooSmall { width: f64, height: f64, margin: f64 },
    #[error("chart needs at least one grid line")]
    NoGridLines,
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.validate()?;

        tracing::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("fit_weight", self.scoring.fit_weight),
            ("switch_weight", self.scoring.switch_weight),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }

        if self.scoring.alternatives > MAX_ALTERNATIVES {
            return Err(ConfigError::TooManyAlternatives {
                value: self.scoring.alternatives,
                max: MAX_ALTERNATIVES,
            });
        }

        if self.scoring.min_responses == 0 {
            return Err(ConfigError::ZeroMinResponses);
        }

        let chart = &self.chart;
        if chart.width <= chart.margin * 2.0 || chart.height <= chart.margin * 2.0 {
            return Err(ConfigError::CanvasTooSmall {
                width: chart.width,
                height: chart.height,
                margin: chart.margin,
            });
        }

        if chart.grid_lines == 0 {
            return Err(ConfigError::NoGridLines);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_published_weights() {
        let config = Config::default();
        assert_eq!(config.scoring.fit_weight, 0.7);
        assert_eq!(config.scoring.switch_weight, 0.3);
        assert_eq!(config.scoring.min_responses, 2);
        assert_eq!(config.scoring.alternatives, 2);
        assert_eq!(config.chart.width, 680.0);
        assert_eq!(config.chart.height, 360.0);
        assert_eq!(config.chart.margin, 48.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.scoring.min_responses, 2);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[scoring]\nmin_responses = 5\n").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.scoring.min_responses, 5);
        assert_eq!(config.scoring.fit_weight, 0.7);
        assert_eq!(config.database.max_connections, 5);
    }

    #[test]
    fn rejects_negative_weight() {
        let mut config = Config::default();
        config.scoring.switch_weight = -0.1;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidWeight {
                name: "switch_weight",
                value: -0.1
            })
        );
    }

    #[test]
    fn rejects_more_than_two_alternatives() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[scoring]\nalternatives = 5\n").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("alternatives must be at most 2"), "{err:#}");

        let mut config = Config::default();
        config.scoring.alternatives = 1;
        assert!(config.validate().is_ok());
        config.scoring.alternatives = 3;
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooManyAlternatives { value: 3, max: 2 })
        );
    }

    #[test]
    fn rejects_zero_min_responses_and_tiny_canvas() {
        let mut config = Config::default();
        config.scoring.min_responses = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroMinResponses));

        let mut config = Config::default();
        config.chart.width = 90.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::CanvasTooSmall { .. })
        ));
    }
}
