//! Radar definition files.
//!
//! A radar is described by a TOML document listing the quadrant labels, the
//! rings (with outer radii and colors), the items, and the layout knobs:
//!
//! ```toml
//! title = "AI Tools Landscape"
//! seed = 42
//! angular_margin = 8.0
//! radial_margin = 0.25
//! quadrants = ["GenAI", "Dev tool", "Platforms", "Tools"]
//!
//! [[rings]]
//! name = "Approved"
//! radius = 2.0
//! color = "#4CAF50"
//!
//! [[items]]
//! name = "ChatGPT-4"
//! quadrant = "GenAI"
//! ring = "Approved"
//! ```
//!
//! Radii are in whatever unit the author prefers; margins share that unit,
//! so pixel-scale charts (radii 120-300) want a proportionally larger
//! `radial_margin` than data-unit charts.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use crate::{
    color::Color,
    error::RadarError,
    layout::Engine,
    radar::{Item, Radar, Ring},
};

/// Failures loading or interpreting a radar definition file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Radar definition not found: {0}")]
    MissingFile(PathBuf),

    #[error("Invalid radar definition: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Ring '{ring}': {message}")]
    InvalidColor { ring: String, message: String },
}

/// A radar definition as deserialized from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct RadarConfig {
    /// Chart title drawn above the radar
    #[serde(default)]
    title: Option<String>,

    /// Seed fixing the pseudorandom placement stream
    #[serde(default)]
    seed: u64,

    /// Degrees kept clear at each quadrant boundary
    #[serde(default = "default_angular_margin")]
    angular_margin: f32,

    /// Distance kept clear at each ring boundary, in ring-radius units
    #[serde(default = "default_radial_margin")]
    radial_margin: f32,

    /// Quadrant labels in counter-clockwise order from the positive x-axis
    quadrants: Vec<String>,

    /// Rings in nesting order, innermost first
    rings: Vec<RingConfig>,

    /// Items to place on the radar
    #[serde(default)]
    items: Vec<ItemConfig>,
}

fn default_angular_margin() -> f32 {
    Engine::DEFAULT_ANGULAR_MARGIN
}

fn default_radial_margin() -> f32 {
    Engine::DEFAULT_RADIAL_MARGIN
}

#[derive(Debug, Clone, Deserialize)]
struct RingConfig {
    name: String,
    radius: f32,
    color: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ItemConfig {
    name: String,
    quadrant: String,
    ring: String,
}

impl RadarConfig {
    /// Load a radar definition from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RadarError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(RadarError::Config(ConfigError::MissingFile(
                path.to_path_buf(),
            )));
        }

        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)
            .map_err(ConfigError::from)
            .map_err(RadarError::Config)?;

        Ok(config)
    }

    /// A placement engine configured with this definition's seed and margins
    pub fn engine(&self) -> Engine {
        Engine::new(self.seed)
            .with_angular_margin(self.angular_margin)
            .with_radial_margin(self.radial_margin)
    }

    /// Build the radar model from this definition.
    ///
    /// Ring colors are parsed here; a missing color falls back to the
    /// default. Structural validation happens later, when the engine runs.
    pub fn to_radar(&self) -> Result<Radar, ConfigError> {
        let rings = self
            .rings
            .iter()
            .map(|ring| {
                let color = match &ring.color {
                    Some(color_str) => {
                        Color::new(color_str).map_err(|message| ConfigError::InvalidColor {
                            ring: ring.name.clone(),
                            message,
                        })?
                    }
                    None => Color::default(),
                };
                Ok(Ring::new(ring.name.clone(), ring.radius, color))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        let items = self
            .items
            .iter()
            .map(|item| Item::new(item.name.clone(), item.quadrant.clone(), item.ring.clone()))
            .collect();

        Ok(Radar::new(
            self.title.clone(),
            self.quadrants.clone(),
            rings,
            items,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"
title = "AI Tools Landscape"
seed = 42
quadrants = ["GenAI", "Dev tool", "Platforms", "Tools"]

[[rings]]
name = "Approved"
radius = 2.0
color = "#4CAF50"

[[rings]]
name = "Testing"
radius = 3.0

[[items]]
name = "ChatGPT-4"
quadrant = "GenAI"
ring = "Approved"
"##;

    #[test]
    fn test_parse_sample() {
        let config: RadarConfig = toml::from_str(SAMPLE).unwrap();
        assert_eq!(config.title.as_deref(), Some("AI Tools Landscape"));
        assert_eq!(config.seed, 42);
        assert_eq!(config.quadrants.len(), 4);
        assert_eq!(config.rings.len(), 2);
        assert_eq!(config.items.len(), 1);
    }

    #[test]
    fn test_margins_default() {
        let config: RadarConfig = toml::from_str(SAMPLE).unwrap();
        assert_eq!(config.angular_margin, Engine::DEFAULT_ANGULAR_MARGIN);
        assert_eq!(config.radial_margin, Engine::DEFAULT_RADIAL_MARGIN);
    }

    #[test]
    fn test_to_radar() {
        let config: RadarConfig = toml::from_str(SAMPLE).unwrap();
        let radar = config.to_radar().unwrap();

        assert_eq!(radar.title(), Some("AI Tools Landscape"));
        assert_eq!(radar.rings().len(), 2);
        assert_eq!(radar.items().len(), 1);
        assert!(radar.validate().is_ok());
    }

    #[test]
    fn test_invalid_color_reported_with_ring_name() {
        let source = SAMPLE.replace("#4CAF50", "chartreuse-ish");
        let config: RadarConfig = toml::from_str(&source).unwrap();

        let err = config.to_radar().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor { ref ring, .. } if ring == "Approved"));
    }

    #[test]
    fn test_missing_quadrants_is_a_parse_error() {
        let source = "rings = []";
        assert!(toml::from_str::<RadarConfig>(source).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = RadarConfig::load("definitely/not/here.toml").unwrap_err();
        assert!(matches!(
            err,
            RadarError::Config(ConfigError::MissingFile(_))
        ));
    }
}
