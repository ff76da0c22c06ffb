//! Techradar - technology radar charts with deterministic layout.
//!
//! Items are placed into four angular quadrants and concentric status rings
//! with seeded jitter, then rendered to SVG. The placement engine is a pure
//! function of the radar definition and its seed, so a definition always
//! renders the same chart.

pub mod color;
pub mod config;
pub mod export;
pub mod geometry;
pub mod layout;
pub mod radar;

mod error;

pub use error::RadarError;

use clap::Parser;
use log::{debug, info};

use config::RadarConfig;
use export::Exporter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Path to the radar definition file
    #[arg(help = "Path to the radar definition file")]
    pub file: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "radar.svg")]
    pub output: String,
}

pub fn run(cfg: &Config) -> Result<(), RadarError> {
    info!(
        input_path = cfg.file,
        output_path = cfg.output;
        "Rendering radar chart",
    );

    // Load the radar definition
    let radar_config = RadarConfig::load(&cfg.file)?;
    debug!("Radar definition loaded");

    // Build the radar model (parses ring colors)
    let radar = radar_config.to_radar().map_err(RadarError::Config)?;
    debug!(
        rings_len = radar.rings().len(),
        items_len = radar.items().len();
        "Radar model built",
    );

    // Calculate placements; validation runs inside the engine
    info!("Calculating radar layout");
    let engine = radar_config.engine();
    let layout = engine.calculate(&radar)?;
    debug!(placements_len = layout.placements().len(); "Layout calculated");

    // Export the chart
    info!("Exporting radar chart to SVG");
    let svg_exporter = export::svg::Svg::new(&cfg.output);
    svg_exporter.export_layout(&layout)?;

    info!(output_file = cfg.output; "SVG exported successfully");

    Ok(())
}
