//! Error types for radar chart generation.
//!
//! This module provides the main error type [`RadarError`] which wraps the
//! error conditions that can occur while loading a definition, validating
//! the radar, and exporting the chart.

use std::io;

use thiserror::Error;

use crate::{config::ConfigError, radar::ValidationError};

/// The main error type for radar chart operations.
#[derive(Debug, Error)]
pub enum RadarError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid radar: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for RadarError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
