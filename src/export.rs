//! Exporters turn a calculated [`Layout`](crate::layout::Layout) into a
//! visual artifact. The engine's output is backend-agnostic; anything that
//! can draw circles, lines, and text can consume it.

pub mod svg;

mod text;

use thiserror::Error;

use crate::layout::Layout;

/// A rendering backend for radar layouts.
pub trait Exporter {
    /// Render the layout and write the result to the exporter's destination
    fn export_layout(&self, layout: &Layout) -> Result<(), Error>;
}

/// Failures while rendering or writing an exported chart.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
