//! The placement engine: deterministic jittered positions inside each
//! item's annulus-sector cell.
//!
//! Every call seeds its own [`StdRng`] from the engine's seed, so repeated
//! calls with the same radar produce identical layouts and independent
//! callers can run concurrently without sharing generator state. The stream
//! is consumed in a fixed order: items are visited in declaration order,
//! items with unresolved references are filtered out before any draw, and
//! each surviving item consumes exactly one angle draw followed by one
//! radius draw.

use log::warn;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    geometry::Point,
    layout::{Layout, Placement},
    radar::{Radar, ValidationError},
};

/// Placement engine for radar layouts.
///
/// Margins keep labels clear of ring and quadrant boundaries: the angular
/// margin (degrees) shrinks each 90° sector from both ends, the radial
/// margin (radar units) shrinks each annulus from both edges.
#[derive(Debug, Clone, Copy)]
pub struct Engine {
    seed: u64,
    angular_margin: f32,
    radial_margin: f32,
}

impl Engine {
    /// Default clearance from quadrant boundaries, in degrees.
    pub const DEFAULT_ANGULAR_MARGIN: f32 = 8.0;

    /// Default clearance from ring boundaries, in radar units.
    pub const DEFAULT_RADIAL_MARGIN: f32 = 0.25;

    /// Create an engine with the given seed and default margins
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            angular_margin: Self::DEFAULT_ANGULAR_MARGIN,
            radial_margin: Self::DEFAULT_RADIAL_MARGIN,
        }
    }

    /// Set the clearance kept from each quadrant boundary, in degrees
    pub fn with_angular_margin(mut self, margin: f32) -> Self {
        self.angular_margin = margin;
        self
    }

    /// Set the clearance kept from each ring boundary, in radar units.
    /// Use a value proportional to the ring radii scale (0.25 for data-unit
    /// charts, ~20 for pixel-unit charts).
    pub fn with_radial_margin(mut self, margin: f32) -> Self {
        self.radial_margin = margin;
        self
    }

    /// Calculate a layout for the given radar.
    ///
    /// Fails only if the radar itself is invalid (see
    /// [`Radar::validate`]). Items whose quadrant or ring name does not
    /// resolve are logged and skipped, not errors; the output preserves the
    /// declaration order of the surviving items.
    pub fn calculate<'a>(&self, radar: &'a Radar) -> Result<Layout<'a>, ValidationError> {
        radar.validate()?;

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut placements = Vec::with_capacity(radar.items().len());

        for item in radar.items() {
            let (Some(sector), Some(annulus)) =
                (radar.sector(item.quadrant()), radar.annulus(item.ring()))
            else {
                warn!(
                    item = item.name(),
                    quadrant = item.quadrant(),
                    ring = item.ring();
                    "Skipping item with unresolved quadrant or ring",
                );
                continue;
            };

            let angle = draw_in_span(
                &mut rng,
                sector.start() + self.angular_margin,
                sector.end() - self.angular_margin,
            );
            let radius = draw_in_span(
                &mut rng,
                annulus.inner() + self.radial_margin,
                annulus.outer() - self.radial_margin,
            );

            placements.push(Placement::new(
                item.name(),
                item.quadrant(),
                item.ring(),
                Point::from_polar(radius, angle),
            ));
        }

        Ok(Layout::new(radar, placements))
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Draw uniformly from `[lo, hi)`, consuming exactly one sample.
///
/// A collapsed or inverted span resolves to its midpoint instead of failing,
/// so an over-wide margin still yields a position; the unit sample is drawn
/// either way to keep the stream consumption per item fixed.
fn draw_in_span(rng: &mut StdRng, lo: f32, hi: f32) -> f32 {
    let unit: f32 = rng.random();
    if hi > lo {
        unit.mul_add(hi - lo, lo)
    } else {
        (lo + hi) / 2.0
    }
}
