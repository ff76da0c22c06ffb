//! Layout types and the placement engine.
//!
//! The [`engine::Engine`] turns a validated [`Radar`](crate::radar::Radar)
//! into a [`Layout`]: one [`Placement`] per item whose quadrant and ring
//! references resolve. Exporters consume the layout without recomputing any
//! geometry.

pub mod engine;

pub use engine::Engine;

use crate::{geometry::Point, radar::Radar};

/// The computed position and category echo for one item.
///
/// Positions are in the radar's own units, mathematical (y-up) orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement<'a> {
    name: &'a str,
    quadrant: &'a str,
    ring: &'a str,
    position: Point,
}

impl<'a> Placement<'a> {
    pub(crate) fn new(name: &'a str, quadrant: &'a str, ring: &'a str, position: Point) -> Self {
        Self {
            name,
            quadrant,
            ring,
            position,
        }
    }

    /// Returns the name of the placed item
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Returns the name of the quadrant the item was placed in
    pub fn quadrant(&self) -> &'a str {
        self.quadrant
    }

    /// Returns the name of the ring the item was placed in
    pub fn ring(&self) -> &'a str {
        self.ring
    }

    /// Returns the item's computed position
    pub fn position(&self) -> Point {
        self.position
    }
}

/// A calculated radar layout: placements plus the radar they were
/// computed from, which exporters need for ring and quadrant chrome.
#[derive(Debug)]
pub struct Layout<'a> {
    radar: &'a Radar,
    placements: Vec<Placement<'a>>,
}

impl<'a> Layout<'a> {
    pub(crate) fn new(radar: &'a Radar, placements: Vec<Placement<'a>>) -> Self {
        Self { radar, placements }
    }

    /// Returns the radar definition this layout was calculated from
    pub fn radar(&self) -> &'a Radar {
        self.radar
    }

    /// Returns the placements in item declaration order
    pub fn placements(&self) -> &[Placement<'a>] {
        &self.placements
    }
}
