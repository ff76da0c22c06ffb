//! The radar data model: rings, quadrants, items, and the validation
//! rules that must hold before a layout can be calculated.
//!
//! A radar partitions the plane twice over. The ordered ring list slices it
//! into concentric annuli: each ring's inner radius is the previous ring's
//! outer radius (0 for the first), so the annuli tile the disc without gaps.
//! The four quadrants slice it angularly: quadrant `i` owns the sector
//! `[i*90°, (i+1)*90°)`, counter-clockwise from the positive x-axis, so four
//! quadrants always tile the full circle.

use thiserror::Error;

use crate::color::Color;

/// Angular width of a single quadrant, in degrees.
pub const QUADRANT_SPAN_DEG: f32 = 90.0;

/// Number of quadrants a radar must have.
pub const QUADRANT_COUNT: usize = 4;

/// Validation failures for a radar definition.
///
/// These are fatal: a radar that fails validation cannot produce a layout
/// and the definition must be fixed by the caller. Contrast with items whose
/// quadrant or ring references do not resolve, which are skipped per-item
/// rather than rejected wholesale.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("expected exactly 4 quadrants, got {0}")]
    QuadrantCount(usize),

    #[error("duplicate quadrant name '{0}'")]
    DuplicateQuadrant(String),

    #[error("a radar needs at least one ring")]
    NoRings,

    #[error("ring '{ring}' has radius {radius} which does not exceed the previous boundary {previous}")]
    RingOrder {
        ring: String,
        radius: f32,
        previous: f32,
    },

    #[error("duplicate ring name '{0}'")]
    DuplicateRing(String),

    #[error("duplicate item name '{0}'")]
    DuplicateItem(String),
}

/// A concentric annular band representing a status category.
///
/// Only the outer radius is stored; the inner radius is derived from the
/// ring's position in the radar's ordered ring list.
#[derive(Debug, Clone)]
pub struct Ring {
    name: String,
    radius: f32,
    color: Color,
}

impl Ring {
    /// Creates a ring with the given name, outer radius, and display color
    pub fn new(name: impl Into<String>, radius: f32, color: Color) -> Self {
        Self {
            name: name.into(),
            radius,
            color,
        }
    }

    /// Returns the ring's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ring's outer radius
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Returns the ring's display color
    pub fn color(&self) -> &Color {
        &self.color
    }
}

/// A 90° angular sector representing a topical category.
#[derive(Debug, Clone)]
pub struct Quadrant {
    name: String,
    index: usize,
}

impl Quadrant {
    /// Returns the quadrant's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the angular sector owned by this quadrant
    pub fn sector(&self) -> Sector {
        let start = self.index as f32 * QUADRANT_SPAN_DEG;
        Sector {
            start,
            end: start + QUADRANT_SPAN_DEG,
        }
    }
}

/// A labeled entry assigned to one quadrant and one ring, both by name.
#[derive(Debug, Clone)]
pub struct Item {
    name: String,
    quadrant: String,
    ring: String,
}

impl Item {
    /// Creates an item assigned to the named quadrant and ring
    pub fn new(
        name: impl Into<String>,
        quadrant: impl Into<String>,
        ring: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quadrant: quadrant.into(),
            ring: ring.into(),
        }
    }

    /// Returns the item's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name of the item's assigned quadrant
    pub fn quadrant(&self) -> &str {
        &self.quadrant
    }

    /// Returns the name of the item's assigned ring
    pub fn ring(&self) -> &str {
        &self.ring
    }
}

/// The annular band `[inner, outer]` a ring occupies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Annulus {
    inner: f32,
    outer: f32,
}

impl Annulus {
    /// Returns the inner radius of the band
    pub fn inner(self) -> f32 {
        self.inner
    }

    /// Returns the outer radius of the band
    pub fn outer(self) -> f32 {
        self.outer
    }
}

/// The angular sector `[start, end]` a quadrant occupies, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector {
    start: f32,
    end: f32,
}

impl Sector {
    /// Returns the starting angle of the sector in degrees
    pub fn start(self) -> f32 {
        self.start
    }

    /// Returns the ending angle of the sector in degrees
    pub fn end(self) -> f32 {
        self.end
    }
}

/// A complete radar definition: title, quadrants, rings, and items.
#[derive(Debug, Clone)]
pub struct Radar {
    title: Option<String>,
    quadrants: Vec<Quadrant>,
    rings: Vec<Ring>,
    items: Vec<Item>,
}

impl Radar {
    /// Creates a radar from ordered quadrant names, rings, and items.
    ///
    /// Quadrant indices follow list order: the first name owns the sector
    /// starting at 0°, and each subsequent name rotates 90° counter-clockwise.
    pub fn new(
        title: Option<String>,
        quadrant_names: Vec<String>,
        rings: Vec<Ring>,
        items: Vec<Item>,
    ) -> Self {
        let quadrants = quadrant_names
            .into_iter()
            .enumerate()
            .map(|(index, name)| Quadrant { name, index })
            .collect();

        Self {
            title,
            quadrants,
            rings,
            items,
        }
    }

    /// Returns the chart title, if one was configured
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the quadrants in declaration order
    pub fn quadrants(&self) -> &[Quadrant] {
        &self.quadrants
    }

    /// Returns the rings in declaration order, innermost first
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// Returns the items in declaration order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the outer radius of the outermost ring, or 0 with no rings
    pub fn max_radius(&self) -> f32 {
        self.rings.last().map_or(0.0, Ring::radius)
    }

    /// Resolves a ring name to the annulus it occupies.
    ///
    /// The inner radius is accumulated from the preceding rings in
    /// declaration order. Returns `None` for an unknown name.
    pub fn annulus(&self, ring_name: &str) -> Option<Annulus> {
        let mut inner = 0.0;
        for ring in &self.rings {
            if ring.name() == ring_name {
                return Some(Annulus {
                    inner,
                    outer: ring.radius(),
                });
            }
            inner = ring.radius();
        }
        None
    }

    /// Resolves a quadrant name to the angular sector it occupies.
    /// Returns `None` for an unknown name.
    pub fn sector(&self, quadrant_name: &str) -> Option<Sector> {
        self.quadrants
            .iter()
            .find(|quadrant| quadrant.name() == quadrant_name)
            .map(Quadrant::sector)
    }

    /// Checks the structural invariants a radar must satisfy before layout.
    ///
    /// With index-derived 90° sectors, four quadrants tile the full circle by
    /// construction, so the quadrant check reduces to counting. Ring radii
    /// must be strictly increasing in declaration order starting above zero,
    /// which makes the annuli non-overlapping and gap-free. Quadrant, ring,
    /// and item names must each be unique.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.quadrants.len() != QUADRANT_COUNT {
            return Err(ValidationError::QuadrantCount(self.quadrants.len()));
        }

        for (i, quadrant) in self.quadrants.iter().enumerate() {
            if self.quadrants[..i].iter().any(|q| q.name() == quadrant.name()) {
                return Err(ValidationError::DuplicateQuadrant(
                    quadrant.name().to_string(),
                ));
            }
        }

        if self.rings.is_empty() {
            return Err(ValidationError::NoRings);
        }

        let mut previous = 0.0;
        for ring in &self.rings {
            if ring.radius() <= previous {
                return Err(ValidationError::RingOrder {
                    ring: ring.name().to_string(),
                    radius: ring.radius(),
                    previous,
                });
            }
            previous = ring.radius();
        }

        for (i, ring) in self.rings.iter().enumerate() {
            if self.rings[..i].iter().any(|r| r.name() == ring.name()) {
                return Err(ValidationError::DuplicateRing(ring.name().to_string()));
            }
        }

        for (i, item) in self.items.iter().enumerate() {
            if self.items[..i].iter().any(|other| other.name() == item.name()) {
                return Err(ValidationError::DuplicateItem(item.name().to_string()));
            }
        }

        Ok(())
    }
}
