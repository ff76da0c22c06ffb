//! SVG rendering backend.
//!
//! Draws the chart chrome (rings, crosshair, category labels, title) and one
//! labeled box per placement. The layout's mathematical y-up coordinates are
//! flipped to screen orientation here and nowhere else; the chart is rescaled
//! so the outermost ring always spans the same pixel radius regardless of the
//! radar's own units.

use std::{fs::File, io::Write};

use log::{debug, error, info};
use svg::{
    Document,
    node::element::{Circle, Group, Line, Rectangle, Text},
};

use crate::{
    export::{self, Exporter, text},
    geometry::Point,
    layout::{Layout, Placement},
    radar::Ring,
};

/// Pixel radius of the outermost ring in the rendered document.
const CHART_RADIUS: f32 = 300.0;

/// Pixel margin around the chart, leaving room for quadrant labels.
const CHART_MARGIN: f32 = 60.0;

/// Font size for item labels, in pixels.
const ITEM_FONT_SIZE: f32 = 12.0;

/// Padding between an item label and its background box, in pixels.
const ITEM_LABEL_PADDING: f32 = 4.0;

/// SVG exporter writing the rendered chart to a file.
pub struct Svg {
    file_name: String,
}

impl Svg {
    pub fn new(file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
        }
    }

    /// Pixels per radar unit for this layout
    fn scale(layout: &Layout) -> f32 {
        let max_radius = layout.radar().max_radius();
        if max_radius > 0.0 {
            CHART_RADIUS / max_radius
        } else {
            1.0
        }
    }

    /// Map a layout point to screen coordinates, flipping the y-axis
    fn to_screen(center: f32, scale: f32, point: Point) -> (f32, f32) {
        (
            point.x().mul_add(scale, center),
            point.y().mul_add(-scale, center),
        )
    }

    fn render_ring(center: f32, scale: f32, ring: &Ring) -> Circle {
        Circle::new()
            .set("cx", center)
            .set("cy", center)
            .set("r", ring.radius() * scale)
            .set("fill", ring.color())
            .set("fill-opacity", 0.25)
            .set("stroke", "black")
            .set("stroke-width", 1.0)
    }

    fn render_item(center: f32, scale: f32, placement: &Placement) -> Group {
        let (x, y) = Self::to_screen(center, scale, placement.position());

        let text_size =
            text::calculate_text_size(placement.name(), ITEM_FONT_SIZE).add_padding(ITEM_LABEL_PADDING);

        let bg = Rectangle::new()
            .set("x", x - text_size.width() / 2.0)
            .set("y", y - text_size.height() / 2.0)
            .set("width", text_size.width())
            .set("height", text_size.height())
            .set("fill", "white")
            .set("stroke", "black")
            .set("stroke-width", 0.5)
            .set("rx", 3.0);

        let label = Text::new(placement.name())
            .set("x", x)
            .set("y", y)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle")
            .set("font-family", "Arial")
            .set("font-size", ITEM_FONT_SIZE);

        Group::new().add(bg).add(label)
    }

    fn render(&self, layout: &Layout) -> Document {
        let radar = layout.radar();
        let scale = Self::scale(layout);
        let size = 2.0 * (CHART_RADIUS + CHART_MARGIN);
        let center = size / 2.0;

        let mut doc = Document::new()
            .set("width", size)
            .set("height", size)
            .set("viewBox", (0.0, 0.0, size, size));

        doc = doc.add(
            Rectangle::new()
                .set("width", size)
                .set("height", size)
                .set("fill", "white"),
        );

        // Rings painted outermost first so each annulus stays visible
        for ring in radar.rings().iter().rev() {
            doc = doc.add(Self::render_ring(center, scale, ring));
        }

        // Quadrant crosshair through the origin
        doc = doc
            .add(
                Line::new()
                    .set("x1", center - CHART_RADIUS)
                    .set("y1", center)
                    .set("x2", center + CHART_RADIUS)
                    .set("y2", center)
                    .set("stroke", "black")
                    .set("stroke-width", 1.0),
            )
            .add(
                Line::new()
                    .set("x1", center)
                    .set("y1", center - CHART_RADIUS)
                    .set("x2", center)
                    .set("y2", center + CHART_RADIUS)
                    .set("stroke", "black")
                    .set("stroke-width", 1.0),
            );

        // Ring labels at each annulus midpoint on the upper y-axis
        let mut inner = 0.0;
        for ring in radar.rings() {
            let mid = (inner + ring.radius()) / 2.0 * scale;
            doc = doc.add(
                Text::new(ring.name())
                    .set("x", center)
                    .set("y", center - mid)
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "middle")
                    .set("font-family", "Arial")
                    .set("font-size", 14)
                    .set("font-weight", "bold"),
            );
            inner = ring.radius();
        }

        // Quadrant labels on the sector bisectors, outside the chart
        for quadrant in radar.quadrants() {
            let sector = quadrant.sector();
            let bisector = (sector.start() + sector.end()) / 2.0;
            let position = Point::from_polar(CHART_RADIUS + CHART_MARGIN / 2.0, bisector);
            let (x, y) = Self::to_screen(center, 1.0, position);

            doc = doc.add(
                Text::new(quadrant.name())
                    .set("x", x)
                    .set("y", y)
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "middle")
                    .set("font-family", "Arial")
                    .set("font-size", 16)
                    .set("font-weight", "bold"),
            );
        }

        if let Some(title) = radar.title() {
            doc = doc.add(
                Text::new(title)
                    .set("x", center)
                    .set("y", 28.0)
                    .set("text-anchor", "middle")
                    .set("font-family", "Arial")
                    .set("font-size", 20)
                    .set("font-weight", "bold"),
            );
        }

        for placement in layout.placements() {
            doc = doc.add(Self::render_item(center, scale, placement));
        }

        doc
    }

    /// Writes an SVG document to the exporter's file
    fn write_document(&self, doc: Document) -> Result<(), export::Error> {
        info!(file_name = self.file_name; "Creating SVG file");
        let f = match File::create(&self.file_name) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name = self.file_name, err:err; "Failed to create SVG file");
                return Err(export::Error::Io(err));
            }
        };

        if let Err(err) = write!(&f, "{doc}") {
            error!(file_name = self.file_name, err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }

        Ok(())
    }
}

impl Exporter for Svg {
    fn export_layout(&self, layout: &Layout) -> Result<(), export::Error> {
        let doc = self.render(layout);
        debug!("SVG document rendered");

        self.write_document(doc)
    }
}
