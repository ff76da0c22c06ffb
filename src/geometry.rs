//! Geometric primitives shared by the layout engine and the exporters.
//!
//! All chart geometry lives in a polar coordinate system centered on the
//! origin, with angles measured counter-clockwise from the positive x-axis
//! in mathematical (y-up) orientation. Rendering backends that need screen
//! coordinates flip the y-axis themselves.

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a point from polar coordinates, with the angle in degrees
    pub fn from_polar(radius: f32, angle_deg: f32) -> Self {
        let angle_rad = angle_deg.to_radians();
        Self {
            x: radius * angle_rad.cos(),
            y: radius * angle_rad.sin(),
        }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Returns the angle from the origin to this point in degrees,
    /// normalized to the range `[0, 360)`
    pub fn angle_deg(self) -> f32 {
        let angle = self.y.atan2(self.x).to_degrees();
        if angle < 0.0 { angle + 360.0 } else { angle }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns a new Size with uniform padding added to both dimensions
    pub fn add_padding(self, padding: f32) -> Self {
        Self {
            width: padding.mul_add(2.0, self.width),
            height: padding.mul_add(2.0, self.height),
        }
    }
}
