//! Field and point models.
//!
//! A field is an axis-aligned rectangle of land serviced by exactly one
//! machine. Coordinates are in abstract distance units; the planner only
//! assumes they share a unit with the configured machine speed.

use serde::{Deserialize, Serialize};

/// A 2-D point, used both as an absolute coordinate and as a path waypoint.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The depot every machine starts from.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A rectangular field.
///
/// `(x, y)` is the rectangle origin; the field extends `width` along x and
/// `height` along y. Identity is positional: `id` is carried through for
/// callers but never interpreted by the planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Optional caller-supplied identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Origin x.
    pub x: f64,
    /// Origin y.
    pub y: f64,
    /// Extent along x.
    pub width: f64,
    /// Extent along y.
    pub height: f64,
}

impl Field {
    /// Creates a field without an identifier.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: None,
            x,
            y,
            width,
            height,
        }
    }

    /// Attaches a caller identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Area (`width * height`), used as the workload measure.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Geometric center, the field's representative location for routing.
    #[inline]
    pub fn centroid(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether every coordinate is finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}
