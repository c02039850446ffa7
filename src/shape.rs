//! Shape model: the editable entities owned by a [`crate::scene::Scene`].
//!
//! A shape's geometry is a tagged variant. Rectangles, circles, and ellipses
//! are described entirely by their bounds; a polygon is described by its
//! vertices and carries a bounds cache that is recomputed after every vertex
//! change. All kind-specific behavior (hit-testing, resizing, the circle's
//! square constraint) dispatches on [`Geometry`].

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{
    CIRCLE_STROKE, DEFAULT_CIRCLE_BOUNDS, DEFAULT_ELLIPSE_BOUNDS, DEFAULT_POLYGON_VERTICES, DEFAULT_RECT_BOUNDS,
    ELLIPSE_STROKE, MAX_POLYGON_SIDES, POLYGON_STROKE, RECT_STROKE,
};
use crate::geometry::{Corner, Point, Rect, bounding_box, point_in_polygon};

/// Unique identifier for a shape.
pub type ShapeId = Uuid;

/// The kind of a shape. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Axis-aligned rectangle.
    Rectangle,
    /// Circle inscribed in square bounds.
    Circle,
    /// Ellipse inscribed in the bounds.
    Ellipse,
    /// Closed polygon through an ordered vertex list.
    Polygon,
}

impl ShapeKind {
    /// Stroke color given to a new shape of this kind.
    #[must_use]
    pub fn default_stroke(self) -> &'static str {
        match self {
            Self::Rectangle => RECT_STROKE,
            Self::Circle => CIRCLE_STROKE,
            Self::Ellipse => ELLIPSE_STROKE,
            Self::Polygon => POLYGON_STROKE,
        }
    }
}

/// A closed polygon with at least three vertices and a cached tight bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
    bounds: Rect,
}

impl Polygon {
    /// Build a polygon, or `None` when fewer than three vertices are given.
    #[must_use]
    pub fn new(vertices: Vec<Point>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        let bounds = bounding_box(&vertices)?;
        Some(Self { vertices, bounds })
    }

    /// `n` vertices evenly spaced on a circle, starting straight up and
    /// proceeding clockwise on screen. `None` unless `3 <= n <= MAX_POLYGON_SIDES`.
    #[must_use]
    pub fn regular(n: usize, center: Point, radius: f64) -> Option<Self> {
        if !(3..=MAX_POLYGON_SIDES).contains(&n) {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let step = std::f64::consts::TAU / n as f64;
        let vertices = (0..n)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let angle = -std::f64::consts::FRAC_PI_2 + step * i as f64;
                Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
            })
            .collect();
        Self::new(vertices)
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    fn translate(&mut self, delta: Point) {
        for v in &mut self.vertices {
            *v = *v + delta;
        }
        self.refresh_bounds();
    }

    fn move_vertex(&mut self, index: usize, delta: Point) -> bool {
        let Some(v) = self.vertices.get_mut(index) else {
            return false;
        };
        *v = *v + delta;
        self.refresh_bounds();
        true
    }

    fn refresh_bounds(&mut self) {
        if let Some(bounds) = bounding_box(&self.vertices) {
            self.bounds = bounds;
        }
    }
}

/// Kind-specific geometry of a shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Rectangle(Rect),
    Circle(Rect),
    Ellipse(Rect),
    Polygon(Polygon),
}

impl Geometry {
    /// Default placement for a new shape of `kind`.
    ///
    /// The defaults do not overlap, so freshly added shapes are all visible.
    #[must_use]
    pub fn default_for(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Rectangle => Self::Rectangle(DEFAULT_RECT_BOUNDS),
            ShapeKind::Circle => Self::Circle(DEFAULT_CIRCLE_BOUNDS),
            ShapeKind::Ellipse => Self::Ellipse(DEFAULT_ELLIPSE_BOUNDS),
            ShapeKind::Polygon => {
                let vertices = DEFAULT_POLYGON_VERTICES.to_vec();
                let bounds = bounding_box(&vertices).unwrap_or_default();
                Self::Polygon(Polygon { vertices, bounds })
            }
        }
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Rectangle(_) => ShapeKind::Rectangle,
            Self::Circle(_) => ShapeKind::Circle,
            Self::Ellipse(_) => ShapeKind::Ellipse,
            Self::Polygon(_) => ShapeKind::Polygon,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Rectangle(r) | Self::Circle(r) | Self::Ellipse(r) => *r,
            Self::Polygon(p) => p.bounds(),
        }
    }
}

/// A single editable shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    /// Unique identifier for this shape.
    pub id: ShapeId,
    /// Stroke color as a CSS color string. Display only.
    pub stroke: String,
    geometry: Geometry,
}

impl Shape {
    /// Create a shape with a fresh id.
    #[must_use]
    pub fn new(geometry: Geometry, stroke: impl Into<String>) -> Self {
        Self { id: Uuid::new_v4(), stroke: stroke.into(), geometry }
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Axis-aligned bounds in world coordinates. Derived for polygons.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.geometry.bounds()
    }

    /// Polygon vertices; empty for every other kind.
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        match &self.geometry {
            Geometry::Polygon(p) => p.vertices(),
            _ => &[],
        }
    }

    /// A copy with a new id, shifted by `offset`.
    #[must_use]
    pub fn duplicate(&self, offset: Point) -> Self {
        let mut copy = Self::new(self.geometry.clone(), self.stroke.clone());
        copy.translate(offset);
        copy
    }

    /// Whether the body of this shape covers `p`.
    ///
    /// Bounds-based for rectangles, circles, and ellipses (inclusive);
    /// even-odd ray casting for polygons.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        match &self.geometry {
            Geometry::Rectangle(r) | Geometry::Circle(r) | Geometry::Ellipse(r) => r.contains(p),
            Geometry::Polygon(poly) => point_in_polygon(p, poly.vertices()),
        }
    }

    /// Translate the whole shape by a world-space delta.
    pub fn translate(&mut self, delta: Point) {
        match &mut self.geometry {
            Geometry::Rectangle(r) | Geometry::Circle(r) | Geometry::Ellipse(r) => *r = r.translated(delta),
            Geometry::Polygon(p) => p.translate(delta),
        }
    }

    /// Drag one corner of the bounds by `delta`; see [`Rect::resize_corner`].
    ///
    /// Circles are then forced square: the side is the smaller extent and the
    /// dragged corner is re-derived from the fixed opposite corner. Polygons
    /// are not resized. Returns the corner now under the pointer.
    pub fn resize(&mut self, corner: Corner, delta: Point) -> Corner {
        match &mut self.geometry {
            Geometry::Rectangle(r) | Geometry::Ellipse(r) => {
                let (next, dragged) = r.resize_corner(corner, delta);
                *r = next;
                dragged
            }
            Geometry::Circle(r) => {
                let pivot = r.corner(corner.opposite());
                let (next, dragged) = r.resize_corner(corner, delta);
                let size = next.width.min(next.height);
                let moved = next.corner(dragged);
                let left = if moved.x < pivot.x { pivot.x - size } else { pivot.x };
                let top = if moved.y < pivot.y { pivot.y - size } else { pivot.y };
                // Width and height share one value so the square is exact.
                *r = Rect::new(left, top, size, size);
                dragged
            }
            Geometry::Polygon(_) => corner,
        }
    }

    /// Move one polygon vertex by `delta` and refresh the bounds.
    ///
    /// Returns false for non-polygons or an out-of-range index.
    pub fn move_vertex(&mut self, index: usize, delta: Point) -> bool {
        match &mut self.geometry {
            Geometry::Polygon(p) => p.move_vertex(index, delta),
            _ => false,
        }
    }
}
