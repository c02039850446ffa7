//! Geometry utilities: points, axis-aligned rectangles, and polygon tests.
//!
//! Everything here is plain value math with no knowledge of shapes, scenes,
//! or cameras. Rectangles are stored as `(left, top, width, height)` with
//! y growing downward, matching screen conventions.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::consts::MIN_EXTENT;

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// One of the four corners of an axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// All corners in enumeration order.
    pub const ALL: [Corner; 4] = [Corner::TopLeft, Corner::TopRight, Corner::BottomLeft, Corner::BottomRight];

    /// Whether this corner sits on the left edge.
    #[must_use]
    pub fn is_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft)
    }

    /// Whether this corner sits on the top edge.
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }

    /// The diagonally opposite corner.
    #[must_use]
    pub fn opposite(self) -> Self {
        self.mirror_x().mirror_y()
    }

    /// The corner on the same horizontal edge, other side.
    #[must_use]
    pub fn mirror_x(self) -> Self {
        match self {
            Self::TopLeft => Self::TopRight,
            Self::TopRight => Self::TopLeft,
            Self::BottomLeft => Self::BottomRight,
            Self::BottomRight => Self::BottomLeft,
        }
    }

    /// The corner on the same vertical edge, other side.
    #[must_use]
    pub fn mirror_y(self) -> Self {
        match self {
            Self::TopLeft => Self::BottomLeft,
            Self::TopRight => Self::BottomRight,
            Self::BottomLeft => Self::TopLeft,
            Self::BottomRight => Self::TopRight,
        }
    }
}

/// An axis-aligned rectangle in world (or screen) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Build a rectangle from two opposite corners given in any order.
    #[must_use]
    pub fn from_points(a: Point, b: Point) -> Self {
        Self::from_edges(a.x, a.y, b.x, b.y)
    }

    /// Build a rectangle from edge coordinates, swapping inverted pairs.
    #[must_use]
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        let (l, r) = if left > right { (right, left) } else { (left, right) };
        let (t, b) = if top > bottom { (bottom, top) } else { (top, bottom) };
        Self { left: l, top: t, width: r - l, height: b - t }
    }

    /// A square of side `size` centered on `center`.
    #[must_use]
    pub fn centered(center: Point, size: f64) -> Self {
        let half = size * 0.5;
        Self { left: center.x - half, top: center.y - half, width: size, height: size }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right() && p.y >= self.top && p.y <= self.bottom()
    }

    /// Position of one corner.
    #[must_use]
    pub fn corner(&self, corner: Corner) -> Point {
        let x = if corner.is_left() { self.left } else { self.right() };
        let y = if corner.is_top() { self.top } else { self.bottom() };
        Point::new(x, y)
    }

    /// All four corners, in [`Corner::ALL`] order.
    #[must_use]
    pub fn corners(&self) -> [(Corner, Point); 4] {
        Corner::ALL.map(|c| (c, self.corner(c)))
    }

    /// The same rectangle shifted by `delta`.
    #[must_use]
    pub fn translated(&self, delta: Point) -> Self {
        Self { left: self.left + delta.x, top: self.top + delta.y, ..*self }
    }

    /// Drag `corner` by `delta`, keeping the opposite corner fixed.
    ///
    /// Only the two edges touching `corner` move. Each moving edge is kept at
    /// least [`MIN_EXTENT`] away from its fixed partner, on whichever side it
    /// currently lies. If an edge is pushed past its partner the pair is
    /// swapped, flipping the rectangle through itself; the returned corner is
    /// the one now under the pointer.
    #[must_use]
    pub fn resize_corner(&self, corner: Corner, delta: Point) -> (Self, Corner) {
        let (mut left, mut right) = (self.left, self.right());
        let (mut top, mut bottom) = (self.top, self.bottom());

        if corner.is_left() {
            left = clamp_moving_edge(left + delta.x, right, -1.0);
        } else {
            right = clamp_moving_edge(right + delta.x, left, 1.0);
        }
        if corner.is_top() {
            top = clamp_moving_edge(top + delta.y, bottom, -1.0);
        } else {
            bottom = clamp_moving_edge(bottom + delta.y, top, 1.0);
        }

        let mut dragged = corner;
        if left > right {
            dragged = dragged.mirror_x();
        }
        if top > bottom {
            dragged = dragged.mirror_y();
        }
        let mut rect = Self::from_edges(left, top, right, bottom);
        // `fixed + MIN_EXTENT - fixed` can round just under MIN_EXTENT.
        rect.width = rect.width.max(MIN_EXTENT);
        rect.height = rect.height.max(MIN_EXTENT);
        (rect, dragged)
    }
}

/// Keep `moving` at least `MIN_EXTENT` from `fixed`.
///
/// `natural` is the sign of `moving - fixed` for an un-flipped rectangle
/// (`-1` for left/top edges, `+1` for right/bottom edges). A tie resolves to
/// the natural side.
fn clamp_moving_edge(moving: f64, fixed: f64, natural: f64) -> f64 {
    let offset = moving - fixed;
    if offset.abs() >= MIN_EXTENT {
        return moving;
    }
    let side = if offset == 0.0 { natural } else { offset.signum() };
    fixed + side * MIN_EXTENT
}

/// Tight axis-aligned bounding box of `points`, or `None` when empty.
#[must_use]
pub fn bounding_box(points: &[Point]) -> Option<Rect> {
    let first = points.first()?;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
    for p in &points[1..] {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    Some(Rect::from_edges(min_x, min_y, max_x, max_y))
}

/// Even-odd point-in-polygon test.
///
/// Casts a horizontal ray from `p` and counts edge crossings; the polygon is
/// implicitly closed. Fewer than three vertices never contain anything.
#[must_use]
pub fn point_in_polygon(p: Point, vertices: &[Point]) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for (i, vi) in vertices.iter().enumerate() {
        let vj = vertices[j];
        if (vi.y > p.y) != (vj.y > p.y) {
            let x_cross = (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
