//! Shared numeric constants for the editing engine.

use crate::geometry::{Point, Rect};

// ── Hit-testing ─────────────────────────────────────────────────

/// Side length of a vertex or corner handle, in screen pixels.
pub const HANDLE_SIZE_PX: f64 = 8.0;

// ── Geometry constraints ────────────────────────────────────────

/// Smallest width or height a corner resize may produce, in world units.
pub const MIN_EXTENT: f64 = 5.0;

/// Lower bound of the camera zoom.
pub const MIN_SCALE: f64 = 0.05;

/// Upper bound of the camera zoom.
pub const MAX_SCALE: f64 = 40.0;

/// World-space offset applied to a duplicated shape.
pub const DUPLICATE_OFFSET: Point = Point { x: 20.0, y: 20.0 };

/// Default multiplicative zoom step for one wheel notch.
pub const DEFAULT_ZOOM_STEP: f64 = 1.1;

/// Most sides a regular polygon may be created with.
pub const MAX_POLYGON_SIDES: usize = 1024;

// ── Default placements ──────────────────────────────────────────

/// Default bounds of a new rectangle.
pub const DEFAULT_RECT_BOUNDS: Rect = Rect { left: 100.0, top: 100.0, width: 120.0, height: 80.0 };

/// Default bounds of a new circle.
pub const DEFAULT_CIRCLE_BOUNDS: Rect = Rect { left: 280.0, top: 100.0, width: 100.0, height: 100.0 };

/// Default bounds of a new ellipse.
pub const DEFAULT_ELLIPSE_BOUNDS: Rect = Rect { left: 440.0, top: 100.0, width: 160.0, height: 90.0 };

/// Vertices of a new free-form polygon.
pub const DEFAULT_POLYGON_VERTICES: [Point; 4] = [
    Point { x: 950.0, y: 100.0 },
    Point { x: 1050.0, y: 120.0 },
    Point { x: 1030.0, y: 200.0 },
    Point { x: 960.0, y: 180.0 },
];

/// Center of a new regular polygon.
pub const REGULAR_POLYGON_CENTER: Point = Point { x: 800.0, y: 150.0 };

/// Circumradius of a new regular polygon.
pub const REGULAR_POLYGON_RADIUS: f64 = 50.0;

// ── Stroke colors ───────────────────────────────────────────────

pub const RECT_STROKE: &str = "#2E6BD9";
pub const CIRCLE_STROKE: &str = "#D94B4B";
pub const ELLIPSE_STROKE: &str = "#3FA34D";
pub const POLYGON_STROKE: &str = "#8E44AD";
pub const REGULAR_POLYGON_STROKE: &str = "#E08E0B";
