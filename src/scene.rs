//! Scene: the ordered shape collection, the selection, and the camera.
//!
//! Append order doubles as z-order: later shapes are drawn on top and are
//! hit-tested first. The selection is stored as a [`ShapeId`], so deleting a
//! shape can never leave a dangling reference; every operation given an id
//! that is not present is a no-op.
//!
//! The renderer reads this type between events (`shapes`, `selection`,
//! `camera`, `handle_rects`) and never mutates it.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use crate::camera::Camera;
use crate::consts::{
    DUPLICATE_OFFSET, HANDLE_SIZE_PX, MAX_POLYGON_SIDES, REGULAR_POLYGON_CENTER, REGULAR_POLYGON_RADIUS, REGULAR_POLYGON_STROKE,
};
use crate::geometry::{Corner, Point, Rect};
use crate::shape::{Geometry, Polygon, Shape, ShapeId, ShapeKind};

/// Ordered shapes plus the selection and view transform.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
    selected: Option<ShapeId>,
    pub camera: Camera,
}

impl Scene {
    /// Create an empty scene with the identity camera.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Creation ---

    /// Append a shape of `kind` at its default placement. Does not select it.
    pub fn add_shape(&mut self, kind: ShapeKind) -> ShapeId {
        self.push(Shape::new(Geometry::default_for(kind), kind.default_stroke()))
    }

    /// Append a regular `n`-gon at the default center. Does not select it.
    ///
    /// Returns `None` without touching the scene when `n < 3` (including
    /// negative counts) or `n > MAX_POLYGON_SIDES`.
    pub fn add_regular_polygon(&mut self, n: i32) -> Option<ShapeId> {
        let sides = usize::try_from(n).unwrap_or(0);
        let Some(poly) = Polygon::regular(sides, REGULAR_POLYGON_CENTER, REGULAR_POLYGON_RADIUS) else {
            tracing::warn!(n, max = MAX_POLYGON_SIDES, "regular polygon side count out of range; ignored");
            return None;
        };
        Some(self.push(Shape::new(Geometry::Polygon(poly), REGULAR_POLYGON_STROKE)))
    }

    /// Append a copy of `id` offset by [`DUPLICATE_OFFSET`] and select it.
    pub fn duplicate(&mut self, id: ShapeId) -> Option<ShapeId> {
        let copy = self.shape(id)?.duplicate(DUPLICATE_OFFSET);
        let copy_id = self.push(copy);
        self.selected = Some(copy_id);
        tracing::debug!(source = %id, copy = %copy_id, "shape duplicated");
        Some(copy_id)
    }

    /// Duplicate the selected shape, if any.
    pub fn duplicate_selected(&mut self) -> Option<ShapeId> {
        self.selected.and_then(|id| self.duplicate(id))
    }

    fn push(&mut self, shape: Shape) -> ShapeId {
        let id = shape.id;
        tracing::debug!(%id, kind = ?shape.kind(), "shape added");
        self.shapes.push(shape);
        id
    }

    // --- Deletion ---

    /// Remove the selected shape and clear the selection.
    ///
    /// Returns the removed id, or `None` when nothing was selected.
    pub fn delete_selected(&mut self) -> Option<ShapeId> {
        let id = self.selected.take()?;
        let index = self.index_of(id)?;
        self.shapes.remove(index);
        tracing::debug!(%id, "shape deleted");
        Some(id)
    }

    // --- Selection ---

    /// Select `id`. Returns false (selection unchanged) if it is not present.
    pub fn select(&mut self, id: ShapeId) -> bool {
        if self.index_of(id).is_none() {
            return false;
        }
        self.selected = Some(id);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The currently selected shape id, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ShapeId> {
        self.selected
    }

    #[must_use]
    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected.and_then(|id| self.shape(id))
    }

    // --- Mutation ---

    /// Translate a shape by a world-space delta.
    pub fn move_shape(&mut self, id: ShapeId, delta: Point) -> bool {
        let Some(shape) = self.shape_mut(id) else {
            return false;
        };
        shape.translate(delta);
        true
    }

    /// Drag a corner handle of a non-polygon shape.
    ///
    /// Returns the corner now under the pointer (it changes when the shape is
    /// flipped through itself), or `None` if `id` is not present.
    pub fn resize_shape(&mut self, id: ShapeId, corner: Corner, delta: Point) -> Option<Corner> {
        Some(self.shape_mut(id)?.resize(corner, delta))
    }

    /// Move one vertex of a polygon.
    pub fn move_vertex(&mut self, id: ShapeId, index: usize, delta: Point) -> bool {
        self.shape_mut(id).is_some_and(|s| s.move_vertex(index, delta))
    }

    // --- View ---

    /// Pan the view by a raw screen-space delta.
    pub fn pan_by(&mut self, screen_delta: Point) {
        self.camera.pan_by(screen_delta);
    }

    /// Zoom about a screen point; see [`Camera::zoom_at`].
    pub fn zoom_at_point(&mut self, screen: Point, factor: f64) {
        self.camera.zoom_at(screen, factor);
    }

    // --- Queries ---

    /// Shapes in z-order, bottom first.
    pub fn shapes(&self) -> impl DoubleEndedIterator<Item = &Shape> + ExactSizeIterator {
        self.shapes.iter()
    }

    #[must_use]
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id == id)
    }

    fn index_of(&self, id: ShapeId) -> Option<usize> {
        self.shapes.iter().position(|s| s.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// World-space size of a handle square at the current zoom.
    #[must_use]
    pub fn handle_size(&self) -> f64 {
        self.camera.screen_dist_to_world(HANDLE_SIZE_PX)
    }

    /// Corner handle squares of the selected shape, in world space.
    ///
    /// Empty when nothing is selected or the selection is a polygon.
    #[must_use]
    pub fn handle_rects(&self) -> Vec<(Corner, Rect)> {
        let Some(shape) = self.selected_shape() else {
            return Vec::new();
        };
        if shape.kind() == ShapeKind::Polygon {
            return Vec::new();
        }
        let size = self.handle_size();
        shape
            .bounds()
            .corners()
            .into_iter()
            .map(|(corner, p)| (corner, Rect::centered(p, size)))
            .collect()
    }

    /// Vertex handle squares of every polygon, in world space, in z-order.
    #[must_use]
    pub fn vertex_handle_rects(&self) -> Vec<(ShapeId, usize, Rect)> {
        let size = self.handle_size();
        self.shapes
            .iter()
            .flat_map(|s| {
                s.vertices()
                    .iter()
                    .enumerate()
                    .map(move |(i, v)| (s.id, i, Rect::centered(*v, size)))
            })
            .collect()
    }
}
