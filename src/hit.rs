//! Hit-testing: resolve a pointer position to a vertex, handle, or body.
//!
//! Handles are fixed-size in screen pixels, so their world-space extent is
//! derived from the camera at query time. Priority, first match wins:
//!
//! 1. vertex handles of every polygon, topmost shape first, then vertex index;
//! 2. corner handles of the selected non-polygon shape;
//! 3. shape bodies, topmost first.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use serde::{Deserialize, Serialize};

use crate::geometry::{Corner, Point, Rect};
use crate::scene::Scene;
use crate::shape::ShapeId;

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hit {
    /// A polygon vertex handle.
    Vertex { id: ShapeId, index: usize },
    /// A corner resize handle of the selected shape.
    Handle { id: ShapeId, corner: Corner },
    /// The body of a shape.
    Body { id: ShapeId },
}

impl Hit {
    /// The shape this hit refers to.
    #[must_use]
    pub fn shape_id(&self) -> ShapeId {
        match *self {
            Self::Vertex { id, .. } | Self::Handle { id, .. } | Self::Body { id } => id,
        }
    }
}

/// Test which part of which shape (if any) is under `world_pt`.
#[must_use]
pub fn hit_test(scene: &Scene, world_pt: Point) -> Option<Hit> {
    vertex_at(scene, world_pt)
        .map(|(id, index)| Hit::Vertex { id, index })
        .or_else(|| handle_at(scene, world_pt).map(|(id, corner)| Hit::Handle { id, corner }))
        .or_else(|| body_at(scene, world_pt).map(|id| Hit::Body { id }))
}

/// Screen-space variant of [`hit_test`], mapped through the scene camera.
#[must_use]
pub fn hit_test_screen(scene: &Scene, screen_pt: Point) -> Option<Hit> {
    hit_test(scene, scene.camera.screen_to_world(screen_pt))
}

/// The first polygon vertex whose handle square covers `world_pt`.
#[must_use]
pub fn vertex_at(scene: &Scene, world_pt: Point) -> Option<(ShapeId, usize)> {
    let size = scene.handle_size();
    scene.shapes().rev().find_map(|shape| {
        shape
            .vertices()
            .iter()
            .position(|v| Rect::centered(*v, size).contains(world_pt))
            .map(|index| (shape.id, index))
    })
}

/// The corner handle of the selected shape covering `world_pt`.
///
/// Polygons expose no corner handles.
#[must_use]
pub fn handle_at(scene: &Scene, world_pt: Point) -> Option<(ShapeId, Corner)> {
    let id = scene.selection()?;
    scene
        .handle_rects()
        .into_iter()
        .find(|(_, square)| square.contains(world_pt))
        .map(|(corner, _)| (id, corner))
}

/// The topmost shape whose body covers `world_pt`.
#[must_use]
pub fn body_at(scene: &Scene, world_pt: Point) -> Option<ShapeId> {
    scene.shapes().rev().find(|s| s.contains(world_pt)).map(|s| s.id)
}
