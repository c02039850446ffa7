#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::{DEFAULT_CIRCLE_BOUNDS, DEFAULT_ELLIPSE_BOUNDS, DEFAULT_RECT_BOUNDS};

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// Creation
// =============================================================

#[test]
fn new_scene_is_empty() {
    let scene = Scene::new();
    assert!(scene.is_empty());
    assert_eq!(scene.len(), 0);
    assert!(scene.selection().is_none());
    assert_eq!(scene.camera, Camera::default());
}

#[test]
fn add_shape_uses_default_bounds_per_kind() {
    let mut scene = Scene::new();
    let rect = scene.add_shape(ShapeKind::Rectangle);
    let circle = scene.add_shape(ShapeKind::Circle);
    let ellipse = scene.add_shape(ShapeKind::Ellipse);
    assert_eq!(scene.shape(rect).unwrap().bounds(), Rect::new(100.0, 100.0, 120.0, 80.0));
    assert_eq!(scene.shape(circle).unwrap().bounds(), DEFAULT_CIRCLE_BOUNDS);
    assert_eq!(scene.shape(ellipse).unwrap().bounds(), DEFAULT_ELLIPSE_BOUNDS);
    assert_eq!(scene.shape(rect).unwrap().bounds(), DEFAULT_RECT_BOUNDS);
}

#[test]
fn default_circle_is_square() {
    let mut scene = Scene::new();
    let id = scene.add_shape(ShapeKind::Circle);
    let b = scene.shape(id).unwrap().bounds();
    assert_eq!(b.width, b.height);
}

#[test]
fn add_polygon_kind_creates_valid_polygon() {
    let mut scene = Scene::new();
    let id = scene.add_shape(ShapeKind::Polygon);
    let shape = scene.shape(id).unwrap();
    assert_eq!(shape.kind(), ShapeKind::Polygon);
    assert!(shape.vertices().len() >= 3);
    assert_eq!(Some(shape.bounds()), crate::geometry::bounding_box(shape.vertices()));
}

#[test]
fn default_placements_do_not_overlap() {
    let mut scene = Scene::new();
    scene.add_shape(ShapeKind::Rectangle);
    scene.add_shape(ShapeKind::Circle);
    scene.add_shape(ShapeKind::Ellipse);
    scene.add_shape(ShapeKind::Polygon);
    scene.add_regular_polygon(6);
    let all: Vec<Rect> = scene.shapes().map(Shape::bounds).collect();
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            let disjoint = a.right() < b.left || b.right() < a.left || a.bottom() < b.top || b.bottom() < a.top;
            assert!(disjoint, "{a:?} overlaps {b:?}");
        }
    }
}

#[test]
fn add_shape_appends_on_top_without_selecting() {
    let mut scene = Scene::new();
    let a = scene.add_shape(ShapeKind::Rectangle);
    let b = scene.add_shape(ShapeKind::Ellipse);
    let order: Vec<ShapeId> = scene.shapes().map(|s| s.id).collect();
    assert_eq!(order, vec![a, b]);
    assert!(scene.selection().is_none());
}

#[test]
fn add_regular_polygon_rejects_small_counts() {
    let mut scene = Scene::new();
    assert!(scene.add_regular_polygon(2).is_none());
    assert!(scene.add_regular_polygon(0).is_none());
    assert!(scene.add_regular_polygon(-7).is_none());
    assert!(scene.is_empty());
}

#[test]
fn add_regular_polygon_rejects_oversized_counts() {
    let mut scene = Scene::new();
    assert!(scene.add_regular_polygon(i32::MAX).is_none());
    let over = i32::try_from(MAX_POLYGON_SIDES).unwrap() + 1;
    assert!(scene.add_regular_polygon(over).is_none());
    assert!(scene.is_empty());
    let at_cap = scene.add_regular_polygon(over - 1).unwrap();
    assert_eq!(scene.shape(at_cap).unwrap().vertices().len(), MAX_POLYGON_SIDES);
}

#[test]
fn add_regular_polygon_has_n_vertices() {
    let mut scene = Scene::new();
    let id = scene.add_regular_polygon(8).unwrap();
    assert_eq!(scene.shape(id).unwrap().vertices().len(), 8);
}

// =============================================================
// Duplicate / delete
// =============================================================

#[test]
fn duplicate_selects_offset_copy() {
    let mut scene = Scene::new();
    let id = scene.add_shape(ShapeKind::Circle);
    let copy = scene.duplicate(id).unwrap();
    assert_eq!(scene.len(), 2);
    assert_eq!(scene.selection(), Some(copy));
    let original = scene.shape(id).unwrap().bounds();
    assert_eq!(original, DEFAULT_CIRCLE_BOUNDS);
    assert_eq!(scene.shape(copy).unwrap().bounds(), original.translated(pt(20.0, 20.0)));
    assert_eq!(scene.shapes().last().unwrap().id, copy);
}

#[test]
fn duplicate_polygon_copies_vertices() {
    let mut scene = Scene::new();
    let id = scene.add_regular_polygon(5).unwrap();
    let copy = scene.duplicate(id).unwrap();
    let a = scene.shape(id).unwrap().vertices().to_vec();
    let b = scene.shape(copy).unwrap().vertices().to_vec();
    assert_eq!(a.len(), b.len());
    for (va, vb) in a.iter().zip(&b) {
        assert_eq!(*vb, *va + pt(20.0, 20.0));
    }
}

#[test]
fn duplicate_missing_id_is_none() {
    let mut scene = Scene::new();
    assert!(scene.duplicate(uuid::Uuid::new_v4()).is_none());
    assert!(scene.duplicate_selected().is_none());
}

#[test]
fn delete_selected_removes_and_clears() {
    let mut scene = Scene::new();
    let a = scene.add_shape(ShapeKind::Rectangle);
    let b = scene.add_shape(ShapeKind::Ellipse);
    scene.select(a);
    assert_eq!(scene.delete_selected(), Some(a));
    assert!(scene.selection().is_none());
    assert!(scene.shape(a).is_none());
    assert!(scene.shape(b).is_some());
    assert_eq!(scene.len(), 1);
}

#[test]
fn delete_without_selection_is_no_op() {
    let mut scene = Scene::new();
    scene.add_shape(ShapeKind::Rectangle);
    assert!(scene.delete_selected().is_none());
    assert_eq!(scene.len(), 1);
}

// =============================================================
// Selection
// =============================================================

#[test]
fn select_unknown_id_keeps_selection() {
    let mut scene = Scene::new();
    let id = scene.add_shape(ShapeKind::Rectangle);
    assert!(scene.select(id));
    assert!(!scene.select(uuid::Uuid::new_v4()));
    assert_eq!(scene.selection(), Some(id));
    assert_eq!(scene.selected_shape().map(|s| s.id), Some(id));
    scene.clear_selection();
    assert!(scene.selected_shape().is_none());
}

// =============================================================
// Mutations
// =============================================================

#[test]
fn move_shape_translates_bounds() {
    let mut scene = Scene::new();
    let id = scene.add_shape(ShapeKind::Ellipse);
    assert!(scene.move_shape(id, pt(-40.0, 15.0)));
    assert_eq!(scene.shape(id).unwrap().bounds(), DEFAULT_ELLIPSE_BOUNDS.translated(pt(-40.0, 15.0)));
}

#[test]
fn mutations_on_missing_id_are_no_ops() {
    let mut scene = Scene::new();
    let ghost = uuid::Uuid::new_v4();
    assert!(!scene.move_shape(ghost, pt(1.0, 1.0)));
    assert!(scene.resize_shape(ghost, Corner::TopLeft, pt(1.0, 1.0)).is_none());
    assert!(!scene.move_vertex(ghost, 0, pt(1.0, 1.0)));
}

#[test]
fn resize_shape_scenario() {
    let mut scene = Scene::new();
    let id = scene.add_shape(ShapeKind::Rectangle);
    assert_eq!(scene.resize_shape(id, Corner::BottomRight, pt(50.0, 30.0)), Some(Corner::BottomRight));
    assert_eq!(scene.shape(id).unwrap().bounds(), Rect::new(100.0, 100.0, 170.0, 110.0));
}

#[test]
fn move_vertex_on_polygon() {
    let mut scene = Scene::new();
    let id = scene.add_regular_polygon(3).unwrap();
    assert!(scene.move_vertex(id, 0, pt(0.0, -25.0)));
    let shape = scene.shape(id).unwrap();
    assert!((shape.bounds().top - 75.0).abs() < 1e-9);
}

// =============================================================
// View
// =============================================================

#[test]
fn pan_and_zoom_update_camera() {
    let mut scene = Scene::new();
    scene.pan_by(pt(12.0, -4.0));
    assert_eq!(scene.camera.pan_x, 12.0);
    assert_eq!(scene.camera.pan_y, -4.0);
    scene.zoom_at_point(pt(0.0, 0.0), 2.0);
    assert_eq!(scene.camera.zoom, 2.0);
}

// =============================================================
// Handle rectangles
// =============================================================

#[test]
fn handle_rects_empty_without_selection() {
    let mut scene = Scene::new();
    scene.add_shape(ShapeKind::Rectangle);
    assert!(scene.handle_rects().is_empty());
}

#[test]
fn handle_rects_center_on_corners() {
    let mut scene = Scene::new();
    let id = scene.add_shape(ShapeKind::Rectangle);
    scene.select(id);
    let handles = scene.handle_rects();
    assert_eq!(handles.len(), 4);
    assert_eq!(handles[0], (Corner::TopLeft, Rect::new(96.0, 96.0, 8.0, 8.0)));
    assert_eq!(handles[3], (Corner::BottomRight, Rect::new(216.0, 176.0, 8.0, 8.0)));
}

#[test]
fn handle_rects_scale_with_zoom() {
    let mut scene = Scene::new();
    let id = scene.add_shape(ShapeKind::Rectangle);
    scene.select(id);
    scene.camera.zoom = 2.0;
    let (_, r) = scene.handle_rects()[0];
    assert_eq!(r.width, 4.0);
    assert_eq!(scene.handle_size(), 4.0);
}

#[test]
fn polygon_selection_has_no_corner_handle_rects() {
    let mut scene = Scene::new();
    let id = scene.add_regular_polygon(4).unwrap();
    scene.select(id);
    assert!(scene.handle_rects().is_empty());
}

#[test]
fn vertex_handle_rects_cover_every_polygon() {
    let mut scene = Scene::new();
    scene.add_regular_polygon(3);
    scene.add_shape(ShapeKind::Rectangle);
    scene.add_regular_polygon(5);
    let rects = scene.vertex_handle_rects();
    assert_eq!(rects.len(), 8);
    assert!(rects.iter().all(|(_, _, r)| r.width == 8.0));
}
