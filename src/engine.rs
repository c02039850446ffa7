//! Interaction state machine and the engine that owns it.
//!
//! The transition functions (`pointer_down`, `pointer_move`, `pointer_up`,
//! `wheel`, `zoom_button`, `key_down`) take the current [`InputState`] by value and return
//! the next one together with the [`Action`]s the host should react to. They
//! touch nothing but the scene they are handed, so a recorded event stream
//! replays to the same result. [`EngineCore`] threads the state through for
//! hosts that prefer a single owner.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::config::Config;
use crate::geometry::Point;
use crate::hit::{self, Hit};
use crate::input::{Button, InputState, Key, Modifiers, WheelDelta};
use crate::scene::Scene;
use crate::shape::{Shape, ShapeId, ShapeKind};

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    ShapeAdded { id: ShapeId },
    ShapeUpdated { id: ShapeId },
    ShapeDeleted { id: ShapeId },
    SelectionChanged { id: Option<ShapeId> },
    ViewChanged { camera: Camera },
    /// Live world-space pointer position, for status display.
    PointerMoved { world: Point },
    SetCursor { cursor: String },
    RenderNeeded,
}

fn set_cursor(state: InputState) -> Action {
    Action::SetCursor { cursor: state.cursor().to_string() }
}

/// Append `RenderNeeded` when anything visible changed.
fn finish(mut actions: Vec<Action>) -> Vec<Action> {
    let visible = actions.iter().any(|a| !matches!(a, Action::PointerMoved { .. } | Action::SetCursor { .. }));
    if visible {
        actions.push(Action::RenderNeeded);
    }
    actions
}

// =============================================================
// Transition functions
// =============================================================

/// Start a gesture. Ignored unless `state` is idle.
///
/// Dispatch, first match wins: a secondary or middle button (or primary with
/// the pan modifier) pans; a polygon vertex starts a vertex drag and selects
/// the polygon; a corner handle of the selection starts a resize; a body
/// selects and drags the shape, or a fresh duplicate of it when the
/// duplicate modifier is held; empty canvas clears the selection.
pub fn pointer_down(
    scene: &mut Scene,
    state: InputState,
    screen: Point,
    button: Button,
    modifiers: Modifiers,
) -> (InputState, Vec<Action>) {
    if !state.is_idle() {
        return (state, Vec::new());
    }

    if button != Button::Primary || modifiers.pans() {
        let next = InputState::PanningCanvas { last_screen: screen };
        tracing::debug!(?button, "pan started");
        return (next, vec![set_cursor(next)]);
    }

    let world = scene.camera.screen_to_world(screen);
    let before = scene.selection();
    let mut actions = Vec::new();

    let next = match hit::hit_test(scene, world) {
        Some(Hit::Vertex { id, index }) => {
            scene.select(id);
            InputState::DraggingVertex { id, index, last_world: world }
        }
        Some(Hit::Handle { id, corner }) => InputState::ResizingBounds { id, corner, last_world: world },
        Some(Hit::Body { id }) if modifiers.duplicates() => match scene.duplicate(id) {
            Some(copy) => {
                actions.push(Action::ShapeAdded { id: copy });
                InputState::DraggingShape { id: copy, last_world: world }
            }
            None => InputState::Idle,
        },
        Some(Hit::Body { id }) => {
            scene.select(id);
            InputState::DraggingShape { id, last_world: world }
        }
        None => {
            scene.clear_selection();
            InputState::Idle
        }
    };

    if scene.selection() != before {
        actions.push(Action::SelectionChanged { id: scene.selection() });
    }
    if !next.is_idle() {
        tracing::debug!(gesture = ?next, "gesture started");
        actions.push(set_cursor(next));
    }
    (next, finish(actions))
}

/// Advance the active gesture to the pointer at `screen`.
///
/// Deltas are measured against the position recorded at the previous event.
/// A `PointerMoved` action is emitted in every state.
pub fn pointer_move(scene: &mut Scene, state: InputState, screen: Point) -> (InputState, Vec<Action>) {
    let world = scene.camera.screen_to_world(screen);
    let mut actions = Vec::new();

    let next = match state {
        InputState::Idle => InputState::Idle,
        InputState::PanningCanvas { last_screen } => {
            scene.pan_by(screen - last_screen);
            actions.push(Action::ViewChanged { camera: scene.camera });
            InputState::PanningCanvas { last_screen: screen }
        }
        InputState::DraggingShape { id, last_world } => {
            if scene.move_shape(id, world - last_world) {
                actions.push(Action::ShapeUpdated { id });
            }
            InputState::DraggingShape { id, last_world: world }
        }
        InputState::ResizingBounds { id, corner, last_world } => {
            let corner = match scene.resize_shape(id, corner, world - last_world) {
                Some(dragged) => {
                    actions.push(Action::ShapeUpdated { id });
                    dragged
                }
                None => corner,
            };
            InputState::ResizingBounds { id, corner, last_world: world }
        }
        InputState::DraggingVertex { id, index, last_world } => {
            if scene.move_vertex(id, index, world - last_world) {
                actions.push(Action::ShapeUpdated { id });
            }
            InputState::DraggingVertex { id, index, last_world: world }
        }
    };

    if next.cursor() != state.cursor() {
        actions.push(set_cursor(next));
    }
    tracing::trace!(gesture = ?next, "pointer moved");
    actions.push(Action::PointerMoved { world: scene.camera.screen_to_world(screen) });
    (next, finish(actions))
}

/// End the active gesture. Always returns to idle.
#[must_use]
pub fn pointer_up(state: InputState) -> (InputState, Vec<Action>) {
    if state.is_idle() {
        return (InputState::Idle, Vec::new());
    }
    tracing::debug!(gesture = ?state, "gesture ended");
    (InputState::Idle, vec![set_cursor(InputState::Idle)])
}

/// Zoom about the pointer: scrolling up zooms in by `zoom_step`, down zooms
/// out by its reciprocal.
pub fn wheel(scene: &mut Scene, screen: Point, delta: WheelDelta, zoom_step: f64) -> Vec<Action> {
    if delta.dy < 0.0 {
        zoom_about(scene, screen, zoom_step)
    } else if delta.dy > 0.0 {
        zoom_about(scene, screen, 1.0 / zoom_step)
    } else {
        Vec::new()
    }
}

/// Step the zoom about the center of a `viewport`-sized view, as a toolbar
/// zoom button does. Zooming out uses the reciprocal of `zoom_step`, so an
/// in/out pair away from the clamp restores the camera.
pub fn zoom_button(scene: &mut Scene, zoom_in: bool, viewport: Point, zoom_step: f64) -> Vec<Action> {
    let factor = if zoom_in { zoom_step } else { 1.0 / zoom_step };
    let center = Point::new(viewport.x * 0.5, viewport.y * 0.5);
    zoom_about(scene, center, factor)
}

fn zoom_about(scene: &mut Scene, screen: Point, factor: f64) -> Vec<Action> {
    let before = scene.camera;
    scene.zoom_at_point(screen, factor);
    if scene.camera == before {
        return Vec::new();
    }
    tracing::trace!(zoom = scene.camera.zoom, "zoomed");
    finish(vec![Action::ViewChanged { camera: scene.camera }])
}

/// Keyboard commands. Only honored while no gesture is active.
///
/// `Delete`/`Backspace` delete the selection, `Escape` clears it, and the
/// duplicate modifier with `d` duplicates it.
pub fn key_down(scene: &mut Scene, state: InputState, key: &Key, modifiers: Modifiers) -> Vec<Action> {
    if !state.is_idle() {
        return Vec::new();
    }
    let mut actions = Vec::new();
    match key.0.as_str() {
        "Delete" | "Backspace" => {
            if let Some(id) = scene.delete_selected() {
                actions.push(Action::ShapeDeleted { id });
                actions.push(Action::SelectionChanged { id: None });
            }
        }
        "Escape" => {
            if scene.selection().is_some() {
                scene.clear_selection();
                actions.push(Action::SelectionChanged { id: None });
            }
        }
        "d" | "D" if modifiers.duplicates() => {
            if let Some(copy) = scene.duplicate_selected() {
                actions.push(Action::ShapeAdded { id: copy });
                actions.push(Action::SelectionChanged { id: Some(copy) });
            }
        }
        _ => {}
    }
    finish(actions)
}

// =============================================================
// EngineCore
// =============================================================

/// Owns the scene and the gesture state and threads one through the other.
#[derive(Debug, Clone, Default)]
pub struct EngineCore {
    pub scene: Scene,
    pub input: InputState,
    pub config: Config,
    pointer_world: Point,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self { config, ..Self::default() }
    }

    // --- Commands ---

    /// Add a shape of `kind` at its default placement.
    pub fn add_shape(&mut self, kind: ShapeKind) -> Vec<Action> {
        let id = self.scene.add_shape(kind);
        finish(vec![Action::ShapeAdded { id }])
    }

    /// Add a regular `n`-gon. Produces no actions when `n < 3`.
    pub fn add_regular_polygon(&mut self, n: i32) -> Vec<Action> {
        match self.scene.add_regular_polygon(n) {
            Some(id) => finish(vec![Action::ShapeAdded { id }]),
            None => Vec::new(),
        }
    }

    /// Delete the selected shape, if any.
    pub fn delete_selected(&mut self) -> Vec<Action> {
        match self.scene.delete_selected() {
            Some(id) => finish(vec![Action::ShapeDeleted { id }, Action::SelectionChanged { id: None }]),
            None => Vec::new(),
        }
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        let (next, actions) = pointer_down(&mut self.scene, self.input, screen, button, modifiers);
        self.input = next;
        actions
    }

    pub fn on_pointer_move(&mut self, screen: Point) -> Vec<Action> {
        let (next, actions) = pointer_move(&mut self.scene, self.input, screen);
        self.input = next;
        self.pointer_world = self.scene.camera.screen_to_world(screen);
        actions
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        let (next, actions) = pointer_up(self.input);
        self.input = next;
        actions
    }

    pub fn on_wheel(&mut self, screen: Point, delta: WheelDelta) -> Vec<Action> {
        wheel(&mut self.scene, screen, delta, self.config.zoom_step)
    }

    /// Zoom in or out one step about the center of the host's view.
    pub fn on_zoom_button(&mut self, zoom_in: bool, viewport: Point) -> Vec<Action> {
        zoom_button(&mut self.scene, zoom_in, viewport, self.config.zoom_step)
    }

    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        key_down(&mut self.scene, self.input, key, modifiers)
    }

    // --- Queries ---

    /// The currently selected shape, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ShapeId> {
        self.scene.selection()
    }

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.scene.camera
    }

    /// Look up a shape by id.
    #[must_use]
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.scene.shape(id)
    }

    /// World-space pointer position at the last pointer move.
    #[must_use]
    pub fn pointer_world(&self) -> Point {
        self.pointer_world
    }
}
