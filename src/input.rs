//! Input model: modifier keys, mouse buttons, and the gesture state.
//!
//! `Button`, `Modifiers`, `WheelDelta`, and `Key` capture what the host
//! reported for a single event. `InputState` is the active gesture tracked
//! between pointer-down and pointer-up. It is a plain `Copy` value that can
//! be serialized, so a recorded gesture can be inspected or resumed exactly.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::geometry::{Corner, Point};
use crate::shape::ShapeId;

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Modifier that turns a primary-button drag into a canvas pan.
    #[must_use]
    pub fn pans(self) -> bool {
        self.alt
    }

    /// Modifier that turns a body drag into a drag of a fresh duplicate.
    #[must_use]
    pub fn duplicates(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    #[default]
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the host (e.g. `"Delete"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key(pub String);

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// The gesture in progress.
///
/// Each active variant carries what is needed to turn the next pointer
/// position into an incremental delta.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is panning the canvas.
    PanningCanvas {
        /// Screen-space position of the previous pointer event.
        last_screen: Point,
    },
    /// The user is moving a shape across the canvas.
    DraggingShape {
        /// Id of the shape being dragged.
        id: ShapeId,
        /// World-space position of the pointer at the previous event.
        last_world: Point,
    },
    /// The user is dragging a corner handle of the selected shape.
    ResizingBounds {
        /// Id of the shape being resized.
        id: ShapeId,
        /// The corner currently under the pointer.
        corner: Corner,
        /// World-space position of the pointer at the previous event.
        last_world: Point,
    },
    /// The user is dragging one vertex of a polygon.
    DraggingVertex {
        /// Id of the polygon being edited.
        id: ShapeId,
        /// Index of the vertex being dragged.
        index: usize,
        /// World-space position of the pointer at the previous event.
        last_world: Point,
    },
}

impl InputState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The shape a gesture is operating on, if any.
    #[must_use]
    pub fn target(&self) -> Option<ShapeId> {
        match *self {
            Self::Idle | Self::PanningCanvas { .. } => None,
            Self::DraggingShape { id, .. } | Self::ResizingBounds { id, .. } | Self::DraggingVertex { id, .. } => {
                Some(id)
            }
        }
    }

    /// Cursor name to show while this gesture is active.
    #[must_use]
    pub fn cursor(&self) -> &'static str {
        match self {
            Self::Idle => "default",
            Self::PanningCanvas { .. } => "grabbing",
            Self::DraggingShape { .. } => "move",
            Self::ResizingBounds { corner: Corner::TopLeft | Corner::BottomRight, .. } => "nwse-resize",
            Self::ResizingBounds { .. } => "nesw-resize",
            Self::DraggingVertex { .. } => "crosshair",
        }
    }
}
