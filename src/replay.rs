//! Recorded event streams: parsing and deterministic replay.
//!
//! A stream is JSON lines, one [`ReplayEvent`] per line. Blank lines and
//! lines starting with `#` are skipped. Replaying a stream into a fresh
//! [`EngineCore`] reproduces the same edits every time, because every
//! handler computes its deltas from the state recorded at the previous event.

#[cfg(test)]
#[path = "replay_test.rs"]
mod replay_test;

use std::io::BufRead;

use serde::{Deserialize, Serialize};

use crate::engine::{Action, EngineCore};
use crate::geometry::Point;
use crate::input::{Button, Key, Modifiers, WheelDelta};
use crate::shape::{ShapeId, ShapeKind};

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("failed to read event stream: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode output: {0}")]
    Encode(serde_json::Error),
}

/// One recorded host event or command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplayEvent {
    PointerDown {
        x: f64,
        y: f64,
        #[serde(default)]
        button: Button,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerUp,
    Wheel {
        x: f64,
        y: f64,
        #[serde(default)]
        dx: f64,
        #[serde(default)]
        dy: f64,
    },
    /// Toolbar zoom step about the center of a `width` x `height` view.
    Zoom {
        zoom_in: bool,
        width: f64,
        height: f64,
    },
    Key {
        key: String,
        #[serde(default)]
        modifiers: Modifiers,
    },
    AddShape {
        kind: ShapeKind,
    },
    AddRegularPolygon {
        n: i32,
    },
}

/// Final state reported after a replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub shapes: usize,
    pub selected: Option<ShapeId>,
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Summary {
    #[must_use]
    pub fn of(core: &EngineCore) -> Self {
        let camera = core.camera();
        Self {
            shapes: core.scene.len(),
            selected: core.selection(),
            pan_x: camera.pan_x,
            pan_y: camera.pan_y,
            zoom: camera.zoom,
        }
    }
}

/// Parse a JSON-lines event stream.
///
/// # Errors
///
/// Returns [`ReplayError::Io`] if reading fails and [`ReplayError::Parse`]
/// (with the 1-based line number) for a malformed line.
pub fn parse_events<R: BufRead>(reader: R) -> Result<Vec<ReplayEvent>, ReplayError> {
    let mut events = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let event = serde_json::from_str(trimmed).map_err(|source| ReplayError::Parse { line: index + 1, source })?;
        events.push(event);
    }
    Ok(events)
}

/// Dispatch one event into the engine.
pub fn apply(core: &mut EngineCore, event: &ReplayEvent) -> Vec<Action> {
    match event {
        ReplayEvent::PointerDown { x, y, button, modifiers } => {
            core.on_pointer_down(Point::new(*x, *y), *button, *modifiers)
        }
        ReplayEvent::PointerMove { x, y } => core.on_pointer_move(Point::new(*x, *y)),
        ReplayEvent::PointerUp => core.on_pointer_up(),
        ReplayEvent::Wheel { x, y, dx, dy } => core.on_wheel(Point::new(*x, *y), WheelDelta { dx: *dx, dy: *dy }),
        ReplayEvent::Zoom { zoom_in, width, height } => core.on_zoom_button(*zoom_in, Point::new(*width, *height)),
        ReplayEvent::Key { key, modifiers } => core.on_key_down(&Key(key.clone()), *modifiers),
        ReplayEvent::AddShape { kind } => core.add_shape(*kind),
        ReplayEvent::AddRegularPolygon { n } => core.add_regular_polygon(*n),
    }
}

/// Apply every event in order, collecting all actions.
pub fn run(core: &mut EngineCore, events: &[ReplayEvent]) -> Vec<Action> {
    let mut actions = Vec::new();
    for event in events {
        tracing::trace!(?event, "replaying");
        actions.extend(apply(core, event));
    }
    tracing::debug!(events = events.len(), actions = actions.len(), "replay finished");
    actions
}
