//! Shape-editing engine for a pannable, zoomable 2D vector canvas.
//!
//! The crate owns everything with real invariants: the shape model, the
//! screen/world transform, hit-testing, and the gesture state machine that
//! turns pointer and wheel events into scene mutations. Painting, toolbars,
//! prompts, and the host event loop live outside; the host forwards raw
//! events to [`engine::EngineCore`] (or the pure transition functions in
//! [`engine`]) and redraws from [`scene::Scene`] when it receives
//! [`engine::Action::RenderNeeded`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Gesture transitions, [`engine::Action`], and [`engine::EngineCore`] |
//! | [`scene`] | Ordered shape collection, selection, and mutation API |
//! | [`shape`] | Shape kinds, geometry variants, and per-kind editing |
//! | [`hit`] | Vertex, handle, and body hit-testing |
//! | [`input`] | Input event types and the serializable gesture state |
//! | [`camera`] | Pan/zoom camera and coordinate conversions |
//! | [`geometry`] | Points, rectangles, bounding boxes, point-in-polygon |
//! | [`replay`] | JSON-lines event streams and deterministic replay |
//! | [`config`] | Environment-driven configuration |
//! | [`consts`] | Shared numeric constants (scale limits, minimum extent, defaults) |

pub mod camera;
pub mod config;
pub mod consts;
pub mod engine;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod replay;
pub mod scene;
pub mod shape;
