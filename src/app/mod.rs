//! Application-Layer: headless Editor-Modell mit Controller, State und Events.
//!
//! Eine GUI reicht nur Zeiger-Events als `EditorIntent` weiter und zeichnet
//! die per `build_scene` erzeugte Szene.

pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod point_arena;
pub mod render_scene;
/// Editor-Zustand
///
/// Punkt-Arena, gebundene Segmente und laufende Interaktion.
pub mod state;

pub use controller::EditorController;
pub use events::{EditorCommand, EditorIntent};
pub use point_arena::PointArena;
pub use render_scene::build as build_scene;
pub use render_scene::{EditorScene, PointRole, ScenePoint};
pub use state::{BoundSegment, EditorState};
