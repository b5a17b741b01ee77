//! Geteilte Typen und Funktionen für layer-übergreifende Verträge.
//!
//! Enthält Geometrie-Primitive und Optionen, die von `core`, `track_file`
//! und `app` gemeinsam genutzt werden.

pub mod geometry;
pub mod options;

pub use options::TrackOptions;
pub use options::{OFFSET_RADIUS, POINT_HIT_RADIUS, SAMPLE_COUNT};
