//! Race Track Editor Library.
//! Streckengeometrie aus kubischen Bézier-Segmenten, Streckendateien und
//! headless Editor-Modell, als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod track_file;

pub use app::{EditorController, EditorIntent, EditorState};
pub use core::{
    BoundaryLine, ControlPoint, ParseErrorKind, PointId, RibbonSample, RibbonSide,
    SegmentRecord, Track, TrackError, TrackSegment,
};
pub use shared::TrackOptions;
pub use track_file::{
    load_track_file, parse_record, parse_track_file, save_track_file, write_track_file,
};
