//! Core-Domänentypen: Kontrollpunkte, Segmente, Strecke, Spatial-Index.

pub mod error;
pub mod point;
/// Typisierte Streckenzeilen
///
/// Strikter Tokenizer für `x;y,x;y,x;y,x;y`-Zeilen.
pub mod record;
pub mod segment;
pub mod spatial;
pub mod track;

pub use error::{ParseErrorKind, TrackError};
pub use point::{ControlPoint, PointId};
pub use record::{parse_records, SegmentRecord};
pub use segment::TrackSegment;
pub use spatial::{SpatialIndex, SpatialMatch};
pub use track::{BoundaryLine, RibbonSample, RibbonSide, Track};
