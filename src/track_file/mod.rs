//! Import/Export für Streckendateien.
//!
//! Klartext, eine Zeile pro Segment: `x;y,x;y,x;y,x;y`.
//! Die Zeilenreihenfolge bestimmt die Segmentreihenfolge.

pub mod parser;
pub mod writer;

pub use parser::{load_track_file, parse_record, parse_track_file};
pub use writer::{save_track_file, write_track_file};
