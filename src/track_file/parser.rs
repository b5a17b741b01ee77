//! Parser für Streckendateien.

use crate::core::{parse_records, SegmentRecord, Track, TrackError};
use crate::shared::TrackOptions;
use anyhow::{Context, Result};
use std::path::Path;

/// Parsed eine einzelne Zeile; `line_number` (1-basiert) landet im Fehler.
pub fn parse_record(line: &str, line_number: usize) -> Result<SegmentRecord, TrackError> {
    SegmentRecord::parse(line, line_number)
}

/// Parsed den Inhalt einer Streckendatei in Datensätze.
///
/// Leerzeilen (auch die abschließende) werden übersprungen, Zeilennummern
/// in Fehlern sind 1-basiert.
pub fn parse_track_file(content: &str) -> Result<Vec<SegmentRecord>, TrackError> {
    parse_records(content.lines())
}

/// Liest eine Streckendatei und baut daraus eine Strecke.
pub fn load_track_file(path: &Path, options: &TrackOptions) -> Result<Track> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Streckendatei nicht lesbar: {}", path.display()))?;
    let records = parse_track_file(&content)
        .with_context(|| format!("Fehler beim Parsen von {}", path.display()))?;

    let mut track = Track::with_options(options.clone());
    track
        .load_from_records(&records)
        .with_context(|| format!("Fehler beim Aufbau der Strecke aus {}", path.display()))?;

    log::info!(
        "Strecke geladen: {} Segmente aus {}",
        track.segment_count(),
        path.display()
    );
    Ok(track)
}
