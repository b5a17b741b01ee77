//! Writer für Streckendateien.

use crate::core::{SegmentRecord, Track};
use anyhow::{Context, Result};
use std::path::Path;

/// Schreibt Datensätze im Streckendatei-Format.
///
/// Eine Zeile pro Segment, abgeschlossen mit Zeilenumbruch. Zahlen werden
/// in kürzester verlustfreier Darstellung geschrieben.
pub fn write_track_file(records: &[SegmentRecord]) -> String {
    let mut output = String::new();
    for record in records {
        output.push_str(&record.to_line());
        output.push('\n');
    }
    output
}

/// Speichert die Kontrollpunkte einer Strecke als Streckendatei.
pub fn save_track_file(path: &Path, track: &Track) -> Result<()> {
    let content = write_track_file(&track.records());
    std::fs::write(path, content)
        .with_context(|| format!("Streckendatei nicht schreibbar: {}", path.display()))?;
    log::info!(
        "Strecke gespeichert: {} Segmente nach {}",
        track.segment_count(),
        path.display()
    );
    Ok(())
}
