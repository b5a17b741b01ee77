//! Handler für Punkt- und Segment-Editing sowie Export.

use super::EditorState;
use crate::core::{ControlPoint, PointId};
use crate::track_file::write_track_file;
use anyhow::Context;
use glam::DVec2;

/// Legt einen neuen Punkt an; optional als nächster Punkt des Segments im Aufbau.
pub fn create_point(
    state: &mut EditorState,
    pos: DVec2,
    add_to_pending: bool,
) -> anyhow::Result<()> {
    let id = state.points.insert(ControlPoint::from(pos));
    log::debug!("Punkt {} angelegt bei ({}, {})", id, pos.x, pos.y);
    if add_to_pending {
        add_to_pending_segment(state, id)?;
    }
    Ok(())
}

/// Übernimmt einen Punkt ins Segment im Aufbau; beim vierten Punkt wird gebunden.
pub fn add_to_pending_segment(state: &mut EditorState, id: PointId) -> anyhow::Result<()> {
    state.pending.push(id);
    if state.pending.len() < 4 {
        return Ok(());
    }

    let collected = std::mem::take(&mut state.pending);
    state.creating_segment = false;
    let controls: [PointId; 4] = [collected[0], collected[1], collected[2], collected[3]];

    match state.bind_segment(controls) {
        Ok(index) => {
            log::info!("Segment {} erstellt aus {:?}", index, controls);
            Ok(())
        }
        Err(e) => {
            log::warn!("Segment verworfen: {}", e);
            Err(e).context("Segment konnte nicht erstellt werden")
        }
    }
}

/// Beginnt das Verschieben eines Punkts.
pub fn begin_move(state: &mut EditorState, id: PointId) {
    state.moving_point = Some(id);
    state.last_moved_point = Some(id);
}

/// Verschiebt einen Punkt und berechnet alle abhängigen Segmente neu.
pub fn move_point(state: &mut EditorState, id: PointId, pos: DVec2) {
    if !state.points.move_point(id, pos) {
        log::warn!("Unbekannter Punkt {} beim Verschieben", id);
        return;
    }
    let rebuilt = state.rebuild_segments_using(id);
    log::debug!("Punkt {} verschoben, {} Segmente neu berechnet", id, rebuilt);
}

/// Beendet das Verschieben.
pub fn end_move(state: &mut EditorState) {
    state.moving_point = None;
}

/// Startet den Aufbau eines neuen Segments.
pub fn start_new_segment(state: &mut EditorState) {
    state.creating_segment = true;
}

/// Löscht einen Punkt samt aller Segmente, die ihn referenzieren.
pub fn delete_point(state: &mut EditorState, id: PointId) {
    let removed = state.remove_point(id);
    log::info!("Punkt {} gelöscht, {} Segmente entfernt", id, removed);
}

/// Exportiert alle gültigen Segmente im Streckendatei-Format.
pub fn export(state: &mut EditorState) {
    let records = state.records();
    if records.is_empty() {
        log::info!("Noch keine Streckensegmente erstellt");
    }
    let skipped = state.segments().len() - records.len();
    if skipped > 0 {
        log::warn!("{} ungültige Segmente nicht exportiert", skipped);
    }
    state.last_export = Some(write_track_file(&records));
}
