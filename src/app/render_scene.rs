//! Builder für Render-Szenen aus dem EditorState.
//!
//! Der Renderer zeichnet nur, was hier zusammengestellt wird: Punkte mit
//! Rolle, Steuerlinien p1–p2 / p3–p4, Mittellinien-Samples und Randlinien.

use super::EditorState;
use crate::core::track::segment_lines;
use crate::core::{BoundaryLine, PointId};
use glam::DVec2;
use serde::Serialize;

/// Darstellungsrolle eines Punkts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PointRole {
    /// Normaler Punkt
    Regular,
    /// Teil des Segments im Aufbau
    Pending,
    /// Zuletzt verschobener Punkt (Löschziel)
    LastMoved,
}

/// Ein zu zeichnender Punkt
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenePoint {
    /// Punkt-ID
    pub id: PointId,
    /// Position
    pub position: DVec2,
    /// Darstellungsrolle
    pub role: PointRole,
}

/// Alles, was ein Frame des Editors zeichnet
#[derive(Debug, Clone, Default, Serialize)]
pub struct EditorScene {
    /// Punkte in Einfügereihenfolge
    pub points: Vec<ScenePoint>,
    /// Steuerlinien (p1–p2 und p3–p4) je gültigem Segment
    pub handles: Vec<(DVec2, DVec2)>,
    /// Mittellinien-Samples je gültigem Segment
    pub centerlines: Vec<Vec<DVec2>>,
    /// Randlinien, nie segmentübergreifend
    pub boundary_lines: Vec<BoundaryLine>,
}

/// Baut eine EditorScene aus dem aktuellen EditorState.
pub fn build(state: &EditorState) -> EditorScene {
    let points = state
        .points
        .iter()
        .map(|(id, p)| ScenePoint {
            id,
            position: p.position(),
            role: if state.last_moved_point == Some(id) {
                PointRole::LastMoved
            } else if state.pending.contains(&id) {
                PointRole::Pending
            } else {
                PointRole::Regular
            },
        })
        .collect();

    let mut scene = EditorScene {
        points,
        ..EditorScene::default()
    };

    for (index, segment) in state.segments().iter().enumerate() {
        let Ok(geometry) = &segment.geometry else {
            continue;
        };
        let [p1, p2, p3, p4] = *geometry.control_points();
        scene.handles.push((p1.position(), p2.position()));
        scene.handles.push((p3.position(), p4.position()));
        scene.centerlines.push(geometry.centerline().to_vec());
        scene
            .boundary_lines
            .extend(segment_lines(index, geometry));
    }

    scene
}
