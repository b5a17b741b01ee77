//! Editor-Zustand: Punkte, gebundene Segmente und laufende Interaktion.

use super::PointArena;
use crate::core::track::segment_ribbon;
use crate::core::{
    ControlPoint, PointId, RibbonSample, SegmentRecord, Track, TrackError, TrackSegment,
};
use crate::shared::TrackOptions;

/// Ein Segment, dessen Kontrollpunkte in der Arena liegen
#[derive(Debug, Clone)]
pub struct BoundSegment {
    /// IDs der Kontrollpunkte p1..p4
    pub controls: [PointId; 4],
    /// Zuletzt berechnete Geometrie oder der Fehler der Neuberechnung
    pub geometry: Result<TrackSegment, TrackError>,
}

impl BoundSegment {
    /// Prüft ob das Segment den Punkt referenziert
    pub fn references(&self, id: PointId) -> bool {
        self.controls.contains(&id)
    }
}

/// Gesamter Zustand des Strecken-Editors
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Alle Punkte (frei und gebunden)
    pub points: PointArena,
    segments: Vec<BoundSegment>,
    /// Gesammelte Punkte des Segments im Aufbau (0..=3)
    pub pending: Vec<PointId>,
    /// Wartet der Editor auf Punkte für ein neues Segment?
    pub creating_segment: bool,
    /// Punkt, der gerade per Drag verschoben wird
    pub moving_point: Option<PointId>,
    /// Zuletzt verschobener Punkt (Ziel für Löschen)
    pub last_moved_point: Option<PointId>,
    /// Strecken-Optionen für neue und neu berechnete Segmente
    pub options: TrackOptions,
    /// Ergebnis des letzten Exports im Streckendatei-Format
    pub last_export: Option<String>,
}

impl EditorState {
    /// Erstellt einen leeren Editor
    pub fn new(options: TrackOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Übernimmt eine geladene Strecke; jedes Segment erhält eigene Punkte
    pub fn from_track(track: &Track) -> Self {
        let mut state = Self::new(track.options().clone());
        for segment in track.segments() {
            let points = *segment.control_points();
            let controls = points.map(|p| state.points.insert(p));
            state.segments.push(BoundSegment {
                controls,
                geometry: Ok(segment.clone()),
            });
        }
        state
    }

    /// Übernimmt Datensätze einer Streckendatei (alles-oder-nichts)
    pub fn from_records(
        records: &[SegmentRecord],
        options: TrackOptions,
    ) -> Result<Self, TrackError> {
        let mut track = Track::with_options(options);
        track.load_from_records(records)?;
        Ok(Self::from_track(&track))
    }

    /// Alle gebundenen Segmente in Reihenfolge
    pub fn segments(&self) -> &[BoundSegment] {
        &self.segments
    }

    /// Baut ein Segment aus 4 Punkt-IDs und hängt es an.
    ///
    /// Ein ungültiges Segment (z.B. degeneriert) wird nicht angehängt.
    pub fn bind_segment(&mut self, controls: [PointId; 4]) -> Result<usize, TrackError> {
        let geometry = self.build_geometry(&controls)?;
        self.segments.push(BoundSegment {
            controls,
            geometry: Ok(geometry),
        });
        Ok(self.segments.len() - 1)
    }

    /// Berechnet alle Segmente neu, die den Punkt referenzieren.
    ///
    /// Gibt die Anzahl neu berechneter Segmente zurück.
    pub fn rebuild_segments_using(&mut self, id: PointId) -> usize {
        let mut rebuilt = 0;
        for index in 0..self.segments.len() {
            if !self.segments[index].references(id) {
                continue;
            }
            let geometry = self.build_geometry(&self.segments[index].controls);
            if let Err(e) = &geometry {
                log::warn!("Segment {} nach Verschieben ungültig: {}", index, e);
            }
            self.segments[index].geometry = geometry;
            rebuilt += 1;
        }
        rebuilt
    }

    /// Entfernt einen Punkt samt aller Segmente, die ihn referenzieren.
    ///
    /// Gibt die Anzahl entfernter Segmente zurück.
    pub fn remove_point(&mut self, id: PointId) -> usize {
        if self.points.remove(id).is_none() {
            return 0;
        }
        let before = self.segments.len();
        self.segments.retain(|s| !s.references(id));
        self.pending.retain(|p| *p != id);
        if self.moving_point == Some(id) {
            self.moving_point = None;
        }
        if self.last_moved_point == Some(id) {
            self.last_moved_point = None;
        }
        before - self.segments.len()
    }

    /// Strecke aus allen Segmenten; Fehler des ersten ungültigen Segments
    pub fn to_track(&self) -> Result<Track, TrackError> {
        let mut track = Track::with_options(self.options.clone());
        for segment in &self.segments {
            track.push_segment(segment.geometry.clone()?);
        }
        Ok(track)
    }

    /// Datensätze aller gültigen Segmente
    pub fn records(&self) -> Vec<SegmentRecord> {
        self.segments
            .iter()
            .filter_map(|s| s.geometry.as_ref().ok())
            .map(|g| SegmentRecord::new(*g.control_points()))
            .collect()
    }

    /// Randband aller gültigen Segmente (Segment-Index wie in `segments()`)
    pub fn ribbon(&self) -> Vec<RibbonSample> {
        self.segments
            .iter()
            .enumerate()
            .filter_map(|(index, s)| s.geometry.as_ref().ok().map(|g| (index, g)))
            .flat_map(|(index, geometry)| segment_ribbon(index, geometry))
            .collect()
    }

    fn build_geometry(&self, controls: &[PointId; 4]) -> Result<TrackSegment, TrackError> {
        let points: [ControlPoint; 4] = self.points.resolve(controls).ok_or_else(|| {
            TrackError::InvalidArgument(format!("Unbekannte Punkt-IDs in {:?}", controls))
        })?;
        TrackSegment::with_params(
            points,
            self.options.sample_count,
            self.options.offset_radius,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    fn state_with_segment() -> (EditorState, [PointId; 4]) {
        let mut state = EditorState::new(TrackOptions::default());
        let ids = [(0.0, 0.0), (10.0, 0.0), (20.0, 0.0), (30.0, 0.0)]
            .map(|p| state.points.insert(ControlPoint::from(p)));
        state.bind_segment(ids).expect("Segment erwartet");
        (state, ids)
    }

    #[test]
    fn test_moving_shared_point_rebuilds_every_segment() {
        let (mut state, ids) = state_with_segment();
        let extra = [(30.0, 0.0), (40.0, 0.0), (50.0, 0.0)].map(|p| state.points.insert(p.into()));
        // Zweites Segment beginnt am Endpunkt des ersten
        state
            .bind_segment([ids[3], extra[0], extra[1], extra[2]])
            .expect("Segment erwartet");

        state.points.move_point(ids[3], DVec2::new(30.0, 50.0));
        assert_eq!(state.rebuild_segments_using(ids[3]), 2);

        let first = state.segments()[0].geometry.as_ref().unwrap();
        let second = state.segments()[1].geometry.as_ref().unwrap();
        assert_eq!(*first.centerline().last().unwrap(), DVec2::new(30.0, 50.0));
        assert_eq!(second.centerline()[0], DVec2::new(30.0, 50.0));
    }

    #[test]
    fn test_rebuild_keeps_error_for_degenerate_segment() {
        let (mut state, ids) = state_with_segment();
        for id in ids {
            state.points.move_point(id, DVec2::new(5.0, 5.0));
        }
        state.rebuild_segments_using(ids[0]);

        assert!(matches!(
            state.segments()[0].geometry,
            Err(TrackError::DegenerateSegment { .. })
        ));
        assert!(state.ribbon().is_empty());
        assert!(state.records().is_empty());
        assert!(state.to_track().is_err());
    }

    #[test]
    fn test_remove_point_drops_all_referencing_segments() {
        let (mut state, ids) = state_with_segment();
        state.bind_segment(ids).expect("Segment erwartet");
        state.last_moved_point = Some(ids[1]);

        assert_eq!(state.remove_point(ids[1]), 2);
        assert!(state.segments().is_empty());
        assert_eq!(state.last_moved_point, None);
        assert_eq!(state.points.len(), 3);
        assert_eq!(state.remove_point(ids[1]), 0);
    }

    #[test]
    fn test_from_records_rejects_degenerate_record() {
        let records = [
            SegmentRecord::from([(0.0, 0.0), (10.0, 0.0), (20.0, 0.0), (30.0, 0.0)]),
            SegmentRecord::from([(5.0, 5.0); 4]),
        ];
        let err = EditorState::from_records(&records, TrackOptions::default())
            .expect_err("Fehler erwartet");
        assert_eq!(err, TrackError::DegenerateSegment { sample: 0 });

        let state = EditorState::from_records(&records[..1], TrackOptions::default())
            .expect("Editor erwartet");
        assert_eq!(state.points.len(), 4);
        assert_eq!(state.segments().len(), 1);
    }

    #[test]
    fn test_from_track_roundtrip() {
        let mut track = Track::new();
        track
            .load_from_source(["0;0,10;0,20;0,30;0", "30;0,40;10,50;10,60;0"])
            .unwrap();

        let state = EditorState::from_track(&track);
        assert_eq!(state.points.len(), 8);
        assert_eq!(state.segments().len(), 2);
        assert_eq!(state.records(), track.records());
        assert_eq!(state.ribbon(), track.boundary_ribbon());
        assert_eq!(state.to_track().unwrap().segments(), track.segments());
    }
}
