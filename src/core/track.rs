//! Die Gesamtstrecke: geordnete Folge von Segmenten und deren Randband.

use super::record::parse_records;
use super::{ControlPoint, SegmentRecord, TrackError, TrackSegment};
use crate::shared::geometry::polyline_length;
use crate::shared::TrackOptions;
use glam::DVec2;
use serde::Serialize;

/// Seite einer Randlinie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RibbonSide {
    /// Linker Rand (in Fahrtrichtung)
    Left,
    /// Rechter Rand (in Fahrtrichtung)
    Right,
}

/// Ein linker/rechter Randpunkt-Paar des Randbands
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RibbonSample {
    /// Index des Segments in der Strecke
    pub segment: usize,
    /// Punkt auf dem linken Rand
    pub left: DVec2,
    /// Punkt auf dem rechten Rand
    pub right: DVec2,
}

/// Eine zu zeichnende Linie innerhalb der Randlinie eines Segments
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundaryLine {
    /// Index des Segments in der Strecke
    pub segment: usize,
    /// Seite der Randlinie
    pub side: RibbonSide,
    /// Startpunkt
    pub from: DVec2,
    /// Endpunkt
    pub to: DVec2,
}

/// Vollständige Strecke aus aneinandergereihten Bézier-Segmenten.
///
/// Einfügereihenfolge = Durchlaufreihenfolge = Renderreihenfolge.
/// Zwischen benachbarten Segmenten wird keine Kontinuität erzwungen.
#[derive(Debug, Clone, Default)]
pub struct Track {
    segments: Vec<TrackSegment>,
    options: TrackOptions,
}

impl Track {
    /// Erstellt eine leere Strecke mit Standard-Optionen
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt eine leere Strecke mit eigenen Optionen
    pub fn with_options(options: TrackOptions) -> Self {
        Self {
            segments: Vec::new(),
            options,
        }
    }

    /// Optionen, mit denen neue Segmente erzeugt werden
    pub fn options(&self) -> &TrackOptions {
        &self.options
    }

    /// Erzeugt ein Segment aus 4 Kontrollpunkten und hängt es an
    pub fn append_segment(
        &mut self,
        p1: ControlPoint,
        p2: ControlPoint,
        p3: ControlPoint,
        p4: ControlPoint,
    ) -> Result<&TrackSegment, TrackError> {
        let segment = self.build_segment([p1, p2, p3, p4])?;
        Ok(self.push_segment(segment))
    }

    /// Erzeugt ein Segment aus einem Datensatz und hängt es an
    pub fn append_record(&mut self, record: &SegmentRecord) -> Result<&TrackSegment, TrackError> {
        let segment = self.build_segment(record.points)?;
        Ok(self.push_segment(segment))
    }

    /// Hängt ein bereits erzeugtes Segment an
    pub fn push_segment(&mut self, segment: TrackSegment) -> &TrackSegment {
        self.segments.push(segment);
        &self.segments[self.segments.len() - 1]
    }

    /// Lädt Segmente aus Zeilen im Streckendatei-Format.
    ///
    /// Alles-oder-nichts: bei einem Fehler bleibt die Strecke unverändert.
    /// Gibt die Anzahl der angehängten Segmente zurück.
    pub fn load_from_source<I, S>(&mut self, lines: I) -> Result<usize, TrackError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let records = parse_records(lines)?;
        self.load_from_records(&records)
    }

    /// Lädt Segmente aus bereits geparsten Datensätzen (alles-oder-nichts)
    pub fn load_from_records(&mut self, records: &[SegmentRecord]) -> Result<usize, TrackError> {
        let built = records
            .iter()
            .map(|record| self.build_segment(record.points))
            .collect::<Result<Vec<_>, _>>()?;

        let count = built.len();
        self.segments.extend(built);
        log::debug!("{} Segmente angehängt, gesamt {}", count, self.segments.len());
        Ok(count)
    }

    /// Alle Segmente in Reihenfolge
    pub fn segments(&self) -> &[TrackSegment] {
        &self.segments
    }

    /// Anzahl der Segmente
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Prüft ob die Strecke leer ist
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Datensätze aller Segmente (Kontrollpunkte) in Reihenfolge
    pub fn records(&self) -> Vec<SegmentRecord> {
        self.segments
            .iter()
            .map(|s| SegmentRecord::new(*s.control_points()))
            .collect()
    }

    /// Randband aller Segmente, segmentweise aneinandergehängt.
    ///
    /// Länge = Summe über alle Segmente von `sample_count - 1`.
    pub fn boundary_ribbon(&self) -> Vec<RibbonSample> {
        self.segments
            .iter()
            .enumerate()
            .flat_map(|(index, segment)| segment_ribbon(index, segment))
            .collect()
    }

    /// Zu zeichnende Randlinien. Linien verbinden nur Punkte desselben
    /// Segments; zwischen zwei Segmenten wird keine Linie erzeugt.
    pub fn boundary_lines(&self) -> Vec<BoundaryLine> {
        self.segments
            .iter()
            .enumerate()
            .flat_map(|(index, segment)| segment_lines(index, segment))
            .collect()
    }

    /// Summierte Länge aller abgetasteten Mittellinien
    pub fn centerline_length(&self) -> f64 {
        self.segments
            .iter()
            .map(|s| polyline_length(s.centerline()))
            .sum()
    }

    fn build_segment(&self, controls: [ControlPoint; 4]) -> Result<TrackSegment, TrackError> {
        TrackSegment::with_params(
            controls,
            self.options.sample_count,
            self.options.offset_radius,
        )
    }
}

/// Randpunkt-Paare eines einzelnen Segments
pub fn segment_ribbon(
    index: usize,
    segment: &TrackSegment,
) -> impl Iterator<Item = RibbonSample> + '_ {
    segment
        .left_offsets()
        .iter()
        .zip(segment.right_offsets())
        .map(move |(&left, &right)| RibbonSample {
            segment: index,
            left,
            right,
        })
}

/// Randlinien eines einzelnen Segments (erst links, dann rechts)
pub fn segment_lines(index: usize, segment: &TrackSegment) -> Vec<BoundaryLine> {
    let mut lines = Vec::with_capacity(2 * segment.left_offsets().len().saturating_sub(1));
    for (side, offsets) in [
        (RibbonSide::Left, segment.left_offsets()),
        (RibbonSide::Right, segment.right_offsets()),
    ] {
        lines.extend(offsets.windows(2).map(|w| BoundaryLine {
            segment: index,
            side,
            from: w[0],
            to: w[1],
        }));
    }
    lines
}

#[cfg(test)]
mod tests;
