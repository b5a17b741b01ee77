//! Typisierter Datensatz einer Streckenzeile: genau 4 Kontrollpunkte.
//!
//! Zeilenformat: `x;y,x;y,x;y,x;y` (Punkte durch `,`, Koordinaten durch `;`).

use super::{ControlPoint, ParseErrorKind, TrackError};

/// Trennzeichen zwischen Punkten
pub const POINT_SEPARATOR: char = ',';
/// Trennzeichen zwischen x und y
pub const COORD_SEPARATOR: char = ';';

/// Ein Segment-Datensatz mit genau 4 Punkten
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentRecord {
    /// Kontrollpunkte p1..p4
    pub points: [ControlPoint; 4],
}

impl SegmentRecord {
    /// Erstellt einen Datensatz aus 4 Punkten
    pub fn new(points: [ControlPoint; 4]) -> Self {
        Self { points }
    }

    /// Parsed eine einzelne Zeile; `line` (1-basiert) landet im Fehler
    pub fn parse(text: &str, line: usize) -> Result<Self, TrackError> {
        let text = text.trim_end_matches(['\r', '\n']);
        let fields: Vec<&str> = text.split(POINT_SEPARATOR).collect();
        if fields.len() != 4 {
            return Err(TrackError::parse(
                line,
                ParseErrorKind::PointCount {
                    found: fields.len(),
                },
            ));
        }

        let mut points = [ControlPoint::new(0.0, 0.0); 4];
        for (slot, field) in points.iter_mut().zip(fields) {
            *slot = parse_point(field, line)?;
        }
        Ok(Self { points })
    }

    /// Formatiert den Datensatz als Zeile (ohne Zeilenumbruch)
    pub fn to_line(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{}{}{}", p.x, COORD_SEPARATOR, p.y))
            .collect::<Vec<_>>()
            .join(&POINT_SEPARATOR.to_string())
    }
}

impl From<[(f64, f64); 4]> for SegmentRecord {
    fn from(points: [(f64, f64); 4]) -> Self {
        Self::new(points.map(ControlPoint::from))
    }
}

/// Parsed mehrere Zeilen; reine Leerzeilen werden übersprungen.
///
/// Zeilennummern sind 1-basiert und zählen Leerzeilen mit.
pub fn parse_records<I, S>(lines: I) -> Result<Vec<SegmentRecord>, TrackError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut records = Vec::new();
    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }
        records.push(SegmentRecord::parse(line, index + 1)?);
    }
    Ok(records)
}

fn parse_point(field: &str, line: usize) -> Result<ControlPoint, TrackError> {
    let mut coords = field.split(COORD_SEPARATOR);
    let (Some(x), Some(y), None) = (coords.next(), coords.next(), coords.next()) else {
        return Err(TrackError::parse(
            line,
            ParseErrorKind::MalformedPoint {
                field: field.to_string(),
            },
        ));
    };
    Ok(ControlPoint::new(
        parse_coord(x, line)?,
        parse_coord(y, line)?,
    ))
}

fn parse_coord(text: &str, line: usize) -> Result<f64, TrackError> {
    let invalid = || {
        TrackError::parse(
            line,
            ParseErrorKind::InvalidNumber {
                value: text.to_string(),
            },
        )
    };
    let value: f64 = text.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}
