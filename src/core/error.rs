//! Fehlertypen für Streckenaufbau und Streckendateien.

use thiserror::Error;

/// Ursache eines fehlerhaften Datensatzes in einer Streckendatei.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// Nicht genau 4 Punkte in der Zeile
    #[error("erwartet 4 Punkte, gefunden {found}")]
    PointCount { found: usize },
    /// Punktfeld nicht im Format `x;y`
    #[error("Punkt '{field}' ist nicht im Format x;y")]
    MalformedPoint { field: String },
    /// Koordinate keine endliche Zahl
    #[error("Koordinate '{value}' ist keine endliche Zahl")]
    InvalidNumber { value: String },
}

/// Fehler beim Aufbau einer Strecke.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackError {
    /// Fehlerhafter Datensatz, `line` ist 1-basiert
    #[error("Zeile {line}: {kind}")]
    Parse { line: usize, kind: ParseErrorKind },
    /// Zwei aufeinanderfolgende Mittellinien-Samples fallen zusammen
    #[error("Degeneriertes Segment: Samples {sample} und {} fallen zusammen", .sample + 1)]
    DegenerateSegment { sample: usize },
    /// Ungültige Konstruktionsparameter (Punktanzahl, Sample-Anzahl, Radius)
    #[error("Ungültiges Argument: {0}")]
    InvalidArgument(String),
}

impl TrackError {
    /// Kurzform für einen Parse-Fehler
    pub fn parse(line: usize, kind: ParseErrorKind) -> Self {
        Self::Parse { line, kind }
    }
}
