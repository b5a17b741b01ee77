//! Ein Streckensegment: kubische Bézier-Kurve mit abgeleiteten Randlinien.
//!
//! Beim Erzeugen wird die Mittellinie per De Casteljau abgetastet und für
//! jedes benachbarte Sample-Paar ein linker und rechter Randpunkt berechnet.
//! Danach ist das Segment unveränderlich; nach einer Änderung der
//! Kontrollpunkte muss ein neues Segment erzeugt werden.

use super::{ControlPoint, TrackError};
use crate::shared::geometry::{
    de_casteljau, heading_angle, midpoint, offset_point, uniform_parameters,
};
use crate::shared::{OFFSET_RADIUS, SAMPLE_COUNT};
use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Kubisches Bézier-Segment mit Mittellinie und Randlinien
#[derive(Debug, Clone, PartialEq)]
pub struct TrackSegment {
    controls: [ControlPoint; 4],
    centerline: Vec<DVec2>,
    left_offsets: Vec<DVec2>,
    right_offsets: Vec<DVec2>,
    offset_radius: f64,
}

impl TrackSegment {
    /// Erstellt ein Segment mit Standard-Sample-Anzahl und Standard-Radius
    pub fn new(controls: [ControlPoint; 4]) -> Result<Self, TrackError> {
        Self::with_params(controls, SAMPLE_COUNT, OFFSET_RADIUS)
    }

    /// Erstellt ein Segment aus einer Punktliste (genau 4 Punkte erforderlich)
    pub fn from_slice(
        controls: &[ControlPoint],
        sample_count: usize,
        offset_radius: f64,
    ) -> Result<Self, TrackError> {
        let controls: [ControlPoint; 4] = controls.try_into().map_err(|_| {
            TrackError::InvalidArgument(format!(
                "Segment benötigt genau 4 Kontrollpunkte, erhalten: {}",
                controls.len()
            ))
        })?;
        Self::with_params(controls, sample_count, offset_radius)
    }

    /// Erstellt ein Segment mit expliziter Sample-Anzahl und Randabstand
    pub fn with_params(
        controls: [ControlPoint; 4],
        sample_count: usize,
        offset_radius: f64,
    ) -> Result<Self, TrackError> {
        if sample_count < 2 {
            return Err(TrackError::InvalidArgument(format!(
                "Sample-Anzahl muss mindestens 2 sein, erhalten: {sample_count}"
            )));
        }
        if !offset_radius.is_finite() || offset_radius < 0.0 {
            return Err(TrackError::InvalidArgument(format!(
                "Randabstand muss endlich und nicht negativ sein, erhalten: {offset_radius}"
            )));
        }
        if let Some(bad) = controls.iter().find(|p| !p.is_finite()) {
            return Err(TrackError::InvalidArgument(format!(
                "Kontrollpunkt {bad} ist nicht endlich"
            )));
        }

        let centerline = sample_cubic(&controls, sample_count);
        if centerline.iter().any(|p| !p.is_finite()) {
            return Err(TrackError::InvalidArgument(
                "Kontrollpunkte außerhalb des darstellbaren Bereichs".to_string(),
            ));
        }
        let (left_offsets, right_offsets) = derive_offsets(&centerline, offset_radius)?;

        Ok(Self {
            controls,
            centerline,
            left_offsets,
            right_offsets,
            offset_radius,
        })
    }

    /// Die vier Kontrollpunkte p1..p4
    pub fn control_points(&self) -> &[ControlPoint; 4] {
        &self.controls
    }

    /// Abgetastete Mittellinie (erster Punkt = p1, letzter = p4)
    pub fn centerline(&self) -> &[DVec2] {
        &self.centerline
    }

    /// Linke Randlinie (ein Punkt pro Sample-Paar)
    pub fn left_offsets(&self) -> &[DVec2] {
        &self.left_offsets
    }

    /// Rechte Randlinie (ein Punkt pro Sample-Paar)
    pub fn right_offsets(&self) -> &[DVec2] {
        &self.right_offsets
    }

    /// Anzahl der Mittellinien-Samples
    pub fn sample_count(&self) -> usize {
        self.centerline.len()
    }

    /// Randabstand, mit dem das Segment erzeugt wurde
    pub fn offset_radius(&self) -> f64 {
        self.offset_radius
    }
}

/// Tastet die kubische Bézier-Kurve an `sample_count` gleichverteilten Parametern ab.
pub fn sample_cubic(controls: &[ControlPoint; 4], sample_count: usize) -> Vec<DVec2> {
    let positions: Vec<DVec2> = controls.iter().map(ControlPoint::position).collect();
    uniform_parameters(sample_count)
        .filter_map(|t| de_casteljau(&positions, t))
        .collect()
}

/// Leitet linke und rechte Randpunkte zwischen benachbarten Mittellinien-Samples ab.
///
/// Anker ist jeweils der Mittelpunkt eines Sample-Paars; die Richtung ergibt
/// sich aus dem Vektor vom Mittelpunkt zum zweiten Sample, gedreht um ±90°.
pub fn derive_offsets(
    centerline: &[DVec2],
    radius: f64,
) -> Result<(Vec<DVec2>, Vec<DVec2>), TrackError> {
    let pairs = centerline.len().saturating_sub(1);
    let mut left = Vec::with_capacity(pairs);
    let mut right = Vec::with_capacity(pairs);

    for (sample, w) in centerline.windows(2).enumerate() {
        let middle = midpoint(w[0], w[1]);
        let angle =
            heading_angle(w[1] - middle).ok_or(TrackError::DegenerateSegment { sample })?;

        left.push(offset_point(middle, angle + FRAC_PI_2, radius));
        right.push(offset_point(middle, (angle - FRAC_PI_2).rem_euclid(TAU), radius));
    }

    Ok((left, right))
}
