//! Repräsentiert einen Kontrollpunkt einer Strecke.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Stabile ID eines Punkts im Editor (bleibt beim Löschen anderer Punkte gültig)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PointId(pub u64);

impl std::fmt::Display for PointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ein 2D-Kontrollpunkt (frei im Editor oder als Teil eines Segments)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    /// X-Koordinate
    pub x: f64,
    /// Y-Koordinate
    pub y: f64,
}

impl ControlPoint {
    /// Erstellt einen neuen Kontrollpunkt
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Position als Vektor
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Prüft ob beide Koordinaten endlich sind
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euklidische Distanz zu einer Position
    pub fn distance(&self, pos: DVec2) -> f64 {
        self.position().distance(pos)
    }

    /// Hit-Test: liegt `pos` echt innerhalb von `radius` um den Punkt?
    pub fn collides(&self, pos: DVec2, radius: f64) -> bool {
        self.distance(pos) < radius
    }
}

impl From<DVec2> for ControlPoint {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for ControlPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for ControlPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}; {})", self.x, self.y)
    }
}
