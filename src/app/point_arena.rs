//! Punkt-Arena des Editors: stabile IDs statt Objekt-Aliasing.
//!
//! Segmente referenzieren Punkte nur über ihre `PointId`. Wird ein Punkt
//! verschoben, muss der Aufrufer alle referenzierenden Segmente neu berechnen.

use crate::core::{ControlPoint, PointId, SpatialIndex};
use glam::DVec2;
use indexmap::IndexMap;

/// Alle Punkte des Editors in Einfügereihenfolge
#[derive(Debug, Clone)]
pub struct PointArena {
    points: IndexMap<PointId, ControlPoint>,
    next_id: u64,
    /// Persistenter Spatial-Index für Hit-Tests
    spatial_index: SpatialIndex,
}

impl Default for PointArena {
    fn default() -> Self {
        Self::new()
    }
}

impl PointArena {
    /// Erstellt eine leere Arena
    pub fn new() -> Self {
        Self {
            points: IndexMap::new(),
            next_id: 1,
            spatial_index: SpatialIndex::empty(),
        }
    }

    /// Fügt einen Punkt hinzu und gibt seine neue ID zurück
    pub fn insert(&mut self, point: ControlPoint) -> PointId {
        let id = PointId(self.next_id);
        self.next_id += 1;
        self.points.insert(id, point);
        self.rebuild_spatial_index();
        id
    }

    /// Verschiebt einen Punkt; `false` wenn die ID unbekannt ist
    pub fn move_point(&mut self, id: PointId, position: DVec2) -> bool {
        let Some(point) = self.points.get_mut(&id) else {
            return false;
        };

        if point.position() == position {
            return true;
        }

        *point = ControlPoint::from(position);
        self.rebuild_spatial_index();
        true
    }

    /// Entfernt einen Punkt (Reihenfolge der übrigen bleibt erhalten)
    pub fn remove(&mut self, id: PointId) -> Option<ControlPoint> {
        let removed = self.points.shift_remove(&id);
        if removed.is_some() {
            self.rebuild_spatial_index();
        }
        removed
    }

    /// Nächster Punkt, der echt näher als `radius` an `pos` liegt
    pub fn hit_test(&self, pos: DVec2, radius: f64) -> Option<PointId> {
        self.spatial_index.hit(pos, radius).map(|m| m.point_id)
    }

    /// Löst 4 IDs in Kontrollpunkte auf
    pub fn resolve(&self, ids: &[PointId; 4]) -> Option<[ControlPoint; 4]> {
        let mut points = [ControlPoint::new(0.0, 0.0); 4];
        for (slot, id) in points.iter_mut().zip(ids) {
            *slot = *self.points.get(id)?;
        }
        Some(points)
    }

    /// Iteriert in Einfügereihenfolge
    pub fn iter(&self) -> impl Iterator<Item = (PointId, &ControlPoint)> {
        self.points.iter().map(|(id, p)| (*id, p))
    }

    /// Anzahl der Punkte
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Prüft ob die Arena leer ist
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn rebuild_spatial_index(&mut self) {
        self.spatial_index =
            SpatialIndex::from_points(self.points.iter().map(|(id, p)| (*id, p.position())));
    }
}
