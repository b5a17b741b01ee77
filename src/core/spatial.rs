//! Spatial-Index (KD-Tree) für schnelle Punkt-Abfragen im Editor.

use glam::DVec2;
use kiddo::{KdTree, SquaredEuclidean};

use crate::core::PointId;

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// ID des gefundenen Punkts
    pub point_id: PointId,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f64,
}

/// Read-only Spatial-Index über allen Punkten des Editors.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    point_ids: Vec<PointId>,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            point_ids: Vec::new(),
        }
    }

    /// Baut einen neuen Index aus den übergebenen Punkten.
    ///
    /// Der Tree-Eintrag `i` gehört zu `point_ids[i]`.
    pub fn from_points(points: impl IntoIterator<Item = (PointId, DVec2)>) -> Self {
        let (point_ids, entries): (Vec<PointId>, Vec<[f64; 2]>) = points
            .into_iter()
            .map(|(id, pos)| (id, [pos.x, pos.y]))
            .unzip();

        let tree: KdTree<f64, 2> = (&entries).into();

        Self { tree, point_ids }
    }

    /// Gibt `true` zurück, wenn keine Punkte im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.point_ids.is_empty()
    }

    /// Findet den nächsten Punkt zur gegebenen Position.
    pub fn nearest(&self, query: DVec2) -> Option<SpatialMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self.tree.nearest_one::<SquaredEuclidean>(&[query.x, query.y]);
        let point_id = *self.point_ids.get(result.item as usize)?;

        Some(SpatialMatch {
            point_id,
            distance: result.distance.sqrt(),
        })
    }

    /// Findet den nächsten Punkt, der echt näher als `radius` liegt.
    pub fn hit(&self, query: DVec2, radius: f64) -> Option<SpatialMatch> {
        self.nearest(query).filter(|m| m.distance < radius)
    }
}
