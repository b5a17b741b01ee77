//! Reine Geometrie-Funktionen für Bézier-Auswertung und Randversatz.
//!
//! Layer-neutral: wird von `core` (Segment-Konstruktion) und `app`
//! (Editor) gleichermaßen genutzt.

use glam::DVec2;

/// Lineare Interpolation: `(1-t)·a + t·b` (komponentenweise).
pub fn lerp(a: DVec2, b: DVec2, t: f64) -> DVec2 {
    (1.0 - t) * a + t * b
}

/// Mittelpunkt zweier Punkte (ohne Überlauf der Summe).
pub fn midpoint(a: DVec2, b: DVec2) -> DVec2 {
    a * 0.5 + b * 0.5
}

/// Wertet eine Bézier-Kurve beliebigen Grades per De Casteljau bei `t` aus.
///
/// Jede Runde interpoliert benachbarte Punktpaare und verkürzt die Liste um
/// eins, bis genau ein Punkt übrig bleibt. Gibt `None` für eine leere Liste.
pub fn de_casteljau(points: &[DVec2], t: f64) -> Option<DVec2> {
    let mut current = points.to_vec();
    while current.len() > 1 {
        current = current.windows(2).map(|w| lerp(w[0], w[1], t)).collect();
    }
    current.first().copied()
}

/// Gleichmäßig verteilte Kurvenparameter `t_i = i / (n-1)` inkl. beider Enden.
pub fn uniform_parameters(count: usize) -> impl Iterator<Item = f64> {
    let last = count.saturating_sub(1).max(1) as f64;
    (0..count).map(move |i| i as f64 / last)
}

/// Vorzeichenbehafteter Richtungswinkel von `v` relativ zu (1, 0) in (-π, π].
///
/// Gibt `None` für einen Null-Vektor oder nicht endliche Komponenten.
pub fn heading_angle(v: DVec2) -> Option<f64> {
    if !v.is_finite() || v == DVec2::ZERO {
        return None;
    }
    Some(v.y.atan2(v.x))
}

/// Punkt im Abstand `radius` von `origin` in Richtung `angle` (Radiant).
pub fn offset_point(origin: DVec2, angle: f64, radius: f64) -> DVec2 {
    origin + DVec2::from_angle(angle) * radius
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[DVec2]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_lerp_endpoints_and_middle() {
        let a = DVec2::new(0.0, 10.0);
        let b = DVec2::new(10.0, 20.0);

        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        assert_eq!(lerp(a, b, 0.5), DVec2::new(5.0, 15.0));
    }

    #[test]
    fn test_de_casteljau_matches_cubic_formula() {
        let p = [
            DVec2::new(0.0, 0.0),
            DVec2::new(3.0, 10.0),
            DVec2::new(7.0, 10.0),
            DVec2::new(10.0, 0.0),
        ];

        for t in [0.0, 0.25, 0.5, 0.8, 1.0] {
            let inv = 1.0 - t;
            let expected = inv * inv * inv * p[0]
                + 3.0 * inv * inv * t * p[1]
                + 3.0 * inv * t * t * p[2]
                + t * t * t * p[3];
            let got = de_casteljau(&p, t).expect("Punkt erwartet");
            assert_relative_eq!(got.x, expected.x, epsilon = 1e-9);
            assert_relative_eq!(got.y, expected.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_de_casteljau_handles_any_degree() {
        assert!(de_casteljau(&[], 0.5).is_none());
        assert_eq!(
            de_casteljau(&[DVec2::new(4.0, 2.0)], 0.3),
            Some(DVec2::new(4.0, 2.0))
        );
        let quad = de_casteljau(
            &[DVec2::ZERO, DVec2::new(5.0, 10.0), DVec2::new(10.0, 0.0)],
            0.5,
        )
        .expect("Punkt erwartet");
        assert_relative_eq!(quad.x, 5.0);
        assert_relative_eq!(quad.y, 5.0);
    }

    #[test]
    fn test_uniform_parameters_include_both_ends() {
        let ts: Vec<f64> = uniform_parameters(5).collect();
        assert_eq!(ts, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_heading_angle_quadrants() {
        assert_relative_eq!(heading_angle(DVec2::new(1.0, 0.0)).unwrap(), 0.0);
        assert_relative_eq!(heading_angle(DVec2::new(0.0, 2.0)).unwrap(), FRAC_PI_2);
        assert_relative_eq!(heading_angle(DVec2::new(0.0, -2.0)).unwrap(), -FRAC_PI_2);
        // Antiparallel zu (1, 0): genau der Fall, bei dem acos instabil wird
        assert_relative_eq!(heading_angle(DVec2::new(-3.0, 0.0)).unwrap(), PI);
        assert_relative_eq!(
            heading_angle(DVec2::new(-3.0, 1e-12)).unwrap(),
            PI,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_heading_angle_rejects_zero_vector() {
        assert!(heading_angle(DVec2::ZERO).is_none());
        assert!(heading_angle(DVec2::new(f64::NAN, 1.0)).is_none());
    }

    #[test]
    fn test_heading_angle_accepts_tiny_vectors() {
        // length_squared läuft hier auf 0, der Vektor ist trotzdem nicht null
        let angle = heading_angle(DVec2::new(1e-170, 0.0)).expect("Winkel erwartet");
        assert_relative_eq!(angle, 0.0);
        let angle = heading_angle(DVec2::new(0.0, 1.6e-16)).expect("Winkel erwartet");
        assert_relative_eq!(angle, FRAC_PI_2);
    }

    #[test]
    fn test_midpoint_of_huge_coordinates_stays_finite() {
        let m = midpoint(DVec2::new(1.6e308, -1.7e308), DVec2::new(1.7e308, -1.5e308));
        assert!(m.is_finite());
        assert_relative_eq!(m.x, 1.65e308, max_relative = 1e-12);
        assert_relative_eq!(m.y, -1.6e308, max_relative = 1e-12);
    }

    #[test]
    fn test_offset_point() {
        let p = offset_point(DVec2::new(10.0, 10.0), FRAC_PI_2, 30.0);
        assert_relative_eq!(p.x, 10.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, 40.0, epsilon = 1e-9);
    }

    #[test]
    fn test_polyline_length() {
        let line = [DVec2::ZERO, DVec2::new(3.0, 4.0), DVec2::new(3.0, 10.0)];
        assert_relative_eq!(polyline_length(&line), 11.0);
        assert_relative_eq!(polyline_length(&line[..1]), 0.0);
    }
}
