//! Tangenten-Berechnung für die Hermite-Spline durch alle Wegpunkte.

use crate::error::RoadError;
use crate::shared::spline_geometry::{heading_direction, rotate_quarter_about_up};
use glam::DVec3;

/// Berechnet für jede Position eine Tangente.
///
/// - Randtangenten kommen aus dem Heading: Blickrichtung um 90° um die
///   Hochachse gedreht, skaliert mit dem Abstand zum Nachbarpunkt.
/// - Innere Tangenten: Catmull-Rom `(P[i+1] - P[i-1]) / 2`.
///
/// Weniger als zwei Positionen ergeben `InvalidGeometryInput`.
pub fn solve_tangents(
    positions: &[DVec3],
    start_heading: f64,
    end_heading: f64,
) -> Result<Vec<DVec3>, RoadError> {
    let n = positions.len();
    if n < 2 {
        return Err(RoadError::invalid_geometry(format!(
            "mindestens 2 Positionen erforderlich, erhalten: {}",
            n
        )));
    }

    let mut tangents = Vec::with_capacity(n);

    let start_scale = positions[1].distance(positions[0]);
    tangents.push(boundary_tangent(start_heading, start_scale));

    for window in positions.windows(3) {
        tangents.push((window[2] - window[0]) / 2.0);
    }

    let end_scale = positions[n - 1].distance(positions[n - 2]);
    tangents.push(boundary_tangent(end_heading, end_scale));

    Ok(tangents)
}

/// Randtangente aus Heading (Grad) und Skalierung.
pub fn boundary_tangent(heading_deg: f64, scale: f64) -> DVec3 {
    rotate_quarter_about_up(heading_direction(heading_deg)) * scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_anzahl_tangenten_entspricht_positionen() {
        for n in 2..8 {
            let positions: Vec<DVec3> = (0..n)
                .map(|i| DVec3::new(i as f64 * 3.0, 0.0, (i * i) as f64))
                .collect();
            let tangents = solve_tangents(&positions, 0.0, 45.0).expect("Tangenten erwartet");
            assert_eq!(tangents.len(), n);
        }
    }

    #[test]
    fn test_einzelne_position_ist_ungueltig() {
        let err = solve_tangents(&[DVec3::ZERO], 0.0, 0.0).unwrap_err();
        assert!(matches!(err, RoadError::InvalidGeometryInput { .. }));
        assert!(solve_tangents(&[], 0.0, 0.0).is_err());
    }

    #[test]
    fn test_innere_tangente_ist_catmull_rom() {
        let positions = [
            DVec3::ZERO,
            DVec3::new(4.0, 0.0, 2.0),
            DVec3::new(10.0, 2.0, 0.0),
        ];
        let tangents = solve_tangents(&positions, 0.0, 0.0).expect("Tangenten erwartet");
        assert_eq!(tangents[1], DVec3::new(5.0, 1.0, 0.0));
    }

    #[test]
    fn test_randtangente_aus_heading_und_abstand() {
        // Heading 90° → Blickrichtung (0,0,-1) → gedreht (1,0,0)
        let positions = [DVec3::ZERO, DVec3::new(10.0, 0.0, 0.0)];
        let tangents = solve_tangents(&positions, 90.0, 90.0).expect("Tangenten erwartet");
        assert_abs_diff_eq!(tangents[0].x, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(tangents[0].z, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(tangents[1].x, 10.0, epsilon = 1e-9);
        assert_eq!(tangents[0].y, 0.0);
    }

    #[test]
    fn test_randtangente_skaliert_mit_positionen() {
        let positions = [
            DVec3::new(1.0, 0.0, 2.0),
            DVec3::new(4.0, 1.0, 6.0),
            DVec3::new(8.0, 0.0, 7.0),
            DVec3::new(9.0, 3.0, 12.0),
        ];
        let scaled: Vec<DVec3> = positions.iter().map(|p| *p * 3.0).collect();

        let base = solve_tangents(&positions, 30.0, 200.0).expect("Tangenten erwartet");
        let big = solve_tangents(&scaled, 30.0, 200.0).expect("Tangenten erwartet");

        assert_abs_diff_eq!(big[0].length(), base[0].length() * 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(big[3].length(), base[3].length() * 3.0, epsilon = 1e-9);
        // Richtung bleibt unverändert
        assert_abs_diff_eq!(big[0].normalize().dot(base[0].normalize()), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_randtangente_unabhaengig_von_inneren_punkten() {
        let short = [DVec3::ZERO, DVec3::new(5.0, 0.0, 0.0)];
        let long = [
            DVec3::ZERO,
            DVec3::new(5.0, 0.0, 0.0),
            DVec3::new(9.0, 0.0, 9.0),
            DVec3::new(20.0, 0.0, 3.0),
        ];
        let a = solve_tangents(&short, 12.0, 0.0).expect("Tangenten erwartet");
        let b = solve_tangents(&long, 12.0, 0.0).expect("Tangenten erwartet");
        assert_eq!(a[0], b[0]);
    }
}
