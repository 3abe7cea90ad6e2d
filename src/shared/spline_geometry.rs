//! Reine Geometrie-Funktionen für kubische Hermite-Splines.
//!
//! Layer-neutral: kann von `mesh` und `app` importiert werden ohne
//! Zirkel-Abhängigkeiten zu erzeugen. Vektoren sind `glam::DVec3` mit
//! x = Ost, y = hoch, z = Nord/Süd (Weltkoordinaten der Vorschau).

use glam::DVec3;

/// Fester Hoch-Vektor für die Rahmenberechnung.
pub const UP: DVec3 = DVec3::Y;

/// Ersatzrichtung, wenn die Ableitung verschwindet.
pub const FALLBACK_FORWARD: DVec3 = DVec3::X;

/// Ein Segment zwischen zwei aufeinanderfolgenden Wegpunkten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HermiteSegment {
    pub p0: DVec3,
    pub m0: DVec3,
    pub p1: DVec3,
    pub m1: DVec3,
}

impl HermiteSegment {
    /// Erstellt ein Segment aus Endpunkten und Tangenten.
    pub fn new(p0: DVec3, m0: DVec3, p1: DVec3, m1: DVec3) -> Self {
        Self { p0, m0, p1, m1 }
    }

    /// Position auf dem Segment (t ∈ [0, 1]).
    pub fn point(&self, t: f64) -> DVec3 {
        hermite_point(self.p0, self.m0, self.p1, self.m1, t)
    }

    /// Erste Ableitung auf dem Segment (t ∈ [0, 1]).
    pub fn derivative(&self, t: f64) -> DVec3 {
        hermite_derivative(self.p0, self.m0, self.p1, self.m1, t)
    }
}

/// Berechnet einen Punkt auf einem kubischen Hermite-Segment.
///
/// Basis: h00 = 2t³-3t²+1, h10 = t³-2t²+t, h01 = -2t³+3t², h11 = t³-t²
pub fn hermite_point(p0: DVec3, m0: DVec3, p1: DVec3, m1: DVec3, t: f64) -> DVec3 {
    let t2 = t * t;
    let t3 = t2 * t;
    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;
    h00 * p0 + h10 * m0 + h01 * p1 + h11 * m1
}

/// Berechnet die erste Ableitung eines kubischen Hermite-Segments.
pub fn hermite_derivative(p0: DVec3, m0: DVec3, p1: DVec3, m1: DVec3, t: f64) -> DVec3 {
    let t2 = t * t;
    let h00 = 6.0 * t2 - 6.0 * t;
    let h10 = 3.0 * t2 - 4.0 * t + 1.0;
    let h01 = -6.0 * t2 + 6.0 * t;
    let h11 = 3.0 * t2 - 2.0 * t;
    h00 * p0 + h10 * m0 + h01 * p1 + h11 * m1
}

/// Horizontale Blickrichtung eines Headings (Grad).
///
/// Der Winkel wird invertiert (`θ = -heading·π/180`), weil Headings im
/// Uhrzeigersinn gezählt werden: Ergebnis `(cos θ, 0, sin θ)`.
pub fn heading_direction(heading_deg: f64) -> DVec3 {
    let angle = (-heading_deg).to_radians();
    DVec3::new(angle.cos(), 0.0, angle.sin())
}

/// Dreht einen Vektor um 90° gegen den Uhrzeigersinn um die Y-Achse: (x, y, z) → (-z, y, x).
pub fn rotate_quarter_about_up(v: DVec3) -> DVec3 {
    DVec3::new(-v.z, v.y, v.x)
}

/// Normalisiert `v`; der Nullvektor bleibt Nullvektor.
pub fn normalize_or_zero(v: DVec3) -> DVec3 {
    v.normalize_or_zero()
}

/// Vorwärtsrichtung aus einer Ableitung, mit Fallback bei Nullableitung.
pub fn forward_direction(derivative: DVec3) -> DVec3 {
    let dir = normalize_or_zero(derivative);
    if dir == DVec3::ZERO {
        FALLBACK_FORWARD
    } else {
        dir
    }
}

/// Schienen-Senkrechte: `normalize(forward × up)`.
pub fn rail_perpendicular(forward: DVec3) -> DVec3 {
    normalize_or_zero(forward.cross(UP))
}
