//! Umrechnung externer Objekt-Rotationen (Achse + Winkel) in ein Heading.

use glam::DVec3;

const AXIS_EPSILON: f64 = 1e-6;

/// Wandelt eine Achse-Winkel-Rotation in einen Gier-Winkel (Grad) um.
///
/// `angle` ist in Radiant. Reine ±Y-Achsen liefern direkt `±angle`,
/// sonst wird der Yaw aus der Rotationsmatrix (`atan2(R21, R11)`) bestimmt.
/// Eine Null-Achse wird unverändert verwendet und liefert damit 0° bzw. NaN
/// bei ungültigem Winkel; Aufrufer sanitisieren das Ergebnis.
pub fn axis_angle_to_yaw(axis: DVec3, angle: f64) -> f64 {
    let axis = if axis.length() > 0.0 {
        axis.normalize()
    } else {
        axis
    };

    let is_vertical = axis.x.abs() < AXIS_EPSILON && axis.z.abs() < AXIS_EPSILON;
    if is_vertical && (axis.y - 1.0).abs() < AXIS_EPSILON {
        return angle.to_degrees();
    }
    if is_vertical && (axis.y + 1.0).abs() < AXIS_EPSILON {
        return -angle.to_degrees();
    }

    let (sin_theta, cos_theta) = angle.sin_cos();
    let r11 = cos_theta + (1.0 - cos_theta) * axis.x * axis.x;
    let r21 = (1.0 - cos_theta) * axis.y * axis.x + sin_theta * axis.z;

    r21.atan2(r11).to_degrees()
}
