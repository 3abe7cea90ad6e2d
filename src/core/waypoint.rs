//! Ein einzelner Straßen-Wegpunkt mit Position und Heading.

use glam::DVec3;

/// Vom Benutzer platzierter 3D-Ankerpunkt der Straße.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    /// Extern vergebene, innerhalb einer Session eindeutige ID
    pub id: u64,
    /// Absolute Weltposition (x, y = hoch, z)
    pub position: DVec3,
    /// Gier-Winkel in Grad (logisch [0, 360), nicht erzwungen)
    pub heading: f64,
}

impl Waypoint {
    /// Erstellt einen neuen Wegpunkt. NaN-Headings werden auf 0 gesetzt.
    pub fn new(id: u64, position: DVec3, heading: f64) -> Self {
        Self {
            id,
            position,
            heading: sanitize_heading(heading),
        }
    }
}

/// Ersetzt ein nicht darstellbares Heading (NaN) durch 0°.
pub fn sanitize_heading(heading: f64) -> f64 {
    if heading.is_nan() {
        0.0
    } else {
        heading
    }
}
