//! Ribbon-Mesh-Aufbau entlang der Hermite-Spline.

use super::tangent::solve_tangents;
use crate::core::StoreSnapshot;
use crate::error::RoadError;
use crate::shared::spline_geometry::{forward_direction, rail_perpendicular, HermiteSegment};
use crate::shared::GeometryConfig;
use glam::{DVec2, DVec3};

/// Viereck aus vier 0-basierten Vertex-Indizes in Windungsreihenfolge.
pub type Quad = [u32; 4];

/// Ein Vertex mit Position (relativ zum Pivot) und Texturkoordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshVertex {
    pub position: DVec3,
    pub uv: DVec2,
}

/// Formatneutrales Straßen-Mesh.
///
/// Zeile `i` besteht aus `left[i]` und `right[i]`; in der flachen
/// Vertex-Liste liegen sie verschachtelt an Index `2i` (links) und `2i+1`
/// (rechts). Alle Positionen sind relativ zum ersten Wegpunkt.
#[derive(Debug, Clone, PartialEq)]
pub struct RibbonMesh {
    /// Linke Schiene (U = 0)
    pub left: Vec<DVec3>,
    /// Rechte Schiene (U = 1)
    pub right: Vec<DVec3>,
    /// Texturkoordinate V pro Zeile (Bogenlänge · uv_scale_y)
    pub v_coords: Vec<f64>,
    /// Unterseite mit umgekehrter Windung ausgeben
    pub double_sided: bool,
}

impl RibbonMesh {
    /// Anzahl der Vertex-Zeilen (Abtastpunkte).
    pub fn row_count(&self) -> usize {
        self.left.len()
    }

    /// Anzahl der Vertices (zwei pro Zeile).
    pub fn vertex_count(&self) -> usize {
        self.left.len() * 2
    }

    /// Vertices in Ausgabereihenfolge: pro Zeile links, dann rechts.
    pub fn vertices(&self) -> impl Iterator<Item = MeshVertex> + '_ {
        self.left
            .iter()
            .zip(&self.right)
            .zip(&self.v_coords)
            .flat_map(|((&left, &right), &v)| {
                [
                    MeshVertex {
                        position: left,
                        uv: DVec2::new(0.0, v),
                    },
                    MeshVertex {
                        position: right,
                        uv: DVec2::new(1.0, v),
                    },
                ]
            })
    }

    /// Oberseite: pro Zeilenpaar `[L_i, L_{i+1}, R_{i+1}, R_i]`.
    pub fn top_faces(&self) -> Vec<Quad> {
        (0..self.row_count().saturating_sub(1) as u32)
            .map(|row| {
                let (l0, r0) = (2 * row, 2 * row + 1);
                let (l1, r1) = (l0 + 2, r0 + 2);
                [l0, l1, r1, r0]
            })
            .collect()
    }

    /// Unterseite: Oberseite mit umgekehrter Windung.
    ///
    /// Leer, wenn das Mesh nicht doppelseitig ist.
    pub fn bottom_faces(&self) -> Vec<Quad> {
        if !self.double_sided {
            return Vec::new();
        }
        self.top_faces()
            .into_iter()
            .map(|[a, b, c, d]| [d, c, b, a])
            .collect()
    }

    /// Gesamtzahl der Faces (Ober- plus ggf. Unterseite).
    pub fn face_count(&self) -> usize {
        let top = self.row_count().saturating_sub(1);
        if self.double_sided {
            top * 2
        } else {
            top
        }
    }

    /// Größte V-Koordinate (Bogenlänge am Straßenende · uv_scale_y).
    pub fn max_v(&self) -> f64 {
        self.v_coords.last().copied().unwrap_or(0.0)
    }
}

/// Baut das Ribbon-Mesh aus einer sortierten Wegpunkt-Momentaufnahme.
///
/// Pro Segment `i` wird `t = j / segments_per_span` abgetastet; die
/// Startzeile eines Folgesegments entfällt, weil sie mit der Endzeile des
/// Vorgängers zusammenfällt. Damit gilt
/// `vertex_count = 2 · (segments_per_span · (n-1) + 1)`.
pub fn build_ribbon(
    snapshot: &StoreSnapshot,
    config: &GeometryConfig,
) -> Result<RibbonMesh, RoadError> {
    let positions = &snapshot.positions;
    validate_config(config)?;
    let tangents = solve_tangents(positions, snapshot.start_heading, snapshot.end_heading)?;

    let segments = config.segments_per_span as usize;
    let rows = segments * (positions.len() - 1) + 1;
    let half_width = config.road_width / 2.0;
    let pivot = snapshot.anchor();

    let mut mesh = RibbonMesh {
        left: Vec::with_capacity(rows),
        right: Vec::with_capacity(rows),
        v_coords: Vec::with_capacity(rows),
        double_sided: config.double_sided,
    };

    let mut arc_length = 0.0;
    let mut previous: Option<DVec3> = None;

    for (i, pair) in positions.windows(2).enumerate() {
        let segment = HermiteSegment::new(pair[0], tangents[i], pair[1], tangents[i + 1]);
        let first_sample = if i == 0 { 0 } else { 1 };

        for j in first_sample..=segments {
            let t = j as f64 / segments as f64;
            let center = segment.point(t);
            let forward = forward_direction(segment.derivative(t));
            let perp = rail_perpendicular(forward);

            if let Some(prev) = previous {
                arc_length += center.distance(prev);
            }
            previous = Some(center);

            mesh.left.push(center + perp * half_width - pivot);
            mesh.right.push(center - perp * half_width - pivot);
            mesh.v_coords.push(arc_length * config.uv_scale_y);
        }
    }

    log::debug!(
        "Ribbon aufgebaut: {} Wegpunkte, {} Zeilen, Länge {:.3}",
        positions.len(),
        mesh.row_count(),
        arc_length
    );

    Ok(mesh)
}

/// Prüft die Geometrie-Parameter vor dem Aufbau.
///
/// Breite und UV-Skalierung müssen endlich und positiv sein, sonst
/// entstehen NaN-Vertices oder fallende V-Koordinaten.
fn validate_config(config: &GeometryConfig) -> Result<(), RoadError> {
    if config.segments_per_span < 1 {
        return Err(RoadError::invalid_geometry(
            "segments_per_span muss mindestens 1 sein",
        ));
    }
    if !(config.road_width.is_finite() && config.road_width > 0.0) {
        return Err(RoadError::invalid_geometry(format!(
            "road_width muss positiv sein, ist {}",
            config.road_width
        )));
    }
    if !(config.uv_scale_y.is_finite() && config.uv_scale_y > 0.0) {
        return Err(RoadError::invalid_geometry(format!(
            "uv_scale_y muss positiv sein, ist {}",
            config.uv_scale_y
        )));
    }
    Ok(())
}
