//! Writer für Wavefront-OBJ-Modelle.

use super::{format_coord, format_uv};
use crate::mesh::RibbonMesh;

/// Schreibt das Mesh als OBJ mit `v`/`vt`-Paaren und `f v/vt`-Faces.
///
/// Vertex- und UV-Index sind identisch, da jeder Vertex genau eine UV hat.
pub fn write_obj(mesh: &RibbonMesh) -> String {
    let mut output = String::new();
    output.push_str("# OBJ generated using Hermite splines with heading-derived start/end tangents\n");

    for vertex in mesh.vertices() {
        output.push_str(&format!(
            "v {} {} {}\n",
            format_coord(vertex.position.x),
            format_coord(vertex.position.y),
            format_coord(vertex.position.z)
        ));
        output.push_str(&format!(
            "vt {} {}\n",
            format_uv(vertex.uv.x),
            format_uv(vertex.uv.y)
        ));
    }

    for face in mesh.top_faces().into_iter().chain(mesh.bottom_faces()) {
        let refs: Vec<String> = face
            .iter()
            .map(|index| format!("{0}/{0}", index + 1))
            .collect();
        output.push_str(&format!("f {}\n", refs.join(" ")));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn test_obj_zeilen() {
        let mesh = RibbonMesh {
            left: vec![DVec3::new(0.0, 0.0, 1.0), DVec3::new(5.0, 0.0, 1.0)],
            right: vec![DVec3::new(0.0, 0.0, -1.0), DVec3::new(5.0, 0.0, -1.0)],
            v_coords: vec![0.0, 2.5],
            double_sided: true,
        };
        let text = write_obj(&mesh);

        assert!(text.starts_with("# OBJ"));
        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 4);
        assert_eq!(text.lines().filter(|l| l.starts_with("vt ")).count(), 4);
        assert!(text.contains("vt 1.0000 2.5000\n"));
        assert!(text.contains("f 1/1 3/3 4/4 2/2\n"));
        assert!(text.contains("f 2/2 4/4 3/3 1/1\n"));
    }
}
