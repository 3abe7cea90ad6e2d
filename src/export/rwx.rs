//! Writer für RenderWare-Script-Modelle (RWX).

use super::{format_coord, format_uv};
use crate::mesh::RibbonMesh;

/// Schreibt das Mesh als RWX-Clump mit Vertex-UVs und Quads.
///
/// Pro Zeile zwei `Vertex`-Zeilen (links, rechts), danach die Quads der
/// Oberseite und bei doppelseitigen Meshes ein Block mit umgekehrter Windung.
pub fn write_rwx(mesh: &RibbonMesh, texture: &str) -> String {
    let mut output = String::new();
    output.push_str("ModelBegin\n");
    output.push_str("  ClumpBegin #Layer: Object\n");
    output.push_str("    Diffuse 1.0\n");
    output.push_str("    Color 1.0 1.0 1.0\n");
    output.push_str(&format!("    Texture {}\n", texture));
    output.push_str("    LightSampling Vertex\n");

    for vertex in mesh.vertices() {
        output.push_str(&format!(
            "    Vertex {} {} {} UV {} {}\n",
            format_coord(vertex.position.x),
            format_coord(vertex.position.y),
            format_coord(vertex.position.z),
            format_uv(vertex.uv.x),
            format_uv(vertex.uv.y)
        ));
    }

    output.push_str("#texend Object\n");

    for [a, b, c, d] in mesh.top_faces() {
        output.push_str(&format!(
            "    Quad {} {} {} {}\n",
            a + 1,
            b + 1,
            c + 1,
            d + 1
        ));
    }

    let bottom = mesh.bottom_faces();
    if !bottom.is_empty() {
        output.push_str("# Bottom faces\n");
        for [a, b, c, d] in bottom {
            output.push_str(&format!(
                "    Quad {} {} {} {} # Bottom side\n",
                a + 1,
                b + 1,
                c + 1,
                d + 1
            ));
        }
    }

    output.push_str("  ClumpEnd\n");
    output.push_str("ModelEnd\n");
    output
}
