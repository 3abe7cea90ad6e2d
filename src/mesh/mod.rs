//! Mesh-Pipeline: Tangenten lösen, Spline abtasten, Ribbon extrudieren.
//!
//! Ergebnis ist ein formatneutrales `RibbonMesh`, das von den Serialisierern
//! in `crate::export` in ein Textformat überführt wird.

pub mod ribbon;
pub mod tangent;

pub use ribbon::{build_ribbon, MeshVertex, Quad, RibbonMesh};
pub use tangent::solve_tangents;
