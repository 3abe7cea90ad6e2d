//! Geteilte Typen und layer-neutrale Geometrie.
//!
//! Enthält Konfiguration, Modellformat und Spline-Mathematik, die von
//! `mesh`, `export` und `app` gleichermaßen genutzt werden.

pub mod options;
mod model_format;
pub mod spline_geometry;

pub use model_format::ModelFormat;
pub use options::{GeometryConfig, RoadOptions, ROAD_NODE_TAG};
