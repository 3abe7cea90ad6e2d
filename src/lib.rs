//! Roady: inkrementeller Straßen-Generator.
//! Core-Funktionalität als Library exportiert für Tests, Replay und Einbettung in einen Host.

pub mod app;
pub mod core;
pub mod error;
pub mod export;
pub mod mesh;
pub mod replay;
pub mod shared;

pub use app::{
    EventOutcome, EventQueue, HostBridge, IntentSender, PreviewRequest, RecordingHost,
    SessionCommand, SessionController, SessionIntent, SessionState,
};
pub use core::{axis_angle_to_yaw, StoreSnapshot, Waypoint, WaypointStore};
pub use error::RoadError;
pub use export::{export_mesh, serialize_mesh, ExportReport, ExportTarget};
pub use mesh::{build_ribbon, solve_tangents, RibbonMesh};
pub use replay::ReplayScript;
pub use shared::{GeometryConfig, ModelFormat, RoadOptions};
