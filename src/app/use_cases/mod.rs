//! Use-Cases der Session-Orchestrierung.

pub mod regenerate;
pub mod session;
pub mod waypoints;
