//! Core-Domänentypen: Wegpunkte, Wegpunkt-Speicher, Heading-Umrechnung.

pub mod heading;
pub mod waypoint;
pub mod waypoint_store;

pub use heading::axis_angle_to_yaw;
pub use waypoint::{sanitize_heading, Waypoint};
pub use waypoint_store::{StoreSnapshot, WaypointStore};
