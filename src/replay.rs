//! Event-Skripte für die Replay-Binary.
//!
//! Ein Skript ist JSON mit einer Liste von Events, die der Reihe nach in
//! `SessionIntent`s übersetzt werden:
//!
//! ```json
//! {
//!   "events": [
//!     { "type": "start", "anchor": [0.0, 0.0, 0.0] },
//!     { "type": "created", "id": 2, "position": [10.0, 0.0, 0.0], "heading": 90.0 },
//!     { "type": "changed", "id": 2, "position": [10.0, 0.0, 4.0],
//!       "rotation": { "axis": [0.0, 1.0, 0.0], "angle": 1.5708 } },
//!     { "type": "deleted", "id": 2 },
//!     { "type": "clear" }
//!   ]
//! }
//! ```

use crate::app::SessionIntent;
use crate::core::axis_angle_to_yaw;
use crate::shared::GeometryConfig;
use anyhow::Context;
use glam::DVec3;
use serde::Deserialize;
use std::path::Path;

/// Drehung als Achse + Winkel (Radiant), wie Weltobjekte sie melden.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RotationSpec {
    pub axis: DVec3,
    pub angle: f64,
}

/// Ein Event im Skript.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScriptEvent {
    Start {
        anchor: DVec3,
    },
    Created {
        id: u64,
        position: DVec3,
        #[serde(default)]
        heading: Option<f64>,
        #[serde(default)]
        rotation: Option<RotationSpec>,
        #[serde(default = "default_owner_matches")]
        owner_matches: bool,
        /// Fehlt das Tag, gilt das konfigurierte Wegpunkt-Tag
        #[serde(default)]
        tag: Option<String>,
    },
    Changed {
        id: u64,
        position: DVec3,
        #[serde(default)]
        heading: Option<f64>,
        #[serde(default)]
        rotation: Option<RotationSpec>,
    },
    Deleted {
        id: u64,
    },
    Configure {
        geometry: GeometryConfig,
    },
    Retry,
    Clear,
}

fn default_owner_matches() -> bool {
    true
}

fn default_host_first_id() -> u64 {
    1
}

/// Geladenes Replay-Skript.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReplayScript {
    /// Erste ID, die der aufzeichnende Host für gespawnte Wegpunkte vergibt
    #[serde(default = "default_host_first_id")]
    pub host_first_id: u64,
    pub events: Vec<ScriptEvent>,
}

impl ReplayScript {
    /// Parst ein Skript aus JSON-Text.
    pub fn parse(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Replay-Skript ist kein gültiges JSON-Skript")
    }

    /// Lädt ein Skript von der Platte.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Replay-Skript '{}' nicht lesbar", path.display()))?;
        Self::parse(&content)
    }

    /// Übersetzt alle Events in Intents.
    pub fn intents(&self, waypoint_tag: &str) -> Vec<SessionIntent> {
        self.events
            .iter()
            .map(|event| event.to_intent(waypoint_tag))
            .collect()
    }
}

impl ScriptEvent {
    /// Übersetzt ein Event in einen `SessionIntent`.
    pub fn to_intent(&self, waypoint_tag: &str) -> SessionIntent {
        match self {
            Self::Start { anchor } => SessionIntent::StartRequested { anchor: *anchor },
            Self::Created {
                id,
                position,
                heading,
                rotation,
                owner_matches,
                tag,
            } => SessionIntent::WaypointCreated {
                id: *id,
                position: *position,
                heading: resolve_heading(*heading, *rotation),
                owner_matches: *owner_matches,
                tag: tag.clone().unwrap_or_else(|| waypoint_tag.to_string()),
            },
            Self::Changed {
                id,
                position,
                heading,
                rotation,
            } => SessionIntent::WaypointChanged {
                id: *id,
                position: *position,
                heading: resolve_heading(*heading, *rotation),
            },
            Self::Deleted { id } => SessionIntent::WaypointDeleted { id: *id },
            Self::Configure { geometry } => SessionIntent::GeometryConfigChanged {
                config: *geometry,
            },
            Self::Retry => SessionIntent::RetryExportRequested,
            Self::Clear => SessionIntent::ClearRequested,
        }
    }
}

/// Eine angegebene Rotation hat Vorrang vor einem direkten Heading.
fn resolve_heading(heading: Option<f64>, rotation: Option<RotationSpec>) -> f64 {
    match rotation {
        Some(rot) => axis_angle_to_yaw(rot.axis, rot.angle),
        None => heading.unwrap_or(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_parse_alle_eventtypen() {
        let json = r#"{
            "events": [
                { "type": "start", "anchor": [0.0, 0.0, 0.0] },
                { "type": "created", "id": 2, "position": [10.0, 0.0, 0.0], "heading": 90.0 },
                { "type": "changed", "id": 2, "position": [10.0, 0.0, 4.0] },
                { "type": "deleted", "id": 2 },
                { "type": "configure", "geometry": { "road_width": 3.0, "uv_scale_y": 0.5, "segments_per_span": 4 } },
                { "type": "retry" },
                { "type": "clear" }
            ]
        }"#;
        let script = ReplayScript::parse(json).expect("Gültiges Skript erwartet");

        assert_eq!(script.host_first_id, 1);
        assert_eq!(script.events.len(), 7);
        let intents = script.intents("roadnode");
        assert!(matches!(intents[0], SessionIntent::StartRequested { .. }));
        assert_eq!(
            intents[1],
            SessionIntent::WaypointCreated {
                id: 2,
                position: DVec3::new(10.0, 0.0, 0.0),
                heading: 90.0,
                owner_matches: true,
                tag: "roadnode".to_string(),
            }
        );
        assert_eq!(
            intents[4],
            SessionIntent::GeometryConfigChanged {
                config: GeometryConfig {
                    road_width: 3.0,
                    uv_scale_y: 0.5,
                    segments_per_span: 4,
                    double_sided: false,
                }
            }
        );
        assert_eq!(intents[5], SessionIntent::RetryExportRequested);
        assert_eq!(intents[6], SessionIntent::ClearRequested);
    }

    #[test]
    fn test_rotation_hat_vorrang_vor_heading() {
        let json = r#"{
            "events": [
                { "type": "changed", "id": 3, "position": [0.0, 0.0, 0.0], "heading": 10.0,
                  "rotation": { "axis": [0.0, 1.0, 0.0], "angle": 1.5707963267948966 } }
            ]
        }"#;
        let script = ReplayScript::parse(json).expect("Gültiges Skript erwartet");
        let SessionIntent::WaypointChanged { heading, .. } = script.intents("roadnode")[0].clone()
        else {
            panic!("WaypointChanged erwartet");
        };
        assert_abs_diff_eq!(heading, 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_fehlendes_heading_ist_null() {
        let event = ScriptEvent::Changed {
            id: 1,
            position: DVec3::ZERO,
            heading: None,
            rotation: None,
        };
        let SessionIntent::WaypointChanged { heading, .. } = event.to_intent("roadnode") else {
            panic!("WaypointChanged erwartet");
        };
        assert_eq!(heading, 0.0);
    }

    #[test]
    fn test_unbekannter_eventtyp_ist_fehler() {
        let json = r#"{ "events": [ { "type": "teleport", "id": 1 } ] }"#;
        assert!(ReplayScript::parse(json).is_err());
    }
}
