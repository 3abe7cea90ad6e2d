//! Session State: zentrale Datenhaltung einer Straßen-Session.

use super::CommandLog;
use crate::core::WaypointStore;
use crate::export::{ExportReport, ExportTarget};
use crate::mesh::RibbonMesh;
use crate::shared::{GeometryConfig, RoadOptions};

/// Hauptzustand einer Straßen-Session.
///
/// Alle Mutationen laufen über den `SessionController`; der State selbst
/// kennt keine Regeln.
pub struct SessionState {
    /// Läuft gerade eine Session?
    pub active: bool,
    /// ID des beim Start gespawnten Anker-Wegpunkts
    pub anchor_waypoint_id: Option<u64>,
    /// Anzahl vom Benutzer platzierter Wegpunkte (ohne Anker)
    pub placed_count: usize,
    /// Heading des ersten Wegpunkts zum Zeitpunkt der letzten Regenerierung
    pub start_heading: f64,
    /// Heading des letzten Wegpunkts zum Zeitpunkt der letzten Regenerierung
    pub end_heading: f64,
    /// Aktuelle Geometrie-Parameter
    pub geometry: GeometryConfig,
    /// Alle Wegpunkte der Session, nach ID sortiert
    pub store: WaypointStore,
    /// Wurde beim Host eine Vorschau angefordert?
    pub preview_spawned: bool,
    /// Zuletzt gebautes Mesh (für erneuten Export)
    pub last_mesh: Option<RibbonMesh>,
    /// Ergebnis des letzten erfolgreichen Exports
    pub last_export: Option<ExportReport>,
    /// Ziel aller Exporte dieser Session
    pub export_target: ExportTarget,
    /// Beschreibungs-Tag, an dem Wegpunkte erkannt werden
    pub waypoint_tag: String,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl SessionState {
    /// Erstellt einen leeren State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(&RoadOptions::default())
    }

    /// Erstellt einen leeren State aus geladenen Optionen.
    pub fn with_options(options: &RoadOptions) -> Self {
        Self {
            active: false,
            anchor_waypoint_id: None,
            placed_count: 0,
            start_heading: 0.0,
            end_heading: 0.0,
            geometry: options.geometry,
            store: WaypointStore::new(),
            preview_spawned: false,
            last_mesh: None,
            last_export: None,
            export_target: options.export_target(),
            waypoint_tag: options.waypoint_tag.clone(),
            command_log: CommandLog::new(),
        }
    }

    /// Setzt alle Session-Daten zurück. Geometrie, Exportziel und Log bleiben.
    pub fn reset_session(&mut self) {
        self.active = false;
        self.anchor_waypoint_id = None;
        self.placed_count = 0;
        self.start_heading = 0.0;
        self.end_heading = 0.0;
        self.store.clear();
        self.preview_spawned = false;
        self.last_mesh = None;
        self.last_export = None;
    }

    /// Anzahl der Wegpunkte im Store (inkl. Anker).
    pub fn waypoint_count(&self) -> usize {
        self.store.len()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
