//! SessionIntent- und SessionCommand-Enums für den Intent/Command-Datenfluss.

use crate::shared::GeometryConfig;
use glam::DVec3;

/// Externe Ereignisse aus Transport- und Bedienschicht.
/// Intents enthalten keine Mutationslogik; gefiltert wird im Mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionIntent {
    /// Neue Straßen-Session am Anker starten
    StartRequested { anchor: DVec3 },
    /// Objekt in der Welt erstellt
    WaypointCreated {
        id: u64,
        position: DVec3,
        heading: f64,
        /// Ersteller ist der Session-Besitzer
        owner_matches: bool,
        /// Beschreibungs-Tag des Objekts
        tag: String,
    },
    /// Objekt in der Welt verschoben/gedreht
    WaypointChanged {
        id: u64,
        position: DVec3,
        heading: f64,
    },
    /// Objekt in der Welt gelöscht
    WaypointDeleted { id: u64 },
    /// Neue Geometrie-Parameter übernehmen
    GeometryConfigChanged { config: GeometryConfig },
    /// Letztes Mesh erneut exportieren (nach Schreibfehler)
    RetryExportRequested,
    /// Session beenden und alles aufräumen
    ClearRequested,
}

/// Mutierende Commands auf dem SessionState.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// Session starten und Anker-Wegpunkt anlegen
    StartSession { anchor: DVec3 },
    /// Wegpunkt einfügen (Heading bereits sanitisiert)
    AddWaypoint {
        id: u64,
        position: DVec3,
        heading: f64,
    },
    /// Position/Heading eines Wegpunkts ersetzen
    MoveWaypoint {
        id: u64,
        position: DVec3,
        heading: f64,
    },
    /// Wegpunkt entfernen
    RemoveWaypoint { id: u64 },
    /// Geometrie-Konfiguration ersetzen
    UpdateGeometryConfig { config: GeometryConfig },
    /// Letztes Mesh erneut exportieren
    RetryExport,
    /// Session beenden
    ClearSession,
}
