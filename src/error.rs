//! Fehler-Taxonomie für Mesh-Aufbau, Export und Session-Steuerung.

use std::path::PathBuf;
use thiserror::Error;

/// Typisierte Fehler des Straßen-Generators.
///
/// Orchestrierende Funktionen geben `anyhow::Result` zurück; der konkrete
/// Fehler lässt sich per `downcast_ref::<RoadError>()` wiederherstellen.
#[derive(Debug, Error)]
pub enum RoadError {
    /// Zu wenige Positionen oder `segments_per_span < 1`. Es wird keine Datei geschrieben.
    #[error("Ungültige Geometrie-Eingabe: {reason}")]
    InvalidGeometryInput { reason: String },

    /// Schreiben auf den Datenträger fehlgeschlagen.
    #[error("Export nach '{}' fehlgeschlagen", path.display())]
    ExportIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Verpacken des Modells ins ZIP-Archiv fehlgeschlagen.
    #[error("ZIP-Archiv '{}' konnte nicht erstellt werden", path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    /// `StartSession` während bereits eine Session läuft.
    #[error("Es läuft bereits eine Straßen-Session")]
    SessionAlreadyActive,

    /// Operation erfordert eine aktive Session.
    #[error("Keine aktive Straßen-Session")]
    NoActiveSession,
}

impl RoadError {
    /// Kurzform für `InvalidGeometryInput`.
    pub fn invalid_geometry(reason: impl Into<String>) -> Self {
        Self::InvalidGeometryInput {
            reason: reason.into(),
        }
    }

    /// `true` für Fehler, nach denen ein erneuter Export sinnvoll ist.
    pub fn is_export_failure(&self) -> bool {
        matches!(self, Self::ExportIo { .. } | Self::Archive { .. })
    }
}
