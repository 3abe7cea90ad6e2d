//! Schnittstelle zur Host-Welt (Objekte spawnen/löschen, Vorschau platzieren).
//!
//! Der Controller kennt nur diesen Trait. `RecordingHost` ist eine
//! In-Memory-Implementierung für Replay und Tests.

use glam::DVec3;
use std::path::PathBuf;

/// Anfrage zum Platzieren der Modell-Vorschau in der Welt.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewRequest {
    /// Weltposition des Modells (= erster Wegpunkt, Pivot des Meshes)
    pub position: DVec3,
    /// Modellname, unter dem der Host das Archiv lädt
    pub model_name: String,
    /// Pfad des zuletzt geschriebenen Archivs
    pub archive_path: PathBuf,
}

/// Operationen, die die Session beim Host auslöst.
pub trait HostBridge {
    /// Spawnt einen Wegpunkt-Marker und liefert dessen ID.
    fn spawn_waypoint(&mut self, position: DVec3, tag: &str) -> anyhow::Result<u64>;

    /// Löscht einen Wegpunkt-Marker.
    fn delete_waypoint(&mut self, id: u64) -> anyhow::Result<()>;

    /// Platziert (oder ersetzt) die Modell-Vorschau.
    fn place_preview(&mut self, request: &PreviewRequest) -> anyhow::Result<()>;

    /// Entfernt die Modell-Vorschau.
    fn discard_preview(&mut self) -> anyhow::Result<()>;
}

/// Aufgezeichneter Host-Aufruf.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    SpawnWaypoint { id: u64, position: DVec3, tag: String },
    DeleteWaypoint { id: u64 },
    PlacePreview(PreviewRequest),
    DiscardPreview,
}

/// In-Memory-Host, der alle Aufrufe mitschreibt.
#[derive(Debug, Default)]
pub struct RecordingHost {
    next_id: u64,
    calls: Vec<HostCall>,
    /// Vorschau-Platzierung schlägt fehl
    pub fail_preview: bool,
    /// Löschen von Wegpunkten schlägt fehl
    pub fail_delete: bool,
}

impl RecordingHost {
    /// Erstellt einen Host, dessen IDs bei `first_id` beginnen.
    pub fn new(first_id: u64) -> Self {
        Self {
            next_id: first_id,
            ..Self::default()
        }
    }

    /// Alle bisherigen Aufrufe in Reihenfolge.
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Anzahl erfolgreicher Vorschau-Platzierungen.
    pub fn preview_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, HostCall::PlacePreview(_)))
            .count()
    }

    /// Letzte Vorschau-Anfrage, falls vorhanden.
    pub fn last_preview(&self) -> Option<&PreviewRequest> {
        self.calls.iter().rev().find_map(|c| match c {
            HostCall::PlacePreview(req) => Some(req),
            _ => None,
        })
    }
}

impl HostBridge for RecordingHost {
    fn spawn_waypoint(&mut self, position: DVec3, tag: &str) -> anyhow::Result<u64> {
        let id = self.next_id;
        self.next_id += 1;
        self.calls.push(HostCall::SpawnWaypoint {
            id,
            position,
            tag: tag.to_string(),
        });
        Ok(id)
    }

    fn delete_waypoint(&mut self, id: u64) -> anyhow::Result<()> {
        if self.fail_delete {
            anyhow::bail!("Wegpunkt {} konnte nicht gelöscht werden", id);
        }
        self.calls.push(HostCall::DeleteWaypoint { id });
        Ok(())
    }

    fn place_preview(&mut self, request: &PreviewRequest) -> anyhow::Result<()> {
        if self.fail_preview {
            anyhow::bail!("Vorschau '{}' konnte nicht platziert werden", request.model_name);
        }
        self.calls.push(HostCall::PlacePreview(request.clone()));
        Ok(())
    }

    fn discard_preview(&mut self) -> anyhow::Result<()> {
        self.calls.push(HostCall::DiscardPreview);
        Ok(())
    }
}
