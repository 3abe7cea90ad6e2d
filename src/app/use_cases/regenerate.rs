//! Vollständige Regenerierung: Snapshot → Ribbon-Mesh → Export → Vorschau.

use crate::app::controller::EventOutcome;
use crate::app::{HostBridge, PreviewRequest, SessionState};
use crate::error::RoadError;
use crate::export::export_mesh;
use crate::mesh::build_ribbon;
use glam::DVec3;

/// Baut das Mesh aus dem kompletten Store neu und exportiert es.
///
/// Start- und End-Heading werden bei jedem Lauf frisch aus dem sortierten
/// Store gelesen. Scheitert der Mesh-Aufbau, wird keine Datei geschrieben
/// und kein altes Mesh für einen Retry aufbewahrt.
pub fn regenerate(
    state: &mut SessionState,
    host: &mut dyn HostBridge,
) -> anyhow::Result<EventOutcome> {
    let Some(snapshot) = state.store.snapshot() else {
        log::debug!("Keine Wegpunkte, Regenerierung übersprungen");
        return Ok(EventOutcome::Updated);
    };
    state.start_heading = snapshot.start_heading;
    state.end_heading = snapshot.end_heading;

    let mesh = match build_ribbon(&snapshot, &state.geometry) {
        Ok(mesh) => mesh,
        Err(e) => {
            state.last_mesh = None;
            log::warn!("Regenerierung abgebrochen: {}", e);
            return Err(e.into());
        }
    };

    log::info!(
        "Regeneriere Straße: {} Wegpunkte → {} Vertices, {} Faces",
        snapshot.positions.len(),
        mesh.vertex_count(),
        mesh.face_count()
    );
    state.last_mesh = Some(mesh);
    export_and_refresh(state, host, snapshot.anchor())
}

/// Exportiert das zuletzt gebaute Mesh erneut, z. B. nach einem Schreibfehler.
pub fn retry_export(
    state: &mut SessionState,
    host: &mut dyn HostBridge,
) -> anyhow::Result<EventOutcome> {
    if !state.active {
        return Err(RoadError::NoActiveSession.into());
    }
    let Some(anchor) = state.store.first().map(|wp| wp.position) else {
        log::info!("Retry ignoriert: keine Wegpunkte");
        return Ok(EventOutcome::Ignored);
    };
    if state.last_mesh.is_none() {
        log::info!("Retry ignoriert: kein Mesh vorhanden");
        return Ok(EventOutcome::Ignored);
    }

    log::info!("Exportiere letztes Mesh erneut");
    export_and_refresh(state, host, anchor)
}

fn export_and_refresh(
    state: &mut SessionState,
    host: &mut dyn HostBridge,
    anchor: DVec3,
) -> anyhow::Result<EventOutcome> {
    let Some(mesh) = state.last_mesh.as_ref() else {
        return Ok(EventOutcome::Updated);
    };

    let report = match export_mesh(mesh, &state.export_target) {
        Ok(report) => report,
        Err(e) => {
            log::error!("Export fehlgeschlagen: {}", e);
            return Err(e.into());
        }
    };
    state.last_export = Some(report.clone());

    request_preview(state, host, anchor)?;
    Ok(EventOutcome::Regenerated(report))
}

/// Fordert beim Host die Vorschau am Anker an.
///
/// Das Flag wird vor dem Aufruf gesetzt, damit `ClearSession` auch nach
/// einem fehlgeschlagenen Aufruf aufräumt.
fn request_preview(
    state: &mut SessionState,
    host: &mut dyn HostBridge,
    anchor: DVec3,
) -> anyhow::Result<()> {
    let request = PreviewRequest {
        position: anchor,
        model_name: state.export_target.model_name.clone(),
        archive_path: state.export_target.archive_path.clone(),
    };
    state.preview_spawned = true;
    host.place_preview(&request)?;
    log::debug!(
        "Vorschau angefordert bei ({:.2}, {:.2}, {:.2})",
        anchor.x,
        anchor.y,
        anchor.z
    );
    Ok(())
}
