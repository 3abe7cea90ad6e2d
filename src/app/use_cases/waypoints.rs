//! Use-Cases für Wegpunkt-Änderungen und Geometrie-Konfiguration.

use super::regenerate::regenerate;
use crate::app::controller::EventOutcome;
use crate::app::{HostBridge, SessionState};
use crate::core::Waypoint;
use crate::shared::GeometryConfig;
use glam::DVec3;

/// Übernimmt einen neu platzierten Wegpunkt.
///
/// Eine bereits bekannte ID wird an Ort und Stelle aktualisiert und zählt
/// nicht erneut als platziert.
pub fn add_waypoint(
    state: &mut SessionState,
    host: &mut dyn HostBridge,
    id: u64,
    position: DVec3,
    heading: f64,
) -> anyhow::Result<EventOutcome> {
    let is_new = state.store.insert(Waypoint::new(id, position, heading));
    if is_new {
        state.placed_count += 1;
    } else {
        log::debug!("Wegpunkt {} war bereits bekannt, aktualisiert", id);
    }

    log::info!(
        "Wegpunkt {} platziert (Heading {:.1}°, {} platziert, {} gesamt)",
        id,
        heading,
        state.placed_count,
        state.store.len()
    );

    if state.placed_count >= 1 {
        regenerate(state, host)
    } else {
        Ok(EventOutcome::Updated)
    }
}

/// Ersetzt Position und Heading eines bekannten Wegpunkts.
pub fn move_waypoint(
    state: &mut SessionState,
    host: &mut dyn HostBridge,
    id: u64,
    position: DVec3,
    heading: f64,
) -> anyhow::Result<EventOutcome> {
    if !state.store.update(id, position, heading) {
        log::warn!("Unbekannter Wegpunkt {} verschoben, ignoriert", id);
        return Ok(EventOutcome::Ignored);
    }

    log::debug!("Wegpunkt {} verschoben", id);
    if state.placed_count >= 1 {
        regenerate(state, host)
    } else {
        Ok(EventOutcome::Updated)
    }
}

/// Entfernt einen Wegpunkt. Wird der Store leer, entsteht keine Ausgabe.
pub fn remove_waypoint(
    state: &mut SessionState,
    host: &mut dyn HostBridge,
    id: u64,
) -> anyhow::Result<EventOutcome> {
    if state.store.remove(id).is_none() {
        log::warn!("Unbekannter Wegpunkt {} gelöscht, ignoriert", id);
        return Ok(EventOutcome::Ignored);
    }

    state.placed_count = state.placed_count.saturating_sub(1);
    if state.anchor_waypoint_id == Some(id) {
        state.anchor_waypoint_id = None;
    }
    log::info!(
        "Wegpunkt {} entfernt ({} verbleibend)",
        id,
        state.store.len()
    );

    if state.store.is_empty() {
        state.last_mesh = None;
        return Ok(EventOutcome::Updated);
    }
    regenerate(state, host)
}

/// Ersetzt die Geometrie-Konfiguration und regeneriert bei aktiver Session.
pub fn update_geometry_config(
    state: &mut SessionState,
    host: &mut dyn HostBridge,
    config: GeometryConfig,
) -> anyhow::Result<EventOutcome> {
    state.geometry = config;
    log::info!(
        "Geometrie geändert: Breite {:.2}, UV-Skalierung {:.2}, {} Segmente, doppelseitig: {}",
        config.road_width,
        config.uv_scale_y,
        config.segments_per_span,
        config.double_sided
    );

    if state.active && !state.store.is_empty() {
        regenerate(state, host)
    } else {
        Ok(EventOutcome::Updated)
    }
}
