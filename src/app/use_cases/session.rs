//! Use-Cases für Start und Ende einer Straßen-Session.

use crate::app::controller::EventOutcome;
use crate::app::{HostBridge, SessionState};
use crate::core::Waypoint;
use crate::error::RoadError;
use glam::DVec3;

/// Startet eine Session und spawnt den Anker-Wegpunkt beim Host.
///
/// Das Heading des Ankers ist vorläufig 0, bis der erste echte Wegpunkt
/// platziert wird. Läuft bereits eine Session, bleibt alles unverändert.
pub fn start_session(
    state: &mut SessionState,
    host: &mut dyn HostBridge,
    anchor: DVec3,
) -> anyhow::Result<EventOutcome> {
    if state.active {
        log::warn!("StartSession ignoriert: Session läuft bereits");
        return Err(RoadError::SessionAlreadyActive.into());
    }

    let anchor_id = host.spawn_waypoint(anchor, &state.waypoint_tag)?;
    state.store.insert(Waypoint::new(anchor_id, anchor, 0.0));
    state.anchor_waypoint_id = Some(anchor_id);
    state.placed_count = 0;
    state.start_heading = 0.0;
    state.end_heading = 0.0;
    state.active = true;

    log::info!(
        "Straßen-Session gestartet: Anker {} bei ({:.2}, {:.2}, {:.2})",
        anchor_id,
        anchor.x,
        anchor.y,
        anchor.z
    );
    Ok(EventOutcome::Started { anchor_id })
}

/// Beendet die Session und räumt beim Host auf.
///
/// Löschen ist best-effort: Fehler einzelner Wegpunkte werden geloggt,
/// brechen aber nicht ab. Die Vorschau wird nur verworfen, wenn sie
/// angefordert wurde. Auch ohne aktive Session sicher aufrufbar.
pub fn clear_session(state: &mut SessionState, host: &mut dyn HostBridge) -> EventOutcome {
    let ids = state.store.ids();
    let mut failed = 0usize;
    for id in &ids {
        if let Err(e) = host.delete_waypoint(*id) {
            failed += 1;
            log::warn!("Wegpunkt {} konnte nicht gelöscht werden: {:#}", id, e);
        }
    }

    if state.preview_spawned {
        if let Err(e) = host.discard_preview() {
            log::warn!("Vorschau konnte nicht entfernt werden: {:#}", e);
        }
    }

    state.reset_session();
    log::info!(
        "Straßen-Session beendet: {} Wegpunkte gelöscht, {} Fehler",
        ids.len() - failed,
        failed
    );
    EventOutcome::Cleared
}
