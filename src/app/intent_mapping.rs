//! Mapping von externen Intents auf mutierende Session-Commands.

use super::{SessionCommand, SessionIntent, SessionState};
use crate::core::sanitize_heading;

/// Übersetzt einen `SessionIntent` in eine Sequenz ausführbarer `SessionCommand`s.
///
/// Erstellte Objekte werden nur übernommen, wenn eine Session läuft, der
/// Ersteller der Session-Besitzer ist und das Tag passt. Alles andere ergibt
/// eine leere Liste.
pub fn map_intent_to_commands(state: &SessionState, intent: SessionIntent) -> Vec<SessionCommand> {
    match intent {
        SessionIntent::StartRequested { anchor } => vec![SessionCommand::StartSession { anchor }],
        SessionIntent::WaypointCreated {
            id,
            position,
            heading,
            owner_matches,
            tag,
        } => {
            if !state.active {
                log::debug!("Objekt {} ignoriert: keine aktive Session", id);
                return Vec::new();
            }
            if !owner_matches || tag != state.waypoint_tag {
                log::debug!("Objekt {} ignoriert: fremder Besitzer oder Tag '{}'", id, tag);
                return Vec::new();
            }
            vec![SessionCommand::AddWaypoint {
                id,
                position,
                heading: sanitize_heading(heading),
            }]
        }
        SessionIntent::WaypointChanged {
            id,
            position,
            heading,
        } => vec![SessionCommand::MoveWaypoint {
            id,
            position,
            heading: sanitize_heading(heading),
        }],
        SessionIntent::WaypointDeleted { id } => vec![SessionCommand::RemoveWaypoint { id }],
        SessionIntent::GeometryConfigChanged { config } => {
            vec![SessionCommand::UpdateGeometryConfig { config }]
        }
        SessionIntent::RetryExportRequested => vec![SessionCommand::RetryExport],
        SessionIntent::ClearRequested => vec![SessionCommand::ClearSession],
    }
}
