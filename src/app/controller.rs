//! Session Controller für zentrale Event-Verarbeitung.

use super::{HostBridge, SessionCommand, SessionIntent, SessionState};
use crate::export::ExportReport;

/// Ergebnis der Verarbeitung eines Events.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    /// Event gefiltert oder auf unbekannten Wegpunkt bezogen
    Ignored,
    /// Session gestartet, Anker-Wegpunkt gespawnt
    Started { anchor_id: u64 },
    /// State geändert, keine Regenerierung nötig
    Updated,
    /// Mesh neu gebaut und exportiert
    Regenerated(ExportReport),
    /// Session beendet
    Cleared,
}

impl EventOutcome {
    /// `true`, wenn ein neues Archiv geschrieben wurde.
    pub fn is_regenerated(&self) -> bool {
        matches!(self, Self::Regenerated(_))
    }
}

/// Orchestriert Session-Events und Use-Cases auf den SessionState.
///
/// Events werden strikt nacheinander verarbeitet; jede Regenerierung
/// inklusive Export ist abgeschlossen, bevor der nächste Command läuft.
#[derive(Default)]
pub struct SessionController;

impl SessionController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Liefert das Ergebnis des letzten Commands, `Ignored` wenn der Intent
    /// herausgefiltert wurde.
    pub fn handle_intent(
        &mut self,
        state: &mut SessionState,
        host: &mut dyn HostBridge,
        intent: SessionIntent,
    ) -> anyhow::Result<EventOutcome> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        let mut outcome = EventOutcome::Ignored;
        for command in commands {
            outcome = self.handle_command(state, host, command)?;
        }
        Ok(outcome)
    }

    /// Führt mutierende Commands auf dem SessionState aus.
    pub fn handle_command(
        &mut self,
        state: &mut SessionState,
        host: &mut dyn HostBridge,
        command: SessionCommand,
    ) -> anyhow::Result<EventOutcome> {
        state.command_log.record(&command);
        use super::use_cases;

        match command {
            SessionCommand::StartSession { anchor } => {
                use_cases::session::start_session(state, host, anchor)
            }
            SessionCommand::AddWaypoint {
                id,
                position,
                heading,
            } => use_cases::waypoints::add_waypoint(state, host, id, position, heading),
            SessionCommand::MoveWaypoint {
                id,
                position,
                heading,
            } => use_cases::waypoints::move_waypoint(state, host, id, position, heading),
            SessionCommand::RemoveWaypoint { id } => {
                use_cases::waypoints::remove_waypoint(state, host, id)
            }
            SessionCommand::UpdateGeometryConfig { config } => {
                use_cases::waypoints::update_geometry_config(state, host, config)
            }
            SessionCommand::RetryExport => use_cases::regenerate::retry_export(state, host),
            SessionCommand::ClearSession => Ok(use_cases::session::clear_session(state, host)),
        }
    }
}
