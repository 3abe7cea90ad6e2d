//! Roady Replay.
//!
//! Spielt ein JSON-Event-Skript gegen eine Straßen-Session ab und schreibt
//! das resultierende Modell-Archiv. Host-Aufrufe werden nur aufgezeichnet.
//!
//! Aufruf: `roady-replay <skript.json> [optionen.toml]`

use roady::app::HostCall;
use roady::{
    EventQueue, RecordingHost, ReplayScript, RoadOptions, SessionController, SessionState,
};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Roady Replay v{} startet...", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args_os().skip(1);
    let Some(script_path) = args.next().map(PathBuf::from) else {
        anyhow::bail!("Aufruf: roady-replay <skript.json> [optionen.toml]");
    };
    let options_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(RoadOptions::config_path);

    let options = RoadOptions::load_from_file(&options_path);
    let script = ReplayScript::load(&script_path)?;
    log::info!(
        "Skript '{}' geladen: {} Events",
        script_path.display(),
        script.events.len()
    );

    let (sender, queue) = EventQueue::channel();
    let intents = script.intents(&options.waypoint_tag);
    let producer = std::thread::spawn(move || {
        for intent in intents {
            if !sender.send(intent) {
                log::warn!("Queue geschlossen, restliche Events verworfen");
                break;
            }
        }
    });

    let mut controller = SessionController::new();
    let mut state = SessionState::with_options(&options);
    let mut host = RecordingHost::new(script.host_first_id);

    let summary = queue.run(&mut controller, &mut state, &mut host, |result| {
        if let Ok(outcome) = result {
            log::debug!("Ergebnis: {:?}", outcome);
        }
    });

    if producer.join().is_err() {
        anyhow::bail!("Producer-Thread ist abgestürzt");
    }

    let deleted = host
        .calls()
        .iter()
        .filter(|c| matches!(c, HostCall::DeleteWaypoint { .. }))
        .count();
    log::info!(
        "Replay beendet: {} Events, {} Regenerierungen, {} ignoriert, {} Fehler",
        summary.processed,
        summary.regenerated,
        summary.ignored,
        summary.failed
    );
    log::info!(
        "Host: {} Vorschau-Anfragen, {} Wegpunkte gelöscht",
        host.preview_count(),
        deleted
    );
    if let Some(report) = &state.last_export {
        log::info!(
            "Letztes Archiv: {} ({}, {} Vertices, {} Faces)",
            report.archive_path.display(),
            report.entry_name,
            report.vertex_count,
            report.face_count
        );
    }

    Ok(())
}
