//! Single-Writer-Queue: Events können aus beliebigen Threads kommen,
//! verarbeitet werden sie von genau einem Konsumenten in Ankunftsreihenfolge.

use super::{EventOutcome, HostBridge, SessionController, SessionIntent, SessionState};
use std::sync::mpsc;

/// Sendeseite der Queue; beliebig oft klonbar.
#[derive(Clone)]
pub struct IntentSender {
    tx: mpsc::Sender<SessionIntent>,
}

impl IntentSender {
    /// Stellt einen Intent ein. `false`, wenn der Konsument nicht mehr läuft.
    pub fn send(&self, intent: SessionIntent) -> bool {
        self.tx.send(intent).is_ok()
    }
}

/// Empfangsseite; besitzt das alleinige Schreibrecht auf den State.
pub struct EventQueue {
    rx: mpsc::Receiver<SessionIntent>,
}

/// Statistik eines Queue-Laufs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueueSummary {
    pub processed: usize,
    pub regenerated: usize,
    pub ignored: usize,
    pub failed: usize,
}

impl EventQueue {
    /// Erstellt ein verbundenes Paar aus Sender und Queue.
    pub fn channel() -> (IntentSender, EventQueue) {
        let (tx, rx) = mpsc::channel();
        (IntentSender { tx }, EventQueue { rx })
    }

    /// Verarbeitet Intents, bis alle Sender geschlossen sind.
    ///
    /// Fehler einzelner Events werden geloggt und an `on_outcome` gereicht,
    /// beenden die Schleife aber nicht.
    pub fn run<F>(
        self,
        controller: &mut SessionController,
        state: &mut SessionState,
        host: &mut dyn HostBridge,
        mut on_outcome: F,
    ) -> QueueSummary
    where
        F: FnMut(&anyhow::Result<EventOutcome>),
    {
        let mut summary = QueueSummary::default();
        for intent in self.rx.iter() {
            log::debug!("Event: {:?}", intent);
            let result = controller.handle_intent(state, host, intent);
            summary.processed += 1;
            match &result {
                Ok(EventOutcome::Regenerated(_)) => summary.regenerated += 1,
                Ok(EventOutcome::Ignored) => summary.ignored += 1,
                Ok(_) => {}
                Err(e) => {
                    summary.failed += 1;
                    log::error!("Event-Verarbeitung fehlgeschlagen: {:#}", e);
                }
            }
            on_outcome(&result);
        }
        summary
    }
}
