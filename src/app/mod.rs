//! Application-Layer: Session Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod event_queue;
pub mod events;
pub mod host_bridge;
mod intent_mapping;
/// Session State
///
/// Dieses Modul verwaltet den Zustand einer laufenden Straßen-Session.
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::{EventOutcome, SessionController};
pub use event_queue::{EventQueue, IntentSender, QueueSummary};
pub use events::{SessionCommand, SessionIntent};
pub use host_bridge::{HostBridge, HostCall, PreviewRequest, RecordingHost};
pub use state::SessionState;
