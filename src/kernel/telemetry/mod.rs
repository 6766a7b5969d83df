//! Session telemetry.
//!
//! # SAFETY INVARIANT
//! Telemetry is a READ-ONLY side-effect layer.
//! It must **NEVER** be read inside decision logic (classifier or planner).
//!
//! # PRIVACY INVARIANT
//! Events must **NEVER** contain what the owner typed or what the assistant said.
//! Only IDs, enums and counts are allowed.

pub mod event;
pub mod metrics;
pub mod recorder;

pub use event::TelemetryEvent;
pub use metrics::{compute_snapshot, IntentStats, TelemetrySnapshot};
pub use recorder::TelemetryRecorder;
