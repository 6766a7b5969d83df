pub mod error;
pub mod event;
pub mod format;
pub mod intent;
pub mod liveness;
pub mod opening;
pub mod reactor;
pub mod session;
pub mod speech;
pub mod telemetry;
pub mod vehicle;
