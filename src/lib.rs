pub mod config;
pub mod fleet;
pub mod kernel;
pub mod outputs;

// Re-export the triage surface for convenient access
pub use kernel::error::TriageError;
pub use kernel::intent::{classify, Intent};
pub use kernel::opening::generate_opening;
pub use kernel::reactor::Reactor;
pub use kernel::session::{ConversationSession, SuggestionSet, Turn};
pub use kernel::speech::{plan, Reply};
pub use kernel::vehicle::{SeverityTier, VehicleContext};
