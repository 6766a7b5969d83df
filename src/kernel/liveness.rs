use serde::{Deserialize, Serialize};

/// Lifecycle of one conversation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Liveness {
    /// Vehicle selected, nothing said yet.
    NotStarted,
    /// Conversation requested; the opening turn has not been delivered.
    AwaitingFirstTurn,
    /// Opening delivered, accepting utterances.
    Active,
}

impl Default for Liveness {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// Requests for a liveness transition. The graph decides whether they apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LivenessRequest {
    Start,
    OpeningDelivered,
    Reset,
}

pub struct LivenessGraph;

impl LivenessGraph {
    /// Pure function: (Current, Request) -> Next.
    /// Returns None when the request is not valid from `current`.
    pub fn transition(current: Liveness, request: LivenessRequest) -> Option<Liveness> {
        use Liveness::*;
        use LivenessRequest::*;

        match (current, request) {
            (NotStarted, Start) => Some(AwaitingFirstTurn),
            (AwaitingFirstTurn, OpeningDelivered) => Some(Active),

            // Reset is always honored, it discards the session contents.
            (_, Reset) => Some(NotStarted),

            _ => None,
        }
    }
}
