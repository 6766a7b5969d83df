use serde::{Deserialize, Serialize};

use crate::kernel::intent::Intent;
use crate::kernel::liveness::{Liveness, LivenessRequest};
use crate::kernel::session::SessionId;
use crate::kernel::vehicle::SeverityTier;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TelemetryEvent {
    SessionStarted {
        session_id: SessionId,
    },

    OpeningDelivered {
        session_id: SessionId,
        tier: SeverityTier,
    },

    UtteranceClassified {
        session_id: SessionId,
        intent: Intent,
    },

    BlankUtteranceIgnored {
        session_id: SessionId,
    },

    SessionReset {
        session_id: SessionId,
        turns_discarded: usize,
    },

    TransitionRejected {
        session_id: SessionId,
        from: Liveness,
        request: LivenessRequest,
    },
}
