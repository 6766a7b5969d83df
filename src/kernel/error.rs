use thiserror::Error;

use super::liveness::{Liveness, LivenessRequest};

/// Contract violations surfaced by the triage kernel.
///
/// Classification and planning are total and never produce these; only opening
/// generation and session bookkeeping can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriageError {
    #[error("invalid vehicle input: {0}")]
    InvalidInput(String),

    #[error("session cannot {request:?} while {from:?}")]
    InvalidTransition { from: Liveness, request: LivenessRequest },

    #[error("session is not active (currently {0:?})")]
    NotActive(Liveness),

    #[error("no suggestion at index {index} (offered {offered})")]
    NoSuchSuggestion { index: usize, offered: usize },
}
