use crate::kernel::error::TriageError;
use crate::kernel::intent::Intent;
use crate::kernel::session::{SuggestionSet, Turn};

/// Inputs fed to the reactor by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Begin the conversation and deliver the opening turn.
    Start,
    /// Free text typed by the owner.
    Utterance(String),
    /// A quick reply was clicked.
    Suggestion(usize),
    Reset,
}

/// What the presentation layer should do next.
#[derive(Debug, Clone, PartialEq)]
pub enum SideEffect {
    /// Show the "typing" indicator until the next `Render`.
    Typing,
    Render(Turn),
    Suggestions(SuggestionSet),
    Classified(Intent),
    Cleared,
    Rejected(TriageError),
}
