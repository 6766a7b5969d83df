use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use super::error::TriageError;
use super::intent::{classify, Intent};
use super::liveness::{Liveness, LivenessGraph, LivenessRequest};
use super::opening::generate_opening;
use super::speech::{plan, Reply};
use super::telemetry::{TelemetryEvent, TelemetryRecorder};
use super::vehicle::VehicleContext;

/// Quick replies offered right after the opening turn.
pub const OPENING_SUGGESTIONS: [&str; 4] = ["Yes, schedule now", "Tell me more", "How much?", "Not now"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conv_{}", self.0.simple())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Speaker {
    User,
    Assistant,
}

/// One message in the conversation. Text may carry inline markup (`**bold**`,
/// emoji) meant for literal display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self { speaker: Speaker::User, text: text.into() }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self { speaker: Speaker::Assistant, text: text.into() }
    }
}

/// Ordered quick replies. Replaced wholesale after every assistant turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuggestionSet(Vec<String>);

impl SuggestionSet {
    pub fn from_static(items: &[&str]) -> Self {
        Self(items.iter().map(|s| s.to_string()).collect())
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Result of one accepted utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub intent: Intent,
    pub reply: Reply,
}

/// One conversation about one vehicle.
///
/// The vehicle is shared and read-only; the turn log is owned here and only ever
/// appended to. Sessions share no mutable state with each other.
#[derive(Debug)]
pub struct ConversationSession {
    id: SessionId,
    vehicle: Arc<VehicleContext>,
    turns: Vec<Turn>,
    suggestions: SuggestionSet,
    liveness: Liveness,
    telemetry: TelemetryRecorder,
}

impl ConversationSession {
    pub fn new(vehicle: Arc<VehicleContext>) -> Self {
        Self::with_recorder(vehicle, TelemetryRecorder::new())
    }

    pub fn with_recorder(vehicle: Arc<VehicleContext>, telemetry: TelemetryRecorder) -> Self {
        Self {
            id: SessionId::new(),
            vehicle,
            turns: Vec::new(),
            suggestions: SuggestionSet::default(),
            liveness: Liveness::NotStarted,
            telemetry,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn vehicle(&self) -> &VehicleContext {
        &self.vehicle
    }

    pub fn liveness(&self) -> Liveness {
        self.liveness
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn suggestions(&self) -> &SuggestionSet {
        &self.suggestions
    }

    pub fn telemetry(&self) -> &TelemetryRecorder {
        &self.telemetry
    }

    /// NotStarted -> AwaitingFirstTurn.
    pub fn start(&mut self) -> Result<(), TriageError> {
        self.apply(LivenessRequest::Start)?;
        info!(session = %self.id, vehicle_id = %self.vehicle.id, "Conversation started");
        self.telemetry.record(TelemetryEvent::SessionStarted { session_id: self.id });
        Ok(())
    }

    /// Appends the opening turn and moves to Active. A vehicle that fails
    /// validation leaves the session untouched.
    pub fn deliver_opening(&mut self) -> Result<&Turn, TriageError> {
        let next = self.check(LivenessRequest::OpeningDelivered)?;
        let opening = generate_opening(&self.vehicle)?;

        let index = self.turns.len();
        self.liveness = next;
        self.turns.push(opening);
        self.suggestions = SuggestionSet::from_static(&OPENING_SUGGESTIONS);
        self.telemetry.record(TelemetryEvent::OpeningDelivered {
            session_id: self.id,
            tier: self.vehicle.severity(),
        });

        Ok(&self.turns[index])
    }

    /// Classifies and answers one utterance.
    ///
    /// Whitespace-only input is ignored (`Ok(None)`), nothing is appended.
    pub fn submit(&mut self, utterance: &str) -> Result<Option<Exchange>, TriageError> {
        if self.liveness != Liveness::Active {
            return Err(TriageError::NotActive(self.liveness));
        }
        if utterance.trim().is_empty() {
            self.telemetry.record(TelemetryEvent::BlankUtteranceIgnored { session_id: self.id });
            return Ok(None);
        }

        self.turns.push(Turn::user(utterance));

        let intent = classify(utterance);
        let reply = plan(intent, &self.vehicle);

        self.turns.push(Turn::assistant(reply.text.clone()));
        self.suggestions = reply.suggestions.clone();
        self.telemetry.record(TelemetryEvent::UtteranceClassified { session_id: self.id, intent });

        Ok(Some(Exchange { intent, reply }))
    }

    /// Re-submits the text of the suggestion at `index`.
    pub fn choose_suggestion(&mut self, index: usize) -> Result<Option<Exchange>, TriageError> {
        let text = self
            .suggestions
            .get(index)
            .map(str::to_owned)
            .ok_or(TriageError::NoSuchSuggestion { index, offered: self.suggestions.len() })?;
        self.submit(&text)
    }

    /// Discards the conversation. The vehicle stays, the session id is renewed.
    pub fn reset(&mut self) {
        let discarded = self.turns.len();
        self.telemetry.record(TelemetryEvent::SessionReset {
            session_id: self.id,
            turns_discarded: discarded,
        });
        info!(session = %self.id, discarded, "Conversation reset");

        self.liveness = LivenessGraph::transition(self.liveness, LivenessRequest::Reset)
            .unwrap_or(Liveness::NotStarted);
        self.turns.clear();
        self.suggestions = SuggestionSet::default();
        self.id = SessionId::new();
    }

    fn check(&mut self, request: LivenessRequest) -> Result<Liveness, TriageError> {
        match LivenessGraph::transition(self.liveness, request) {
            Some(next) => Ok(next),
            None => {
                warn!(session = %self.id, from = ?self.liveness, ?request, "Rejected liveness transition");
                self.telemetry.record(TelemetryEvent::TransitionRejected {
                    session_id: self.id,
                    from: self.liveness,
                    request,
                });
                Err(TriageError::InvalidTransition { from: self.liveness, request })
            }
        }
    }

    fn apply(&mut self, request: LivenessRequest) -> Result<(), TriageError> {
        self.liveness = self.check(request)?;
        Ok(())
    }
}
