use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::time::{sleep, Duration};
use tracing::{debug, info};

use super::error::TriageError;
use super::event::{Event, SideEffect};
use super::session::{ConversationSession, Exchange};
use super::telemetry::TelemetryRecorder;
use super::vehicle::VehicleContext;
use crate::config::AssistantConfig;

/// Drives one session from presentation events.
///
/// `step` is synchronous and never waits. `run` adds the simulated typing latency
/// around it; the latency never influences what `step` produces.
pub struct Reactor {
    pub session: ConversationSession,
    config: AssistantConfig,
}

impl Reactor {
    pub fn new(vehicle: Arc<VehicleContext>, config: AssistantConfig) -> Self {
        let recorder = TelemetryRecorder::with_capacity(config.telemetry_capacity);
        Self {
            session: ConversationSession::with_recorder(vehicle, recorder),
            config,
        }
    }

    /// Simulated typing time before the effects of `event` are shown.
    pub fn delay_for(&self, event: &Event) -> Option<Duration> {
        let ms = match event {
            Event::Start => self.config.opening_delay_ms,
            Event::Utterance(_) | Event::Suggestion(_) => self.config.reply_delay_ms,
            Event::Reset => 0,
        };
        (ms > 0).then(|| Duration::from_millis(ms))
    }

    /// Pure step: Event -> SideEffects. Contract violations become
    /// `SideEffect::Rejected` instead of tearing the driver down.
    pub fn step(&mut self, event: Event) -> Vec<SideEffect> {
        let result = match event {
            Event::Start => self.open(),
            Event::Utterance(text) => self.session.submit(&text).map(|ex| self.exchanged(ex)),
            Event::Suggestion(index) => self
                .session
                .choose_suggestion(index)
                .map(|ex| self.exchanged(ex)),
            Event::Reset => {
                self.session.reset();
                Ok(vec![SideEffect::Cleared])
            }
        };

        result.unwrap_or_else(|e| {
            debug!(error = %e, "Event rejected");
            vec![SideEffect::Rejected(e)]
        })
    }

    fn open(&mut self) -> Result<Vec<SideEffect>, TriageError> {
        // An unusable vehicle must not strand the session in AwaitingFirstTurn.
        self.session.vehicle().validate()?;
        self.session.start()?;
        let opening = self.session.deliver_opening()?.clone();
        Ok(vec![
            SideEffect::Render(opening),
            SideEffect::Suggestions(self.session.suggestions().clone()),
        ])
    }

    fn exchanged(&self, exchange: Option<Exchange>) -> Vec<SideEffect> {
        let Some(exchange) = exchange else {
            return Vec::new();
        };
        let mut effects = Vec::with_capacity(4);
        // The last two turns are the user's utterance and the reply to it.
        if let [.., user, reply] = self.session.turns() {
            effects.push(SideEffect::Render(user.clone()));
            effects.push(SideEffect::Classified(exchange.intent));
            effects.push(SideEffect::Render(reply.clone()));
        }
        effects.push(SideEffect::Suggestions(exchange.reply.suggestions));
        effects
    }

    /// Async driver loop. Ends when the event channel closes or the effect
    /// receiver is dropped.
    pub async fn run(&mut self, mut events: mpsc::Receiver<Event>, effects: mpsc::Sender<SideEffect>) {
        info!(session = %self.session.id(), "Reactor started");

        while let Some(event) = events.recv().await {
            if let Some(delay) = self.delay_for(&event) {
                if effects.send(SideEffect::Typing).await.is_err() {
                    break;
                }
                sleep(delay).await;
            }

            for effect in self.step(event) {
                if effects.send(effect).await.is_err() {
                    info!("Effect receiver dropped, stopping reactor");
                    return;
                }
            }
        }

        info!(session = %self.session.id(), "Reactor stopped");
    }
}
