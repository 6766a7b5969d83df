use std::collections::{BTreeMap, VecDeque};

use super::event::TelemetryEvent;
use crate::kernel::intent::Intent;
use crate::kernel::vehicle::SeverityTier;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TelemetrySnapshot {
    pub sessions_started: u64,
    pub openings_by_tier: BTreeMap<SeverityTier, u64>,
    pub intents: IntentStats,
    pub blank_ignored: u64,
    pub resets: u64,
    pub turns_discarded: u64,
    pub rejected_transitions: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntentStats {
    pub total: u64,
    pub by_intent: BTreeMap<Intent, u64>,
    /// Share of utterances that fell through to `Unclear`, 0.0 - 1.0.
    pub unclear_ratio: f64,
}

impl IntentStats {
    pub fn count(&self, intent: Intent) -> u64 {
        self.by_intent.get(&intent).copied().unwrap_or(0)
    }
}

pub fn compute_snapshot(events: &VecDeque<TelemetryEvent>) -> TelemetrySnapshot {
    let mut snap = TelemetrySnapshot::default();

    for event in events {
        match event {
            TelemetryEvent::SessionStarted { .. } => snap.sessions_started += 1,
            TelemetryEvent::OpeningDelivered { tier, .. } => {
                *snap.openings_by_tier.entry(*tier).or_insert(0) += 1;
            }
            TelemetryEvent::UtteranceClassified { intent, .. } => {
                snap.intents.total += 1;
                *snap.intents.by_intent.entry(*intent).or_insert(0) += 1;
            }
            TelemetryEvent::BlankUtteranceIgnored { .. } => snap.blank_ignored += 1,
            TelemetryEvent::SessionReset { turns_discarded, .. } => {
                snap.resets += 1;
                snap.turns_discarded += *turns_discarded as u64;
            }
            TelemetryEvent::TransitionRejected { .. } => snap.rejected_transitions += 1,
        }
    }

    if snap.intents.total > 0 {
        snap.intents.unclear_ratio =
            snap.intents.count(Intent::Unclear) as f64 / snap.intents.total as f64;
    }

    snap
}
