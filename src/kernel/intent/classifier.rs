use tracing::debug;

use super::types::{Intent, KeywordRule};

/// Ordered predicate chain, evaluated top to bottom, first match wins.
///
/// Slot confirmations sit above `AgreeToSchedule` so "yes, morning" books the slot
/// instead of re-offering slots. Reordering this table changes behavior.
pub const RULES: [KeywordRule; 7] = [
    KeywordRule { intent: Intent::ConfirmMorningSlot, keywords: &["morning", "9"] },
    KeywordRule { intent: Intent::ConfirmAfternoonSlot, keywords: &["afternoon", "2"] },
    KeywordRule { intent: Intent::AgreeToSchedule, keywords: &["yes", "schedule", "book"] },
    KeywordRule { intent: Intent::Decline, keywords: &["no", "later", "not now"] },
    KeywordRule { intent: Intent::AskCost, keywords: &["cost", "price", "how much"] },
    KeywordRule { intent: Intent::AskDetails, keywords: &["tell", "more", "detail"] },
    KeywordRule { intent: Intent::Thanks, keywords: &["thank"] },
];

/// Resolves free text to an intent by case-insensitive substring matching.
/// Total: anything unmatched (including empty input) is `Unclear`.
pub fn classify(utterance: &str) -> Intent {
    let lowered = utterance.to_lowercase();

    let intent = RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.intent)
        .unwrap_or(Intent::Unclear);

    debug!(?intent, len = utterance.len(), "Classified utterance");
    intent
}
