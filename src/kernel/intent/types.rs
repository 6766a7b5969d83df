use serde::{Deserialize, Serialize};

/// What a user utterance is asking for.
///
/// Declaration order is the classification priority: earlier variants win when an
/// utterance matches several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Intent {
    ConfirmMorningSlot,
    ConfirmAfternoonSlot,
    AgreeToSchedule,
    Decline,
    AskCost,
    AskDetails,
    Thanks,
    /// Fallback when nothing matched.
    Unclear,
}

impl Intent {
    /// Every intent, highest priority first.
    pub const ALL: [Intent; 8] = [
        Intent::ConfirmMorningSlot,
        Intent::ConfirmAfternoonSlot,
        Intent::AgreeToSchedule,
        Intent::Decline,
        Intent::AskCost,
        Intent::AskDetails,
        Intent::Thanks,
        Intent::Unclear,
    ];
}

/// One link of the predicate chain: the intent fires if the lowercased utterance
/// contains any of `keywords`.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub intent: Intent,
    pub keywords: &'static [&'static str],
}

impl KeywordRule {
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|kw| lowered.contains(kw))
    }
}
