use crate::kernel::session::{Speaker, SuggestionSet, Turn};

/// Terminal rendering of a turn. Markup is shown literally.
pub fn render_turn(turn: &Turn) -> String {
    let label = match turn.speaker {
        Speaker::User => "you",
        Speaker::Assistant => "autocare",
    };
    let mut out = String::new();
    for (i, line) in turn.text.lines().enumerate() {
        if i == 0 {
            out.push_str(&format!("[{}] {}\n", label, line));
        } else {
            out.push_str(&format!("    {}\n", line));
        }
    }
    out
}

/// Numbered quick replies, e.g. `#1 Thanks!  #2 Need to reschedule`.
pub fn render_suggestions(suggestions: &SuggestionSet) -> String {
    suggestions
        .iter()
        .enumerate()
        .map(|(i, s)| format!("#{} {}", i + 1, s))
        .collect::<Vec<_>>()
        .join("  ")
}
