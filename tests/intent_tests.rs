use autocare::kernel::intent::classifier::RULES;
use autocare::kernel::intent::{classify, Intent};

#[test]
fn test_each_bucket() {
    assert_eq!(classify("morning please"), Intent::ConfirmMorningSlot);
    assert_eq!(classify("9am works"), Intent::ConfirmMorningSlot);
    assert_eq!(classify("afternoon"), Intent::ConfirmAfternoonSlot);
    assert_eq!(classify("at 2 then"), Intent::ConfirmAfternoonSlot);
    assert_eq!(classify("book it"), Intent::AgreeToSchedule);
    assert_eq!(classify("later"), Intent::Decline);
    assert_eq!(classify("how much"), Intent::AskCost);
    assert_eq!(classify("what's the price"), Intent::AskCost);
    assert_eq!(classify("details"), Intent::AskDetails);
    assert_eq!(classify("thank you"), Intent::Thanks);
    assert_eq!(classify("hmm"), Intent::Unclear);
}

#[test]
fn test_slot_beats_scheduling() {
    assert_eq!(classify("yes, morning"), Intent::ConfirmMorningSlot);
    assert_eq!(classify("Yes please book the afternoon"), Intent::ConfirmAfternoonSlot);
}

#[test]
fn test_case_insensitive() {
    assert_eq!(classify("YES please"), Intent::AgreeToSchedule);
    assert_eq!(classify("THANKS"), Intent::Thanks);
}

#[test]
fn test_empty_and_whitespace_are_unclear() {
    assert_eq!(classify(""), Intent::Unclear);
    assert_eq!(classify("   \t\n"), Intent::Unclear);
}

#[test]
fn test_substring_matching_is_literal() {
    // "now" contains "no", and scheduling is checked first.
    assert_eq!(classify("Yes, schedule now"), Intent::AgreeToSchedule);
    assert_eq!(classify("Not now"), Intent::Decline);
    // "I know" contains "no".
    assert_eq!(classify("I know"), Intent::Decline);
    // Any digit 2 counts as an afternoon slot.
    assert_eq!(classify("cost for 2 cars"), Intent::ConfirmAfternoonSlot);
}

#[test]
fn test_rule_table_order() {
    let order: Vec<Intent> = RULES.iter().map(|r| r.intent).collect();
    assert_eq!(order, Intent::ALL[..7].to_vec());
    assert_eq!(Intent::ALL[7], Intent::Unclear);
}

#[test]
fn test_opening_suggestions_route_as_expected() {
    assert_eq!(classify("Yes, schedule now"), Intent::AgreeToSchedule);
    assert_eq!(classify("Tell me more"), Intent::AskDetails);
    assert_eq!(classify("How much?"), Intent::AskCost);
    assert_eq!(classify("Not now"), Intent::Decline);
}
