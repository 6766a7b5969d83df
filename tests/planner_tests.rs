use autocare::kernel::intent::{classify, Intent};
use autocare::kernel::opening::generate_opening;
use autocare::kernel::speech::plan;
use autocare::kernel::vehicle::VehicleContext;

fn vehicle(score: u8) -> VehicleContext {
    VehicleContext::new("VH003", "Maruti", "Grand Vitara", "Bangalore", 18950, score, "Amit Kumar")
}

fn suggestions(intent: Intent, v: &VehicleContext) -> Vec<String> {
    plan(intent, v).suggestions.as_slice().to_vec()
}

#[test]
fn test_plan_is_total() {
    let v = vehicle(50);
    for intent in Intent::ALL {
        let reply = plan(intent, &v);
        assert!(!reply.text.is_empty(), "{intent:?} text");
        assert!(!reply.suggestions.is_empty(), "{intent:?} suggestions");
    }
}

#[test]
fn test_plan_has_no_hidden_state() {
    let v = vehicle(55);
    assert_eq!(plan(Intent::AskDetails, &v), plan(Intent::AskDetails, &v));
}

#[test]
fn test_schedule_offer_mentions_city() {
    let reply = plan(Intent::AgreeToSchedule, &vehicle(40));
    assert!(reply.text.contains("near Bangalore"));
    assert_eq!(
        suggestions(Intent::AgreeToSchedule, &vehicle(40)),
        vec!["Tomorrow morning", "Tomorrow afternoon", "Day after", "Weekend"]
    );
}

#[test]
fn test_decline_cites_savings() {
    let reply = plan(Intent::Decline, &vehicle(40));
    assert!(reply.text.contains("40% on average"));
    assert_eq!(
        reply.suggestions.as_slice(),
        &["Okay, let's schedule", "Remind me next week", "I need more time"]
    );
}

#[test]
fn test_cost_is_independent_of_vehicle() {
    let a = plan(Intent::AskCost, &vehicle(20));
    let other = VehicleContext::new("VH006", "Honda", "City", "Pune", 1, 95, "Ananya Iyer");
    let b = plan(Intent::AskCost, &other);
    assert_eq!(a, b);
    assert!(a.text.contains("If addressed now**: ₹8,000 - ₹15,000"));
    assert!(a.text.contains("If delayed**: Could reach ₹25,000 - ₹40,000"));
}

#[test]
fn test_slot_confirmations() {
    let v = vehicle(92);
    let morning = plan(Intent::ConfirmMorningSlot, &v);
    assert!(morning.text.contains("Tomorrow at 9:00"));
    assert!(morning.text.contains("AutoCare Bangalore Central"));
    assert!(morning.text.contains("Pre-service checklist"));
    assert_eq!(morning.suggestions.len(), 3);

    let afternoon = plan(Intent::ConfirmAfternoonSlot, &v);
    assert!(afternoon.text.contains("Tomorrow at 14:00"));
    assert!(!afternoon.text.contains("checklist"));
    assert_eq!(afternoon.suggestions.as_slice(), &["Thanks!", "Need to reschedule"]);
}

#[test]
fn test_details_thresholds() {
    let bad = plan(Intent::AskDetails, &vehicle(45)).text;
    assert!(bad.contains("Engine System**: High risk"));
    assert!(bad.contains("Brakes**: Wear detected"));
    assert!(bad.contains("55% probability"));

    let middling = plan(Intent::AskDetails, &vehicle(65)).text;
    assert!(middling.contains("Engine System**: Moderate"));
    assert!(middling.contains("Brakes**: Wear detected"));

    let good = plan(Intent::AskDetails, &vehicle(70)).text;
    assert!(good.contains("Engine System**: Moderate"));
    assert!(good.contains("Brakes**: Good condition"));
    assert!(good.contains("30% probability"));
}

#[test]
fn test_thanks_references_vehicle() {
    let reply = plan(Intent::Thanks, &vehicle(80));
    assert!(reply.text.contains("Maruti Grand Vitara"));
}

#[test]
fn test_unclear_offers_three_options() {
    let reply = plan(Intent::Unclear, &vehicle(80));
    assert_eq!(
        reply.suggestions.as_slice(),
        &["Schedule appointment", "Tell me more", "Cost estimate"]
    );
}

#[test]
fn test_critical_vehicle_asks_cost() {
    let v = vehicle(35);
    let opening = generate_opening(&v).unwrap();
    assert!(opening.text.contains("urgent"));

    let intent = classify("how much");
    assert_eq!(intent, Intent::AskCost);

    let reply = plan(intent, &v);
    assert!(reply.text.contains("now"));
    assert!(reply.text.contains("delayed"));
    assert_eq!(
        reply.suggestions.as_slice(),
        &["That's reasonable, proceed", "Still thinking", "Tell me more"]
    );
}

#[test]
fn test_healthy_vehicle_books_morning() {
    let v = vehicle(92);
    let intent = classify("9am works");
    assert_eq!(intent, Intent::ConfirmMorningSlot);

    let reply = plan(intent, &v);
    assert!(reply.text.contains("Tomorrow at 9:00"));
    assert!(reply.text.contains("Bangalore"));
}
