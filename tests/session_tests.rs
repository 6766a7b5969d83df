use std::sync::Arc;

use autocare::kernel::error::TriageError;
use autocare::kernel::intent::Intent;
use autocare::kernel::liveness::{Liveness, LivenessGraph, LivenessRequest};
use autocare::kernel::session::{ConversationSession, Speaker, OPENING_SUGGESTIONS};
use autocare::kernel::vehicle::VehicleContext;

fn vehicle(score: u8) -> Arc<VehicleContext> {
    Arc::new(VehicleContext::new(
        "VH002", "Mahindra", "XUV700", "Delhi", 45780, score, "Priya Patel",
    ))
}

fn active_session(score: u8) -> ConversationSession {
    let mut session = ConversationSession::new(vehicle(score));
    session.start().unwrap();
    session.deliver_opening().unwrap();
    session
}

#[test]
fn test_liveness_graph() {
    use Liveness::*;
    use LivenessRequest::*;
    assert_eq!(LivenessGraph::transition(NotStarted, Start), Some(AwaitingFirstTurn));
    assert_eq!(LivenessGraph::transition(AwaitingFirstTurn, OpeningDelivered), Some(Active));
    assert_eq!(LivenessGraph::transition(Active, Reset), Some(NotStarted));
    assert_eq!(LivenessGraph::transition(NotStarted, OpeningDelivered), None);
    assert_eq!(LivenessGraph::transition(Active, Start), None);
    assert_eq!(LivenessGraph::transition(AwaitingFirstTurn, Start), None);
}

#[test]
fn test_lifecycle() {
    let mut session = ConversationSession::new(vehicle(58));
    assert_eq!(session.liveness(), Liveness::NotStarted);
    assert!(session.turns().is_empty());
    assert!(session.suggestions().is_empty());

    session.start().unwrap();
    assert_eq!(session.liveness(), Liveness::AwaitingFirstTurn);

    let opening = session.deliver_opening().unwrap().clone();
    assert_eq!(opening.speaker, Speaker::Assistant);
    assert_eq!(session.liveness(), Liveness::Active);
    assert_eq!(session.turns(), &[opening]);
    assert_eq!(session.suggestions().as_slice(), &OPENING_SUGGESTIONS);
}

#[test]
fn test_submit_before_active_fails() {
    let mut session = ConversationSession::new(vehicle(58));
    assert_eq!(
        session.submit("yes"),
        Err(TriageError::NotActive(Liveness::NotStarted))
    );
    session.start().unwrap();
    assert_eq!(
        session.submit("yes"),
        Err(TriageError::NotActive(Liveness::AwaitingFirstTurn))
    );
    assert!(session.turns().is_empty());
}

#[test]
fn test_opening_out_of_order_is_rejected() {
    let mut session = ConversationSession::new(vehicle(58));
    let err = session.deliver_opening().unwrap_err();
    assert_eq!(
        err,
        TriageError::InvalidTransition {
            from: Liveness::NotStarted,
            request: LivenessRequest::OpeningDelivered,
        }
    );
    assert_eq!(session.telemetry().snapshot().rejected_transitions, 1);
}

#[test]
fn test_invalid_vehicle_leaves_session_untouched() {
    let nameless = Arc::new(VehicleContext::new("VH0", "Kia", "Seltos", "Chennai", 0, 80, ""));
    let mut session = ConversationSession::new(nameless);
    session.start().unwrap();
    assert!(matches!(session.deliver_opening(), Err(TriageError::InvalidInput(_))));
    assert_eq!(session.liveness(), Liveness::AwaitingFirstTurn);
    assert!(session.turns().is_empty());
}

#[test]
fn test_submit_appends_and_replaces_suggestions() {
    let mut session = active_session(58);

    let exchange = session.submit("how much").unwrap().unwrap();
    assert_eq!(exchange.intent, Intent::AskCost);
    assert_eq!(session.turns().len(), 3);
    assert_eq!(session.turns()[1].speaker, Speaker::User);
    assert_eq!(session.turns()[1].text, "how much");
    assert_eq!(session.turns()[2].speaker, Speaker::Assistant);
    assert_eq!(session.turns()[2].text, exchange.reply.text);
    assert_eq!(session.suggestions(), &exchange.reply.suggestions);

    session.submit("thanks").unwrap();
    assert_eq!(session.turns().len(), 5);
    assert_eq!(session.suggestions().as_slice(), &["That's all, thanks!", "One more question"]);
}

#[test]
fn test_turns_are_append_only() {
    let mut session = active_session(40);
    session.submit("tell me more").unwrap();
    let before: Vec<_> = session.turns().to_vec();

    session.submit("no").unwrap();
    assert_eq!(&session.turns()[..before.len()], before.as_slice());
}

#[test]
fn test_blank_utterance_is_ignored() {
    let mut session = active_session(80);
    assert_eq!(session.submit("   "), Ok(None));
    assert_eq!(session.turns().len(), 1);
    assert_eq!(session.suggestions().as_slice(), &OPENING_SUGGESTIONS);
    assert_eq!(session.telemetry().snapshot().blank_ignored, 1);
}

#[test]
fn test_repeated_question_gets_repeated_answer() {
    let mut session = active_session(55);
    let first = session.submit("tell me more").unwrap().unwrap();
    let second = session.submit("tell me more").unwrap().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_choose_suggestion_resubmits_text() {
    let mut session = active_session(35);
    // "How much?"
    let exchange = session.choose_suggestion(2).unwrap().unwrap();
    assert_eq!(exchange.intent, Intent::AskCost);
    assert_eq!(session.turns()[1].text, "How much?");

    assert_eq!(
        session.choose_suggestion(7),
        Err(TriageError::NoSuchSuggestion { index: 7, offered: 3 })
    );
}

#[test]
fn test_reset_discards_conversation() {
    let mut session = active_session(35);
    let old_id = session.id();
    session.submit("yes").unwrap();

    session.reset();
    assert_eq!(session.liveness(), Liveness::NotStarted);
    assert!(session.turns().is_empty());
    assert!(session.suggestions().is_empty());
    assert_ne!(session.id(), old_id);
    assert_eq!(session.vehicle().id, "VH002");

    session.start().unwrap();
    session.deliver_opening().unwrap();
    assert_eq!(session.turns().len(), 1);
}

#[test]
fn test_sessions_share_vehicle_not_turns() {
    let v = vehicle(62);
    let mut a = ConversationSession::new(Arc::clone(&v));
    let mut b = ConversationSession::new(Arc::clone(&v));
    for s in [&mut a, &mut b] {
        s.start().unwrap();
        s.deliver_opening().unwrap();
    }
    a.submit("book").unwrap();

    assert_eq!(a.turns().len(), 3);
    assert_eq!(b.turns().len(), 1);
    assert_eq!(a.turns()[0], b.turns()[0]);
    assert_ne!(a.id(), b.id());
}
