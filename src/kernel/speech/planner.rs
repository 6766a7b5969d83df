use serde::{Deserialize, Serialize};

use crate::kernel::format::CostBand;
use crate::kernel::intent::Intent;
use crate::kernel::session::SuggestionSet;
use crate::kernel::vehicle::VehicleContext;

/// Quoted if the owner services the vehicle now.
pub const COST_NOW: CostBand = CostBand::new(8_000, 15_000);
/// Quoted if the owner waits for a breakdown.
pub const COST_DELAYED: CostBand = CostBand::new(25_000, 40_000);
/// Average saving claimed for early intervention.
pub const EARLY_INTERVENTION_SAVINGS_PERCENT: u8 = 40;

/// Engine is flagged high-risk below this score.
const ENGINE_RISK_THRESHOLD: u8 = 60;
/// Brake wear is flagged below this score.
const BRAKE_WEAR_THRESHOLD: u8 = 70;

/// Planner output: the assistant's text and the quick replies that replace the
/// previous set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    pub suggestions: SuggestionSet,
}

/// PURE FUNCTION: (Intent, Vehicle) -> Reply.
///
/// Stateless per call. Nothing from earlier turns is consulted, so asking the
/// same thing twice yields the same reply twice.
pub fn plan(intent: Intent, vehicle: &VehicleContext) -> Reply {
    let (text, suggestions) = match intent {
        Intent::AgreeToSchedule => (offer_slots(vehicle), SLOT_CHOICES),
        Intent::Decline => (persuade(), AFTER_DECLINE),
        Intent::AskCost => (quote_costs(), AFTER_COST),
        Intent::ConfirmMorningSlot => (confirm_morning(vehicle), AFTER_MORNING_BOOKING),
        Intent::ConfirmAfternoonSlot => (confirm_afternoon(vehicle), AFTER_AFTERNOON_BOOKING),
        Intent::AskDetails => (explain(vehicle), AFTER_DETAILS),
        Intent::Thanks => (close(vehicle), AFTER_THANKS),
        Intent::Unclear => (clarify(), BROAD_OPTIONS),
    };

    Reply {
        text,
        suggestions: SuggestionSet::from_static(suggestions),
    }
}

const SLOT_CHOICES: &[&str] = &["Tomorrow morning", "Tomorrow afternoon", "Day after", "Weekend"];
const AFTER_DECLINE: &[&str] = &["Okay, let's schedule", "Remind me next week", "I need more time"];
const AFTER_COST: &[&str] = &["That's reasonable, proceed", "Still thinking", "Tell me more"];
const AFTER_MORNING_BOOKING: &[&str] = &["Thanks!", "Need to reschedule", "Any other questions"];
const AFTER_AFTERNOON_BOOKING: &[&str] = &["Thanks!", "Need to reschedule"];
const AFTER_DETAILS: &[&str] = &["Yes, schedule", "What's the cost?", "I'll think about it"];
const AFTER_THANKS: &[&str] = &["That's all, thanks!", "One more question"];
const BROAD_OPTIONS: &[&str] = &["Schedule appointment", "Tell me more", "Cost estimate"];

fn offer_slots(v: &VehicleContext) -> String {
    format!(
        "Wonderful! I'm glad you're taking care of your vehicle. 🎉\n\n\
         Let me check available slots at service centers near {}. Based on your location, I have these options:\n\n\
         📅 Tomorrow at 9:00 AM\n\
         📅 Tomorrow at 2:00 PM\n\
         📅 Day after at 10:00 AM\n\n\
         Which works best for you?",
        v.city
    )
}

fn persuade() -> String {
    format!(
        "I understand, everyone has a busy schedule! 😊\n\n\
         However, delaying service could lead to more expensive repairs. \
         Our data shows early intervention saves {}% on average.\n\n\
         Would it help if I found a slot that fits your schedule? Or I can send a reminder for next week?",
        EARLY_INTERVENTION_SAVINGS_PERCENT
    )
}

fn quote_costs() -> String {
    format!(
        "💰 Great question about costs!\n\n\
         Based on our diagnosis:\n\
         • **If addressed now**: {}\n\
         • **If delayed**: Could reach {}\n\n\
         Plus, preventive maintenance takes just 2-4 hours, while breakdown repairs can take days.\n\n\
         Would you like to save by scheduling now?",
        COST_NOW.render(),
        COST_DELAYED.render()
    )
}

fn confirm_morning(v: &VehicleContext) -> String {
    format!(
        "✅ **Appointment Confirmed!**\n\n\
         🗓️ Tomorrow at 9:00 AM\n\
         📍 AutoCare {} Central\n\
         🚗 {} {}\n\n\
         **Pre-service checklist:**\n\
         • Remove valuables from vehicle\n\
         • Bring registration documents\n\
         • Ensure 1/4 tank fuel\n\n\
         You'll receive a reminder 2 hours before. See you tomorrow!",
        v.city, v.make, v.model
    )
}

fn confirm_afternoon(v: &VehicleContext) -> String {
    format!(
        "✅ **Appointment Confirmed!**\n\n\
         🗓️ Tomorrow at 14:00 (2:00 PM)\n\
         📍 AutoCare {} Central\n\
         🚗 {} {}\n\n\
         We'll send you a reminder. See you tomorrow!",
        v.city, v.make, v.model
    )
}

fn explain(v: &VehicleContext) -> String {
    let engine = if v.health_score < ENGINE_RISK_THRESHOLD {
        "High risk - needs attention"
    } else {
        "Moderate - monitoring required"
    };
    let brakes = if v.health_score < BRAKE_WEAR_THRESHOLD {
        "Wear detected"
    } else {
        "Good condition"
    };

    format!(
        "Let me explain what we detected:\n\n\
         **1. Engine System**: {}\n\
         **2. Brakes**: {}\n\n\
         📊 Our AI predicts {}% probability of needing repair if not addressed.\n\n\
         Early maintenance is always more cost-effective. Want to proceed with scheduling?",
        engine,
        brakes,
        v.risk_percent()
    )
}

fn close(v: &VehicleContext) -> String {
    format!(
        "You're welcome! 😊 Is there anything else I can help you with regarding your {} {}?",
        v.make, v.model
    )
}

fn clarify() -> String {
    "I want to make sure I understand you correctly. 🤔\n\n\
     Are you interested in:\n\
     1. Scheduling a service appointment\n\
     2. Learning more about the detected issues\n\
     3. Getting a cost estimate\n\n\
     Just let me know how I can help!"
        .to_string()
}
