use serde::{Deserialize, Serialize};

use crate::kernel::vehicle::{PriorityLevel, VehicleContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    Medium,
    Low,
}

/// Push/app notification that precedes a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub vehicle_id: String,
    pub priority: PriorityLevel,
    pub title: String,
    pub body: String,
    pub urgency: Urgency,
    pub action_url: String,
}

/// PURE FUNCTION: Vehicle -> Notification, keyed by priority.
pub fn generate_notification(vehicle: &VehicleContext) -> Notification {
    let priority = vehicle.severity().priority();
    let (title, body, urgency) = match priority {
        PriorityLevel::P1 => (
            "🚨 Urgent: Vehicle Attention Required",
            format!(
                "Critical issue detected in your {} {}. Tap to schedule immediate service.",
                vehicle.make, vehicle.model
            ),
            Urgency::High,
        ),
        PriorityLevel::P2 => (
            "⚠️ Service Recommended Soon",
            format!(
                "We've detected an issue with your {} {} that needs attention within 3 days.",
                vehicle.make, vehicle.model
            ),
            Urgency::Medium,
        ),
        PriorityLevel::P3 => (
            "🔧 Preventive Maintenance Suggested",
            format!(
                "Your {} {} could benefit from a checkup. Schedule at your convenience.",
                vehicle.make, vehicle.model
            ),
            Urgency::Low,
        ),
    };

    Notification {
        vehicle_id: vehicle.id.clone(),
        priority,
        title: title.to_string(),
        body,
        urgency,
        action_url: format!("/schedule?vehicle={}", vehicle.id),
    }
}
