use tracing::debug;

use super::error::TriageError;
use super::format::format_thousands;
use super::session::Turn;
use super::vehicle::{SeverityTier, VehicleContext};

/// Window (hours) within which a critical vehicle should be serviced.
pub const URGENT_WINDOW_HOURS: u32 = 24;

/// Fields a greeting template can draw on.
#[derive(Debug, Clone, Copy)]
struct Greeting<'a> {
    first_name: &'a str,
    make: &'a str,
    model: &'a str,
    odometer: u64,
    risk_percent: u8,
}

/// PURE FUNCTION: builds the assistant's first turn for a vehicle.
/// Same vehicle in, byte-identical text out.
pub fn generate_opening(vehicle: &VehicleContext) -> Result<Turn, TriageError> {
    vehicle.validate()?;

    let tier = vehicle.severity();
    let greeting = Greeting {
        first_name: &vehicle.owner_first_name,
        make: &vehicle.make,
        model: &vehicle.model,
        odometer: vehicle.odometer,
        risk_percent: vehicle.risk_percent(),
    };
    debug!(vehicle_id = %vehicle.id, ?tier, "Generating opening");

    let text = match tier {
        SeverityTier::Critical => urgent(&greeting),
        SeverityTier::Watch => preventive(&greeting),
        SeverityTier::Healthy => routine(&greeting),
    };
    Ok(Turn::assistant(text))
}

fn urgent(g: &Greeting<'_>) -> String {
    format!(
        "🚨 Hello {}! This is an urgent notification from AutoCare AI.\n\n\
         Our monitoring system has detected critical issues with your {} {}. \
         We estimate a {}% probability of needing repair, and some problems require immediate attention.\n\n\
         For your safety, we strongly recommend scheduling a service appointment within {} hours. \
         Would you like me to find the nearest available slot?",
        g.first_name, g.make, g.model, g.risk_percent, URGENT_WINDOW_HOURS
    )
}

fn preventive(g: &Greeting<'_>) -> String {
    format!(
        "👋 Hi {}! This is your AutoCare AI assistant.\n\n\
         I've been monitoring your {} {} and noticed some trends I'd like to discuss. \
         Our predictive analysis puts the risk of a component needing attention soon at {}%.\n\n\
         Catching issues early can prevent costly repairs! \
         Would you like to hear more, or schedule a preventive checkup?",
        g.first_name, g.make, g.model, g.risk_percent
    )
}

fn routine(g: &Greeting<'_>) -> String {
    format!(
        "👋 Hello {}! Your friendly AutoCare AI here.\n\n\
         Just checking in on your {} {}! With {} km on the clock, your vehicle is looking good.\n\n\
         Would you like to schedule a routine maintenance check?",
        g.first_name,
        g.make,
        g.model,
        format_thousands(g.odometer)
    )
}
