//! Fleet fixture loading for the demo binary.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::kernel::vehicle::VehicleContext;

/// Demo fleet bundled with the binary.
pub const BUILTIN_FLEET: &str = include_str!("../demos/fleet.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
}

/// One row of a fleet listing as the dashboard serves it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetRecord {
    pub id: String,
    pub make: String,
    pub model: String,
    pub city: String,
    pub odometer: u64,
    pub health_score: u8,
    pub owner: Owner,
}

impl From<&FleetRecord> for VehicleContext {
    fn from(record: &FleetRecord) -> Self {
        VehicleContext::new(
            record.id.clone(),
            record.make.clone(),
            record.model.clone(),
            record.city.clone(),
            record.odometer,
            record.health_score,
            &record.owner.name,
        )
    }
}

pub fn parse_fleet(raw: &str) -> Result<Vec<FleetRecord>> {
    serde_json::from_str(raw).context("invalid fleet JSON")
}

/// Reads a fleet file, or the bundled fleet when `path` is None.
pub fn load_fleet(path: Option<&Path>) -> Result<Vec<FleetRecord>> {
    let fleet = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading fleet {}", path.display()))?;
            parse_fleet(&raw)?
        }
        None => parse_fleet(BUILTIN_FLEET)?,
    };
    if fleet.is_empty() {
        bail!("fleet listing is empty");
    }
    Ok(fleet)
}

pub fn find_vehicle(fleet: &[FleetRecord], id: &str) -> Result<VehicleContext> {
    fleet
        .iter()
        .find(|record| record.id.eq_ignore_ascii_case(id))
        .map(VehicleContext::from)
        .with_context(|| format!("no vehicle with id {id}"))
}
