use serde::{Deserialize, Serialize};

use super::error::TriageError;

pub const MAX_HEALTH_SCORE: u8 = 100;

/// Read-only view of a vehicle handed to the triage kernel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleContext {
    pub id: String,
    pub make: String,
    pub model: String,
    pub city: String,
    /// Kilometres.
    pub odometer: u64,
    /// 0 - 100, higher is healthier.
    pub health_score: u8,
    pub owner_first_name: String,
}

impl VehicleContext {
    /// Builds a context from the owner's full name. The first name is the token
    /// before the first space; an empty full name leaves it empty, which
    /// [`VehicleContext::validate`] rejects.
    pub fn new(
        id: impl Into<String>,
        make: impl Into<String>,
        model: impl Into<String>,
        city: impl Into<String>,
        odometer: u64,
        health_score: u8,
        owner_full_name: &str,
    ) -> Self {
        Self {
            id: id.into(),
            make: make.into(),
            model: model.into(),
            city: city.into(),
            odometer,
            health_score,
            owner_first_name: first_name(owner_full_name).to_string(),
        }
    }

    pub fn severity(&self) -> SeverityTier {
        SeverityTier::from_score(self.health_score)
    }

    /// Predicted repair probability shown to the owner.
    pub fn risk_percent(&self) -> u8 {
        MAX_HEALTH_SCORE.saturating_sub(self.health_score)
    }

    pub fn validate(&self) -> Result<(), TriageError> {
        if self.health_score > MAX_HEALTH_SCORE {
            return Err(TriageError::InvalidInput(format!(
                "health score {} is outside 0..={}",
                self.health_score, MAX_HEALTH_SCORE
            )));
        }
        if self.owner_first_name.is_empty() {
            return Err(TriageError::InvalidInput(format!(
                "vehicle {} has no owner first name",
                self.id
            )));
        }
        Ok(())
    }
}

fn first_name(full_name: &str) -> &str {
    full_name.trim_start().split(' ').next().unwrap_or("")
}

/// Coarse health classification. Always derived from the score, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SeverityTier {
    /// score < 50
    Critical,
    /// 50 <= score < 70
    Watch,
    /// score >= 70
    Healthy,
}

impl SeverityTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=49 => SeverityTier::Critical,
            50..=69 => SeverityTier::Watch,
            _ => SeverityTier::Healthy,
        }
    }

    pub fn priority(self) -> PriorityLevel {
        match self {
            SeverityTier::Critical => PriorityLevel::P1,
            SeverityTier::Watch => PriorityLevel::P2,
            SeverityTier::Healthy => PriorityLevel::P3,
        }
    }
}

/// Dashboard priority labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriorityLevel {
    P1,
    P2,
    P3,
}
