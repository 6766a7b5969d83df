use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::kernel::telemetry::recorder::DEFAULT_CAPACITY;

/// Presentation-side knobs. None of these reach classification or planning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Simulated typing before the opening turn.
    pub opening_delay_ms: u64,
    /// Simulated typing before each reply.
    pub reply_delay_ms: u64,
    pub telemetry_capacity: usize,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            opening_delay_ms: 1000,
            reply_delay_ms: 1200,
            telemetry_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl AssistantConfig {
    /// No simulated latency at all.
    pub fn instant() -> Self {
        Self {
            opening_delay_ms: 0,
            reply_delay_ms: 0,
            ..Self::default()
        }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("invalid assistant config JSON")
    }

    /// Reads `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                Self::from_json(&raw)
            }
            None => Ok(Self::default()),
        }
    }
}
