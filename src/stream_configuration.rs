//! Configuration types for linq-stream operations

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{SeqError, SeqResult};

/// Slot configuration for the transport between two stages.
///
/// A capacity of 1 is the single-slot hand-off every operator uses by default.
/// Transforms inherit the capacity of their input, so configuring the producer
/// configures the whole chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    pub capacity: usize,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self { capacity: 1 }
    }
}

impl TransportConfig {
    /// Single-slot hand-off
    pub fn single_slot() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> SeqResult<Self> {
        let config = Self { capacity };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SeqResult<()> {
        if self.capacity == 0 {
            return Err(SeqError::InvalidConfig(
                "transport capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> SeqResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// Deadline used by the bounded-wait aggregators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    pub deadline: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            deadline: Duration::from_secs(1),
        }
    }
}

impl TimeoutConfig {
    pub fn new(deadline: Duration) -> Self {
        Self { deadline }
    }

    pub fn from_json_str(json: &str) -> SeqResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
