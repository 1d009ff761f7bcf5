use serde::{Deserialize, Serialize};

use crate::{AgentError, LinearDecay, QNet, ReplayMemory};

/// Learning hyperparameters for one agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub gamma: f32,
    pub learning_rate: f32,
    pub hidden_size: usize,
    pub batch_size: usize,
    pub memory_capacity: usize,
    /// Starting epsilon on the 0..200 scale
    pub exploration_base: f32,
}

impl AgentConfig {
    pub const DEFAULT_GAMMA: f32 = 0.9;
    pub const DEFAULT_BATCH_SIZE: usize = 1000;

    pub fn validate(&self) -> Result<(), AgentError> {
        if !(0.0..=1.0).contains(&self.gamma) {
            return Err(AgentError::InvalidConfig(format!(
                "gamma must be in [0, 1], got {}",
                self.gamma
            )));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(AgentError::InvalidConfig(format!(
                "learning rate must be positive, got {}",
                self.learning_rate
            )));
        }
        if self.hidden_size == 0 {
            return Err(AgentError::InvalidConfig("hidden size must be non-zero".into()));
        }
        if self.batch_size == 0 {
            return Err(AgentError::InvalidConfig("batch size must be non-zero".into()));
        }
        if self.memory_capacity == 0 {
            return Err(AgentError::InvalidConfig(
                "memory capacity must be non-zero".into(),
            ));
        }
        if !(self.exploration_base.is_finite() && self.exploration_base >= 0.0) {
            return Err(AgentError::InvalidConfig(format!(
                "exploration base must be non-negative, got {}",
                self.exploration_base
            )));
        }
        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            gamma: Self::DEFAULT_GAMMA,
            learning_rate: QNet::DEFAULT_LEARNING_RATE,
            hidden_size: QNet::DEFAULT_HIDDEN,
            batch_size: Self::DEFAULT_BATCH_SIZE,
            memory_capacity: ReplayMemory::DEFAULT_CAPACITY,
            exploration_base: LinearDecay::DEFAULT_BASE,
        }
    }
}
