use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_stage_timeout_ms() -> u64 {
    15_000
}

fn default_channel_capacity() -> usize {
    64
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PipelineConfig {
    /// Upper bound for each of the OCR and translation calls
    #[serde(default = "default_stage_timeout_ms")]
    pub stage_timeout_ms: u64,
    /// Capacity of the controller event channel
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl PipelineConfig {
    pub fn stage_timeout(&self) -> Duration {
        Duration::from_millis(self.stage_timeout_ms)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            stage_timeout_ms: default_stage_timeout_ms(),
            channel_capacity: default_channel_capacity(),
        }
    }
}
