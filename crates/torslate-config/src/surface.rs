use serde::{Deserialize, Serialize};

fn default_pointer_margin() -> i32 {
    20
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Offset from the pointer when the surface has no remembered position
    #[serde(default = "default_pointer_margin")]
    pub pointer_margin: i32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            pointer_margin: default_pointer_margin(),
        }
    }
}
