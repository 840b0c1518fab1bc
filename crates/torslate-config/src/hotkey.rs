use serde::{Deserialize, Serialize};

fn default_adhoc() -> String {
    "ctrl+alt+KeyT".to_string()
}

fn default_region_set() -> String {
    "ctrl+alt+KeyR".to_string()
}

fn default_replay() -> String {
    "ctrl+alt+KeyE".to_string()
}

/// Global shortcut bindings, in `global-hotkey` accelerator syntax
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct HotkeyConfig {
    #[serde(default = "default_adhoc")]
    pub adhoc: String,
    #[serde(default = "default_region_set")]
    pub region_set: String,
    #[serde(default = "default_replay")]
    pub replay: String,
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            adhoc: default_adhoc(),
            region_set: default_region_set(),
            replay: default_replay(),
        }
    }
}
