use std::env;

use serde::{Deserialize, Serialize};

pub use self::hotkey::HotkeyConfig;
pub use self::logging::LoggingConfig;
pub use self::ocr::OcrConfig;
pub use self::pipeline::PipelineConfig;
pub use self::surface::SurfaceConfig;
pub use self::translator::TranslatorConfig;

pub mod hotkey;
pub mod logging;
pub mod ocr;
pub mod pipeline;
pub mod surface;
pub mod translator;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub translator: TranslatorConfig,
    pub ocr: OcrConfig,
    pub hotkeys: HotkeyConfig,
    pub surface: SurfaceConfig,
    pub pipeline: PipelineConfig,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from a key lookup, normally the process environment
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("GOOGLE_API_KEY").filter(|k| !k.is_empty()) {
            if self.translator.api_key.is_empty() {
                self.translator.api_key = key.clone();
            }
            if self.ocr.api_key.is_empty() {
                self.ocr.api_key = key;
            }
        }

        if let Some(lang) = lookup("TORSLATE_SOURCE_LANG") {
            self.translator.source_lang = lang;
        }

        if let Some(lang) = lookup("TORSLATE_TARGET_LANG") {
            self.translator.target_lang = lang;
        }

        if let Some(ms) = lookup("STAGE_TIMEOUT_MS").and_then(|v| v.parse().ok()) {
            self.pipeline.stage_timeout_ms = ms;
        }

        self
    }

    /// Key used for Vision requests, falling back to the translator key
    pub fn ocr_api_key(&self) -> &str {
        if self.ocr.api_key.is_empty() {
            &self.translator.api_key
        } else {
            &self.ocr.api_key
        }
    }
}
