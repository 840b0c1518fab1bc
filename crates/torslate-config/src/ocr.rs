use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://vision.googleapis.com/v1/images:annotate".to_string()
}

fn default_feature() -> String {
    "TEXT_DETECTION".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OcrConfig {
    /// Vision API key, empty means reuse the translator key
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Vision feature type, `TEXT_DETECTION` or `DOCUMENT_TEXT_DETECTION`
    #[serde(default = "default_feature")]
    pub feature: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_api_url(),
            feature: default_feature(),
        }
    }
}
