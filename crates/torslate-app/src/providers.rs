use torslate_cloud::{GoogleTranslator, Translator, VisionRecognizer};
use torslate_config::Config;

pub fn translator(config: &Config) -> GoogleTranslator {
    GoogleTranslator::new(
        config.translator.api_key.clone(),
        config.translator.api_url.clone(),
    )
}

pub fn recognizer(config: &Config) -> VisionRecognizer {
    VisionRecognizer::new(
        config.ocr_api_key().to_string(),
        config.ocr.api_url.clone(),
        config.ocr.feature.clone(),
    )
}

/// Warn early instead of failing every job
pub fn check_keys(config: &Config) {
    let metadata = translator(config).metadata();
    if metadata.requires_api_key && config.translator.api_key.is_empty() {
        tracing::warn!("{} needs an API key, set GOOGLE_API_KEY", metadata.name);
    }
    if config.ocr_api_key().is_empty() {
        tracing::warn!("No OCR API key configured, set GOOGLE_API_KEY");
    }
}
