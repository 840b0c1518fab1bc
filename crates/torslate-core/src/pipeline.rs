use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use torslate_cloud::{CloudError, TextRecognizer, Translator};
use torslate_config::Config;
use torslate_types::{ErrorKind, Stage, TranslationResult};

use crate::capture::CaptureJob;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    pub source: String,
    pub target: String,
}

impl LanguagePair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self::new("en", "th")
    }
}

/// OCR followed by translation, each stage bounded by a timeout.
///
/// Holds no per-job state, so one instance is shared by all workers.
pub struct TranslationPipeline {
    recognizer: Arc<dyn TextRecognizer>,
    translator: Arc<dyn Translator>,
    languages: LanguagePair,
    stage_timeout: Duration,
}

impl TranslationPipeline {
    pub fn new(
        recognizer: Arc<dyn TextRecognizer>,
        translator: Arc<dyn Translator>,
        languages: LanguagePair,
        stage_timeout: Duration,
    ) -> Self {
        Self {
            recognizer,
            translator,
            languages,
            stage_timeout,
        }
    }

    pub fn from_config(
        config: &Config,
        recognizer: Arc<dyn TextRecognizer>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        let languages = LanguagePair::new(
            config.translator.source_lang.clone(),
            config.translator.target_lang.clone(),
        );
        Self::new(
            recognizer,
            translator,
            languages,
            config.pipeline.stage_timeout(),
        )
    }

    pub fn languages(&self) -> &LanguagePair {
        &self.languages
    }

    /// Run OCR then translation on a captured image
    pub async fn run(&self, job: CaptureJob) -> TranslationResult {
        tracing::debug!("Job {}: OCR on {} bytes", job.id, job.image.len());

        let text = match self
            .stage(Stage::Ocr, self.recognizer.recognize(&job.image))
            .await
        {
            Ok(text) => text,
            Err(kind) => return TranslationResult::failure(None, kind),
        };

        let original = text.trim();
        if original.is_empty() {
            tracing::info!("Job {}: no text found", job.id);
            return TranslationResult::failure(None, ErrorKind::NoTextFound);
        }

        tracing::debug!("Job {}: OCR got {} chars", job.id, original.chars().count());
        let result = self.translate_text(original).await;

        tracing::info!(
            "Job {} finished in {:?} (error: {})",
            job.id,
            job.submitted_at.elapsed(),
            result.is_error()
        );
        result
    }

    /// Translation stage alone, for text that did not come from a capture
    pub async fn translate_text(&self, text: &str) -> TranslationResult {
        let call = self.translator.translate(
            text,
            self.languages.source.clone(),
            self.languages.target.clone(),
        );

        match self.stage(Stage::Translation, call).await {
            Ok(translation) => {
                tracing::debug!(
                    "Translated by {} ({} -> {})",
                    translation.provider,
                    translation.from,
                    translation.to
                );
                TranslationResult::success(text, translation.text)
            }
            Err(kind) => TranslationResult::failure(Some(text.to_string()), kind),
        }
    }

    async fn stage<T, F>(&self, stage: Stage, call: F) -> Result<T, ErrorKind>
    where
        F: Future<Output = Result<T, CloudError>>,
    {
        match timeout(self.stage_timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                tracing::error!("{} stage failed: {}", stage, e);
                Err(ErrorKind::Provider {
                    stage,
                    message: e.to_string(),
                })
            }
            Err(_) => {
                tracing::error!("{} stage timed out after {:?}", stage, self.stage_timeout);
                Err(ErrorKind::Timeout {
                    stage,
                    millis: self.stage_timeout.as_millis() as u64,
                })
            }
        }
    }
}
