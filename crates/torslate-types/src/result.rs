use std::fmt;

use serde::{Deserialize, Serialize};

/// Step of a capture+translate job, used to attribute failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Capture,
    Ocr,
    Translation,
    Worker,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Capture => "capture",
            Stage::Ocr => "OCR",
            Stage::Translation => "translation",
            Stage::Worker => "worker",
        };
        f.write_str(name)
    }
}

/// User-facing failure carried inside a [`TranslationResult`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum ErrorKind {
    #[error("Screen capture failed: {0}")]
    Capture(String),

    #[error("No text found in the captured area")]
    NoTextFound,

    #[error("{stage} provider error: {message}")]
    Provider { stage: Stage, message: String },

    #[error("{stage} timed out after {millis} ms")]
    Timeout { stage: Stage, millis: u64 },

    #[error("No region set yet, use the region-set hotkey first")]
    NoRegionSet,
}

/// Outcome of one job, consumed once by the result surface.
///
/// On success `original` and `translated` are both set and `error` is empty.
/// On failure `error` is set and `original` keeps the OCR text when the OCR
/// stage got that far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub original: Option<String>,
    pub translated: Option<String>,
    pub error: Option<ErrorKind>,
}

impl TranslationResult {
    pub fn success(original: impl Into<String>, translated: impl Into<String>) -> Self {
        Self {
            original: Some(original.into()),
            translated: Some(translated.into()),
            error: None,
        }
    }

    pub fn failure(original: Option<String>, error: ErrorKind) -> Self {
        Self {
            original,
            translated: None,
            error: Some(error),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Text to display for the given view mode
    pub fn text_for(&self, view: ViewMode) -> String {
        let preferred = match view {
            ViewMode::Original => self.original.as_ref(),
            ViewMode::Translated => self.translated.as_ref(),
        };

        match (preferred, &self.error) {
            (Some(text), _) => text.clone(),
            (None, Some(error)) => error.to_string(),
            (None, None) => String::new(),
        }
    }
}

/// Which text the result surface is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    Original,
    #[default]
    Translated,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Original => ViewMode::Translated,
            ViewMode::Translated => ViewMode::Original,
        }
    }
}
