use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};

use crate::error::CloudError;

/// OCR provider interface
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    /// Extract all text from PNG image bytes; empty when nothing was detected
    async fn recognize(&self, image_bytes: &[u8]) -> Result<String, CloudError>;
}

/// Google Cloud Vision `images:annotate` client
#[derive(Clone)]
pub struct VisionRecognizer {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    feature: String,
}

impl VisionRecognizer {
    pub fn new(api_key: String, api_url: String, feature: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url,
            feature,
        }
    }
}

#[async_trait]
impl TextRecognizer for VisionRecognizer {
    async fn recognize(&self, image_bytes: &[u8]) -> Result<String, CloudError> {
        if self.api_key.is_empty() {
            return Err(CloudError::AuthenticationError);
        }

        let body = json!({
            "requests": [{
                "image": { "content": STANDARD.encode(image_bytes) },
                "features": [{ "type": self.feature }],
            }]
        });

        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        if let Some(err) = CloudError::from_status(response.status()) {
            return Err(err);
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| CloudError::ApiError(format!("Failed to parse response: {}", e)))?;

        let text = parse_annotation(&json)?;
        tracing::debug!("Vision returned {} chars", text.chars().count());
        Ok(text)
    }
}

/// First annotation holds the full detected text; no annotations means no text
fn parse_annotation(json: &Value) -> Result<String, CloudError> {
    let response = json["responses"]
        .get(0)
        .ok_or_else(|| CloudError::ApiError("Empty annotate response".to_string()))?;

    if let Some(message) = response["error"]["message"].as_str() {
        return Err(CloudError::ApiError(message.to_string()));
    }

    let text = response["textAnnotations"]
        .get(0)
        .and_then(|a| a["description"].as_str())
        .or_else(|| response["fullTextAnnotation"]["text"].as_str())
        .unwrap_or_default();

    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_annotation_is_full_text() {
        let json = json!({
            "responses": [{
                "textAnnotations": [
                    { "description": "Hello world\n" },
                    { "description": "Hello" },
                ]
            }]
        });
        assert_eq!(parse_annotation(&json).unwrap(), "Hello world\n");
    }

    #[test]
    fn no_annotations_is_empty_text() {
        let json = json!({ "responses": [ {} ] });
        assert_eq!(parse_annotation(&json).unwrap(), "");
    }

    #[test]
    fn per_image_error_is_reported() {
        let json = json!({
            "responses": [ { "error": { "code": 3, "message": "Bad image data." } } ]
        });
        assert!(matches!(parse_annotation(&json), Err(CloudError::ApiError(_))));
    }
}
