use async_trait::async_trait;
use serde_json::{Value, json};

use crate::error::CloudError;
use crate::translator::{LanguageCode, ProviderMetadata, Translation, Translator};

/// Google Cloud Translation v2 REST client
#[derive(Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl GoogleTranslator {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url,
        }
    }

    async fn post(&self, url: &str, body: Value) -> Result<Value, CloudError> {
        if self.api_key.is_empty() {
            return Err(CloudError::AuthenticationError);
        }

        let response = self
            .client
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        if let Some(err) = CloudError::from_status(response.status()) {
            if !matches!(err, CloudError::ApiError(_)) {
                return Err(err);
            }
            // prefer the message Google puts in the body
            let body = response.json::<Value>().await.ok();
            return Err(body.as_ref().and_then(api_error).unwrap_or(err));
        }

        response
            .json()
            .await
            .map_err(|e| CloudError::ApiError(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, CloudError> {
        if from.eq_ignore_ascii_case(&to) {
            return Err(CloudError::UnsupportedLanguagePair { from, to });
        }

        let body = json!({
            "q": text,
            "source": from,
            "target": to,
            "format": "text",
        });

        let json = self.post(&self.api_url, body).await?;
        let translated = parse_translation(&json)?;

        Ok(Translation {
            text: translated,
            from,
            to,
            provider: "google".to_string(),
        })
    }

    async fn detect_language(&self, text: &str) -> Result<LanguageCode, CloudError> {
        let url = format!("{}/detect", self.api_url.trim_end_matches('/'));
        let json = self.post(&url, json!({ "q": text })).await?;
        parse_detection(&json)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Google Cloud Translation".to_string(),
            requires_api_key: true,
        }
    }
}

fn api_error(json: &Value) -> Option<CloudError> {
    json["error"]["message"]
        .as_str()
        .map(|message| CloudError::ApiError(message.to_string()))
}

fn parse_translation(json: &Value) -> Result<String, CloudError> {
    if let Some(err) = api_error(json) {
        return Err(err);
    }

    json["data"]["translations"]
        .get(0)
        .and_then(|t| t["translatedText"].as_str())
        .map(|text| text.trim().to_string())
        .ok_or_else(|| CloudError::ApiError("No translation in response".to_string()))
}

fn parse_detection(json: &Value) -> Result<LanguageCode, CloudError> {
    if let Some(err) = api_error(json) {
        return Err(err);
    }

    json["data"]["detections"]
        .get(0)
        .and_then(|d| d.get(0))
        .and_then(|d| d["language"].as_str())
        .map(str::to_lowercase)
        .ok_or_else(|| CloudError::ApiError("No detected language".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_translated_text() {
        let json = json!({
            "data": { "translations": [ { "translatedText": " สวัสดีโลก \n" } ] }
        });
        assert_eq!(parse_translation(&json).unwrap(), "สวัสดีโลก");
    }

    #[test]
    fn surfaces_api_error_message() {
        let json = json!({ "error": { "code": 400, "message": "API key not valid" } });
        match parse_translation(&json) {
            Err(CloudError::ApiError(msg)) => assert_eq!(msg, "API key not valid"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn parses_detection() {
        let json = json!({
            "data": { "detections": [ [ { "language": "EN", "confidence": 1.0 } ] ] }
        });
        assert_eq!(parse_detection(&json).unwrap(), "en");
    }

    #[tokio::test]
    async fn missing_key_fails_without_request() {
        let translator = GoogleTranslator::new(String::new(), "http://127.0.0.1:9".to_string());
        let result = translator
            .translate("Hello", "en".to_string(), "th".to_string())
            .await;
        assert!(matches!(result, Err(CloudError::AuthenticationError)));
    }

    #[tokio::test]
    async fn same_language_pair_is_rejected() {
        let translator = GoogleTranslator::new("key".to_string(), "http://127.0.0.1:9".to_string());
        let result = translator
            .translate("Hello", "en".to_string(), "EN".to_string())
            .await;
        assert!(matches!(
            result,
            Err(CloudError::UnsupportedLanguagePair { .. })
        ));
    }
}
