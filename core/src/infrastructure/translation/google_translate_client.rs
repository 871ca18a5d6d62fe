use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError, translation::ports::TranslationProvider,
};

const GOOGLE_TRANSLATE_API_BASE: &str = "https://translation.googleapis.com/language/translate/v2";

/// Google Cloud Translation (v2, basic) adapter
#[derive(Debug, Clone)]
pub struct GoogleTranslateClient {
    api_key: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct TranslateRequest {
    q: String,
    target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    format: &'static str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Debug, Deserialize)]
struct TranslateData {
    #[serde(default)]
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    translated_text: String,
}

impl GoogleTranslateClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, GOOGLE_TRANSLATE_API_BASE.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            client: Client::new(),
        }
    }
}

impl TranslationProvider for GoogleTranslateClient {
    async fn translate(
        &self,
        text: String,
        target_language: String,
        source_language: Option<String>,
    ) -> Result<String, CoreError> {
        let request = TranslateRequest {
            q: text,
            target: target_language,
            source: source_language,
            format: "text",
        };

        let response = self
            .client
            .post(&self.base_url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Translation API request failed: {}", e);
                CoreError::ExternalServiceError(format!("Translation API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Translation API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "Translation API returned error: {} - {}",
                status, error_text
            )));
        }

        let body: TranslateResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse translation response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse translation response: {}", e))
        })?;

        body.data
            .translations
            .into_iter()
            .next()
            .map(|translation| translation.translated_text)
            .ok_or_else(|| {
                CoreError::ExternalServiceError("No translation returned".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_omits_missing_source() {
        let request = TranslateRequest {
            q: "Lunch".to_string(),
            target: "fr".to_string(),
            source: None,
            format: "text",
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"q": "Lunch", "target": "fr", "format": "text"})
        );
    }

    #[test]
    fn test_response_reads_first_translation() {
        let body: TranslateResponse = serde_json::from_str(
            r#"{"data": {"translations": [{"translatedText": "Déjeuner", "detectedSourceLanguage": "en"}]}}"#,
        )
        .unwrap();

        assert_eq!(body.data.translations[0].translated_text, "Déjeuner");
    }
}
