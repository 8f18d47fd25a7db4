//! Gemini API連携（reqwest）

use nutriscan_common::gemini::API_KEY_HEADER;
use nutriscan_common::{
    build_menu_request, endpoint_url, parse_menu_response, AnalysisError, EncodedImage,
    GeminiResponse, GenerationSettings, MenuAnalysisResult, MenuAnalyzer,
};
use std::time::Duration;

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    settings: GenerationSettings,
    timeout: Duration,
}

impl GeminiClient {
    pub fn new(api_key: String, settings: GenerationSettings, timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            settings,
            timeout,
        }
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }

    /// generateContent のリクエストを組み立てる
    fn build_request(&self, image: &EncodedImage) -> reqwest::RequestBuilder {
        self.http
            .post(endpoint_url(self.model()))
            .header(API_KEY_HEADER, self.api_key.trim())
            .timeout(self.timeout)
            .json(&build_menu_request(image, &self.settings))
    }

    /// generateContent を呼び出してレスポンス本文のテキストを返す
    async fn generate(&self, image: &EncodedImage) -> Result<String, AnalysisError> {
        let response = self
            .build_request(image)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let payload: GeminiResponse = response
            .json()
            .await
            .map_err(|e| self.transport_error(e))?;
        payload.into_text()
    }

    fn transport_error(&self, error: reqwest::Error) -> AnalysisError {
        if error.is_timeout() {
            AnalysisError::Timeout(self.timeout.as_secs())
        } else if error.is_decode() {
            AnalysisError::Parse(error.to_string())
        } else {
            AnalysisError::Transport(error.without_url().to_string())
        }
    }
}

impl MenuAnalyzer for GeminiClient {
    async fn analyze(&self, image: &EncodedImage) -> Result<MenuAnalysisResult, AnalysisError> {
        tracing::info!(
            model = %self.model(),
            mime = image.mime_type(),
            bytes = image.decoded_len(),
            "requesting menu analysis"
        );

        // 失敗の種別はログにのみ残る（画面は一律のメッセージ）
        let outcome = match self.generate(image).await {
            Ok(text) => {
                tracing::debug!(chars = text.len(), "response received");
                parse_menu_response(&text)
            }
            Err(error) => Err(error),
        };

        match &outcome {
            Ok(result) => tracing::info!(items = result.len(), "menu analysis parsed"),
            Err(error) => tracing::warn!(%error, "menu analysis failed"),
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_key: &str) -> GeminiClient {
        GeminiClient::new(
            api_key.to_string(),
            GenerationSettings::default(),
            Duration::from_secs(5),
        )
    }

    #[test]
    fn test_api_key_is_sent_in_header_not_url() {
        let image = EncodedImage::from_bytes("image/png", b"png");
        let request = client(" k&y=1 ").build_request(&image).build().unwrap();

        assert_eq!(request.headers()[API_KEY_HEADER], "k&y=1");
        assert!(request.url().query().is_none());
        assert!(request
            .url()
            .as_str()
            .ends_with("/gemini-2.5-flash:generateContent"));
    }

    #[test]
    fn test_model_comes_from_settings() {
        let settings = GenerationSettings {
            model: "gemini-2.0-flash".to_string(),
            ..GenerationSettings::default()
        };
        let client = GeminiClient::new("k".into(), settings, Duration::from_secs(5));
        assert_eq!(client.model(), "gemini-2.0-flash");
    }
}
