//! Gemini API のリクエスト/レスポンス型
//!
//! 通信自体は各フロントエンドが行う（Web: fetch、CLI: reqwest）。
//! ここではリクエストの組み立てとレスポンス本文の取り出しだけを扱う。

use crate::error::AnalysisError;
use crate::intake::EncodedImage;
use crate::prompts::{build_menu_prompt, response_schema};
use serde::{Deserialize, Serialize};

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TEMPERATURE: f32 = 0.2;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
/// APIキーを載せるヘッダー（URLには含めない）
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// generateContent エンドポイントURL
pub fn endpoint_url(model: &str) -> String {
    format!("{}/{}:generateContent", GEMINI_API_BASE, model)
}

/// 生成パラメータ
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub model: String,
    pub temperature: f32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Gemini APIリクエスト
#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Serialize)]
pub struct GenerationConfig {
    pub temperature: f32,
    #[serde(rename = "responseMimeType")]
    pub response_mime_type: String,
    #[serde(rename = "responseSchema")]
    pub response_schema: serde_json::Value,
}

/// メニュー解析リクエストを作成（プロンプト + 画像 + スキーマ）
pub fn build_menu_request(image: &EncodedImage, settings: &GenerationSettings) -> GeminiRequest {
    GeminiRequest {
        contents: vec![Content {
            parts: vec![
                Part::Text {
                    text: build_menu_prompt(),
                },
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: image.mime_type().to_string(),
                        data: image.base64_data().to_string(),
                    },
                },
            ],
        }],
        generation_config: GenerationConfig {
            temperature: settings.temperature,
            response_mime_type: "application/json".to_string(),
            response_schema: response_schema(),
        },
    }
}

/// Gemini APIレスポンス
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeminiResponse {
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Candidate {
    pub content: Option<ResponseContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ResponseContent {
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

impl GeminiResponse {
    /// 最初の候補のテキストを取り出す
    pub fn into_text(self) -> Result<String, AnalysisError> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(AnalysisError::Blocked(reason));
        }

        let (text, finish_reason) = match self.candidates.into_iter().next() {
            Some(candidate) => {
                let text: String = candidate
                    .content
                    .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
                    .unwrap_or_default();
                (text, candidate.finish_reason)
            }
            None => (String::new(), None),
        };

        if text.trim().is_empty() {
            // SAFETY / RECITATION などで打ち切られた候補は本文を持たない
            return Err(match finish_reason {
                Some(reason) if reason != "STOP" => AnalysisError::Blocked(reason),
                _ => AnalysisError::EmptyResponse,
            });
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url() {
        assert_eq!(
            endpoint_url("gemini-2.5-flash"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_menu_request_serialize() {
        let image = EncodedImage::from_bytes("image/jpeg", b"\xff\xd8\xff");
        let request = build_menu_request(&image, &GenerationSettings::default());

        let json = serde_json::to_value(&request).expect("シリアライズ失敗");
        let parts = &json["contents"][0]["parts"];
        assert!(parts[0]["text"].as_str().unwrap().contains("healthRating"));
        assert_eq!(parts[1]["inline_data"]["mime_type"], "image/jpeg");
        assert_eq!(parts[1]["inline_data"]["data"], "/9j/");
        assert_eq!(json["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(json["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn test_part_text_serialize() {
        let part = Part::Text { text: "Hello".to_string() };
        let json = serde_json::to_string(&part).expect("シリアライズ失敗");
        assert_eq!(json, r#"{"text":"Hello"}"#);
    }

    #[test]
    fn test_response_into_text() {
        let json = r#"{
            "candidates": [{
                "content": { "parts": [{ "text": "{\"items\":" }, { "text": " []}" }] },
                "finishReason": "STOP"
            }]
        }"#;

        let response: GeminiResponse = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(response.into_text().unwrap(), "{\"items\": []}");
    }

    #[test]
    fn test_response_without_candidates() {
        let response: GeminiResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.into_text(), Err(AnalysisError::EmptyResponse));
    }

    #[test]
    fn test_response_candidate_stopped_by_safety() {
        let json = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        let response: GeminiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.into_text(),
            Err(AnalysisError::Blocked("SAFETY".to_string()))
        );
    }

    #[test]
    fn test_response_candidate_stopped_without_text() {
        let json = r#"{"candidates": [{"content": {"parts": []}, "finishReason": "STOP"}]}"#;
        let response: GeminiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.into_text(), Err(AnalysisError::EmptyResponse));
    }

    #[test]
    fn test_response_blocked() {
        let json = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        let response: GeminiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.into_text(),
            Err(AnalysisError::Blocked("SAFETY".to_string()))
        );
    }
}
