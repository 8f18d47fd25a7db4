//! Gemini API連携（fetch）
//!
//! リクエストの組み立てとレスポンスの解釈は nutriscan-common に任せ、
//! ここでは通信とタイムアウトだけを扱う。

use futures::future::{select, Either};
use gloo::timers::future::TimeoutFuture;
use nutriscan_common::gemini::{GeminiRequest, API_KEY_HEADER, DEFAULT_TIMEOUT_SECS};
use nutriscan_common::{
    build_menu_request, endpoint_url, parse_menu_response, AnalysisError, EncodedImage,
    GeminiResponse, GenerationSettings, MenuAnalysisResult, MenuAnalyzer,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// ブラウザから直接 Gemini を呼ぶクライアント
pub struct GeminiClient {
    api_key: String,
    settings: GenerationSettings,
    timeout_secs: u64,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            settings: GenerationSettings::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// リクエストヘッダー（APIキーはURLに含めない）
pub fn request_headers(api_key: &str) -> [(&'static str, String); 2] {
    [
        ("Content-Type", "application/json".to_string()),
        (API_KEY_HEADER, api_key.trim().to_string()),
    ]
}

/// JS 側の例外を文字列化
fn js_error(value: JsValue) -> AnalysisError {
    let detail = value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value));
    AnalysisError::Transport(detail)
}

/// Gemini API呼び出し（本文テキストを返す）
async fn call_gemini_api(
    url: &str,
    api_key: &str,
    request: &GeminiRequest,
) -> Result<String, AnalysisError> {
    let body = serde_json::to_string(request).map_err(|e| AnalysisError::Parse(e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    let headers = request.headers();
    for (name, value) in request_headers(api_key) {
        headers.set(name, &value).map_err(js_error)?;
    }

    let window = web_sys::window().ok_or_else(|| AnalysisError::Transport("no window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        let body = match resp.text() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default(),
            Err(_) => String::new(),
        };
        return Err(AnalysisError::Http {
            status: resp.status(),
            body,
        });
    }

    let json = JsFuture::from(resp.json().map_err(js_error)?)
        .await
        .map_err(|e| AnalysisError::Parse(format!("{:?}", e)))?;
    let response: GeminiResponse =
        serde_wasm_bindgen::from_value(json).map_err(|e| AnalysisError::Parse(e.to_string()))?;

    response.into_text()
}

impl MenuAnalyzer for GeminiClient {
    async fn analyze(&self, image: &EncodedImage) -> Result<MenuAnalysisResult, AnalysisError> {
        if self.api_key.trim().is_empty() {
            return Err(AnalysisError::MissingApiKey);
        }

        let url = endpoint_url(&self.settings.model);
        let request = build_menu_request(image, &self.settings);

        let call = Box::pin(call_gemini_api(&url, &self.api_key, &request));
        let timeout = Box::pin(TimeoutFuture::new((self.timeout_secs * 1000) as u32));

        let text = match select(call, timeout).await {
            Either::Left((outcome, _)) => outcome?,
            Either::Right(_) => return Err(AnalysisError::Timeout(self.timeout_secs)),
        };

        parse_menu_response(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_goes_in_header() {
        let headers = request_headers("  ab+c/1=&x\n");
        assert_eq!(headers[0], ("Content-Type", "application/json".to_string()));
        assert_eq!(headers[1], ("x-goog-api-key", "ab+c/1=&x".to_string()));
    }

    #[test]
    fn test_client_uses_default_settings() {
        let client = GeminiClient::new("k".into());
        assert_eq!(client.settings, GenerationSettings::default());
        assert_eq!(client.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_empty_key_is_rejected_before_fetch() {
        let client = GeminiClient::new("   ".into());
        let image = EncodedImage::from_bytes("image/png", &[0x89, 0x50, 0x4E, 0x47]);
        let outcome = futures::executor::block_on(client.analyze(&image));
        assert_eq!(outcome, Err(AnalysisError::MissingApiKey));
    }
}
