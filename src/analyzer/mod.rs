mod gemini;

pub use gemini::GeminiClient;

use crate::config::Config;
use crate::error::Result;
use std::time::Duration;

/// 設定からGeminiクライアントを作成（APIキー未設定ならエラー）
pub fn client_from_config(config: &Config) -> Result<GeminiClient> {
    let api_key = config.get_api_key()?;
    Ok(GeminiClient::new(
        api_key,
        config.generation_settings(),
        Duration::from_secs(config.timeout_seconds),
    ))
}
