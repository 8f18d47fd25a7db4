//! APIキーの保存（localStorage）
//!
//! ビルド時に GEMINI_API_KEY が与えられていればそれを初期値にする

use gloo::storage::{LocalStorage, Storage};

const API_KEY_STORAGE_KEY: &str = "nutriscan.gemini_api_key";

/// 保存済みキー、なければビルド時のキー
pub fn load_api_key() -> Option<String> {
    LocalStorage::get::<String>(API_KEY_STORAGE_KEY)
        .ok()
        .filter(|key| !key.trim().is_empty())
        .or_else(build_time_api_key)
}

fn build_time_api_key() -> Option<String> {
    option_env!("GEMINI_API_KEY")
        .map(str::to_string)
        .filter(|key| !key.trim().is_empty())
}

pub fn save_api_key(api_key: &str) -> Result<(), String> {
    LocalStorage::set(API_KEY_STORAGE_KEY, api_key.trim())
        .map_err(|e| format!("บันทึกไม่สำเร็จ: {}", e))
}

pub fn clear_api_key() {
    LocalStorage::delete(API_KEY_STORAGE_KEY);
}
