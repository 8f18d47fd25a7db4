//! 外部API呼び出し

pub mod gemini;

pub use gemini::GeminiClient;
