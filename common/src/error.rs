//! エラー型定義

use crate::messages;
use thiserror::Error;

/// 画像取り込み時のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    #[error("file too large: {size} bytes (limit {limit} bytes)")]
    TooLarge { size: u64, limit: u64 },

    #[error("unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("invalid data URL")]
    InvalidDataUrl,

    #[error("failed to read file: {0}")]
    Read(String),
}

impl IntakeError {
    /// 画面に表示するメッセージ
    pub fn user_message(&self) -> &'static str {
        match self {
            IntakeError::TooLarge { .. } => messages::FILE_TOO_LARGE,
            IntakeError::UnsupportedType(_) => messages::UNSUPPORTED_FILE,
            IntakeError::InvalidDataUrl | IntakeError::Read(_) => messages::FILE_READ_FAILED,
        }
    }
}

/// 解析（AI呼び出し）のエラー
///
/// 種別はログ用。画面上はすべて同じメッセージで扱う。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Gemini API key is not configured")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Transport(String),

    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("API error: {status} {body}")]
    Http { status: u16, body: String },

    #[error("response blocked: {0}")]
    Blocked(String),

    #[error("empty response")]
    EmptyResponse,

    #[error("response parse error: {0}")]
    Parse(String),
}

impl AnalysisError {
    pub fn user_message(&self) -> &'static str {
        messages::ANALYSIS_FAILED
    }
}

/// 状態遷移エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot {action} while {from}")]
pub struct TransitionError {
    pub action: &'static str,
    pub from: &'static str,
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Intake(#[from] IntakeError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Transition(#[from] TransitionError),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
