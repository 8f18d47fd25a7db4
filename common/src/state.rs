//! 画面状態（状態機械）
//!
//! Idle → Analyzing → Results / Error → (reset) → Idle
//!
//! 各状態は自分に必要なデータだけを持つ。遷移できない操作は
//! TransitionError を返し、状態は変更しない。

use crate::error::{AnalysisError, IntakeError, TransitionError};
use crate::intake::EncodedImage;
use crate::types::MenuAnalysisResult;

/// 状態の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Analyzing,
    Results,
    Error,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::Analyzing => "analyzing",
            Status::Results => "results",
            Status::Error => "error",
        }
    }
}

/// アプリケーションの状態
#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    /// 画像未選択。取り込みエラーがあれば notice に保持
    Idle { notice: Option<String> },
    /// 解析中（リクエスト送信済み）
    Analyzing { preview: EncodedImage },
    /// 解析成功
    Results { result: MenuAnalysisResult },
    /// 解析失敗
    Error { message: String },
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Idle { notice: None }
    }
}

impl AppState {
    pub fn status(&self) -> Status {
        match self {
            AppState::Idle { .. } => Status::Idle,
            AppState::Analyzing { .. } => Status::Analyzing,
            AppState::Results { .. } => Status::Results,
            AppState::Error { .. } => Status::Error,
        }
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self, AppState::Analyzing { .. })
    }

    pub fn notice(&self) -> Option<&str> {
        match self {
            AppState::Idle { notice } => notice.as_deref(),
            _ => None,
        }
    }

    pub fn preview(&self) -> Option<&EncodedImage> {
        match self {
            AppState::Analyzing { preview } => Some(preview),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&MenuAnalysisResult> {
        match self {
            AppState::Results { result } => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            AppState::Error { message } => Some(message),
            _ => None,
        }
    }

    fn guard(&self, action: &'static str, allowed: &[Status]) -> Result<(), TransitionError> {
        let status = self.status();
        if allowed.contains(&status) {
            Ok(())
        } else {
            Err(TransitionError {
                action,
                from: status.as_str(),
            })
        }
    }

    /// 取り込みエラー: Idle のまま notice を表示
    pub fn reject_file(&mut self, error: &IntakeError) -> Result<(), TransitionError> {
        self.guard("reject a file", &[Status::Idle])?;
        *self = AppState::Idle {
            notice: Some(error.user_message().to_string()),
        };
        Ok(())
    }

    /// Idle → Analyzing
    pub fn begin_analysis(&mut self, preview: EncodedImage) -> Result<(), TransitionError> {
        self.guard("start an analysis", &[Status::Idle])?;
        *self = AppState::Analyzing { preview };
        Ok(())
    }

    /// Analyzing → Results / Error
    ///
    /// 失敗時はプレビューも破棄し、部分的な結果は残さない
    pub fn finish_analysis(
        &mut self,
        outcome: Result<MenuAnalysisResult, AnalysisError>,
    ) -> Result<(), TransitionError> {
        self.guard("finish an analysis", &[Status::Analyzing])?;
        *self = match outcome {
            Ok(result) => AppState::Results { result },
            Err(error) => AppState::Error {
                message: error.user_message().to_string(),
            },
        };
        Ok(())
    }

    /// Results / Error → Idle（Idle では notice を消すだけ）
    pub fn reset(&mut self) -> Result<(), TransitionError> {
        self.guard("reset", &[Status::Idle, Status::Results, Status::Error])?;
        *self = AppState::default();
        Ok(())
    }
}
