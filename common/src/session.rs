//! 解析セッション
//!
//! 状態機械と解析クライアントをまとめ、
//! 「ファイル選択 → エンコード → 解析 → 結果/エラー」を順に実行する。

use crate::error::{AnalysisError, Error, IntakeError, TransitionError};
use crate::intake::{encode_selected_file, EncodedImage, SelectedFile};
use crate::state::{AppState, Status};
use crate::types::MenuAnalysisResult;
use std::future::Future;

/// 画像を解析して料理一覧を返すクライアント
pub trait MenuAnalyzer {
    fn analyze(
        &self,
        image: &EncodedImage,
    ) -> impl Future<Output = Result<MenuAnalysisResult, AnalysisError>>;
}

pub struct Session<A> {
    state: AppState,
    analyzer: A,
}

impl<A: MenuAnalyzer> Session<A> {
    pub fn new(analyzer: A) -> Self {
        Self {
            state: AppState::default(),
            analyzer,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    /// ファイルを選択
    ///
    /// 検証・エンコードに成功すれば即座に Analyzing になる。
    /// 失敗した場合は Idle のまま notice を設定し、解析は行わない。
    /// Idle 以外では状態を変えずに取り込みエラーを返す。
    pub fn select_file(&mut self, file: SelectedFile) -> Result<(), Error> {
        match encode_selected_file(&file) {
            Ok(image) => {
                self.state.begin_analysis(image)?;
                Ok(())
            }
            Err(error) => {
                if self.state.status() == Status::Idle {
                    self.state.reject_file(&error)?;
                }
                Err(error.into())
            }
        }
    }

    /// バイト列を読む前に判明した取り込みエラー（サイズ超過など）を反映
    pub fn reject_file(&mut self, error: IntakeError) -> Result<(), TransitionError> {
        self.state.reject_file(&error)
    }

    /// Analyzing 中の画像を解析し、結果を状態に反映
    ///
    /// 解析の成否は状態（Results / Error）で表す。
    /// Err になるのは Analyzing 以外で呼ばれた場合のみ。
    pub async fn complete_analysis(&mut self) -> Result<(), TransitionError> {
        let outcome = match &self.state {
            AppState::Analyzing { preview } => self.analyzer.analyze(preview).await,
            other => {
                return Err(TransitionError {
                    action: "finish an analysis",
                    from: other.status().as_str(),
                })
            }
        };
        self.state.finish_analysis(outcome)
    }

    /// select_file と complete_analysis を続けて実行
    pub async fn submit(&mut self, file: SelectedFile) -> Result<(), Error> {
        self.select_file(file)?;
        self.complete_analysis().await?;
        Ok(())
    }

    /// Results / Error → Idle
    pub fn reset(&mut self) -> Result<(), TransitionError> {
        self.state.reset()
    }
}
