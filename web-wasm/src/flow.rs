//! ファイル選択から結果表示までの状態操作
//!
//! App はシグナル越しにこれらを呼ぶ。DOM に依存しないのでネイティブでテストできる

use nutriscan_common::{
    check_file_size, check_mime_type, AnalysisError, AppState, EncodedImage, IntakeError,
    MenuAnalysisResult, Status, TransitionError,
};

/// 選択直後の検査結果
#[derive(Debug, Clone, PartialEq)]
pub enum Screening {
    /// 読み込みへ進む
    Accepted,
    /// notice を出して Idle のまま
    Rejected(IntakeError),
    /// Idle 以外（解析中など）なので無視
    Busy,
}

/// サイズ → 種類の順に検査し、不合格なら notice を設定する
pub fn screen_selection(state: &mut AppState, size: u64, mime_type: &str) -> Screening {
    if state.status() != Status::Idle {
        return Screening::Busy;
    }
    match check_file_size(size).and_then(|()| check_mime_type(mime_type)) {
        Ok(()) => Screening::Accepted,
        Err(error) => {
            // Idle なので失敗しない
            let _ = state.reject_file(&error);
            Screening::Rejected(error)
        }
    }
}

/// 読み込み結果を反映: 成功なら Analyzing にして解析対象を返す
///
/// 読み込み失敗は Idle の notice になる。Idle 以外では何もしない
pub fn begin(state: &mut AppState, read: Result<EncodedImage, IntakeError>) -> Option<EncodedImage> {
    match read {
        Ok(image) => state.begin_analysis(image.clone()).ok().map(|()| image),
        Err(error) => {
            let _ = state.reject_file(&error);
            None
        }
    }
}

/// 解析結果を反映: Results / Error
pub fn finish(
    state: &mut AppState,
    outcome: Result<MenuAnalysisResult, AnalysisError>,
) -> Result<(), TransitionError> {
    state.finish_analysis(outcome)
}
