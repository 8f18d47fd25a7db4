use thiserror::Error;

#[derive(Error, Debug)]
pub enum NutriScanError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIキーが設定されていません。`nutriscan config --set-api-key YOUR_KEY` か環境変数 GEMINI_API_KEY で設定してください")]
    MissingApiKey,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("解析に失敗しました: {0}")]
    AnalysisFailed(String),

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] nutriscan_common::Error),
}

impl NutriScanError {
    /// 画像ファイルを開けなかった（対話モードでは入力し直せる）
    pub fn is_file_access(&self) -> bool {
        matches!(self, NutriScanError::FileNotFound(_) | NutriScanError::Io(_))
    }
}

pub type Result<T> = std::result::Result<T, NutriScanError>;
