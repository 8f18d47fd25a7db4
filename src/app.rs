//! 端末クライアントの実行フロー
//!
//! 画像パス → 取り込み → 解析 → 結果/エラー表示 → （対話モードなら）リセット

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::{NutriScanError, Result};
use crate::{analyzer, picker, render};
use dialoguer::{Confirm, Input};
use indicatif::{ProgressBar, ProgressStyle};
use nutriscan_common::{messages, AppState, MenuAnalyzer, Session, Status};
use std::path::Path;
use std::time::Duration;

const PATH_PROMPT: &str = "ไฟล์รูปภาพเมนู (พาธ)";

/// 画像1枚を解析して結果を出力
pub async fn run_scan(config: &Config, image: &Path, format: OutputFormat) -> Result<()> {
    let client = analyzer::client_from_config(config)?;
    let mut session = Session::new(client);

    analyze_path(&mut session, image, format == OutputFormat::Text).await?;

    match session.state() {
        AppState::Results { result } => {
            match format {
                OutputFormat::Text => println!("{}", render::results(result)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
            }
            Ok(())
        }
        AppState::Error { message } => {
            eprintln!("{}", render::error(message));
            Err(NutriScanError::AnalysisFailed(message.clone()))
        }
        AppState::Idle { notice } => {
            let notice = notice.clone().unwrap_or_default();
            eprintln!("⚠ {}", notice);
            Err(NutriScanError::AnalysisFailed(notice))
        }
        AppState::Analyzing { .. } => Err(NutriScanError::AnalysisFailed(
            messages::ANALYSIS_FAILED.to_string(),
        )),
    }
}

/// 対話モード: Idle → 解析 → 結果/エラー → リセットを繰り返す
pub async fn run_interactive(config: &Config) -> Result<()> {
    let client = analyzer::client_from_config(config)?;
    let mut session = Session::new(client);

    loop {
        println!("{}", render::render_state(session.state()));

        let input: String = Input::new().with_prompt(PATH_PROMPT).interact_text()?;
        let path = input.trim().trim_matches(|c: char| c == '"' || c == '\'');

        match analyze_path(&mut session, Path::new(path), true).await {
            Ok(()) => {}
            Err(e) if e.is_file_access() => {
                eprintln!("{}", e);
                continue;
            }
            Err(e) => return Err(e),
        }

        // 取り込みエラーは Idle のまま notice 付きで再表示
        if session.state().status() == Status::Idle {
            continue;
        }

        println!("{}", render::render_state(session.state()));

        let label = match session.state().status() {
            Status::Error => messages::RETRY,
            _ => messages::SCAN_AGAIN,
        };
        let again = Confirm::new().with_prompt(label).default(true).interact()?;

        session.reset().map_err(nutriscan_common::Error::from)?;
        if !again {
            return Ok(());
        }
    }
}

/// 画像を読み込んでセッションに渡し、解析完了まで待つ
///
/// 取り込みエラー（サイズ超過・非画像）は状態に反映して Ok を返す
pub async fn analyze_path<A: MenuAnalyzer>(
    session: &mut Session<A>,
    path: &Path,
    show_spinner: bool,
) -> Result<()> {
    match picker::load_image(path) {
        Ok(file) => match session.select_file(file) {
            Ok(()) => {}
            Err(nutriscan_common::Error::Intake(_)) => return Ok(()),
            Err(e) => return Err(e.into()),
        },
        Err(NutriScanError::Common(nutriscan_common::Error::Intake(e))) => {
            tracing::debug!(error = %e, "file rejected");
            session.reject_file(e).map_err(nutriscan_common::Error::from)?;
            return Ok(());
        }
        Err(e) => return Err(e),
    }

    let spinner = show_spinner.then(|| {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(format!(
            "{} {}",
            messages::ANALYZING_TITLE,
            messages::ANALYZING_SUBTITLE
        ));
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    });

    let completed = session.complete_analysis().await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    completed.map_err(nutriscan_common::Error::from)?;
    Ok(())
}

/// config サブコマンド
pub fn run_config(
    mut config: Config,
    set_api_key: Option<String>,
    set_model: Option<String>,
    show: bool,
) -> Result<()> {
    if let Some(key) = set_api_key {
        config.set_api_key(key)?;
        println!("✔ APIキーを設定しました");
    }

    if let Some(model) = set_model {
        config.set_model(model)?;
        println!("✔ モデルを設定しました");
    }

    if show {
        println!("設定:");
        println!("  モデル: {}", config.model);
        println!("  温度: {}", config.temperature);
        println!("  タイムアウト: {}秒", config.timeout_seconds);
        println!(
            "  APIキー: {}",
            if config.get_api_key().is_ok() { "設定済み" } else { "未設定" }
        );
        println!("  設定ファイル: {}", Config::config_path()?.display());
    }

    Ok(())
}
