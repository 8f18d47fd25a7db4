//! 端末向けの画面描画
//!
//! 状態ごとの表示を文字列として組み立てる（出力は呼び出し側）

use nutriscan_common::messages;
use nutriscan_common::{AppState, MenuAnalysisResult, MenuItem};

const BAR_CELLS: usize = 10;
const CARD_WIDTH: usize = 44;

/// 現在の状態を描画
pub fn render_state(state: &AppState) -> String {
    match state {
        AppState::Idle { notice } => idle(notice.as_deref()),
        AppState::Analyzing { preview } => format!(
            "{}\n{}\n({}, {} bytes)",
            messages::ANALYZING_TITLE,
            messages::ANALYZING_SUBTITLE,
            preview.mime_type(),
            preview.decoded_len()
        ),
        AppState::Results { result } => results(result),
        AppState::Error { message } => error(message),
    }
}

pub fn idle(notice: Option<&str>) -> String {
    let mut out = format!(
        "🍽  {}\n{}\n{}\n\n{} — {}\n",
        messages::APP_TITLE,
        messages::IDLE_HEADLINE,
        messages::IDLE_SUBTITLE,
        messages::UPLOAD_PROMPT,
        messages::UPLOAD_HINT,
    );
    let features = messages::FEATURES
        .iter()
        .map(|(icon, label)| format!("{} {}", icon, label))
        .collect::<Vec<_>>()
        .join("   ");
    out.push_str(&features);
    out.push('\n');

    if let Some(notice) = notice {
        out.push_str(&format!("\n⚠ {}\n", notice));
    }
    out
}

pub fn error(message: &str) -> String {
    format!("✖ {}\n{}\n", messages::ERROR_TITLE, message)
}

pub fn results(result: &MenuAnalysisResult) -> String {
    let mut out = format!(
        "✨ {}\n{} ({})\n\n",
        messages::RESULTS_TITLE,
        messages::items_found(result.len()),
        messages::total_calories(result.total_calories())
    );

    for item in &result.items {
        out.push_str(&dish_card(item));
        out.push('\n');
    }

    out.push_str(&format!(
        "{} {}\n",
        messages::DISCLAIMER_TITLE,
        messages::DISCLAIMER
    ));
    out
}

/// 料理1品分のカード
pub fn dish_card(item: &MenuItem) -> String {
    let border = "─".repeat(CARD_WIDTH);
    let nutrition = &item.nutrition;

    let mut lines = vec![
        format!("┌{}", border),
        format!(
            "│ {}  [{}] {}",
            item.name,
            item.health_rating,
            item.health_rating.label()
        ),
        format!("│ 🔥 {}", messages::calories(item.calories)),
    ];
    if !item.description.is_empty() {
        lines.push(format!("│ {}", item.description));
    }
    lines.push("│".to_string());

    for (label, score) in nutrition.scores() {
        lines.push(format!("│ {:<12} {} {:>3.0}", label, score_bar(score), score.clamp(0.0, 100.0)));
    }

    lines.push(format!(
        "│ {} · {} · {}",
        messages::grams("P", nutrition.protein_grams),
        messages::grams("C", nutrition.carbs_grams),
        messages::grams("F", nutrition.fat_grams),
    ));
    lines.push(format!("└{}", border));

    lines.join("\n") + "\n"
}

/// 0-100 のスコアを10マスのバーにする（範囲外は丸める）
fn score_bar(score: f64) -> String {
    let filled = ((score.clamp(0.0, 100.0) / 100.0) * BAR_CELLS as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_CELLS - filled))
}
