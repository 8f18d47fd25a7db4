//! プロンプト生成モジュール
//!
//! CLIとWeb(WASM)で共有されるプロンプトとレスポンススキーマ:
//! - build_menu_prompt: メニュー画像解析用プロンプト
//! - response_schema: Gemini の responseSchema（構造化出力の制約）

use crate::types::HealthRating;
use serde_json::{json, Value};

/// 栄養スコアの項目（スキーマ上のキー名）
pub const NUTRITION_SCORE_FIELDS: &[&str] = &["protein", "carbs", "fat", "vitamins", "minerals"];

/// 栄養グラム数の項目（スキーマ上のキー名）
pub const NUTRITION_GRAM_FIELDS: &[&str] = &["proteinGrams", "carbsGrams", "fatGrams"];

/// メニュー解析プロンプト生成
///
/// # Returns
/// 画像と一緒に送る指示文
pub fn build_menu_prompt() -> String {
    let ratings = HealthRating::ALL
        .iter()
        .map(|r| format!("{} = {}", r.as_str(), r.label()))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"You are a nutritionist looking at a photo of a restaurant menu or of dishes on a table.

## Task
Identify every distinct dish visible in the image. For each dish:
- name: the dish name in Thai
- calories: estimated calories (kcal) for one standard serving
- description: one short sentence in Thai describing the dish and its main ingredients
- nutrition: estimate the balance of the five food groups as scores from 0 to 100
  (protein, carbs, fat, vitamins, minerals), where the score is the relative share in this dish,
  and estimate the absolute amounts in grams (proteinGrams, carbsGrams, fatGrams)
- healthRating: one letter ({ratings})

## Rules
- List each dish once, in the order it appears on the menu
- If the image contains no food, return an empty items array
- Estimates only; do not add commentary
- Output JSON only, matching the response schema"#
    )
}

/// Gemini の responseSchema
///
/// `{ "items": [MenuItem, ...] }` の形を強制する
pub fn response_schema() -> Value {
    let number = json!({ "type": "NUMBER" });

    let nutrition_properties: serde_json::Map<String, Value> = NUTRITION_SCORE_FIELDS
        .iter()
        .chain(NUTRITION_GRAM_FIELDS)
        .map(|field| (field.to_string(), number.clone()))
        .collect();
    let nutrition_required: Vec<&str> = NUTRITION_SCORE_FIELDS
        .iter()
        .chain(NUTRITION_GRAM_FIELDS)
        .copied()
        .collect();

    let ratings: Vec<&str> = HealthRating::ALL.iter().map(|r| r.as_str()).collect();

    json!({
        "type": "OBJECT",
        "properties": {
            "items": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "calories": number,
                        "description": { "type": "STRING" },
                        "nutrition": {
                            "type": "OBJECT",
                            "properties": nutrition_properties,
                            "required": nutrition_required,
                        },
                        "healthRating": {
                            "type": "STRING",
                            "enum": ratings,
                        },
                    },
                    "required": ["name", "calories", "description", "nutrition", "healthRating"],
                },
            },
        },
        "required": ["items"],
    })
}
