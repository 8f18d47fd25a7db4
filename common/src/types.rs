//! 解析結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - NutritionData: 栄養バランススコアと推定グラム数
//! - MenuItem: 料理1品分の解析結果
//! - MenuAnalysisResult: 画像1枚分の解析結果（料理の配列）

use serde::{Deserialize, Serialize};
use std::fmt;

/// 栄養データ
///
/// スコア（0-100）は栄養バランス上の比率、グラム数は絶対量の推定値。
/// 両者はAIが独立に推定した値で、相互の整合性は要求しない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionData {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub vitamins: f64,
    pub minerals: f64,
    pub protein_grams: f64,
    pub carbs_grams: f64,
    pub fat_grams: f64,
}

impl NutritionData {
    /// 表示用の5項目スコア（ラベル, スコア）
    pub fn scores(&self) -> [(&'static str, f64); 5] {
        [
            ("โปรตีน", self.protein),
            ("คาร์โบไฮเดรต", self.carbs),
            ("ไขมัน", self.fat),
            ("วิตามิน", self.vitamins),
            ("แร่ธาตุ", self.minerals),
        ]
    }
}

/// 健康度評価（A が最良、D が最低）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HealthRating {
    #[serde(alias = "a")]
    A,
    #[serde(alias = "b")]
    B,
    #[serde(alias = "c")]
    C,
    #[serde(alias = "d")]
    D,
}

impl HealthRating {
    pub const ALL: [HealthRating; 4] = [
        HealthRating::A,
        HealthRating::B,
        HealthRating::C,
        HealthRating::D,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthRating::A => "A",
            HealthRating::B => "B",
            HealthRating::C => "C",
            HealthRating::D => "D",
        }
    }

    /// 評価の説明（タイ語）
    pub fn label(&self) -> &'static str {
        match self {
            HealthRating::A => "ดีต่อสุขภาพมาก",
            HealthRating::B => "ดีต่อสุขภาพ",
            HealthRating::C => "ควรทานพอประมาณ",
            HealthRating::D => "ควรหลีกเลี่ยง",
        }
    }
}

impl fmt::Display for HealthRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 料理1品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub name: String,
    pub calories: f64,
    pub description: String,
    pub nutrition: NutritionData,
    pub health_rating: HealthRating,
}

/// 画像1枚分の解析結果
///
/// `items` はAIが返した順序を保持する
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuAnalysisResult {
    pub items: Vec<MenuItem>,
}

impl MenuAnalysisResult {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 全料理の合計カロリー
    pub fn total_calories(&self) -> f64 {
        self.items.iter().map(|item| item.calories).sum()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_item(name: &str, rating: HealthRating) -> MenuItem {
        MenuItem {
            name: name.to_string(),
            calories: 450.0,
            description: "ข้าวผัดกะเพราหมูสับไข่ดาว".to_string(),
            nutrition: NutritionData {
                protein: 60.0,
                carbs: 80.0,
                fat: 45.0,
                vitamins: 30.0,
                minerals: 25.0,
                protein_grams: 22.0,
                carbs_grams: 65.0,
                fat_grams: 15.5,
            },
            health_rating: rating,
        }
    }

    #[test]
    fn test_menu_item_serialize_camel_case() {
        let item = sample_item("ผัดกะเพรา", HealthRating::B);

        let json = serde_json::to_string(&item).expect("シリアライズ失敗");
        assert!(json.contains("\"healthRating\":\"B\""));
        assert!(json.contains("\"proteinGrams\":22.0"));
        assert!(json.contains("\"carbsGrams\":65.0"));
        assert!(json.contains("\"fatGrams\":15.5"));
    }

    #[test]
    fn test_menu_item_deserialize() {
        let json = r#"{
            "name": "ต้มยำกุ้ง",
            "calories": 220,
            "description": "ซุปรสจัด",
            "nutrition": {
                "protein": 70, "carbs": 20, "fat": 30, "vitamins": 60, "minerals": 55,
                "proteinGrams": 25, "carbsGrams": 10, "fatGrams": 8
            },
            "healthRating": "A"
        }"#;

        let item: MenuItem = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(item.name, "ต้มยำกุ้ง");
        assert_eq!(item.calories, 220.0);
        assert_eq!(item.health_rating, HealthRating::A);
        assert_eq!(item.nutrition.vitamins, 60.0);
        assert_eq!(item.nutrition.fat_grams, 8.0);
    }

    #[test]
    fn test_menu_item_missing_nutrition_is_error() {
        let json = r#"{"name": "x", "calories": 1, "description": "", "healthRating": "A"}"#;
        assert!(serde_json::from_str::<MenuItem>(json).is_err());
    }

    #[test]
    fn test_health_rating_rejects_unknown_grade() {
        assert!(serde_json::from_str::<HealthRating>("\"E\"").is_err());
        assert!(serde_json::from_str::<HealthRating>("\"A+\"").is_err());
    }

    #[test]
    fn test_health_rating_lowercase_alias() {
        let rating: HealthRating = serde_json::from_str("\"c\"").unwrap();
        assert_eq!(rating, HealthRating::C);
    }

    #[test]
    fn test_health_rating_order() {
        assert!(HealthRating::A < HealthRating::B);
        assert!(HealthRating::C < HealthRating::D);
        let mut ratings = vec![HealthRating::D, HealthRating::A, HealthRating::C];
        ratings.sort();
        assert_eq!(ratings, vec![HealthRating::A, HealthRating::C, HealthRating::D]);
    }

    #[test]
    fn test_total_calories() {
        let result = MenuAnalysisResult {
            items: vec![
                sample_item("a", HealthRating::A),
                sample_item("b", HealthRating::D),
            ],
        };
        assert_eq!(result.len(), 2);
        assert_eq!(result.total_calories(), 900.0);
        assert!(MenuAnalysisResult::default().is_empty());
    }
}
