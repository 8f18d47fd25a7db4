//! APIレスポンスパーサー
//!
//! レスポンス本文からJSONを抽出し、MenuAnalysisResult にパースする。
//! スキーマに合わないデータはすべて AnalysisError::Parse になる。

use crate::error::AnalysisError;
use crate::types::{MenuAnalysisResult, MenuItem};

/// レスポンス本文からJSON部分を抽出
///
/// 抽出優先順位:
/// 1. ```json ... ``` ブロック
/// 2. 最初に現れる `{` または `[` から対応する最後の閉じ括弧まで
///
/// # Examples
/// ```
/// use nutriscan_common::extract_json;
///
/// let response = "結果: {\"items\": []} 以上";
/// assert_eq!(extract_json(response).unwrap(), "{\"items\": []}");
/// ```
pub fn extract_json(response: &str) -> Result<&str, AnalysisError> {
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + "```json".len();
        if let Some(end_offset) = response[start..].find("```") {
            return Ok(response[start..start + end_offset].trim());
        }
    }

    let start = response
        .find(['{', '['])
        .ok_or_else(|| AnalysisError::Parse("JSON not found".into()))?;
    let close = if response[start..].starts_with('{') { '}' } else { ']' };

    match response.rfind(close) {
        Some(end) if end > start => Ok(&response[start..=end]),
        _ => Err(AnalysisError::Parse("JSON not found".into())),
    }
}

/// メニュー解析レスポンスをパース
///
/// # Arguments
/// * `response` - Gemini が返したテキスト
///
/// # Returns
/// * `Ok(MenuAnalysisResult)` - 全項目がスキーマ通り
/// * `Err(AnalysisError::Parse)` - JSONが見つからない、または項目不足・型不一致
pub fn parse_menu_response(response: &str) -> Result<MenuAnalysisResult, AnalysisError> {
    let json_str = extract_json(response)?;

    // untagged はエラー内容を失うので、まず Value にしてから形を判定する
    let value: serde_json::Value = serde_json::from_str(json_str)
        .map_err(|e| AnalysisError::Parse(format!("invalid JSON: {}", e)))?;

    let items = match value {
        serde_json::Value::Object(ref map) if map.contains_key("items") => {
            serde_json::from_value::<Vec<MenuItem>>(map["items"].clone())
        }
        serde_json::Value::Array(_) => serde_json::from_value::<Vec<MenuItem>>(value),
        _ => {
            return Err(AnalysisError::Parse("expected an object with `items`".into()));
        }
    }
    .map_err(|e| AnalysisError::Parse(e.to_string()))?;

    Ok(MenuAnalysisResult { items })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HealthRating;

    const TWO_ITEMS: &str = r#"{
  "items": [
    {
      "name": "ผัดไทยกุ้งสด",
      "calories": 550,
      "description": "เส้นจันทน์ผัดกับกุ้ง ไข่ และถั่วงอก",
      "nutrition": {
        "protein": 55, "carbs": 85, "fat": 50, "vitamins": 35, "minerals": 30,
        "proteinGrams": 24, "carbsGrams": 70, "fatGrams": 18
      },
      "healthRating": "C"
    },
    {
      "name": "ส้มตำไทย",
      "calories": 120,
      "description": "มะละกอดิบตำกับมะเขือเทศและถั่วฝักยาว",
      "nutrition": {
        "protein": 20, "carbs": 40, "fat": 10, "vitamins": 90, "minerals": 60,
        "proteinGrams": 4, "carbsGrams": 22, "fatGrams": 2
      },
      "healthRating": "A"
    }
  ]
}"#;

    // =============================================
    // extract_json テスト
    // =============================================

    #[test]
    fn test_extract_json_with_block() {
        let response = format!("Here you go:\n```json\n{}\n```\nEnjoy.", TWO_ITEMS);
        let json = extract_json(&response).unwrap();
        assert!(json.starts_with('{'));
        assert!(json.ends_with('}'));
    }

    #[test]
    fn test_extract_json_raw_array() {
        let response = r#"[{"key": "value"}]"#;
        assert_eq!(extract_json(response).unwrap(), response);
    }

    #[test]
    fn test_extract_json_object_with_surrounding_text() {
        let response = r#"Result: {"items": [{"a": 1}]} done."#;
        assert_eq!(extract_json(response).unwrap(), r#"{"items": [{"a": 1}]}"#);
    }

    #[test]
    fn test_extract_json_error() {
        assert!(matches!(
            extract_json("No JSON here, just plain text."),
            Err(AnalysisError::Parse(_))
        ));
        assert!(extract_json("").is_err());
        assert!(extract_json("} {").is_err());
    }

    // =============================================
    // parse_menu_response テスト
    // =============================================

    #[test]
    fn test_parse_two_items_preserves_order() {
        let result = parse_menu_response(TWO_ITEMS).unwrap();
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[0].name, "ผัดไทยกุ้งสด");
        assert_eq!(result.items[0].health_rating, HealthRating::C);
        assert_eq!(result.items[1].name, "ส้มตำไทย");
        assert_eq!(result.items[1].nutrition.vitamins, 90.0);
        assert_eq!(result.items[1].nutrition.carbs_grams, 22.0);
    }

    #[test]
    fn test_parse_bare_array() {
        let value: serde_json::Value = serde_json::from_str(TWO_ITEMS).unwrap();
        let bare = value["items"].to_string();
        let result = parse_menu_response(&bare).unwrap();
        assert_eq!(result.items.len(), 2);
    }

    #[test]
    fn test_parse_empty_items() {
        let result = parse_menu_response(r#"{"items": []}"#).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_parse_missing_field_is_error() {
        let response = r#"{"items": [{"name": "ข้าวมันไก่", "calories": 600}]}"#;
        assert!(matches!(
            parse_menu_response(response),
            Err(AnalysisError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_invalid_rating_is_error() {
        let response = TWO_ITEMS.replace("\"healthRating\": \"A\"", "\"healthRating\": \"F\"");
        assert!(parse_menu_response(&response).is_err());
    }

    #[test]
    fn test_parse_wrong_type_is_error() {
        let response = TWO_ITEMS.replace("\"calories\": 550", "\"calories\": \"many\"");
        assert!(parse_menu_response(&response).is_err());
    }

    #[test]
    fn test_parse_object_without_items_is_error() {
        let response = r#"{"dishes": []}"#;
        assert!(matches!(
            parse_menu_response(response),
            Err(AnalysisError::Parse(msg)) if msg.contains("items")
        ));
    }

    #[test]
    fn test_parse_truncated_json_is_error() {
        let half = TWO_ITEMS.chars().count() / 2;
        let truncated: String = TWO_ITEMS.chars().take(half).collect();
        assert!(parse_menu_response(&truncated).is_err());
    }
}
