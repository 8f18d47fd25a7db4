//! 画面表示文言（タイ語）
//!
//! CLIとWebで同じ文言を使う

pub const APP_TITLE: &str = "NutriScan";

pub const IDLE_HEADLINE: &str = "เช็คแคลอรี่และสารอาหาร จากรูปเมนูอาหาร";
pub const IDLE_SUBTITLE: &str =
    "ถ่ายรูปเมนูหรืออัพโหลดรูปภาพเพื่อให้ AI ช่วยวิเคราะห์สารอาหาร 5 หมู่และพลังงานให้คุณ";
pub const UPLOAD_PROMPT: &str = "แตะเพื่อถ่ายรูป หรือ อัพโหลด";
pub const UPLOAD_HINT: &str = "รองรับ JPG, PNG (สูงสุด 5MB)";
pub const FEATURES: [(&str, &str); 3] = [
    ("🔥", "คำนวณแคลอรี่"),
    ("🥗", "ครบ 5 หมู่"),
    ("✨", "วิเคราะห์ด้วย AI"),
];

pub const ANALYZING_TITLE: &str = "กำลังวิเคราะห์เมนู...";
pub const ANALYZING_SUBTITLE: &str = "AI กำลังอ่านรายการอาหารและคำนวณสารอาหาร";

pub const ERROR_TITLE: &str = "เกิดข้อผิดพลาด";
pub const RETRY: &str = "ลองใหม่อีกครั้ง";
pub const SCAN_AGAIN: &str = "สแกนใหม่";

pub const RESULTS_TITLE: &str = "ผลการวิเคราะห์";
pub const DISCLAIMER_TITLE: &str = "หมายเหตุ:";
pub const DISCLAIMER: &str = "ข้อมูลโภชนาการเป็นการประมาณการโดย AI จากชื่อเมนูและภาพ ปริมาณแคลอรี่และสารอาหารจริงอาจแตกต่างกันไปตามสูตรและปริมาณของแต่ละร้าน";

pub const FILE_TOO_LARGE: &str = "ไฟล์มีขนาดใหญ่เกินไป (สูงสุด 5MB)";
pub const UNSUPPORTED_FILE: &str = "รองรับเฉพาะไฟล์รูปภาพเท่านั้น";
pub const FILE_READ_FAILED: &str = "ไม่สามารถอ่านไฟล์รูปภาพได้";
pub const ANALYSIS_FAILED: &str = "ไม่สามารถวิเคราะห์รูปภาพได้ กรุณาลองใหม่อีกครั้ง";

/// 結果見出し下の件数表示
pub fn items_found(count: usize) -> String {
    format!("พบ {} รายการอาหารจากเมนูของคุณ", count)
}

/// カロリー表示（小数点以下は四捨五入）
pub fn calories(kcal: f64) -> String {
    format!("{:.0} kcal", kcal)
}

/// 結果見出しの合計カロリー
pub fn total_calories(kcal: f64) -> String {
    format!("รวม {}", calories(kcal))
}

/// グラム表示
pub fn grams(label: &str, grams: f64) -> String {
    format!("{} {:.0}g", label, grams)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_found() {
        assert_eq!(items_found(2), "พบ 2 รายการอาหารจากเมนูของคุณ");
    }

    #[test]
    fn test_calories_rounding() {
        assert_eq!(calories(449.6), "450 kcal");
        assert_eq!(calories(0.0), "0 kcal");
    }

    #[test]
    fn test_total_calories() {
        assert_eq!(total_calories(960.8), "รวม 961 kcal");
    }

    #[test]
    fn test_grams() {
        assert_eq!(grams("โปรตีน", 22.4), "โปรตีน 22g");
    }
}
