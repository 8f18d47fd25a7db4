//! 画像取り込み
//!
//! ファイルサイズ・MIMEタイプの検証と、Data URLへのエンコード。
//! Data URLはプレビュー表示とAPI送信の両方に使う。

use crate::error::IntakeError;
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// 受け付ける最大ファイルサイズ（5MiB）
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// ファイル選択ダイアログの accept 属性
pub const ACCEPT_IMAGES: &str = "image/*";

const BASE64_MARKER: &str = ";base64,";

/// ファイルサイズを検証
pub fn check_file_size(size: u64) -> Result<(), IntakeError> {
    if size > MAX_FILE_SIZE {
        return Err(IntakeError::TooLarge {
            size,
            limit: MAX_FILE_SIZE,
        });
    }
    Ok(())
}

/// MIMEタイプが画像かどうかを検証
pub fn check_mime_type(mime_type: &str) -> Result<(), IntakeError> {
    let is_image = mime_type
        .strip_prefix("image/")
        .is_some_and(|subtype| !subtype.is_empty());
    if is_image {
        Ok(())
    } else {
        Err(IntakeError::UnsupportedType(mime_type.to_string()))
    }
}

/// エンコード済み画像（`data:<mime>;base64,<payload>` 形式）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    data_url: String,
    mime_end: usize,
    payload_start: usize,
}

impl EncodedImage {
    /// 生バイト列からData URLを作成
    pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> Self {
        let data_url = format!("data:{}{}{}", mime_type, BASE64_MARKER, STANDARD.encode(bytes));
        let mime_end = "data:".len() + mime_type.len();
        Self {
            data_url,
            mime_end,
            payload_start: mime_end + BASE64_MARKER.len(),
        }
    }

    /// FileReaderなどが生成したData URLを検証して取り込む
    ///
    /// # Arguments
    /// * `data_url` - "data:image/jpeg;base64,/9j/4AAQ..." 形式のData URL
    pub fn parse(data_url: impl Into<String>) -> Result<Self, IntakeError> {
        let data_url = data_url.into();
        let rest = data_url
            .strip_prefix("data:")
            .ok_or(IntakeError::InvalidDataUrl)?;
        let marker = rest.find(BASE64_MARKER).ok_or(IntakeError::InvalidDataUrl)?;

        // "image/png;charset=..." のようなパラメータ付きは MIME 部分だけを見る
        let mime_end = "data:".len() + rest[..marker].find(';').unwrap_or(marker);
        let payload_start = "data:".len() + marker + BASE64_MARKER.len();

        if mime_end == "data:".len() || payload_start >= data_url.len() {
            return Err(IntakeError::InvalidDataUrl);
        }
        STANDARD
            .decode(&data_url[payload_start..])
            .map_err(|_| IntakeError::InvalidDataUrl)?;

        Ok(Self {
            data_url,
            mime_end,
            payload_start,
        })
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    /// MIMEタイプ（例: "image/jpeg"）
    pub fn mime_type(&self) -> &str {
        &self.data_url["data:".len()..self.mime_end]
    }

    /// Base64エンコードされたデータ部分
    pub fn base64_data(&self) -> &str {
        &self.data_url[self.payload_start..]
    }

    /// デコード後のおおよそのバイト数
    pub fn decoded_len(&self) -> usize {
        let payload = self.base64_data();
        let padding = payload.bytes().rev().take_while(|&b| b == b'=').count();
        (payload.len() / 4 * 3).saturating_sub(padding.min(2))
    }
}

/// ユーザーが選択したファイル
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// サイズ検証 → MIME検証 → エンコード
pub fn encode_selected_file(file: &SelectedFile) -> Result<EncodedImage, IntakeError> {
    check_file_size(file.size())?;
    check_mime_type(&file.mime_type)?;
    Ok(EncodedImage::from_bytes(&file.mime_type, &file.bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_file_size_boundary() {
        assert!(check_file_size(0).is_ok());
        assert!(check_file_size(MAX_FILE_SIZE).is_ok());
        assert_eq!(
            check_file_size(MAX_FILE_SIZE + 1),
            Err(IntakeError::TooLarge {
                size: MAX_FILE_SIZE + 1,
                limit: MAX_FILE_SIZE
            })
        );
    }

    #[test]
    fn test_check_mime_type() {
        assert!(check_mime_type("image/jpeg").is_ok());
        assert!(check_mime_type("image/png").is_ok());
        assert!(check_mime_type("image/webp").is_ok());
        assert!(check_mime_type("image/").is_err());
        assert!(check_mime_type("application/pdf").is_err());
        assert!(check_mime_type("").is_err());
    }

    #[test]
    fn test_from_bytes() {
        let image = EncodedImage::from_bytes("image/png", b"hello");
        assert_eq!(image.data_url(), "data:image/png;base64,aGVsbG8=");
        assert_eq!(image.mime_type(), "image/png");
        assert_eq!(image.base64_data(), "aGVsbG8=");
        assert_eq!(image.decoded_len(), 5);
    }

    #[test]
    fn test_parse_jpeg() {
        let image = EncodedImage::parse("data:image/jpeg;base64,/9j/4AAQSkZJRg==").unwrap();
        assert_eq!(image.mime_type(), "image/jpeg");
        assert_eq!(image.base64_data(), "/9j/4AAQSkZJRg==");
    }

    #[test]
    fn test_parse_with_parameters() {
        let image = EncodedImage::parse("data:image/svg+xml;charset=utf-8;base64,PHN2Zz4=").unwrap();
        assert_eq!(image.mime_type(), "image/svg+xml");
        assert_eq!(image.base64_data(), "PHN2Zz4=");
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(EncodedImage::parse("not a data url"), Err(IntakeError::InvalidDataUrl));
        assert_eq!(EncodedImage::parse(""), Err(IntakeError::InvalidDataUrl));
        assert_eq!(EncodedImage::parse("data:image/png,abc"), Err(IntakeError::InvalidDataUrl));
        assert_eq!(EncodedImage::parse("data:image/png;base64,"), Err(IntakeError::InvalidDataUrl));
        assert_eq!(EncodedImage::parse("data:;base64,abc"), Err(IntakeError::InvalidDataUrl));
    }

    #[test]
    fn test_parse_rejects_non_base64_payload() {
        assert_eq!(
            EncodedImage::parse("data:image/png;base64,!!!not base64!!!"),
            Err(IntakeError::InvalidDataUrl)
        );
        assert_eq!(EncodedImage::parse("data:image/png;base64,="), Err(IntakeError::InvalidDataUrl));
        assert_eq!(EncodedImage::parse("data:image/png;base64,abc"), Err(IntakeError::InvalidDataUrl));
    }

    #[test]
    fn test_decoded_len_matches_decoded_bytes() {
        for bytes in [&b""[..], b"a", b"ab", b"abc", b"abcd"] {
            let image = EncodedImage::from_bytes("image/png", bytes);
            assert_eq!(image.decoded_len(), bytes.len());
        }
        let image = EncodedImage::parse("data:image/png;base64,aGk=").unwrap();
        assert_eq!(image.decoded_len(), 2);
    }

    #[test]
    fn test_encode_selected_file_too_large() {
        let file = SelectedFile {
            name: "big.jpg".into(),
            mime_type: "image/jpeg".into(),
            bytes: vec![0; (MAX_FILE_SIZE + 1) as usize],
        };
        assert!(matches!(
            encode_selected_file(&file),
            Err(IntakeError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_encode_selected_file_checks_size_before_type() {
        let file = SelectedFile {
            name: "big.txt".into(),
            mime_type: "text/plain".into(),
            bytes: vec![0; (MAX_FILE_SIZE + 1) as usize],
        };
        assert!(matches!(
            encode_selected_file(&file),
            Err(IntakeError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_encode_selected_file_ok() {
        let file = SelectedFile {
            name: "menu.png".into(),
            mime_type: "image/png".into(),
            bytes: vec![0x89, b'P', b'N', b'G'],
        };
        let image = encode_selected_file(&file).unwrap();
        assert_eq!(image.mime_type(), "image/png");
        assert_eq!(image.decoded_len(), 4);
    }
}
