//! 画像ファイルの読み込み
//!
//! ブラウザのファイル選択に相当する部分。サイズはメタデータで先に確認し、
//! 上限を超えるファイルは中身を読まずに拒否する。

use crate::error::{NutriScanError, Result};
use image::ImageFormat;
use nutriscan_common::{check_file_size, check_mime_type, IntakeError, SelectedFile};
use std::path::Path;

const UNKNOWN_MIME: &str = "application/octet-stream";

pub fn load_image(path: &Path) -> Result<SelectedFile> {
    if !path.is_file() {
        return Err(NutriScanError::FileNotFound(path.display().to_string()));
    }

    let size = std::fs::metadata(path)?.len();
    check_file_size(size).map_err(intake_error)?;

    let bytes = std::fs::read(path)?;
    let mime_type = detect_mime_type(path, &bytes);
    check_mime_type(mime_type).map_err(intake_error)?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    tracing::debug!(%name, size, mime_type, "image loaded");

    Ok(SelectedFile {
        name,
        mime_type: mime_type.to_string(),
        bytes,
    })
}

/// 中身（マジックナンバー）から判定し、だめなら拡張子から判定
pub fn detect_mime_type(path: &Path, bytes: &[u8]) -> &'static str {
    image::guess_format(bytes)
        .or_else(|_| ImageFormat::from_path(path))
        .map(|format| format.to_mime_type())
        .unwrap_or(UNKNOWN_MIME)
}

fn intake_error(error: IntakeError) -> NutriScanError {
    NutriScanError::Common(error.into())
}
