//! 選択されたファイルの Data URL 化

use nutriscan_common::{EncodedImage, IntakeError};

/// ファイル全体を Data URL として読み込む
pub async fn read_menu_image(file: web_sys::File) -> Result<EncodedImage, IntakeError> {
    let file = gloo::file::File::from(file);
    let data_url = gloo::file::futures::read_as_data_url(&file)
        .await
        .map_err(|e| IntakeError::Read(e.to_string()))?;
    EncodedImage::parse(data_url)
}
