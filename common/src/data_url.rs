//! Data URLユーティリティ
//!
//! "data:image/jpeg;base64,..." 形式のData URLからBase64データ部と
//! MIMEタイプを取り出す。WASM側（API送信前の前処理）と
//! サーバ側（テストデータ生成）で共用。

/// Data URLからBase64データ部分を抽出
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,/9j/4AAQ..." 形式のData URL
///
/// # Returns
/// Base64エンコードされたデータ部分、または抽出失敗時はNone
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// Data URLからMIMEタイプを抽出
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,..." 形式のData URL
///
/// # Returns
/// MIMEタイプ（例: "image/jpeg"）、抽出失敗時は"image/jpeg"をデフォルトとして返す
pub fn extract_mime_type_from_data_url(data_url: &str) -> &str {
    data_url
        .split(':')
        .nth(1)
        .and_then(|s| s.split(';').next())
        .unwrap_or("image/jpeg")
}
