//! アップロードバリデーション
//!
//! 受け付ける画像: MIMEタイプが `image/` で始まり、サイズ10MB以下。

use thiserror::Error;

/// アップロード可能な最大サイズ（10MB）
pub const MAX_UPLOAD_BYTES: f64 = 10.0 * 1024.0 * 1024.0;

/// バリデーションエラー
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UploadError {
    #[error("画像ファイルを選択してください")]
    NotAnImage,

    #[error("画像サイズは10MB以下にしてください")]
    TooLarge,
}

/// 画像ファイルとして受け付け可能か検証
///
/// # Arguments
/// * `mime_type` - ファイルのMIMEタイプ（例: "image/jpeg"）
/// * `size_bytes` - ファイルサイズ（web_sys::File::size はf64）
pub fn validate_image_file(mime_type: &str, size_bytes: f64) -> Result<(), UploadError> {
    if !mime_type.starts_with("image/") {
        return Err(UploadError::NotAnImage);
    }

    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_jpeg_under_limit() {
        assert!(validate_image_file("image/jpeg", 1024.0).is_ok());
    }

    #[test]
    fn test_accepts_png_at_exact_limit() {
        assert!(validate_image_file("image/png", MAX_UPLOAD_BYTES).is_ok());
    }

    #[test]
    fn test_rejects_over_limit() {
        let result = validate_image_file("image/jpeg", MAX_UPLOAD_BYTES + 1.0);
        assert_eq!(result, Err(UploadError::TooLarge));
    }

    #[test]
    fn test_rejects_non_image_mime() {
        assert_eq!(
            validate_image_file("application/pdf", 100.0),
            Err(UploadError::NotAnImage)
        );
        assert_eq!(
            validate_image_file("text/plain", 100.0),
            Err(UploadError::NotAnImage)
        );
    }

    #[test]
    fn test_rejects_empty_mime() {
        assert_eq!(
            validate_image_file("", 100.0),
            Err(UploadError::NotAnImage)
        );
    }

    #[test]
    fn test_accepts_any_image_subtype() {
        for mime in ["image/webp", "image/gif", "image/avif"] {
            assert!(validate_image_file(mime, 100.0).is_ok(), "{}", mime);
        }
    }

    #[test]
    fn test_error_messages_are_user_facing() {
        assert_eq!(
            UploadError::NotAnImage.to_string(),
            "画像ファイルを選択してください"
        );
        assert_eq!(
            UploadError::TooLarge.to_string(),
            "画像サイズは10MB以下にしてください"
        );
    }
}
