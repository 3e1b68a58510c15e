//! サーバ設定
//!
//! 外部認識API（Clarifai）の資格情報は環境変数から読み込む。
//! 3つすべてが揃っている場合のみ有効になり、デフォルトでは未設定。

/// Clarifai資格情報（環境変数のトリプレット）
#[derive(Debug, Clone)]
pub struct ClarifaiCredentials {
    pub api_key: String,
    pub user_id: String,
    pub app_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// 外部認識APIの資格情報（未設定ならモック解析）
    pub clarifai: Option<ClarifaiCredentials>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            clarifai: Self::clarifai_from_env(),
        }
    }

    fn clarifai_from_env() -> Option<ClarifaiCredentials> {
        let api_key = std::env::var("CLARIFAI_API_KEY").ok()?;
        let user_id = std::env::var("CLARIFAI_USER_ID").ok()?;
        let app_id = std::env::var("CLARIFAI_APP_ID").ok()?;

        if api_key.is_empty() || user_id.is_empty() || app_id.is_empty() {
            return None;
        }

        Some(ClarifaiCredentials {
            api_key,
            user_id,
            app_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_has_no_credentials() {
        let config = Config::default();
        assert!(config.clarifai.is_none());
    }
}
