//! 解析結果の型定義
//!
//! サーバとWeb(WASM)で共有される型:
//! - DetectedObject / AnalysisResult: 画像解析の出力
//! - HistoryEntry: 保存済みプロンプト（localStorage）
//! - AnalysisMode: 解析モード（ローカル / API）

use serde::{Deserialize, Serialize};

/// 検出された物体
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectedObject {
    pub name: String,

    /// 信頼度（0〜100）
    pub confidence: u8,
}

impl DetectedObject {
    pub fn new(name: impl Into<String>, confidence: u8) -> Self {
        Self {
            name: name.into(),
            confidence,
        }
    }
}

/// 画像解析結果
///
/// 解析のたびに新しく生成され、前回の結果を上書きする。永続化はしない。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisResult {
    pub objects: Vec<DetectedObject>,
    pub colors: Vec<String>,
    pub tags: Vec<String>,
    pub dominant_colors: Vec<String>,
    pub detected_count: usize,
}

impl AnalysisResult {
    /// プロンプト生成が可能か（物体が1件以上検出されていること）
    pub fn has_objects(&self) -> bool {
        !self.objects.is_empty()
    }

    /// 上位N件の物体名
    pub fn top_object_names(&self, n: usize) -> Vec<&str> {
        self.objects
            .iter()
            .take(n)
            .map(|o| o.name.as_str())
            .collect()
    }
}

/// 保存済みプロンプト
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoryEntry {
    /// 作成時刻（ミリ秒）由来のID
    pub id: i64,

    pub title: String,

    pub prompt: String,

    /// 表示用のタイムスタンプ文字列
    pub timestamp: String,

    /// プレビュー画像のData URL（画像なしで保存した場合はNone）
    pub image: Option<String>,
}

/// 解析モード
///
/// UI上の状態であり、リロードをまたいで永続化はしない。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnalysisMode {
    /// ブラウザ内のAIモデルで解析
    #[default]
    Local,
    /// サーバの解析APIで解析
    Api,
}

impl AnalysisMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMode::Local => "local",
            AnalysisMode::Api => "api",
        }
    }

    /// モード切替時にUIへ表示する説明文
    pub fn description(&self) -> &'static str {
        match self {
            AnalysisMode::Local => "ローカル解析はブラウザ内のAIモデルを使用し、プライバシーを完全に保護します",
            AnalysisMode::Api => "API解析はサーバ側のモデルを使用し、より高精度な認識が可能です",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_result_default() {
        let result = AnalysisResult::default();
        assert!(result.objects.is_empty());
        assert_eq!(result.detected_count, 0);
        assert!(!result.has_objects());
    }

    #[test]
    fn test_analysis_result_serialize() {
        let result = AnalysisResult {
            objects: vec![DetectedObject::new("person", 92)],
            colors: vec!["#3b82f6".to_string()],
            tags: vec!["portrait".to_string()],
            dominant_colors: vec!["#3b82f6".to_string()],
            detected_count: 1,
        };

        let json = serde_json::to_string(&result).expect("シリアライズ失敗");
        assert!(json.contains("\"objects\":"));
        assert!(json.contains("\"name\":\"person\""));
        assert!(json.contains("\"confidence\":92"));
        assert!(json.contains("\"dominantColors\":[\"#3b82f6\"]"));
        assert!(json.contains("\"detectedCount\":1"));
    }

    #[test]
    fn test_analysis_result_deserialize() {
        let json = r##"{
            "objects": [
                { "name": "person", "confidence": 92 },
                { "name": "face", "confidence": 88 }
            ],
            "colors": ["#3b82f6", "#10b981"],
            "tags": ["portrait", "human"],
            "dominantColors": ["#3b82f6"],
            "detectedCount": 2
        }"##;

        let result: AnalysisResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(result.objects.len(), 2);
        assert_eq!(result.objects[0].name, "person");
        assert_eq!(result.objects[1].confidence, 88);
        assert_eq!(result.dominant_colors, vec!["#3b82f6"]);
        assert_eq!(result.detected_count, 2);
    }

    #[test]
    fn test_analysis_result_deserialize_missing_fields() {
        // 欠けているフィールドはデフォルト値で補完される
        let json = r#"{"objects": [{"name": "cat", "confidence": 70}]}"#;

        let result: AnalysisResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(result.objects.len(), 1);
        assert!(result.colors.is_empty());
        assert_eq!(result.detected_count, 0);
    }

    #[test]
    fn test_top_object_names() {
        let result = AnalysisResult {
            objects: vec![
                DetectedObject::new("a", 90),
                DetectedObject::new("b", 80),
                DetectedObject::new("c", 70),
            ],
            ..Default::default()
        };

        assert_eq!(result.top_object_names(2), vec!["a", "b"]);
        // 件数より大きいNを指定しても全件まで
        assert_eq!(result.top_object_names(10), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_history_entry_serialize() {
        let entry = HistoryEntry {
            id: 1700000000000,
            title: "夕暮れの風景".to_string(),
            prompt: "beautiful sunset".to_string(),
            timestamp: "2025/1/18 12:34:56".to_string(),
            image: None,
        };

        let json = serde_json::to_string(&entry).expect("シリアライズ失敗");
        assert!(json.contains("\"id\":1700000000000"));
        assert!(json.contains("\"title\":\"夕暮れの風景\""));
        assert!(json.contains("\"image\":null"));
    }

    #[test]
    fn test_history_entry_roundtrip() {
        let original = HistoryEntry {
            id: 1,
            title: "テスト".to_string(),
            prompt: "prompt text".to_string(),
            timestamp: "2025/1/18".to_string(),
            image: Some("data:image/jpeg;base64,aaaa".to_string()),
        };

        let json = serde_json::to_string(&original).expect("シリアライズ失敗");
        let restored: HistoryEntry = serde_json::from_str(&json).expect("デシリアライズ失敗");
        assert_eq!(original, restored);
    }

    #[test]
    fn test_analysis_mode_as_str() {
        assert_eq!(AnalysisMode::Local.as_str(), "local");
        assert_eq!(AnalysisMode::Api.as_str(), "api");
    }

    #[test]
    fn test_analysis_mode_default_is_local() {
        assert_eq!(AnalysisMode::default(), AnalysisMode::Local);
    }
}
