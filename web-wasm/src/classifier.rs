//! ローカル分類器（MobileNet）のJSブリッジ
//!
//! ページ起動時にモデルを1回ロードし、解析時に上位10件の分類を実行する。
//! モデル本体はJavaScript側（classifier-bridge.js）が保持する。

use prompt_ai_common::palette;
use prompt_ai_common::{AnalysisResult, DetectedObject};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/js/classifier-bridge.js")]
extern "C" {
    /// 分類モデルをロード（ページ起動時に1回）
    #[wasm_bindgen(js_name = "loadClassifier", catch)]
    async fn load_classifier_js() -> Result<(), JsValue>;

    /// Data URLの画像を分類し、予測配列のJSON文字列を返す
    ///
    /// # Arguments
    /// * `data_url` - 画像のData URL
    /// * `top_k` - 取得する予測数
    #[wasm_bindgen(js_name = "classifyImage", catch)]
    async fn classify_image_js(data_url: &str, top_k: u32) -> Result<JsValue, JsValue>;
}

/// 分類の取得件数
pub const TOP_K: u32 = 10;

/// MobileNetの予測1件
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub class_name: String,
    pub probability: f64,
}

/// モデルをロード
pub async fn load_model() -> Result<(), String> {
    load_classifier_js()
        .await
        .map_err(|e| format!("モデルロード失敗: {:?}", e))
}

/// 現在の画像を分類して解析結果を返す
pub async fn classify(data_url: &str) -> Result<AnalysisResult, String> {
    let value = classify_image_js(data_url, TOP_K)
        .await
        .map_err(|e| format!("分類失敗: {:?}", e))?;

    let json = value
        .as_string()
        .ok_or_else(|| "分類結果が文字列ではありません".to_string())?;
    let predictions: Vec<Prediction> =
        serde_json::from_str(&json).map_err(|e| format!("分類結果のパース失敗: {}", e))?;

    Ok(predictions_to_result(&predictions))
}

/// 予測リストを解析結果へ変換
///
/// - 物体名: クラス名を最初のカンマで分割した短い名前
/// - 信頼度: 確率をパーセントに丸め
/// - タグ: 全クラス名をカンマ分割してフラット化
/// - 色: 固定パレット（画像からは抽出しない）
pub fn predictions_to_result(predictions: &[Prediction]) -> AnalysisResult {
    let objects: Vec<DetectedObject> = predictions
        .iter()
        .map(|p| {
            let name = p
                .class_name
                .split(',')
                .next()
                .unwrap_or(&p.class_name)
                .trim();
            DetectedObject::new(name, (p.probability * 100.0).round() as u8)
        })
        .collect();

    let tags: Vec<String> = predictions
        .iter()
        .flat_map(|p| p.class_name.split(',').map(|t| t.trim().to_string()))
        .collect();

    let colors = palette::extract_colors();
    let dominant_colors = palette::dominant_colors(&colors);
    let detected_count = objects.len();

    AnalysisResult {
        objects,
        colors,
        tags,
        dominant_colors,
        detected_count,
    }
}
