//! 画像認識ストラテジ
//!
//! `/api/analyze` の解析実体を差し替え可能にするトレイト。
//! - MockRecognizer: 固定の解析結果を返す（デフォルト）
//! - ClarifaiRecognizer: 外部認識API（Clarifai）を呼び出す。
//!   環境変数の資格情報トリプレットが揃っている場合のみ使用される

use crate::config::ClarifaiCredentials;
use crate::error::{PromptAiError, Result};
use prompt_ai_common::palette;
use prompt_ai_common::{AnalysisResult, DetectedObject};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

const CLARIFAI_API_URL: &str = "https://api.clarifai.com/v2/models/general-image-recognition/versions/aa7f35c01e0642fda5cf400f543e7c40/outputs";

pub type RecognizeFuture<'a> = Pin<Box<dyn Future<Output = Result<AnalysisResult>> + Send + 'a>>;

/// 画像認識ストラテジ
///
/// テストではネットワークなしのフェイクを注入できる。
pub trait ConceptRecognizer: Send + Sync {
    fn recognize<'a>(&'a self, image_base64: &'a str) -> RecognizeFuture<'a>;
}

/// モック解析結果（固定テーブル）
pub fn mock_analysis_result() -> AnalysisResult {
    let objects = vec![
        DetectedObject::new("person", 92),
        DetectedObject::new("face", 88),
        DetectedObject::new("portrait", 85),
        DetectedObject::new("clothing", 78),
    ];
    let detected_count = objects.len();

    AnalysisResult {
        objects,
        colors: vec![
            "#3b82f6".to_string(),
            "#10b981".to_string(),
            "#f59e0b".to_string(),
            "#ef4444".to_string(),
        ],
        tags: vec![
            "portrait".to_string(),
            "human".to_string(),
            "person".to_string(),
            "face".to_string(),
            "photography".to_string(),
            "people".to_string(),
        ],
        dominant_colors: vec![
            "#3b82f6".to_string(),
            "#10b981".to_string(),
            "#f59e0b".to_string(),
        ],
        detected_count,
    }
}

/// 固定のモック結果を返す認識器（デフォルト）
///
/// 実際の画像処理は行わない。
#[derive(Debug, Clone, Default)]
pub struct MockRecognizer;

impl ConceptRecognizer for MockRecognizer {
    fn recognize<'a>(&'a self, _image_base64: &'a str) -> RecognizeFuture<'a> {
        Box::pin(async { Ok(mock_analysis_result()) })
    }
}

// ============================================
// Clarifai API
// ============================================

#[derive(Serialize)]
struct ClarifaiRequest {
    inputs: Vec<ClarifaiInput>,
}

#[derive(Serialize)]
struct ClarifaiInput {
    data: ClarifaiInputData,
}

#[derive(Serialize)]
struct ClarifaiInputData {
    image: ClarifaiImage,
}

#[derive(Serialize)]
struct ClarifaiImage {
    base64: String,
}

#[derive(Deserialize)]
struct ClarifaiResponse {
    outputs: Vec<ClarifaiOutput>,
}

#[derive(Deserialize)]
struct ClarifaiOutput {
    data: ClarifaiOutputData,
}

#[derive(Deserialize)]
struct ClarifaiOutputData {
    #[serde(default)]
    concepts: Vec<ClarifaiConcept>,
}

#[derive(Deserialize)]
struct ClarifaiConcept {
    name: String,
    value: f64,
}

/// Clarifai汎用画像認識モデルを呼び出す認識器
pub struct ClarifaiRecognizer {
    client: reqwest::Client,
    credentials: ClarifaiCredentials,
}

impl ClarifaiRecognizer {
    pub fn new(credentials: ClarifaiCredentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            credentials,
        }
    }

    async fn call_api(&self, image_base64: &str) -> Result<Vec<DetectedObject>> {
        let request = ClarifaiRequest {
            inputs: vec![ClarifaiInput {
                data: ClarifaiInputData {
                    image: ClarifaiImage {
                        base64: image_base64.to_string(),
                    },
                },
            }],
        };

        let response = self
            .client
            .post(CLARIFAI_API_URL)
            .header(
                "Authorization",
                format!("Key {}", self.credentials.api_key),
            )
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PromptAiError::ApiCall(format!(
                "Clarifai API error: {}",
                response.status()
            )));
        }

        let body: ClarifaiResponse = response.json().await?;
        let output = body
            .outputs
            .first()
            .ok_or_else(|| PromptAiError::ApiParse("outputsが空です".to_string()))?;

        Ok(concepts_to_objects(&output.data.concepts))
    }
}

impl ConceptRecognizer for ClarifaiRecognizer {
    fn recognize<'a>(&'a self, image_base64: &'a str) -> RecognizeFuture<'a> {
        Box::pin(async move {
            let objects = self.call_api(image_base64).await?;
            Ok(objects_to_result(objects))
        })
    }
}

/// Clarifaiのコンセプトを検出物体に変換（確率→パーセント）
fn concepts_to_objects(concepts: &[ClarifaiConcept]) -> Vec<DetectedObject> {
    concepts
        .iter()
        .map(|c| DetectedObject::new(c.name.clone(), (c.value * 100.0).round() as u8))
        .collect()
}

/// 検出物体リストから解析結果を組み立てる
///
/// 色は画像からは抽出せず固定パレット、タグは物体名の流用。
fn objects_to_result(objects: Vec<DetectedObject>) -> AnalysisResult {
    let colors = palette::extract_colors();
    let dominant_colors = palette::dominant_colors(&colors);
    let tags = objects.iter().map(|o| o.name.clone()).collect();
    let detected_count = objects.len();

    AnalysisResult {
        objects,
        colors,
        tags,
        dominant_colors,
        detected_count,
    }
}
