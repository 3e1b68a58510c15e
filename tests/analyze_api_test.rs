//! /api/analyze エンドポイントの統合テスト
//!
//! ルータをメモリ上で直接駆動し、ステータスコードとレスポンス本文を検証する。
//! 認識ストラテジはトレイト経由で差し替える（ネットワーク不要）。

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use prompt_ai_common::AnalysisResult;
use prompt_ai_rust::error::PromptAiError;
use prompt_ai_rust::recognizer::{
    mock_analysis_result, ConceptRecognizer, MockRecognizer, RecognizeFuture,
};
use prompt_ai_rust::routes;
use std::sync::Arc;
use tower::ServiceExt;

/// 常に失敗する認識器（500系の検証用）
struct FailingRecognizer;

impl ConceptRecognizer for FailingRecognizer {
    fn recognize<'a>(&'a self, _image_base64: &'a str) -> RecognizeFuture<'a> {
        Box::pin(async { Err(PromptAiError::ApiCall("接続失敗".to_string())) })
    }
}

fn mock_app() -> axum::Router {
    routes::router(Arc::new(MockRecognizer))
}

fn post_analyze(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("リクエスト構築失敗")
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("本文の読み取り失敗");
    serde_json::from_slice(&bytes).expect("本文がJSONではありません")
}

/// POST以外のメソッドは405
#[tokio::test]
async fn test_non_post_method_returns_405() {
    let request = Request::builder()
        .method("GET")
        .uri("/api/analyze")
        .body(Body::empty())
        .expect("リクエスト構築失敗");

    let response = mock_app().oneshot(request).await.expect("レスポンスなし");
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

/// imageフィールドなしは400
#[tokio::test]
async fn test_missing_image_returns_400() {
    let response = mock_app()
        .oneshot(post_analyze("{}"))
        .await
        .expect("レスポンスなし");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "No image provided");
}

/// 空文字のimageも400
#[tokio::test]
async fn test_empty_image_returns_400() {
    let response = mock_app()
        .oneshot(post_analyze(r#"{"image": ""}"#))
        .await
        .expect("レスポンスなし");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// 正常系: 固定のモックJSONが返り、detectedCountがobjects件数と一致
#[tokio::test]
async fn test_valid_image_returns_mock_result() {
    let response = mock_app()
        .oneshot(post_analyze(r#"{"image": "/9j/4AAQSkZJRg=="}"#))
        .await
        .expect("レスポンスなし");

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("本文の読み取り失敗");
    let result: AnalysisResult =
        serde_json::from_slice(&bytes).expect("AnalysisResultとしてパースできること");

    assert_eq!(result, mock_analysis_result());
    assert_eq!(result.detected_count, result.objects.len());
}

/// レスポンスのワイヤフォーマットはcamelCase
#[tokio::test]
async fn test_response_wire_format_is_camel_case() {
    let response = mock_app()
        .oneshot(post_analyze(r#"{"image": "aaaa"}"#))
        .await
        .expect("レスポンスなし");

    let body = body_json(response).await;
    assert!(body.get("dominantColors").is_some());
    assert!(body.get("detectedCount").is_some());
    assert_eq!(body["objects"][0]["name"], "person");
    assert_eq!(body["objects"][0]["confidence"], 92);
}

/// 認識器の失敗は500とエラーメッセージ
#[tokio::test]
async fn test_recognizer_failure_returns_500() {
    let app = routes::router(Arc::new(FailingRecognizer));
    let response = app
        .oneshot(post_analyze(r#"{"image": "aaaa"}"#))
        .await
        .expect("レスポンスなし");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Analysis failed");
    assert!(body["message"]
        .as_str()
        .expect("messageは文字列")
        .contains("接続失敗"));
}

/// ヘルスチェック
#[tokio::test]
async fn test_health_check() {
    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .expect("リクエスト構築失敗");

    let response = mock_app().oneshot(request).await.expect("レスポンスなし");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "OK");
}
