//! HTTPルーティング
//!
//! - `POST /api/analyze`: 画像解析（本文 `{"image": "<base64>"}`）
//! - `GET /health`: ヘルスチェック
//!
//! `/api/analyze` はルート登録がPOSTのみのため、他メソッドは405になる。

use crate::recognizer::ConceptRecognizer;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::error;

pub type SharedRecognizer = Arc<dyn ConceptRecognizer>;

#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub image: Option<String>,
}

/// エラーレスポンス本文
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub fn router(recognizer: SharedRecognizer) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze))
        .route("/health", get(health_check))
        .with_state(recognizer)
        .layer(TraceLayer::new_for_http())
}

async fn analyze(
    State(recognizer): State<SharedRecognizer>,
    Json(request): Json<AnalyzeRequest>,
) -> Response {
    let image = match request.image.as_deref() {
        Some(image) if !image.is_empty() => image,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: "No image provided".to_string(),
                    message: None,
                }),
            )
                .into_response();
        }
    };

    match recognizer.recognize(image).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            error!("解析失敗: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: "Analysis failed".to_string(),
                    message: Some(e.to_string()),
                }),
            )
                .into_response()
        }
    }
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}
