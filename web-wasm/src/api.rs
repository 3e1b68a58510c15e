//! 解析APIクライアント
//!
//! `/api/analyze` へ画像(base64)をPOSTし、AnalysisResultを受け取る。

use prompt_ai_common::{extract_base64_from_data_url, AnalysisResult};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

const ANALYZE_API_URL: &str = "/api/analyze";

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    image: &'a str,
}

/// 解析API呼び出し
///
/// # Arguments
/// * `data_url` - アップロード画像のData URL（base64部分のみ送信する）
pub async fn analyze_remote(data_url: &str) -> Result<AnalysisResult, String> {
    let base64_data = extract_base64_from_data_url(data_url)
        .ok_or_else(|| "Invalid data URL".to_string())?;

    let body = serde_json::to_string(&AnalyzeRequest { image: base64_data })
        .map_err(|e| e.to_string())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(ANALYZE_API_URL, &opts).map_err(js_err)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_err)?;

    let window = web_sys::window().ok_or_else(|| "windowがありません".to_string())?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| "Responseに変換できません".to_string())?;

    if !resp.ok() {
        return Err(format!("API error: {}", resp.status()));
    }

    let json = JsFuture::from(resp.json().map_err(js_err)?)
        .await
        .map_err(js_err)?;

    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

fn js_err(e: JsValue) -> String {
    format!("{:?}", e)
}
