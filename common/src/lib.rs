//! Prompt AI Common Library
//!
//! サーバとWeb(WASM)で共有される型とユーティリティ

pub mod types;
pub mod palette;
pub mod prompt;
pub mod history;
pub mod upload;
pub mod data_url;
pub mod orchestrator;

pub use types::{AnalysisMode, AnalysisResult, DetectedObject, HistoryEntry};
pub use palette::{extract_colors, ScenePalette};
pub use prompt::{build_prompt, optimize_prompt, PromptStyle, PROMPT_SUFFIX};
pub use history::{find_by_id, push_entry, HISTORY_LIMIT};
pub use upload::{validate_image_file, UploadError, MAX_UPLOAD_BYTES};
pub use data_url::{extract_base64_from_data_url, extract_mime_type_from_data_url};
pub use orchestrator::{run_analysis, AnalysisOutcome};
