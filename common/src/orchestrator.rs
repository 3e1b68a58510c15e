//! 解析オーケストレーション
//!
//! モードに応じてローカル解析またはAPI解析へディスパッチする。
//! API解析が失敗した場合は一度だけローカル解析へフォールバックする
//! （リトライ上限・バックオフなし、フォールバックは1回のみ）。
//!
//! ローカル/API解析の実体はFutureを返すクロージャとして受け取るため、
//! ブラウザなしでフォールバック動作をテストできる。

use crate::types::{AnalysisMode, AnalysisResult};
use std::future::Future;

/// 進捗チェックポイント（固定値。実際のサブタスク完了とは連動しない）
pub mod progress {
    pub const LOCAL_START: u8 = 30;
    pub const LOCAL_CLASSIFY: u8 = 50;
    pub const LOCAL_FINISH: u8 = 80;
    pub const REMOTE_UPLOAD: u8 = 40;
    pub const REMOTE_CALL: u8 = 60;
    pub const REMOTE_FINISH: u8 = 80;
}

/// 解析の実行結果（どの経路で得られたか）
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    /// ローカル解析
    Local(AnalysisResult),
    /// API解析
    Remote(AnalysisResult),
    /// API失敗後のローカルフォールバック
    Fallback(AnalysisResult),
}

impl AnalysisOutcome {
    pub fn result(&self) -> &AnalysisResult {
        match self {
            AnalysisOutcome::Local(r)
            | AnalysisOutcome::Remote(r)
            | AnalysisOutcome::Fallback(r) => r,
        }
    }

    pub fn into_result(self) -> AnalysisResult {
        match self {
            AnalysisOutcome::Local(r)
            | AnalysisOutcome::Remote(r)
            | AnalysisOutcome::Fallback(r) => r,
        }
    }

    /// フォールバック経由か（呼び出し側で警告通知を出す判定に使用）
    pub fn is_fallback(&self) -> bool {
        matches!(self, AnalysisOutcome::Fallback(_))
    }
}

/// 解析を実行
///
/// # Arguments
/// * `mode` - 解析モード
/// * `local` - ローカル解析（フォールバックで再利用されるためFn）
/// * `remote` - API解析
/// * `on_progress` - 進捗コールバック (percent, message)
pub async fn run_analysis<L, FL, R, FR, P>(
    mode: AnalysisMode,
    local: L,
    remote: R,
    mut on_progress: P,
) -> Result<AnalysisOutcome, String>
where
    L: Fn() -> FL,
    FL: Future<Output = Result<AnalysisResult, String>>,
    R: FnOnce() -> FR,
    FR: Future<Output = Result<AnalysisResult, String>>,
    P: FnMut(u8, &str),
{
    match mode {
        AnalysisMode::Local => {
            on_progress(progress::LOCAL_START, "AIモデルを準備中...");
            on_progress(progress::LOCAL_CLASSIFY, "物体を認識中...");
            let result = local().await?;
            on_progress(progress::LOCAL_FINISH, "結果を処理中...");
            Ok(AnalysisOutcome::Local(result))
        }
        AnalysisMode::Api => {
            on_progress(progress::REMOTE_UPLOAD, "画像をアップロード中...");
            on_progress(progress::REMOTE_CALL, "解析APIを呼び出し中...");
            match remote().await {
                Ok(result) => {
                    on_progress(progress::REMOTE_FINISH, "結果を処理中...");
                    Ok(AnalysisOutcome::Remote(result))
                }
                Err(_) => {
                    // API失敗時は同じ画像をローカル解析でやり直す
                    on_progress(progress::LOCAL_CLASSIFY, "物体を認識中...");
                    let result = local().await?;
                    on_progress(progress::LOCAL_FINISH, "結果を処理中...");
                    Ok(AnalysisOutcome::Fallback(result))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DetectedObject;
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn sample_result(name: &str) -> AnalysisResult {
        AnalysisResult {
            objects: vec![DetectedObject::new(name, 90)],
            detected_count: 1,
            ..Default::default()
        }
    }

    #[test]
    fn test_local_mode_runs_local() {
        let outcome = block_on(run_analysis(
            AnalysisMode::Local,
            || async { Ok(sample_result("local")) },
            || async { panic!("ローカルモードでAPIは呼ばれない") },
            |_, _| {},
        ))
        .expect("解析失敗");

        assert_eq!(outcome, AnalysisOutcome::Local(sample_result("local")));
        assert!(!outcome.is_fallback());
    }

    #[test]
    fn test_api_mode_runs_remote() {
        let outcome = block_on(run_analysis(
            AnalysisMode::Api,
            || async { panic!("API成功時にローカルは呼ばれない") },
            || async { Ok(sample_result("remote")) },
            |_, _| {},
        ))
        .expect("解析失敗");

        assert_eq!(outcome, AnalysisOutcome::Remote(sample_result("remote")));
    }

    #[test]
    fn test_api_failure_falls_back_to_local() {
        let local_calls = RefCell::new(0);

        let outcome = block_on(run_analysis(
            AnalysisMode::Api,
            || {
                *local_calls.borrow_mut() += 1;
                async { Ok(sample_result("fallback")) }
            },
            || async { Err("network error".to_string()) },
            |_, _| {},
        ))
        .expect("フォールバックで成功するはず");

        assert!(outcome.is_fallback());
        assert_eq!(outcome.result().objects[0].name, "fallback");
        // フォールバックは1回のみ
        assert_eq!(*local_calls.borrow(), 1);
    }

    #[test]
    fn test_api_failure_then_local_failure_is_error() {
        let result = block_on(run_analysis(
            AnalysisMode::Api,
            || async { Err("モデル未ロード".to_string()) },
            || async { Err("network error".to_string()) },
            |_, _| {},
        ));

        assert_eq!(result, Err("モデル未ロード".to_string()));
    }

    #[test]
    fn test_local_progress_checkpoints() {
        let checkpoints = RefCell::new(Vec::new());

        block_on(run_analysis(
            AnalysisMode::Local,
            || async { Ok(sample_result("local")) },
            || async { Err("unused".to_string()) },
            |percent, _| checkpoints.borrow_mut().push(percent),
        ))
        .expect("解析失敗");

        assert_eq!(*checkpoints.borrow(), vec![30, 50, 80]);
    }

    #[test]
    fn test_remote_progress_checkpoints() {
        let checkpoints = RefCell::new(Vec::new());

        block_on(run_analysis(
            AnalysisMode::Api,
            || async { Ok(sample_result("unused")) },
            || async { Ok(sample_result("remote")) },
            |percent, _| checkpoints.borrow_mut().push(percent),
        ))
        .expect("解析失敗");

        assert_eq!(*checkpoints.borrow(), vec![40, 60, 80]);
    }

    #[test]
    fn test_outcome_into_result() {
        let outcome = AnalysisOutcome::Fallback(sample_result("x"));
        assert_eq!(outcome.into_result().objects[0].name, "x");
    }
}
