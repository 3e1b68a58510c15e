//! 履歴のlocalStorage永続化
//!
//! キー `promptHistory` にHistoryEntryのJSON配列を保存する。
//! 保存は常にリスト全体の置き換え。リスト操作のルール
//! （先頭追加・50件打ち切り）はprompt-ai-common側にある。

use gloo::storage::{LocalStorage, Storage};
use prompt_ai_common::HistoryEntry;

/// localStorageのキー
pub const HISTORY_KEY: &str = "promptHistory";

/// 履歴を読み込み（未保存・パース失敗時は空リスト）
pub fn load_history() -> Vec<HistoryEntry> {
    LocalStorage::get(HISTORY_KEY).unwrap_or_default()
}

/// 履歴を保存（リスト全体を置き換え）
pub fn save_history(history: &[HistoryEntry]) -> Result<(), String> {
    LocalStorage::set(HISTORY_KEY, history).map_err(|e| format!("保存失敗: {}", e))
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use prompt_ai_common::{history, push_entry};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_history_roundtrip() {
        LocalStorage::delete(HISTORY_KEY);
        assert!(load_history().is_empty());

        let mut list = Vec::new();
        push_entry(
            &mut list,
            history::new_entry("テスト", "prompt", 1, "2025/1/18", None),
        );
        save_history(&list).expect("保存失敗");

        let restored = load_history();
        assert_eq!(restored.len(), 1);
        assert_eq!(restored[0].title, "テスト");

        LocalStorage::delete(HISTORY_KEY);
    }
}
