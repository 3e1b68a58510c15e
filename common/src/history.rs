//! 履歴リストのセマンティクス
//!
//! 保存済みプロンプトのリスト操作（先頭追加・50件打ち切り・ID検索）。
//! 永続化そのもの（localStorage読み書き）はWASM側で行い、
//! ここはプラットフォーム非依存の純粋なリスト操作のみを持つ。

use crate::types::HistoryEntry;

/// 履歴の最大保持件数
pub const HISTORY_LIMIT: usize = 50;

/// タイトル未入力時のデフォルト
pub const UNTITLED: &str = "無題のプロンプト";

/// 履歴エントリを作成
///
/// # Arguments
/// * `title` - タイトル（空白のみならデフォルトに置換）
/// * `prompt` - プロンプト本文
/// * `now_ms` - 作成時刻（ミリ秒）。IDとして使用
/// * `timestamp` - 表示用のタイムスタンプ文字列
/// * `image` - プレビュー画像のData URL
pub fn new_entry(
    title: &str,
    prompt: &str,
    now_ms: i64,
    timestamp: &str,
    image: Option<String>,
) -> HistoryEntry {
    let title = title.trim();
    HistoryEntry {
        id: now_ms,
        title: if title.is_empty() {
            UNTITLED.to_string()
        } else {
            title.to_string()
        },
        prompt: prompt.to_string(),
        timestamp: timestamp.to_string(),
        image,
    }
}

/// エントリをリスト先頭に追加し、上限を超えた分を末尾から削除
///
/// 新しい順（newest first）を維持する。超過時は最古のエントリが落ちる。
pub fn push_entry(list: &mut Vec<HistoryEntry>, entry: HistoryEntry) {
    list.insert(0, entry);
    list.truncate(HISTORY_LIMIT);
}

/// IDでエントリを検索（線形走査）
///
/// IDはDOM経由で文字列として渡ってくるため、文字列比較で照合する。
pub fn find_by_id<'a>(list: &'a [HistoryEntry], id: &str) -> Option<&'a HistoryEntry> {
    list.iter().find(|entry| entry.id.to_string() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64) -> HistoryEntry {
        HistoryEntry {
            id,
            title: format!("entry-{}", id),
            prompt: format!("prompt-{}", id),
            timestamp: "2025/1/18".to_string(),
            image: None,
        }
    }

    #[test]
    fn test_new_entry_uses_now_ms_as_id() {
        let e = new_entry("タイトル", "prompt", 1700000000000, "2025/1/18", None);
        assert_eq!(e.id, 1700000000000);
        assert_eq!(e.title, "タイトル");
    }

    #[test]
    fn test_new_entry_default_title() {
        let e = new_entry("   ", "prompt", 1, "2025/1/18", None);
        assert_eq!(e.title, UNTITLED);
    }

    #[test]
    fn test_push_entry_newest_first() {
        let mut list = Vec::new();
        push_entry(&mut list, entry(1));
        push_entry(&mut list, entry(2));
        push_entry(&mut list, entry(3));

        assert_eq!(list.len(), 3);
        assert_eq!(list[0].id, 3);
        assert_eq!(list[2].id, 1);
    }

    #[test]
    fn test_push_entry_evicts_oldest_at_limit() {
        let mut list = Vec::new();
        // 51件追加すると最古の1件が落ちて50件になる
        for i in 0..51 {
            push_entry(&mut list, entry(i));
        }

        assert_eq!(list.len(), HISTORY_LIMIT);
        // 最新が先頭
        assert_eq!(list[0].id, 50);
        // 最古（id=0）は削除済み
        assert!(list.iter().all(|e| e.id != 0));
        assert_eq!(list[HISTORY_LIMIT - 1].id, 1);
    }

    #[test]
    fn test_push_entry_ordering_preserved_after_eviction() {
        let mut list = Vec::new();
        for i in 0..60 {
            push_entry(&mut list, entry(i));
        }

        for window in list.windows(2) {
            assert!(window[0].id > window[1].id, "新しい順が維持されること");
        }
    }

    #[test]
    fn test_find_by_id_found() {
        let mut list = Vec::new();
        push_entry(&mut list, entry(100));
        push_entry(&mut list, entry(200));

        let found = find_by_id(&list, "100").expect("見つかるはず");
        assert_eq!(found.title, "entry-100");
    }

    #[test]
    fn test_find_by_id_not_found() {
        let mut list = Vec::new();
        push_entry(&mut list, entry(100));

        assert!(find_by_id(&list, "999").is_none());
        assert!(find_by_id(&list, "").is_none());
    }

    #[test]
    fn test_find_by_id_string_compare() {
        let mut list = Vec::new();
        push_entry(&mut list, entry(42));

        // 数値として等しくても文字列表現が異なれば一致しない
        assert!(find_by_id(&list, "042").is_none());
        assert!(find_by_id(&list, "42").is_some());
    }
}
