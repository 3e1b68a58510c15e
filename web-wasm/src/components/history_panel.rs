//! 履歴パネルコンポーネント
//!
//! 保存済みプロンプトの一覧。表示は新しい順に10件まで、
//! クリックで該当エントリを読み込む。

use leptos::prelude::*;
use prompt_ai_common::HistoryEntry;

/// パネルに並べる件数の上限
const MAX_VISIBLE: usize = 10;

#[component]
pub fn HistoryPanel<F>(history: ReadSignal<Vec<HistoryEntry>>, on_select: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    let visible = move || {
        history
            .get()
            .into_iter()
            .take(MAX_VISIBLE)
            .collect::<Vec<_>>()
    };

    view! {
        <div class="history-panel">
            <h2>"履歴"</h2>

            <Show
                when=move || !history.get().is_empty()
                fallback=|| {
                    view! { <p class="empty-state">"保存したプロンプトはまだありません"</p> }
                }
            >
                <ul class="history-list">
                    <For
                        each=visible
                        key=|entry| entry.id
                        children={
                            let on_select = on_select.clone();
                            move |entry: HistoryEntry| {
                                let id = entry.id.to_string();
                                let on_select = on_select.clone();
                                view! {
                                    <li
                                        class="history-item"
                                        on:click=move |_| on_select(id.clone())
                                    >
                                        <span class="history-title">{entry.title}</span>
                                        <span class="history-timestamp">{entry.timestamp}</span>
                                    </li>
                                }
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
