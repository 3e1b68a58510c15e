//! 解析モード切り替えコンポーネント
//!
//! ブラウザ内AI（ローカル）とAPIモードを切り替えるトグル。

use leptos::prelude::*;
use prompt_ai_common::AnalysisMode;

#[component]
pub fn ModeToggle<F>(mode: ReadSignal<AnalysisMode>, on_select: F) -> impl IntoView
where
    F: Fn(AnalysisMode) + 'static + Clone + Send,
{
    let button_class = move |m: AnalysisMode| {
        if mode.get() == m {
            "mode-btn active"
        } else {
            "mode-btn"
        }
    };

    view! {
        <div class="mode-toggle">
            <button
                class=move || button_class(AnalysisMode::Local)
                on:click={
                    let on_select = on_select.clone();
                    move |_| on_select(AnalysisMode::Local)
                }
            >
                "ブラウザ内AI"
            </button>
            <button
                class=move || button_class(AnalysisMode::Api)
                on:click={
                    let on_select = on_select.clone();
                    move |_| on_select(AnalysisMode::Api)
                }
            >
                "APIモード"
            </button>
            <p class="mode-description">{move || mode.get().description()}</p>
        </div>
    }
}
