//! 解析結果表示コンポーネント
//!
//! 検出物体・配色・タグを一覧表示する。結果が無い間は
//! 空状態のメッセージを出す。

use leptos::prelude::*;
use prompt_ai_common::AnalysisResult;

/// タグは多すぎると読みにくいので表示は先頭10件まで
const MAX_TAGS: usize = 10;

#[component]
pub fn AnalysisResults(result: ReadSignal<Option<AnalysisResult>>) -> impl IntoView {
    view! {
        <div class="analysis-results">
            <h2>"解析結果"</h2>

            <Show
                when=move || result.get().is_some()
                fallback=|| {
                    view! {
                        <p class="empty-state">
                            "画像を解析すると、検出された物体やタグがここに表示されます"
                        </p>
                    }
                }
            >
                {move || {
                    result
                        .get()
                        .map(|r| {
                            let objects = r.objects.clone();
                            let colors = r.dominant_colors.clone();
                            let tags: Vec<String> =
                                r.tags.iter().take(MAX_TAGS).cloned().collect();

                            view! {
                                <div class="results-body">
                                    <section class="result-section">
                                        <h3>
                                            "検出された物体（"
                                            {r.detected_count}
                                            "件）"
                                        </h3>
                                        <ul class="object-list">
                                            {objects
                                                .into_iter()
                                                .map(|obj| {
                                                    view! {
                                                        <li class="object-item">
                                                            <span class="object-name">{obj.name}</span>
                                                            <span class="object-confidence">
                                                                {obj.confidence} "%"
                                                            </span>
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    </section>

                                    <section class="result-section">
                                        <h3>"主要な色"</h3>
                                        <div class="color-swatches">
                                            {colors
                                                .into_iter()
                                                .map(|color| {
                                                    view! {
                                                        <span
                                                            class="color-swatch"
                                                            style:background-color=color.clone()
                                                            title=color
                                                        ></span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </section>

                                    <section class="result-section">
                                        <h3>"タグ"</h3>
                                        <div class="tag-list">
                                            {tags
                                                .into_iter()
                                                .map(|tag| {
                                                    view! { <span class="tag">{tag}</span> }
                                                })
                                                .collect_view()}
                                        </div>
                                    </section>
                                </div>
                            }
                        })
                }}
            </Show>
        </div>
    }
}
