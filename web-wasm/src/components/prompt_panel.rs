//! プロンプトパネルコンポーネント
//!
//! 生成されたプロンプトの表示・編集と、スタイル選択・再生成・
//! 最適化・コピー・保存の各操作。

use leptos::prelude::*;
use prompt_ai_common::PromptStyle;

#[component]
pub fn PromptPanel<FS, FR, FO, FC, FV>(
    prompt: ReadSignal<String>,
    set_prompt: WriteSignal<String>,
    style: ReadSignal<PromptStyle>,
    has_result: Signal<bool>,
    on_style_change: FS,
    on_regenerate: FR,
    on_optimize: FO,
    on_copy: FC,
    on_save: FV,
) -> impl IntoView
where
    FS: Fn(PromptStyle) + 'static + Clone + Send,
    FR: Fn(()) + 'static + Clone + Send,
    FO: Fn(()) + 'static + Clone + Send,
    FC: Fn(()) + 'static + Clone + Send,
    FV: Fn(()) + 'static + Clone + Send,
{
    let has_prompt = move || !prompt.get().is_empty();

    view! {
        <div class="prompt-panel">
            <h2>"生成プロンプト"</h2>

            <div class="style-selector">
                <label for="prompt-style">"スタイル: "</label>
                <select
                    id="prompt-style"
                    prop:value=move || style.get().key()
                    on:change={
                        let on_style_change = on_style_change.clone();
                        move |ev| {
                            if let Ok(s) = event_target_value(&ev).parse::<PromptStyle>() {
                                on_style_change(s);
                            }
                        }
                    }
                >
                    {PromptStyle::ALL
                        .iter()
                        .map(|s| {
                            view! { <option value=s.key()>{s.label()}</option> }
                        })
                        .collect_view()}
                </select>
            </div>

            <textarea
                class="prompt-text"
                rows="7"
                placeholder="画像を解析するとプロンプトが生成されます"
                prop:value=move || prompt.get()
                on:input=move |ev| set_prompt.set(event_target_value(&ev))
            ></textarea>

            <div class="prompt-actions">
                <button
                    class="btn btn-secondary"
                    disabled=move || !has_result.get()
                    on:click={
                        let on_regenerate = on_regenerate.clone();
                        move |_| on_regenerate(())
                    }
                >
                    "再生成"
                </button>
                <button
                    class="btn btn-secondary"
                    disabled=move || !has_prompt()
                    on:click={
                        let on_optimize = on_optimize.clone();
                        move |_| on_optimize(())
                    }
                >
                    "最適化"
                </button>
                <button
                    class="btn btn-secondary"
                    disabled=move || !has_prompt()
                    on:click={
                        let on_copy = on_copy.clone();
                        move |_| on_copy(())
                    }
                >
                    "コピー"
                </button>
                <button
                    class="btn btn-primary"
                    disabled=move || !has_prompt()
                    on:click={
                        let on_save = on_save.clone();
                        move |_| on_save(())
                    }
                >
                    "保存"
                </button>
            </div>
        </div>
    }
}
