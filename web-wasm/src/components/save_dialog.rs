//! 保存ダイアログコンポーネント
//!
//! プロンプト保存時にタイトルを入力するモーダル。

use leptos::prelude::*;

#[component]
pub fn SaveDialog<FC, FX>(
    open: ReadSignal<bool>,
    title: ReadSignal<String>,
    set_title: WriteSignal<String>,
    on_confirm: FC,
    on_cancel: FX,
) -> impl IntoView
where
    FC: Fn(()) + 'static + Clone + Send + Sync,
    FX: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <Show when=move || open.get()>
            <div class="dialog-overlay">
                <div class="dialog">
                    <h3>"プロンプトを保存"</h3>
                    <input
                        type="text"
                        class="dialog-input"
                        placeholder="タイトルを入力"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                    <div class="dialog-actions">
                        <button
                            class="btn btn-secondary"
                            on:click={
                                let on_cancel = on_cancel.clone();
                                move |_| on_cancel(())
                            }
                        >
                            "キャンセル"
                        </button>
                        <button
                            class="btn btn-primary"
                            on:click={
                                let on_confirm = on_confirm.clone();
                                move |_| on_confirm(())
                            }
                        >
                            "保存"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
