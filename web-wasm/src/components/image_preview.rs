//! 画像プレビューコンポーネント
//!
//! アップロード済み画像の表示と、解析開始・クリア操作。

use crate::app::UploadedImage;
use leptos::prelude::*;

#[component]
pub fn ImagePreview<FA, FC>(
    image: ReadSignal<Option<UploadedImage>>,
    is_analyzing: ReadSignal<bool>,
    on_analyze: FA,
    on_clear: FC,
) -> impl IntoView
where
    FA: Fn(()) + 'static + Clone + Send,
    FC: Fn(()) + 'static + Clone + Send,
{
    view! {
        <div class="image-preview-container">
            <img
                class="image-preview"
                src=move || image.get().map(|img| img.data_url).unwrap_or_default()
                alt=move || image.get().map(|img| img.file_name).unwrap_or_default()
            />

            <div class="preview-actions">
                <button
                    class="btn btn-primary"
                    disabled=move || is_analyzing.get()
                    on:click={
                        let on_analyze = on_analyze.clone();
                        move |_| on_analyze(())
                    }
                >
                    {move || if is_analyzing.get() { "解析中..." } else { "AIで画像を解析" }}
                </button>

                <button
                    class="btn btn-secondary"
                    disabled=move || is_analyzing.get()
                    on:click={
                        let on_clear = on_clear.clone();
                        move |_| on_clear(())
                    }
                >
                    "クリア"
                </button>
            </div>
        </div>
    }
}
