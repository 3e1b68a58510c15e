//! 解析進捗バーコンポーネント

use leptos::prelude::*;

#[component]
pub fn ProgressBar(progress: ReadSignal<u8>, text: ReadSignal<String>) -> impl IntoView {
    view! {
        <div class="progress-container">
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style:width=move || format!("{}%", progress.get())
                ></div>
            </div>
            <p class="progress-text">{move || text.get()}</p>
        </div>
    }
}
