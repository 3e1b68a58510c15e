//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Prompt AI - 画像解析プロンプト生成"</h1>
            <p class="subtitle">"画像をアップロードして、AI画像生成用のプロンプトを作成"</p>
        </header>
    }
}
