//! メインアプリケーションコンポーネント
//!
//! アプリ全体の状態（画像・解析結果・プロンプト・履歴）を保持し、
//! 各コンポーネントへシグナルとハンドラを配る。

use leptos::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::classifier;
use crate::components::{
    analysis_results::AnalysisResults, header::Header, history_panel::HistoryPanel,
    image_preview::ImagePreview, mode_toggle::ModeToggle, notification::NotificationToast,
    progress_bar::ProgressBar, prompt_panel::PromptPanel, save_dialog::SaveDialog,
    upload_area::{read_file, UploadArea},
};
use crate::notify::{self, Notification, NotifyLevel};
use crate::storage;
use prompt_ai_common::{
    build_prompt, find_by_id, history, optimize_prompt, push_entry, run_analysis,
    validate_image_file, AnalysisMode, AnalysisResult, HistoryEntry, PromptStyle,
};

/// アップロード済み画像
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedImage {
    pub file_name: String,
    pub data_url: String,
}

/// 時刻シードの乱数生成器
fn seeded_rng() -> SmallRng {
    SmallRng::seed_from_u64(js_sys::Date::now() as u64)
}

/// 保存用のローカル時刻表示（例: "2025/1/18 14:30:00"）
fn now_locale_string() -> String {
    js_sys::Date::new_0()
        .to_locale_string("ja-JP", &JsValue::UNDEFINED)
        .into()
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態
    let (mode, set_mode) = signal(AnalysisMode::Local);
    let (image, set_image) = signal(Option::<UploadedImage>::None);
    let (is_analyzing, set_is_analyzing) = signal(false);
    let (progress, set_progress) = signal(0u8);
    let (progress_text, set_progress_text) = signal(String::new());
    let (result, set_result) = signal(Option::<AnalysisResult>::None);
    let (prompt, set_prompt) = signal(String::new());
    let (style, set_style) = signal(PromptStyle::Photorealistic);
    let (history_list, set_history_list) = signal(storage::load_history());
    let (notification, set_notification) = signal(Option::<Notification>::None);
    let (dialog_open, set_dialog_open) = signal(false);
    let (dialog_title, set_dialog_title) = signal(String::new());

    let has_result = Signal::derive(move || result.get().is_some());

    // 起動時にローカル分類モデルをロード。失敗したらAPIモードへ切り替え
    spawn_local(async move {
        if let Err(e) = classifier::load_model().await {
            gloo::console::warn!(e);
            set_mode.set(AnalysisMode::Api);
            notify::show(
                set_notification,
                "ブラウザ内AIを読み込めなかったため、APIモードに切り替えました",
                NotifyLevel::Warning,
            );
        }
    });

    // ファイル受け取り（バリデーション → Data URL読み込み）
    let on_file = move |file: web_sys::File| {
        if let Err(e) = validate_image_file(&file.type_(), file.size()) {
            notify::show(set_notification, e.to_string(), NotifyLevel::Warning);
            return;
        }

        read_file(file, move |file_name, data_url| {
            set_image.set(Some(UploadedImage {
                file_name,
                data_url,
            }));
            set_result.set(None);
            set_prompt.set(String::new());
        });
    };

    // 解析開始
    let on_analyze = move |_: ()| {
        let Some(img) = image.get_untracked() else {
            return;
        };
        if is_analyzing.get_untracked() {
            return;
        }

        set_is_analyzing.set(true);
        set_progress.set(0);
        set_progress_text.set("解析を開始...".to_string());

        let current_mode = mode.get_untracked();
        spawn_local(async move {
            let local = {
                let data_url = img.data_url.clone();
                move || {
                    let data_url = data_url.clone();
                    async move { classifier::classify(&data_url).await }
                }
            };
            let remote = {
                let data_url = img.data_url.clone();
                move || async move { api::analyze_remote(&data_url).await }
            };
            let on_progress = |percent: u8, message: &str| {
                set_progress.set(percent);
                set_progress_text.set(message.to_string());
            };

            match run_analysis(current_mode, local, remote, on_progress).await {
                Ok(outcome) => {
                    set_progress.set(100);
                    set_progress_text.set("完了".to_string());

                    if outcome.is_fallback() {
                        notify::show(
                            set_notification,
                            "APIに接続できなかったため、ブラウザ内AIで解析しました",
                            NotifyLevel::Warning,
                        );
                    }

                    let analysis = outcome.into_result();
                    if analysis.has_objects() {
                        let generated =
                            build_prompt(&analysis, style.get_untracked(), &mut seeded_rng());
                        set_prompt.set(generated);
                        notify::show(
                            set_notification,
                            "解析が完了しました",
                            NotifyLevel::Success,
                        );
                    } else {
                        notify::show(
                            set_notification,
                            "物体を検出できませんでした",
                            NotifyLevel::Warning,
                        );
                    }
                    set_result.set(Some(analysis));
                }
                Err(e) => {
                    notify::show(
                        set_notification,
                        format!("解析に失敗しました: {}", e),
                        NotifyLevel::Error,
                    );
                }
            }

            set_is_analyzing.set(false);
        });
    };

    // 画像クリア（確認ダイアログ付き）
    let on_clear = move |_: ()| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("画像と解析結果をクリアしますか？").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        set_image.set(None);
        set_result.set(None);
        set_prompt.set(String::new());
        set_progress.set(0);
    };

    // スタイル変更（結果があれば即再生成）
    let on_style_change = move |new_style: PromptStyle| {
        set_style.set(new_style);
        if let Some(analysis) = result.get_untracked().filter(|r| r.has_objects()) {
            set_prompt.set(build_prompt(&analysis, new_style, &mut seeded_rng()));
        }
    };

    // 再生成
    let on_regenerate = move |_: ()| {
        if let Some(analysis) = result.get_untracked().filter(|r| r.has_objects()) {
            set_prompt.set(build_prompt(
                &analysis,
                style.get_untracked(),
                &mut seeded_rng(),
            ));
            notify::show(
                set_notification,
                "プロンプトを再生成しました",
                NotifyLevel::Info,
            );
        }
    };

    // 最適化（フレーズを1行追記）
    let on_optimize = move |_: ()| {
        let current = prompt.get_untracked();
        if current.is_empty() {
            return;
        }
        set_prompt.set(optimize_prompt(&current, &mut seeded_rng()));
        notify::show(
            set_notification,
            "プロンプトを最適化しました",
            NotifyLevel::Info,
        );
    };

    // クリップボードへコピー
    let on_copy = move |_: ()| {
        let text = prompt.get_untracked();
        if text.is_empty() {
            return;
        }

        spawn_local(async move {
            let Some(window) = web_sys::window() else {
                return;
            };
            let promise = window.navigator().clipboard().write_text(&text);
            match wasm_bindgen_futures::JsFuture::from(promise).await {
                Ok(_) => notify::show(
                    set_notification,
                    "プロンプトをコピーしました",
                    NotifyLevel::Success,
                ),
                Err(_) => notify::show(
                    set_notification,
                    "コピーに失敗しました",
                    NotifyLevel::Error,
                ),
            }
        });
    };

    // 保存ダイアログを開く
    let on_save = move |_: ()| {
        if prompt.get_untracked().is_empty() {
            return;
        }
        set_dialog_title.set(String::new());
        set_dialog_open.set(true);
    };

    // 保存確定（先頭に追加、上限超過分は削除）
    let on_save_confirm = move |_: ()| {
        let entry = history::new_entry(
            &dialog_title.get_untracked(),
            &prompt.get_untracked(),
            js_sys::Date::now() as i64,
            &now_locale_string(),
            image.get_untracked().map(|img| img.data_url),
        );

        set_history_list.update(|list| push_entry(list, entry));
        if let Err(e) = storage::save_history(&history_list.get_untracked()) {
            notify::show(set_notification, e, NotifyLevel::Error);
        } else {
            notify::show(
                set_notification,
                "プロンプトを保存しました",
                NotifyLevel::Success,
            );
        }
        set_dialog_open.set(false);
    };

    let on_save_cancel = move |_: ()| {
        set_dialog_open.set(false);
    };

    // 履歴エントリの読み込み
    let on_history_select = move |id: String| {
        let list = history_list.get_untracked();
        if let Some(entry) = find_by_id(&list, &id) {
            set_prompt.set(entry.prompt.clone());
            if let Some(data_url) = &entry.image {
                set_image.set(Some(UploadedImage {
                    file_name: entry.title.clone(),
                    data_url: data_url.clone(),
                }));
            }
            notify::show(
                set_notification,
                format!("「{}」を読み込みました", entry.title),
                NotifyLevel::Info,
            );
        }
    };

    view! {
        <div class="container">
            <Header />

            <ModeToggle mode=mode on_select=move |m| set_mode.set(m) />

            <Show
                when=move || image.get().is_some()
                fallback=move || view! { <UploadArea on_file=on_file /> }
            >
                <ImagePreview
                    image=image
                    is_analyzing=is_analyzing
                    on_analyze=on_analyze
                    on_clear=on_clear
                />
            </Show>

            <Show when=move || is_analyzing.get()>
                <ProgressBar progress=progress text=progress_text />
            </Show>

            <div class="main-columns">
                <AnalysisResults result=result />

                <PromptPanel
                    prompt=prompt
                    set_prompt=set_prompt
                    style=style
                    has_result=has_result
                    on_style_change=on_style_change
                    on_regenerate=on_regenerate
                    on_optimize=on_optimize
                    on_copy=on_copy
                    on_save=on_save
                />
            </div>

            <HistoryPanel history=history_list on_select=on_history_select />

            <SaveDialog
                open=dialog_open
                title=dialog_title
                set_title=set_dialog_title
                on_confirm=on_save_confirm
                on_cancel=on_save_cancel
            />

            <NotificationToast notification=notification />
        </div>
    }
}
