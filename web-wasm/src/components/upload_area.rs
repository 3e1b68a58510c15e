//! アップロードエリアコンポーネント
//!
//! クリック選択とドラッグ&ドロップに対応。バリデーションと
//! FileReaderでの読み込みは呼び出し側（app）が行う。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileReader};

#[component]
pub fn UploadArea<F>(on_file: F) -> impl IntoView
where
    F: Fn(File) + 'static + Clone + Send,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let on_drop = {
        let on_file = on_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(dt) = ev.data_transfer() {
                if let Some(files) = dt.files() {
                    if let Some(file) = files.get(0) {
                        on_file(file);
                    }
                }
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = {
        let on_file = on_file.clone();
        move |_| {
            // ファイル選択ダイアログを開く
            let document = web_sys::window().unwrap().document().unwrap();
            let input: web_sys::HtmlInputElement = document
                .create_element("input")
                .unwrap()
                .dyn_into()
                .unwrap();
            input.set_type("file");
            input.set_accept("image/*");

            let on_file = on_file.clone();
            let input_clone = input.clone();
            let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(files) = input_clone.files() {
                    if let Some(file) = files.get(0) {
                        on_file(file);
                    }
                }
            }) as Box<dyn FnMut(_)>);

            input.set_onchange(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
            input.click();
        }
    };

    view! {
        <div
            class=move || {
                if is_dragover.get() {
                    "upload-area dragover"
                } else {
                    "upload-area"
                }
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="upload-icon">"🖼️"</div>
            <p>"画像をドラッグ&ドロップ または クリックして選択"</p>
            <p class="text-muted">"対応形式: image/*（10MBまで）"</p>
        </div>
    }
}

/// ファイルをData URLとして読み込む
///
/// 読み込み完了時に (ファイル名, Data URL) をコールバックへ渡す。
pub fn read_file<F>(file: File, on_loaded: F)
where
    F: Fn(String, String) + 'static,
{
    let file_name = file.name();
    let reader = FileReader::new().unwrap();

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                on_loaded(file_name.clone(), data_url);
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&file);
}
