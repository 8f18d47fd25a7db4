//! アップロードエリアコンポーネント（Idle 画面）

use leptos::prelude::*;
use nutriscan_common::intake::ACCEPT_IMAGES;
use nutriscan_common::messages;
use web_sys::{DragEvent, File, HtmlInputElement};

#[component]
pub fn UploadArea<F>(notice: Option<String>, on_file_selected: F) -> impl IntoView
where
    F: Fn(File) + 'static + Clone + Send + Sync,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let on_change = {
        let on_file_selected = on_file_selected.clone();
        move |ev: web_sys::Event| {
            let input: HtmlInputElement = event_target(&ev);
            // 1枚目のみ扱う
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                on_file_selected(file);
            }
            // 同じファイルを選び直しても change が発火するように
            input.set_value("");
        }
    };

    let on_drop = {
        let on_file_selected = on_file_selected.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(file) = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0))
            {
                on_file_selected(file);
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

    view! {
        <section class="idle">
            <div class="intro">
                <h2>{messages::IDLE_HEADLINE}</h2>
                <p class="text-muted">{messages::IDLE_SUBTITLE}</p>
            </div>

            <label
                for="menu-upload"
                class=move || {
                    if is_dragover.get() { "upload-area dragover" } else { "upload-area" }
                }
                on:drop=on_drop
                on:dragover=on_dragover
                on:dragleave=on_dragleave
            >
                <div class="upload-icon">"📷"</div>
                <p class="upload-prompt">{messages::UPLOAD_PROMPT}</p>
                <p class="text-muted">{messages::UPLOAD_HINT}</p>
                <input
                    id="menu-upload"
                    type="file"
                    accept=ACCEPT_IMAGES
                    class="hidden"
                    on:change=on_change
                />
            </label>

            {notice.map(|notice| view! { <p class="notice">{notice}</p> })}

            <div class="features">
                {messages::FEATURES
                    .iter()
                    .map(|(icon, label)| {
                        view! {
                            <div class="feature">
                                <span class="feature-icon">{*icon}</span>
                                <span>{*label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
