//! メインアプリケーションコンポーネント
//!
//! 画面は AppState（Idle / Analyzing / Results / Error）の1つだけを表示する

use crate::api::GeminiClient;
use crate::components::{
    analyzing_view::AnalyzingView, error_view::ErrorView, header::Header,
    results_view::ResultsView, settings_panel::SettingsPanel, upload_area::UploadArea,
};
use crate::flow::{self, Screening};
use crate::{file_reader, settings_store};
use leptos::prelude::*;
use leptos::task::spawn_local;
use nutriscan_common::{AppState, MenuAnalyzer, Status};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態
    let (state, set_state) = signal(AppState::default());
    let (api_key, set_api_key) = signal(settings_store::load_api_key().unwrap_or_default());
    let (api_key_status, set_api_key_status) = signal(String::new());

    // ファイル選択ハンドラ
    let on_file_selected = move |file: web_sys::File| {
        let screening = set_state
            .try_update(|s| flow::screen_selection(s, file.size() as u64, &file.type_()))
            .unwrap_or(Screening::Busy);
        match screening {
            Screening::Accepted => {}
            Screening::Rejected(error) => {
                gloo::console::warn!(format!("file rejected: {}", error));
                return;
            }
            Screening::Busy => return,
        }

        let client = GeminiClient::new(api_key.get_untracked());
        spawn_local(async move {
            let read = file_reader::read_menu_image(file).await;
            if let Err(error) = &read {
                gloo::console::warn!(format!("file read failed: {}", error));
            }
            let Some(image) = set_state.try_update(|s| flow::begin(s, read)).flatten() else {
                return;
            };

            let outcome = client.analyze(&image).await;
            match &outcome {
                Ok(result) => gloo::console::log!(format!("menu analysis: {} items", result.len())),
                Err(error) => gloo::console::error!(format!("menu analysis failed: {}", error)),
            }

            set_state.update(|s| {
                if let Err(e) = flow::finish(s, outcome) {
                    gloo::console::warn!(e.to_string());
                }
            });
        });
    };

    // Idle に戻る（解析中は無視される）
    let on_reset = move |_: ()| {
        set_state.update(|s| {
            if let Err(e) = s.reset() {
                gloo::console::log!(e.to_string());
            }
        });
    };

    let on_save_api_key = move |_: ()| {
        match settings_store::save_api_key(&api_key.get_untracked()) {
            Ok(()) => set_api_key_status.set("บันทึกแล้ว".to_string()),
            Err(e) => set_api_key_status.set(e),
        }
    };

    let on_clear_api_key = move |_: ()| {
        settings_store::clear_api_key();
        set_api_key.set(String::new());
        set_api_key_status.set("ลบแล้ว".to_string());
    };

    view! {
        <div class="container">
            <Header state=state on_reset=on_reset />

            <main class="main">
                {move || match state.get() {
                    AppState::Idle { notice } => view! {
                        <UploadArea notice=notice on_file_selected=on_file_selected />
                    }
                    .into_any(),
                    AppState::Analyzing { preview } => view! {
                        <AnalyzingView preview=preview />
                    }
                    .into_any(),
                    AppState::Results { result } => view! {
                        <ResultsView result=result />
                    }
                    .into_any(),
                    AppState::Error { message } => view! {
                        <ErrorView message=message on_retry=on_reset />
                    }
                    .into_any(),
                }}
            </main>

            <Show when=move || state.with(|s| s.status() == Status::Idle)>
                <SettingsPanel
                    api_key=api_key
                    set_api_key=set_api_key
                    api_key_status=api_key_status
                    on_save_api_key=on_save_api_key
                    on_clear_api_key=on_clear_api_key
                />
            </Show>
        </div>
    }
}
