//! ヘッダーコンポーネント

use leptos::prelude::*;
use nutriscan_common::{messages, AppState, Status};

/// タイトルのクリックで Idle に戻る（解析中は無効）
#[component]
pub fn Header<F>(state: ReadSignal<AppState>, on_reset: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    let is_results = move || state.with(|s| s.status() == Status::Results);

    let on_title_click = {
        let on_reset = on_reset.clone();
        move |_| {
            if !state.with_untracked(|s| s.is_analyzing()) {
                on_reset(());
            }
        }
    };

    view! {
        <header class="header">
            <div class="brand" on:click=on_title_click>
                <span class="brand-icon">"👨‍🍳"</span>
                <h1>{messages::APP_TITLE}</h1>
            </div>
            <Show when=is_results>
                <button
                    class="btn btn-secondary btn-small"
                    on:click={
                        let on_reset = on_reset.clone();
                        move |_| on_reset(())
                    }
                >
                    {messages::SCAN_AGAIN}
                </button>
            </Show>
        </header>
    }
}
