//! エラー画面

use leptos::prelude::*;
use nutriscan_common::messages;

#[component]
pub fn ErrorView<F>(message: String, on_retry: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <section class="error">
            <div class="error-icon">"⚠"</div>
            <h3>{messages::ERROR_TITLE}</h3>
            <p>{message}</p>
            <button class="btn btn-primary" on:click=move |_| on_retry(())>
                {messages::RETRY}
            </button>
        </section>
    }
}
