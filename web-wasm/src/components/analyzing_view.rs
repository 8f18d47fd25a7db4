//! 解析中画面（ぼかしたプレビュー + スピナー）

use leptos::prelude::*;
use nutriscan_common::{messages, EncodedImage};

#[component]
pub fn AnalyzingView(preview: EncodedImage) -> impl IntoView {
    view! {
        <section class="analyzing">
            <div class="preview-frame">
                <img class="preview blurred" src=preview.data_url().to_string() alt="" />
                <div class="spinner"></div>
            </div>
            <h3>{messages::ANALYZING_TITLE}</h3>
            <p class="text-muted">{messages::ANALYZING_SUBTITLE}</p>
        </section>
    }
}
