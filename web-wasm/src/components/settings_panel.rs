//! 設定パネルコンポーネント（Gemini APIキー）

use leptos::prelude::*;

#[component]
pub fn SettingsPanel<FS, FC>(
    api_key: ReadSignal<String>,
    set_api_key: WriteSignal<String>,
    api_key_status: ReadSignal<String>,
    on_save_api_key: FS,
    on_clear_api_key: FC,
) -> impl IntoView
where
    FS: Fn(()) + 'static + Clone + Send + Sync,
    FC: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <details class="settings-panel">
            <summary>"ตั้งค่า Gemini API Key"</summary>
            <div class="form-group">
                <input
                    type="password"
                    id="api-key"
                    placeholder="API Key..."
                    prop:value=move || api_key.get()
                    on:input=move |ev| {
                        set_api_key.set(event_target_value(&ev));
                    }
                />
                <a
                    href="https://aistudio.google.com/app/apikey"
                    target="_blank"
                    rel="noopener noreferrer"
                    class="api-key-link"
                >
                    "รับ API Key →"
                </a>
                <div class="api-actions">
                    <button
                        class="btn btn-primary btn-small"
                        on:click={
                            let on_save_api_key = on_save_api_key.clone();
                            move |_| on_save_api_key(())
                        }
                    >
                        "บันทึก"
                    </button>
                    <button
                        class="btn btn-tertiary btn-small"
                        on:click={
                            let on_clear_api_key = on_clear_api_key.clone();
                            move |_| on_clear_api_key(())
                        }
                    >
                        "ลบ"
                    </button>
                </div>
                <div class="api-key-status">
                    {move || api_key_status.get()}
                </div>
            </div>
        </details>
    }
}
