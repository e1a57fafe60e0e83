use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::error;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlInputElement;

use crate::app::api::HttpPhotoApi;
use crate::app::messages;
use crate::app::navigation::BrowserNavigator;
use crate::app::types::SelectedFile;
use crate::app::upload::{submit_upload, UploadForm};
use crate::app::utils::format_file_size;

async fn read_file(file: web_sys::File) -> Result<SelectedFile, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let mime = file.type_();
    Ok(SelectedFile {
        name: file.name(),
        mime: (!mime.is_empty()).then_some(mime),
        bytes,
    })
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let form = RwSignal::new(UploadForm::default());

    let on_file_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        spawn_local(async move {
            match read_file(file).await {
                Ok(selected) => form.update(|f| f.select_file(selected)),
                Err(e) => {
                    error!(error = ?e, "failed to read selected file");
                    form.update(|f| f.error = Some(messages::UPLOAD_READ_FAILED.to_string()));
                }
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            let api = HttpPhotoApi::from_env();
            submit_upload(&api, &BrowserNavigator, &form).await;
        });
    };

    let selected = move || {
        form.with(|f| {
            f.file
                .as_ref()
                .map(|file| format!("{} ({})", file.name, format_file_size(file.bytes.len() as u64)))
        })
    };

    view! {
        <div class="upload-page">
            <div class="upload-card">
                <h1>{messages::UPLOAD_HEADING}</h1>
                <form on:submit=on_submit>
                    <div class="field">
                        <label for="title-input">{messages::UPLOAD_TITLE_LABEL}</label>
                        <input
                            id="title-input"
                            type="text"
                            prop:value=move || form.with(|f| f.title.clone())
                            placeholder=move || form.with(|f| f.placeholder())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.title = value);
                            }
                        />
                    </div>
                    <div class="field">
                        <label for="file-upload">{messages::UPLOAD_FILE_LABEL}</label>
                        <input id="file-upload" type="file" accept="image/*" on:change=on_file_change />
                        {move || selected().map(|s| view! { <p class="selected-file">{s}</p> })}
                    </div>
                    {move || form.with(|f| f.error.clone()).map(|e| view! { <p class="error">{e}</p> })}
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || !form.with(|f| f.can_submit())
                    >
                        {move || {
                            if form.with(|f| f.uploading) {
                                messages::UPLOAD_IN_FLIGHT
                            } else {
                                messages::UPLOAD_SUBMIT
                            }
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}
