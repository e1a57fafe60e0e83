use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::api::HttpPhotoApi;
use crate::app::edit::{cancel, load_photo, retag_photo, save_photo, EditPhase, EditState};
use crate::app::messages;
use crate::app::navigation::BrowserNavigator;
use crate::app::types::Photo;

#[component]
pub fn EditPage() -> impl IntoView {
    let state = RwSignal::new(EditState::default());
    // Only phase changes swap the screen; typing must not re-render the form.
    let phase = Memo::new(move |_| state.with(|s| s.phase.clone()));

    Effect::new(move || {
        spawn_local(async move {
            let api = HttpPhotoApi::from_env();
            load_photo(&api, &BrowserNavigator, &state).await;
        });
    });

    move || match phase.get() {
        EditPhase::Loading => view! { <div class="status">{messages::EDIT_LOADING}</div> }.into_any(),
        EditPhase::Error(message) => view! { <div class="status error">{message}</div> }.into_any(),
        EditPhase::NotFound => view! { <div class="status">{messages::EDIT_NOT_FOUND}</div> }.into_any(),
        EditPhase::Loaded(photo) => view! { <EditForm photo=photo state=state /> }.into_any(),
    }
}

#[component]
fn EditForm(photo: Photo, state: RwSignal<EditState>) -> impl IntoView {
    let on_save = move |_: leptos::ev::MouseEvent| {
        spawn_local(async move {
            let api = HttpPhotoApi::from_env();
            save_photo(&api, &BrowserNavigator, &state).await;
        });
    };

    let on_retag = move |_: leptos::ev::MouseEvent| {
        spawn_local(async move {
            let api = HttpPhotoApi::from_env();
            retag_photo(&api, &BrowserNavigator, &state).await;
        });
    };

    view! {
        <div class="edit-page">
            <h1>{messages::EDIT_HEADING}</h1>
            <div class="edit-card">
                <div class="edit-image">
                    <img src=photo.image alt=photo.title />
                </div>
                {move || state.with(|s| s.error.clone()).map(|e| view! { <p class="error banner">{e}</p> })}
                <div class="field">
                    <label>{messages::EDIT_TITLE_LABEL}</label>
                    <input
                        type="text"
                        prop:value=move || state.with(|s| s.title.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.title = value);
                        }
                    />
                </div>
                <div class="field">
                    <label>{messages::EDIT_TAGS_LABEL}</label>
                    <input
                        type="text"
                        prop:value=move || state.with(|s| s.tags.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.tags = value);
                        }
                    />
                </div>
                <div class="edit-actions">
                    <button class="btn btn-cancel" on:click=move |_| cancel(&BrowserNavigator)>
                        {messages::EDIT_CANCEL}
                    </button>
                    <button
                        class="btn btn-primary"
                        disabled=move || state.with(|s| s.saving)
                        on:click=on_save
                    >
                        {move || if state.with(|s| s.saving) { messages::EDIT_SAVING } else { messages::EDIT_SAVE }}
                    </button>
                    <button
                        class="btn btn-retag"
                        disabled=move || state.with(|s| s.retagging)
                        on:click=on_retag
                    >
                        {move || {
                            if state.with(|s| s.retagging) {
                                messages::EDIT_RETAGGING
                            } else {
                                messages::EDIT_RETAG
                            }
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}
