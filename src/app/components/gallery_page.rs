use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::api::HttpPhotoApi;
use crate::app::components::photo_card::PhotoCard;
use crate::app::gallery::{delete_photo, load_gallery, GalleryState};
use crate::app::messages;
use crate::app::navigation::{BrowserNavigator, Route};

#[component]
pub fn GalleryPage() -> impl IntoView {
    let state = RwSignal::new(GalleryState::Loading);

    Effect::new(move || {
        spawn_local(async move {
            let api = HttpPhotoApi::from_env();
            load_gallery(&api, &state).await;
        });
    });

    let on_delete = move |id: u32| {
        spawn_local(async move {
            let api = HttpPhotoApi::from_env();
            delete_photo(&api, &BrowserNavigator, &state, id).await;
        });
    };

    move || {
        let gallery = state.get();
        if let GalleryState::Failed(message) = &gallery {
            return view! {
                <div class="status-screen">
                    <div class="status error">{message.clone()}</div>
                </div>
            }
            .into_any();
        }
        if matches!(gallery, GalleryState::Loading) {
            return view! {
                <div class="status-screen">
                    <div class="status">{messages::GALLERY_LOADING}</div>
                </div>
            }
            .into_any();
        }
        let banner = gallery.banner().map(str::to_string);
        let body = if gallery.is_empty() {
            view! { <div class="empty-state">{messages::GALLERY_EMPTY}</div> }.into_any()
        } else {
            let photos = gallery.photos().to_vec();
            view! {
                <div class="photo-grid">
                    {photos
                        .into_iter()
                        .map(|photo| view! { <PhotoCard photo=photo on_delete=on_delete /> })
                        .collect_view()}
                </div>
            }
            .into_any()
        };
        view! {
            <div class="gallery-page">
                <div class="gallery-header">
                    <h1>{messages::GALLERY_TITLE}</h1>
                    <a class="btn btn-primary" href=Route::Upload.href()>
                        {messages::GALLERY_ADD_PHOTO}
                    </a>
                </div>
                <hr />
                {banner.map(|e| view! { <p class="error banner">{e}</p> })}
                {body}
            </div>
        }
        .into_any()
    }
}
