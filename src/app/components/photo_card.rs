use leptos::prelude::*;

use crate::app::messages;
use crate::app::navigation::Route;
use crate::app::types::Photo;

#[component]
pub fn PhotoCard(
    photo: Photo,
    on_delete: impl Fn(u32) + 'static + Copy + Send,
) -> impl IntoView {
    let id = photo.id;
    let tags = photo.tag_list();

    view! {
        <div class="photo-card">
            <img src=photo.image.clone() alt=photo.title.clone() loading="lazy" />
            <div class="photo-card-body">
                <h3 class="photo-title">{photo.title.clone()}</h3>
                <p class="photo-tags">
                    <span class="tags-label">{messages::TAGS_LABEL}": "</span>
                    {if tags.is_empty() {
                        view! { <span class="no-tags">{messages::NO_TAGS}</span> }.into_any()
                    } else {
                        tags.into_iter()
                            .map(|tag| view! { <span class="tag-badge">{tag}</span> })
                            .collect_view()
                            .into_any()
                    }}
                </p>
                <div class="card-actions">
                    <a class="btn btn-edit" href=Route::Edit(id).href()>{messages::EDIT}</a>
                    <button class="btn btn-delete" on:click=move |_| on_delete(id)>
                        {messages::DELETE}
                    </button>
                </div>
            </div>
        </div>
    }
}
