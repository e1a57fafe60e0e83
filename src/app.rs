use leptos::prelude::*;

pub mod api;
pub mod config;
pub mod edit;
pub mod error;
pub mod gallery;
pub mod logging;
pub mod messages;
pub mod navigation;
pub mod state;
pub mod types;
pub mod upload;
pub mod utils;

#[cfg(test)]
pub mod testing;

pub mod components {
    pub mod edit_page;
    pub mod gallery_page;
    pub mod photo_card;
    pub mod upload_page;
}

use components::edit_page::EditPage;
use components::gallery_page::GalleryPage;
use components::upload_page::UploadPage;
use navigation::{BrowserNavigator, Screen};

/// Picks the screen from the current path. Moving between screens is a full
/// page navigation, so each screen starts from scratch and re-fetches.
#[component]
pub fn App() -> impl IntoView {
    let path = BrowserNavigator::current_path();
    tracing::debug!(%path, "mounting screen");
    match Screen::from_path(&path) {
        Screen::Gallery => view! { <GalleryPage /> }.into_any(),
        Screen::Upload => view! { <UploadPage /> }.into_any(),
        Screen::Edit => view! { <EditPage /> }.into_any(),
    }
}
