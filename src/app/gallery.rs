use tracing::{error, info};

use crate::app::api::PhotoApi;
use crate::app::messages;
use crate::app::navigation::Dialogs;
use crate::app::state::StateCell;
use crate::app::types::Photo;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum GalleryState {
    #[default]
    Loading,
    Ready { photos: Vec<Photo>, error: Option<String> },
    /// The initial fetch failed; the message replaces the whole view.
    Failed(String),
}

impl GalleryState {
    pub fn photos(&self) -> &[Photo] {
        match self {
            GalleryState::Ready { photos, .. } => photos,
            _ => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, GalleryState::Ready { photos, .. } if photos.is_empty())
    }

    pub fn banner(&self) -> Option<&str> {
        match self {
            GalleryState::Ready { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    fn remove(&mut self, id: u32) {
        if let GalleryState::Ready { photos, error } = self {
            photos.retain(|p| p.id != id);
            *error = None;
        }
    }

    fn set_banner(&mut self, message: &str) {
        if let GalleryState::Ready { error, .. } = self {
            *error = Some(message.to_string());
        }
    }
}

pub async fn load_gallery<A, S>(api: &A, state: &S)
where
    A: PhotoApi + ?Sized,
    S: StateCell<GalleryState>,
{
    let next = match api.list_photos().await {
        Ok(photos) => {
            info!(count = photos.len(), "gallery loaded");
            GalleryState::Ready { photos, error: None }
        }
        Err(e) => {
            error!(error = %e, "failed to fetch photos");
            GalleryState::Failed(messages::GALLERY_FETCH_FAILED.to_string())
        }
    };
    state.update(|s| *s = next);
}

/// Asks for confirmation, then deletes `id` on the backend and drops it from
/// the local list. Returns whether the photo was removed.
pub async fn delete_photo<A, D, S>(api: &A, dialogs: &D, state: &S, id: u32) -> bool
where
    A: PhotoApi + ?Sized,
    D: Dialogs + ?Sized,
    S: StateCell<GalleryState>,
{
    if !dialogs.confirm(messages::CONFIRM_DELETE) {
        return false;
    }
    match api.delete_photo(id).await {
        Ok(()) => {
            info!(id, "photo deleted");
            state.update(|s| s.remove(id));
            true
        }
        Err(e) => {
            error!(id, error = %e, "failed to delete photo");
            state.update(|s| s.set_banner(messages::DELETE_FAILED));
            false
        }
    }
}
