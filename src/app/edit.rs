use tracing::{error, info, warn};

use crate::app::api::PhotoApi;
use crate::app::messages;
use crate::app::navigation::{Navigator, Route};
use crate::app::state::StateCell;
use crate::app::types::{Photo, PhotoUpdate};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum EditPhase {
    #[default]
    Loading,
    Loaded(Photo),
    Error(String),
    NotFound,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditState {
    pub phase: EditPhase,
    pub title: String,
    pub tags: String,
    pub saving: bool,
    pub retagging: bool,
    /// Save/retag failure shown above the loaded form.
    pub error: Option<String>,
}

impl EditState {
    pub fn photo(&self) -> Option<&Photo> {
        match &self.phase {
            EditPhase::Loaded(photo) => Some(photo),
            _ => None,
        }
    }

    fn loaded(&mut self, photo: Photo) {
        self.title = photo.title.clone();
        self.tags = photo.tags.clone();
        self.phase = EditPhase::Loaded(photo);
    }

    fn begin_save(&mut self) -> Option<(u32, PhotoUpdate)> {
        if self.saving {
            return None;
        }
        let id = self.photo()?.id;
        self.saving = true;
        self.error = None;
        Some((id, PhotoUpdate { title: self.title.clone(), tags: self.tags.clone() }))
    }

    fn begin_retag(&mut self) -> Option<u32> {
        if self.retagging {
            return None;
        }
        let id = self.photo()?.id;
        self.retagging = true;
        self.error = None;
        Some(id)
    }
}

/// Accepts only a plain decimal id from the `id` query parameter.
pub fn parse_photo_id(raw: Option<&str>) -> Option<u32> {
    raw.map(str::trim).filter(|s| !s.is_empty())?.parse().ok()
}

pub async fn load_photo<A, N, S>(api: &A, nav: &N, state: &S)
where
    A: PhotoApi + ?Sized,
    N: Navigator + ?Sized,
    S: StateCell<EditState>,
{
    let raw = nav.query_param("id");
    let Some(id) = parse_photo_id(raw.as_deref()) else {
        warn!(id = ?raw, "edit view opened without a valid photo id");
        state.update(|s| s.phase = EditPhase::NotFound);
        return;
    };
    match api.get_photo(id).await {
        Ok(photo) => {
            info!(id, "photo loaded for editing");
            state.update(|s| s.loaded(photo));
        }
        Err(e) if e.is_not_found() => {
            warn!(id, "photo does not exist");
            state.update(|s| s.phase = EditPhase::NotFound);
        }
        Err(e) => {
            error!(id, error = %e, "failed to fetch photo");
            state.update(|s| s.phase = EditPhase::Error(messages::EDIT_FETCH_FAILED.to_string()));
        }
    }
}

/// Sends the edited title and tags; the image and id are never part of the update.
pub async fn save_photo<A, N, S>(api: &A, nav: &N, state: &S) -> bool
where
    A: PhotoApi + ?Sized,
    N: Navigator + ?Sized,
    S: StateCell<EditState>,
{
    let Some((id, update)) = state.update(EditState::begin_save).flatten() else {
        return false;
    };
    let result = api.update_photo(id, update).await;
    state.update(|s| s.saving = false);
    match result {
        Ok(_) => {
            info!(id, "photo updated");
            nav.push(Route::Gallery);
            true
        }
        Err(e) => {
            error!(id, error = %e, "failed to update photo");
            state.update(|s| s.error = Some(messages::EDIT_UPDATE_FAILED.to_string()));
            false
        }
    }
}

pub async fn retag_photo<A, N, S>(api: &A, nav: &N, state: &S) -> bool
where
    A: PhotoApi + ?Sized,
    N: Navigator + ?Sized,
    S: StateCell<EditState>,
{
    let Some(id) = state.update(EditState::begin_retag).flatten() else {
        return false;
    };
    let result = api.retag_photo(id).await;
    state.update(|s| s.retagging = false);
    match result {
        Ok(retagged) => {
            info!(id, tags = %retagged.tags, "photo retagged");
            state.update(|s| s.tags = retagged.tags);
            nav.push(Route::Gallery);
            true
        }
        Err(e) => {
            error!(id, error = %e, "failed to retag photo");
            state.update(|s| s.error = Some(messages::EDIT_RETAG_FAILED.to_string()));
            false
        }
    }
}

pub fn cancel<N: Navigator + ?Sized>(nav: &N) {
    nav.back();
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use tracing_test::traced_test;

    use super::*;
    use crate::app::testing::{photo, Call, MockApi, MockNavigator, NavEvent, Op};

    type Shared = Rc<RefCell<EditState>>;

    async fn opened(api: &MockApi, nav: &MockNavigator) -> Shared {
        let state: Shared = Rc::default();
        load_photo(api, nav, &state).await;
        state
    }

    fn sample_api() -> MockApi {
        MockApi::with_photos(vec![photo(5, "sunset", "空,海"), photo(6, "cat", "猫")])
    }

    #[test]
    fn parses_ids() {
        assert_eq!(parse_photo_id(Some("5")), Some(5));
        assert_eq!(parse_photo_id(Some(" 12 ")), Some(12));
        assert_eq!(parse_photo_id(Some("")), None);
        assert_eq!(parse_photo_id(Some("abc")), None);
        assert_eq!(parse_photo_id(Some("-1")), None);
        assert_eq!(parse_photo_id(None), None);
    }

    #[tokio::test]
    async fn loads_fields_from_backend() {
        let api = sample_api();
        let state = opened(&api, &MockNavigator::with_query("id", "5")).await;
        let state = state.borrow();
        assert_eq!(state.photo().map(|p| p.id), Some(5));
        assert_eq!(state.title, "sunset");
        assert_eq!(state.tags, "空,海");
        assert_eq!(api.calls(), vec![Call::Get(5)]);
    }

    #[tokio::test]
    #[traced_test]
    async fn missing_id_is_not_found_without_request() {
        let api = sample_api();
        let state = opened(&api, &MockNavigator::default()).await;
        assert_eq!(state.borrow().phase, EditPhase::NotFound);
        assert!(api.calls().is_empty());
        assert!(logs_contain("without a valid photo id"));
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let state = opened(&sample_api(), &MockNavigator::with_query("id", "99")).await;
        assert_eq!(state.borrow().phase, EditPhase::NotFound);
    }

    #[tokio::test]
    #[traced_test]
    async fn fetch_failure_is_error() {
        let api = sample_api().fail(Op::Get);
        let state = opened(&api, &MockNavigator::with_query("id", "5")).await;
        assert_eq!(state.borrow().phase, EditPhase::Error(messages::EDIT_FETCH_FAILED.to_string()));
        assert!(logs_contain("failed to fetch photo"));
    }

    #[tokio::test]
    async fn save_sends_title_and_tags_only() {
        let api = sample_api();
        let nav = MockNavigator::with_query("id", "5");
        let state = opened(&api, &nav).await;
        {
            let mut s = state.borrow_mut();
            s.title = "夕焼け".into();
            s.tags = "空,夕日".into();
        }

        assert!(save_photo(&api, &nav, &state).await);

        assert_eq!(
            api.calls().last(),
            Some(&Call::Update(5, PhotoUpdate { title: "夕焼け".into(), tags: "空,夕日".into() }))
        );
        let stored = api.photos.borrow()[0].clone();
        assert_eq!(stored.id, 5);
        assert_eq!(stored.image, "https://blob.example/5.jpg");
        assert_eq!(stored.title, "夕焼け");
        assert_eq!(nav.events(), vec![NavEvent::Push(Route::Gallery)]);
        assert!(!state.borrow().saving);
    }

    #[tokio::test]
    #[traced_test]
    async fn failed_save_stays_loaded_with_fields() {
        let api = sample_api().fail(Op::Update);
        let nav = MockNavigator::with_query("id", "5");
        let state = opened(&api, &nav).await;
        state.borrow_mut().title = "edited".into();

        assert!(!save_photo(&api, &nav, &state).await);

        let s = state.borrow();
        assert!(matches!(s.phase, EditPhase::Loaded(_)));
        assert_eq!(s.title, "edited");
        assert_eq!(s.tags, "空,海");
        assert_eq!(s.error.as_deref(), Some(messages::EDIT_UPDATE_FAILED));
        assert!(!s.saving);
        assert!(nav.events().is_empty());
        assert!(logs_contain("failed to update photo"));
    }

    #[tokio::test]
    async fn retag_replaces_tags_and_returns_to_gallery() {
        let api = sample_api().retag_to("夕日,雲");
        let nav = MockNavigator::with_query("id", "5");
        let state = opened(&api, &nav).await;

        assert!(retag_photo(&api, &nav, &state).await);

        assert_eq!(state.borrow().tags, "夕日,雲");
        assert_eq!(api.calls().last(), Some(&Call::Retag(5)));
        assert_eq!(nav.events(), vec![NavEvent::Push(Route::Gallery)]);
    }

    #[tokio::test]
    #[traced_test]
    async fn failed_retag_keeps_previous_tags() {
        let api = sample_api().fail(Op::Retag);
        let nav = MockNavigator::with_query("id", "5");
        let state = opened(&api, &nav).await;

        assert!(!retag_photo(&api, &nav, &state).await);

        let s = state.borrow();
        assert_eq!(s.tags, "空,海");
        assert_eq!(s.error.as_deref(), Some(messages::EDIT_RETAG_FAILED));
        assert!(!s.retagging);
        assert!(matches!(s.phase, EditPhase::Loaded(_)));
        assert!(nav.events().is_empty());
        assert!(logs_contain("failed to retag photo"));
    }

    #[tokio::test]
    async fn actions_need_a_loaded_photo() {
        let api = sample_api();
        let nav = MockNavigator::default();
        let state = opened(&api, &nav).await;

        assert!(!save_photo(&api, &nav, &state).await);
        assert!(!retag_photo(&api, &nav, &state).await);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn save_and_retag_guard_only_themselves() {
        let api = sample_api().retag_to("new");
        let nav = MockNavigator::with_query("id", "5");
        let state = opened(&api, &nav).await;
        state.borrow_mut().saving = true;

        assert!(!save_photo(&api, &nav, &state).await);
        assert!(retag_photo(&api, &nav, &state).await);
        assert_eq!(api.calls(), vec![Call::Get(5), Call::Retag(5)]);
    }

    #[test]
    fn cancel_goes_back() {
        let nav = MockNavigator::default();
        cancel(&nav);
        assert_eq!(nav.events(), vec![NavEvent::Back]);
    }
}
