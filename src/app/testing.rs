//! In-memory stand-ins for the backend, the router and browser dialogs.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;

use crate::app::api::PhotoApi;
use crate::app::error::ApiError;
use crate::app::navigation::{Dialogs, Navigator, Route};
use crate::app::types::{NewPhoto, Photo, PhotoUpdate, RetagResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    List,
    Get,
    Create,
    Update,
    Delete,
    Retag,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    List,
    Get(u32),
    Create(NewPhoto),
    Update(u32, PhotoUpdate),
    Delete(u32),
    Retag(u32),
}

pub fn photo(id: u32, title: &str, tags: &str) -> Photo {
    Photo {
        id,
        title: title.to_string(),
        image: format!("https://blob.example/{}.jpg", id),
        tags: tags.to_string(),
        created_at: None,
    }
}

#[derive(Default)]
pub struct MockApi {
    pub photos: RefCell<Vec<Photo>>,
    pub calls: RefCell<Vec<Call>>,
    failing: RefCell<Vec<Op>>,
    retag_tags: RefCell<String>,
}

impl MockApi {
    pub fn with_photos(photos: Vec<Photo>) -> Self {
        let api = Self::default();
        *api.photos.borrow_mut() = photos;
        api
    }

    pub fn fail(self, op: Op) -> Self {
        self.failing.borrow_mut().push(op);
        self
    }

    pub fn retag_to(self, tags: &str) -> Self {
        *self.retag_tags.borrow_mut() = tags.to_string();
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn check(&self, op: Op) -> Result<(), ApiError> {
        if self.failing.borrow().contains(&op) {
            return Err(ApiError::Status { status: 500, body: format!("{:?} exploded", op) });
        }
        Ok(())
    }

    fn not_found(id: u32) -> ApiError {
        ApiError::Status { status: 404, body: format!("no photo {}", id) }
    }
}

#[async_trait(?Send)]
impl PhotoApi for MockApi {
    async fn list_photos(&self) -> Result<Vec<Photo>, ApiError> {
        self.calls.borrow_mut().push(Call::List);
        self.check(Op::List)?;
        Ok(self.photos.borrow().clone())
    }

    async fn get_photo(&self, id: u32) -> Result<Photo, ApiError> {
        self.calls.borrow_mut().push(Call::Get(id));
        self.check(Op::Get)?;
        self.photos.borrow().iter().find(|p| p.id == id).cloned().ok_or_else(|| Self::not_found(id))
    }

    async fn create_photo(&self, photo: NewPhoto) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(Call::Create(photo));
        self.check(Op::Create)
    }

    async fn update_photo(&self, id: u32, update: PhotoUpdate) -> Result<Photo, ApiError> {
        self.calls.borrow_mut().push(Call::Update(id, update.clone()));
        self.check(Op::Update)?;
        let mut photos = self.photos.borrow_mut();
        let photo = photos.iter_mut().find(|p| p.id == id).ok_or_else(|| Self::not_found(id))?;
        photo.title = update.title;
        photo.tags = update.tags;
        Ok(photo.clone())
    }

    async fn delete_photo(&self, id: u32) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(Call::Delete(id));
        self.check(Op::Delete)?;
        self.photos.borrow_mut().retain(|p| p.id != id);
        Ok(())
    }

    async fn retag_photo(&self, id: u32) -> Result<RetagResult, ApiError> {
        self.calls.borrow_mut().push(Call::Retag(id));
        self.check(Op::Retag)?;
        let tags = self.retag_tags.borrow().clone();
        if let Some(photo) = self.photos.borrow_mut().iter_mut().find(|p| p.id == id) {
            photo.tags = tags.clone();
        }
        Ok(RetagResult { tags })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavEvent {
    Push(Route),
    Back,
}

#[derive(Default)]
pub struct MockNavigator {
    pub events: RefCell<Vec<NavEvent>>,
    query: HashMap<String, String>,
}

impl MockNavigator {
    pub fn with_query(name: &str, value: &str) -> Self {
        let mut nav = Self::default();
        nav.query.insert(name.to_string(), value.to_string());
        nav
    }

    pub fn events(&self) -> Vec<NavEvent> {
        self.events.borrow().clone()
    }
}

impl Navigator for MockNavigator {
    fn push(&self, route: Route) {
        self.events.borrow_mut().push(NavEvent::Push(route));
    }

    fn back(&self) {
        self.events.borrow_mut().push(NavEvent::Back);
    }

    fn query_param(&self, name: &str) -> Option<String> {
        self.query.get(name).cloned()
    }
}

pub struct MockDialogs {
    answer: bool,
    pub prompts: RefCell<Vec<String>>,
}

impl MockDialogs {
    pub fn answering(answer: bool) -> Self {
        Self { answer, prompts: RefCell::new(Vec::new()) }
    }
}

impl Dialogs for MockDialogs {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_string());
        self.answer
    }
}
