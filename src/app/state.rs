use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

/// Update access to a screen's state.
///
/// `update` returns `None` once the backing storage is gone, e.g. when a
/// response arrives after its screen was torn down.
pub trait StateCell<T> {
    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
