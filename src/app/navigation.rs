use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Gallery,
    Upload,
    Edit(u32),
}

impl Route {
    pub fn href(&self) -> String {
        match self {
            Route::Gallery => "/gallery".to_string(),
            Route::Upload => "/upload".to_string(),
            Route::Edit(id) => format!("/edit?id={}", id),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Gallery,
    Upload,
    Edit,
}

impl Screen {
    /// Anything that isn't `/upload` or `/edit` falls back to the gallery.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/upload" => Screen::Upload,
            "/edit" => Screen::Edit,
            _ => Screen::Gallery,
        }
    }
}

pub trait Navigator {
    fn push(&self, route: Route);
    fn back(&self);
    fn query_param(&self, name: &str) -> Option<String>;
}

pub trait Dialogs {
    fn confirm(&self, message: &str) -> bool;
}

/// `window.location` / `window.history` backed navigation and `window.confirm` prompts.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl BrowserNavigator {
    pub fn current_path() -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }
}

impl Navigator for BrowserNavigator {
    fn push(&self, route: Route) {
        let Some(win) = web_sys::window() else { return };
        if let Err(e) = win.location().set_href(&route.href()) {
            warn!(?e, href = %route.href(), "navigation failed");
        }
    }

    fn back(&self) {
        let Some(win) = web_sys::window() else { return };
        match win.history() {
            Ok(history) => {
                if let Err(e) = history.back() {
                    warn!(?e, "history.back failed");
                }
            }
            Err(e) => warn!(?e, "history unavailable"),
        }
    }

    fn query_param(&self, name: &str) -> Option<String> {
        let search = web_sys::window()?.location().search().ok()?;
        web_sys::UrlSearchParams::new_with_str(&search).ok()?.get(name)
    }
}

impl Dialogs for BrowserNavigator {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
