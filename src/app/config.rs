pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_API_BASE)
    }
}

impl ApiConfig {
    /// Base URL baked in at build time via `GALLERY_API_BASE`, else the local dev backend.
    pub fn load() -> Self {
        match option_env!("GALLERY_API_BASE") {
            Some(base) if !base.trim().is_empty() => Self::with_base_url(base),
            _ => Self::default(),
        }
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self { base_url: base_url.trim().trim_end_matches('/').to_string() }
    }

    pub fn list_url(&self) -> String {
        format!("{}/api/photos/list/", self.base_url)
    }

    pub fn create_url(&self) -> String {
        format!("{}/api/photos/", self.base_url)
    }

    pub fn photo_url(&self, id: u32) -> String {
        format!("{}/api/photos/{}/", self.base_url, id)
    }

    pub fn retag_url(&self, id: u32) -> String {
        format!("{}/api/photos/{}/retag/", self.base_url, id)
    }
}
