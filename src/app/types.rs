use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: u32,
    pub title: String,
    pub image: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default, skip_serializing)]
    pub created_at: Option<String>,
}

impl Photo {
    /// Splits the comma-delimited tag string into trimmed, non-empty tags.
    pub fn tag_list(&self) -> Vec<String> {
        split_tags(&self.tags)
    }
}

pub fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Body of `PUT /api/photos/{id}/`. Only the user-editable fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhotoUpdate {
    pub title: String,
    pub tags: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RetagResult {
    pub tags: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewPhoto {
    pub title: String,
    pub file: SelectedFile,
}
