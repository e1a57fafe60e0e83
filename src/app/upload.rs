use tracing::{error, info, warn};

use crate::app::api::PhotoApi;
use crate::app::messages;
use crate::app::navigation::{Navigator, Route};
use crate::app::state::StateCell;
use crate::app::types::{NewPhoto, SelectedFile};
use crate::app::utils::title_from_file_name;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadForm {
    pub title: String,
    pub file: Option<SelectedFile>,
    pub uploading: bool,
    pub error: Option<String>,
}

impl UploadForm {
    pub fn select_file(&mut self, file: SelectedFile) {
        self.file = Some(file);
    }

    /// Base name of the selected file, empty when nothing is selected.
    pub fn derived_title(&self) -> String {
        self.file.as_ref().map(|f| title_from_file_name(&f.name)).unwrap_or_default()
    }

    pub fn placeholder(&self) -> String {
        let derived = self.derived_title();
        if derived.is_empty() {
            messages::UPLOAD_TITLE_PLACEHOLDER.to_string()
        } else {
            derived
        }
    }

    /// The typed title, or the derived file name when the field is empty.
    /// Whitespace counts as typed and is sent as-is.
    pub fn effective_title(&self) -> String {
        if self.title.is_empty() {
            self.derived_title()
        } else {
            self.title.clone()
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.uploading && self.file.is_some()
    }

    /// Builds the upload payload and marks the form in flight. Without a file
    /// this records the validation error instead.
    fn begin_submit(&mut self) -> Option<NewPhoto> {
        if self.uploading {
            return None;
        }
        let Some(file) = self.file.clone() else {
            self.error = Some(messages::UPLOAD_NO_FILE.to_string());
            return None;
        };
        self.uploading = true;
        self.error = None;
        Some(NewPhoto { title: self.effective_title(), file })
    }
}

/// Sends the form as a multipart upload and returns to the gallery on success.
pub async fn submit_upload<A, N, S>(api: &A, nav: &N, form: &S) -> bool
where
    A: PhotoApi + ?Sized,
    N: Navigator + ?Sized,
    S: StateCell<UploadForm>,
{
    let Some(photo) = form.update(UploadForm::begin_submit).flatten() else {
        warn!("upload not submitted");
        return false;
    };
    let title = photo.title.clone();
    let result = api.create_photo(photo).await;
    form.update(|f| f.uploading = false);
    match result {
        Ok(()) => {
            info!(%title, "photo uploaded");
            nav.push(Route::Gallery);
            true
        }
        Err(e) => {
            error!(%title, error = %e, "failed to upload photo");
            form.update(|f| f.error = Some(messages::UPLOAD_FAILED.to_string()));
            false
        }
    }
}
