use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::app::config::ApiConfig;
use crate::app::error::ApiError;
use crate::app::types::{NewPhoto, Photo, PhotoUpdate, RetagResult};

/// Backend operations the screens depend on.
///
/// Futures are `?Send`: in the browser every request runs on the single UI thread.
#[async_trait(?Send)]
pub trait PhotoApi {
    async fn list_photos(&self) -> Result<Vec<Photo>, ApiError>;
    async fn get_photo(&self, id: u32) -> Result<Photo, ApiError>;
    /// The created record is not read back by the upload flow.
    async fn create_photo(&self, photo: NewPhoto) -> Result<(), ApiError>;
    async fn update_photo(&self, id: u32, update: PhotoUpdate) -> Result<Photo, ApiError>;
    async fn delete_photo(&self, id: u32) -> Result<(), ApiError>;
    async fn retag_photo(&self, id: u32) -> Result<RetagResult, ApiError>;
}

#[derive(Clone, Debug)]
pub struct HttpPhotoApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpPhotoApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { client: reqwest::Client::new(), config }
    }

    pub fn from_env() -> Self {
        Self::new(ApiConfig::load())
    }
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
    Err(ApiError::Status { status: status.as_u16(), body })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = check_status(response).await?;
    response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

fn upload_form(photo: NewPhoto) -> Result<Form, ApiError> {
    let NewPhoto { title, file } = photo;
    let mut part = Part::bytes(file.bytes).file_name(file.name);
    if let Some(mime) = file.mime.as_deref().filter(|m| !m.is_empty()) {
        part = part.mime_str(mime).map_err(|e| ApiError::InvalidFile(e.to_string()))?;
    }
    Ok(Form::new().part("image", part).text("title", title))
}

#[async_trait(?Send)]
impl PhotoApi for HttpPhotoApi {
    async fn list_photos(&self) -> Result<Vec<Photo>, ApiError> {
        let url = self.config.list_url();
        debug!(%url, "GET photo list");
        decode(self.client.get(&url).send().await?).await
    }

    async fn get_photo(&self, id: u32) -> Result<Photo, ApiError> {
        let url = self.config.photo_url(id);
        debug!(%url, "GET photo");
        decode(self.client.get(&url).send().await?).await
    }

    async fn create_photo(&self, photo: NewPhoto) -> Result<(), ApiError> {
        let url = self.config.create_url();
        debug!(%url, title = %photo.title, file = %photo.file.name, "POST photo");
        let form = upload_form(photo)?;
        check_status(self.client.post(&url).multipart(form).send().await?).await?;
        Ok(())
    }

    async fn update_photo(&self, id: u32, update: PhotoUpdate) -> Result<Photo, ApiError> {
        let url = self.config.photo_url(id);
        debug!(%url, "PUT photo");
        decode(self.client.put(&url).json(&update).send().await?).await
    }

    async fn delete_photo(&self, id: u32) -> Result<(), ApiError> {
        let url = self.config.photo_url(id);
        debug!(%url, "DELETE photo");
        check_status(self.client.delete(&url).send().await?).await?;
        Ok(())
    }

    async fn retag_photo(&self, id: u32) -> Result<RetagResult, ApiError> {
        let url = self.config.retag_url(id);
        debug!(%url, "POST retag");
        decode(self.client.post(&url).send().await?).await
    }
}
