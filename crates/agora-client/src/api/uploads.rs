//! Single-page submission uploads (archive + demo video).

use agora_types::forms::MediaFile;

use crate::client::{Auth, FormField, GatewayClient, Request};
use crate::error::ClientError;

fn file_field(name: &'static str, file: &MediaFile) -> Vec<FormField> {
    vec![FormField::File {
        name,
        file_name: file.name.clone(),
        mime: file.mime.clone(),
        data: file.data.clone().into(),
    }]
}

impl GatewayClient {
    /// `POST /upload/archive` with multipart field `archive`.
    pub async fn upload_archive(&self, archive: &MediaFile) -> Result<serde_json::Value, ClientError> {
        archive.validate_archive()?;
        let request = Request::post("/upload/archive").multipart(file_field("archive", archive)).auth(Auth::Required);
        self.call_json(request).await
    }

    /// `POST /upload/video` with multipart field `video`.
    pub async fn upload_video(&self, video: &MediaFile) -> Result<serde_json::Value, ClientError> {
        video.validate_video()?;
        let request = Request::post("/upload/video").multipart(file_field("video", video)).auth(Auth::Required);
        self.call_json(request).await
    }
}
