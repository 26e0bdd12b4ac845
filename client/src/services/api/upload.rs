//! # File Upload Endpoints
//!
//! Profile photo upload. The body is multipart form data, so no JSON
//! content-type is set; reqwest supplies the multipart boundary header.

use reqwest::multipart::{Form, Part};
use shared::ProfilePhotoData;

use super::client::{ApiClient, Reporting};
use crate::core::{ApiError, Result};

/// Upload a profile photo. The backend expects the file under the
/// `profile_photo` form field.
#[tracing::instrument(skip(client, bytes), fields(file_name = %file_name, size = bytes.len()))]
pub async fn upload_profile_photo(
    client: &ApiClient,
    file_name: &str,
    bytes: Vec<u8>,
) -> Result<ProfilePhotoData> {
    let part = Part::bytes(bytes).file_name(file_name.to_string());
    let form = Form::new().part("profile_photo", part);

    let envelope = client
        .execute::<ProfilePhotoData>(
            client
                .http
                .post(client.url("/upload/profile-photo"))
                .multipart(form),
            Reporting::Notify,
        )
        .await?;

    envelope.data.ok_or_else(ApiError::missing_data)
}
