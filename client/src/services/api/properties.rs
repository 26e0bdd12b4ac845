//! # Property Listing Endpoints

use shared::{CreatePropertyRequest, Property};

use super::client::{ApiClient, Reporting};
use crate::core::{ApiError, Result};

/// List property listings visible to the current user.
pub async fn get_properties(client: &ApiClient) -> Result<Vec<Property>> {
    let envelope = client
        .execute::<Vec<Property>>(client.http.get(client.url("/properties")), Reporting::Notify)
        .await?;

    envelope.data.ok_or_else(ApiError::missing_data)
}

/// Create a new property listing.
#[tracing::instrument(skip(client, request), fields(title = %request.title))]
pub async fn create_property(
    client: &ApiClient,
    request: &CreatePropertyRequest,
) -> Result<Property> {
    let envelope = client
        .execute::<Property>(
            client.http.post(client.url("/properties")).json(request),
            Reporting::Notify,
        )
        .await?;

    envelope.data.ok_or_else(ApiError::missing_data)
}
