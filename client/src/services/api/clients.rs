//! # CRM Client Endpoints
//!
//! Full CRUD surface for CRM client (lead) records.

use shared::{Client, CreateClientRequest, UpdateClientRequest};

use super::client::{ApiClient, Reporting};
use crate::core::{ApiError, Result};

/// List CRM clients owned by the current user.
pub async fn get_clients(client: &ApiClient) -> Result<Vec<Client>> {
    let envelope = client
        .execute::<Vec<Client>>(client.http.get(client.url("/clients")), Reporting::Notify)
        .await?;

    envelope.data.ok_or_else(ApiError::missing_data)
}

/// Create a new CRM client.
pub async fn create_client(client: &ApiClient, request: &CreateClientRequest) -> Result<Client> {
    let envelope = client
        .execute::<Client>(
            client.http.post(client.url("/clients")).json(request),
            Reporting::Notify,
        )
        .await?;

    envelope.data.ok_or_else(ApiError::missing_data)
}

/// Fetch a single CRM client by id.
pub async fn get_client(client: &ApiClient, id: &str) -> Result<Client> {
    let envelope = client
        .execute::<Client>(
            client.http.get(client.url(&format!("/clients/{id}"))),
            Reporting::Notify,
        )
        .await?;

    envelope.data.ok_or_else(ApiError::missing_data)
}

/// Update an existing CRM client.
pub async fn update_client(
    client: &ApiClient,
    id: &str,
    request: &UpdateClientRequest,
) -> Result<Client> {
    let envelope = client
        .execute::<Client>(
            client
                .http
                .put(client.url(&format!("/clients/{id}")))
                .json(request),
            Reporting::Notify,
        )
        .await?;

    envelope.data.ok_or_else(ApiError::missing_data)
}

/// Delete a CRM client.
pub async fn delete_client(client: &ApiClient, id: &str) -> Result<()> {
    client
        .execute::<serde_json::Value>(
            client.http.delete(client.url(&format!("/clients/{id}"))),
            Reporting::Notify,
        )
        .await?;
    Ok(())
}
