//! # Appointment Endpoints

use shared::{Appointment, CreateAppointmentRequest};

use super::client::{ApiClient, Reporting};
use crate::core::{ApiError, Result};

/// List appointments for the current user.
pub async fn get_appointments(client: &ApiClient) -> Result<Vec<Appointment>> {
    let envelope = client
        .execute::<Vec<Appointment>>(
            client.http.get(client.url("/appointments")),
            Reporting::Notify,
        )
        .await?;

    envelope.data.ok_or_else(ApiError::missing_data)
}

/// Schedule a new appointment.
#[tracing::instrument(skip(client, request), fields(title = %request.title))]
pub async fn create_appointment(
    client: &ApiClient,
    request: &CreateAppointmentRequest,
) -> Result<Appointment> {
    let envelope = client
        .execute::<Appointment>(
            client.http.post(client.url("/appointments")).json(request),
            Reporting::Notify,
        )
        .await?;

    envelope.data.ok_or_else(ApiError::missing_data)
}
