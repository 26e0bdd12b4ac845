//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use crate::core::Result;
use async_trait::async_trait;
use shared::{
    Appointment, AuthData, Client, CreateAppointmentRequest, CreateClientRequest,
    CreatePropertyRequest, LoginRequest, ProfilePhotoData, Property, PublicUser, SignupRequest,
    UpdateClientRequest,
};

/// Trait covering every backend capability the SDK exposes.
///
/// [`crate::services::api::ApiClient`] is the production implementation; the
/// session store and UI layers depend on this trait so tests can substitute a
/// mock without any network.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Replace the bearer token attached to subsequent requests.
    ///
    /// Only the session store may call this; it owns the token lifecycle.
    fn set_session_token(&self, token: Option<String>);

    /// Authenticate with email and password.
    async fn login(&self, request: &LoginRequest) -> Result<AuthData>;

    /// Register a new account. The backend authenticates the user immediately.
    async fn signup(&self, request: &SignupRequest) -> Result<AuthData>;

    /// Fetch the profile behind the current token (silent on failure).
    async fn me(&self) -> Result<PublicUser>;

    /// Invalidate the server-side session (silent on failure).
    async fn logout(&self) -> Result<()>;

    /// Upload a profile photo as multipart form data.
    async fn upload_profile_photo(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<ProfilePhotoData>;

    /// List property listings visible to the current user.
    async fn get_properties(&self) -> Result<Vec<Property>>;

    /// Create a property listing.
    async fn create_property(&self, request: &CreatePropertyRequest) -> Result<Property>;

    /// List CRM clients owned by the current user.
    async fn get_clients(&self) -> Result<Vec<Client>>;

    /// Create a CRM client.
    async fn create_client(&self, request: &CreateClientRequest) -> Result<Client>;

    /// Fetch a single CRM client by id.
    async fn get_client(&self, id: &str) -> Result<Client>;

    /// Update a CRM client.
    async fn update_client(&self, id: &str, request: &UpdateClientRequest) -> Result<Client>;

    /// Delete a CRM client.
    async fn delete_client(&self, id: &str) -> Result<()>;

    /// List appointments for the current user.
    async fn get_appointments(&self) -> Result<Vec<Appointment>>;

    /// Schedule an appointment.
    async fn create_appointment(&self, request: &CreateAppointmentRequest) -> Result<Appointment>;
}
