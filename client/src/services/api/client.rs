//! # API Client
//!
//! Main HTTP client for backend API communication. Every request in the SDK
//! funnels through [`ApiClient::execute`], which attaches the bearer token,
//! parses the response envelope, normalizes failures into
//! [`ApiError`](crate::core::ApiError), and reports them through the
//! configured [`Notifier`].

use std::sync::Arc;

use parking_lot::RwLock;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use shared::{ApiEnvelope, ErrorBody};

use crate::config::ClientConfig;
use crate::core::service::ApiService;
use crate::core::{ApiError, Result};
use crate::notify::{LogNotifier, Notifier};

/// Whether a failed request should reach the user-facing notifier.
///
/// Expected "soft" failures (the startup identity check, the best-effort
/// logout call) go through the silent path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Reporting {
    Notify,
    Silent,
}

/// HTTP client for communicating with the backend API server.
///
/// Maintains a connection pool, the session token cell, and the failure
/// notifier. The token cell is written only by the session store through
/// [`ApiService::set_session_token`].
pub struct ApiClient {
    pub(crate) http: Client,
    base_url: String,
    token: RwLock<Option<String>>,
    notifier: Arc<dyn Notifier>,
}

impl ApiClient {
    /// Create a client with default configuration (env-overridable base URL,
    /// 15 second timeout).
    pub fn new() -> Self {
        Self::with_config(ClientConfig::from_env())
    }

    /// Create a client with explicit configuration.
    pub fn with_config(config: ClientConfig) -> Self {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            base_url: config.base_url,
            token: RwLock::new(None),
            notifier: Arc::new(LogNotifier),
        }
    }

    /// Replace the failure notifier.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Full URL for an endpoint path like `/auth/login`.
    pub(crate) fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn bearer_token(&self) -> Option<String> {
        self.token.read().clone()
    }

    fn report(&self, error: &ApiError, reporting: Reporting) {
        if reporting == Reporting::Notify {
            self.notifier.notify(error);
        }
    }

    /// Send a prepared request and normalize the response.
    ///
    /// Attaches `Authorization: Bearer <token>` whenever a token is held. The
    /// HTTP status is authoritative: non-2xx responses become errors built
    /// from the envelope's `error`/`message` fields, and transport failures
    /// become [`ApiError::Transport`] without any body parsing.
    pub(crate) async fn execute<T>(
        &self,
        request: RequestBuilder,
        reporting: Reporting,
    ) -> Result<ApiEnvelope<T>>
    where
        T: DeserializeOwned,
    {
        let request = match self.bearer_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                let error = ApiError::Transport(e.to_string());
                tracing::error!(error = %e, "request transport failure");
                self.report(&error, reporting);
                return Err(error);
            }
        };

        let status = response.status();
        if status.is_success() {
            match response.json::<ApiEnvelope<T>>().await {
                Ok(envelope) => Ok(envelope),
                Err(e) => {
                    let error = ApiError::Api {
                        status: status.as_u16(),
                        message: format!("failed to parse response: {e}"),
                    };
                    tracing::error!(error = %e, "response parse failure");
                    self.report(&error, reporting);
                    Err(error)
                }
            }
        } else {
            let body = response
                .json::<ErrorBody>()
                .await
                .unwrap_or_else(|_| ErrorBody {
                    error: String::new(),
                    message: None,
                });
            let error = ApiError::from_response(status.as_u16(), body);
            tracing::warn!(status = status.as_u16(), error = %error, "request failed");
            self.report(&error, reporting);
            Err(error)
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

// Implement ApiService trait for ApiClient
#[async_trait::async_trait]
impl ApiService for ApiClient {
    fn set_session_token(&self, token: Option<String>) {
        *self.token.write() = token;
    }

    async fn login(&self, request: &shared::LoginRequest) -> Result<shared::AuthData> {
        super::auth::login(self, request).await
    }

    async fn signup(&self, request: &shared::SignupRequest) -> Result<shared::AuthData> {
        super::auth::signup(self, request).await
    }

    async fn me(&self) -> Result<shared::PublicUser> {
        super::auth::me(self).await
    }

    async fn logout(&self) -> Result<()> {
        super::auth::logout(self).await
    }

    async fn upload_profile_photo(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<shared::ProfilePhotoData> {
        super::upload::upload_profile_photo(self, file_name, bytes).await
    }

    async fn get_properties(&self) -> Result<Vec<shared::Property>> {
        super::properties::get_properties(self).await
    }

    async fn create_property(
        &self,
        request: &shared::CreatePropertyRequest,
    ) -> Result<shared::Property> {
        super::properties::create_property(self, request).await
    }

    async fn get_clients(&self) -> Result<Vec<shared::Client>> {
        super::clients::get_clients(self).await
    }

    async fn create_client(&self, request: &shared::CreateClientRequest) -> Result<shared::Client> {
        super::clients::create_client(self, request).await
    }

    async fn get_client(&self, id: &str) -> Result<shared::Client> {
        super::clients::get_client(self, id).await
    }

    async fn update_client(
        &self,
        id: &str,
        request: &shared::UpdateClientRequest,
    ) -> Result<shared::Client> {
        super::clients::update_client(self, id, request).await
    }

    async fn delete_client(&self, id: &str) -> Result<()> {
        super::clients::delete_client(self, id).await
    }

    async fn get_appointments(&self) -> Result<Vec<shared::Appointment>> {
        super::appointments::get_appointments(self).await
    }

    async fn create_appointment(
        &self,
        request: &shared::CreateAppointmentRequest,
    ) -> Result<shared::Appointment> {
        super::appointments::create_appointment(self, request).await
    }
}
