//! # Authentication Endpoints
//!
//! Signup, login, the current-user lookup, and logout. Login and signup
//! failures notify the user; `me` and `logout` are expected to fail in normal
//! operation (expired token, flaky network during teardown) and stay silent.

use shared::{AuthData, LoginRequest, PublicUser, SignupRequest};

use super::client::{ApiClient, Reporting};
use crate::core::{ApiError, Result};

/// Login with email and password.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<AuthData> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let envelope = client
        .execute::<AuthData>(
            client.http.post(client.url("/auth/login")).json(request),
            Reporting::Notify,
        )
        .await?;

    tracing::info!(duration_ms = start.elapsed().as_millis(), "Login successful");
    envelope.data.ok_or_else(ApiError::missing_data)
}

/// Register a new account. On success the backend issues a token immediately;
/// there is no separate confirmation step.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn signup(client: &ApiClient, request: &SignupRequest) -> Result<AuthData> {
    let envelope = client
        .execute::<AuthData>(
            client.http.post(client.url("/auth/signup")).json(request),
            Reporting::Notify,
        )
        .await?;

    envelope.data.ok_or_else(ApiError::missing_data)
}

/// Fetch the profile behind the current token.
///
/// Used by the session store's startup check, where a rejected token is a
/// steady-state condition rather than an exceptional one.
pub async fn me(client: &ApiClient) -> Result<PublicUser> {
    let envelope = client
        .execute::<PublicUser>(client.http.get(client.url("/auth/me")), Reporting::Silent)
        .await?;

    envelope.data.ok_or_else(ApiError::missing_data)
}

/// Ask the backend to invalidate the server-side session.
///
/// Best-effort: the session store clears local state whether or not this
/// succeeds, so failures are not worth a user-facing notification.
pub async fn logout(client: &ApiClient) -> Result<()> {
    client
        .execute::<serde_json::Value>(
            client.http.post(client.url("/auth/logout")),
            Reporting::Silent,
        )
        .await?;
    Ok(())
}
