//! # Common Error Types
//!
//! Consolidated error handling for the client SDK.
//!
//! Errors are categorized by where they originate:
//!
//! - **Transport**: the network call itself failed (offline, DNS, timeout);
//!   no response body exists to parse
//! - **Api**: the backend responded with a non-success status; the message is
//!   taken from the response envelope's `error`/`message` fields
//! - **Unauthorized**: the 401 case, split out so the session layer can
//!   recognize an expired or rejected token structurally
//! - **Validation**: a 400 validation failure, with field-level messages
//!   parsed out of the backend's validator strings on a best-effort basis

use shared::ErrorBody;
use thiserror::Error;

/// A single field-level validation message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Snake-case field name, e.g. `email`.
    pub field: String,
    /// Human-readable message for that field.
    pub message: String,
}

/// Error type for every operation in this crate.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The HTTP exchange never completed: offline, DNS failure, refused
    /// connection, or timeout. Not retried automatically.
    #[error("network unreachable: {0}")]
    Transport(String),

    /// The backend responded with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The backend rejected the session token (HTTP 401).
    #[error("{0}")]
    Unauthorized(String),

    /// The backend rejected the request body (HTTP 400, validation failure).
    ///
    /// `errors` holds per-field messages when the backend text was parseable;
    /// otherwise it is empty and `message` carries the raw form-level text.
    #[error("{message}")]
    Validation {
        errors: Vec<FieldError>,
        message: String,
    },
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Build an error from a non-success response body.
    ///
    /// The HTTP status is authoritative; the envelope fields only supply the
    /// message, falling back to a generic one when both are absent.
    pub(crate) fn from_response(status: u16, body: ErrorBody) -> Self {
        let message = if !body.error.is_empty() {
            match &body.message {
                Some(detail) if !detail.is_empty() => format!("{}: {}", body.error, detail),
                _ => body.error.clone(),
            }
        } else {
            body.message
                .clone()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "request failed".to_string())
        };

        match status {
            401 => ApiError::Unauthorized(message),
            400 if body.error == "Validation failed" => {
                let detail = body.message.unwrap_or_default();
                ApiError::Validation {
                    errors: parse_validation_errors(&detail),
                    message,
                }
            }
            _ => ApiError::Api { status, message },
        }
    }

    /// Error for a 2xx response whose envelope carried no `data` payload.
    pub(crate) fn missing_data() -> Self {
        ApiError::Api {
            status: 200,
            message: "response envelope carried no data".to_string(),
        }
    }
}

/// Parse field-level messages out of a backend validation string.
///
/// The backend emits either formatted messages ("Email must be a valid email
/// address", "FirstName is required") or raw validator output ("Key:
/// 'SignupRequest.Email' Error:Field validation for 'Email' failed on the
/// 'required' tag"). Anything unrecognized yields no entries and the caller
/// falls back to a form-level message.
pub fn parse_validation_errors(detail: &str) -> Vec<FieldError> {
    detail
        .split(['\n', ';'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .filter_map(parse_one)
        .collect()
}

fn parse_one(part: &str) -> Option<FieldError> {
    // Raw go-playground/validator output
    if let Some(rest) = part.split("Field validation for '").nth(1) {
        let field = rest.split('\'').next()?;
        return Some(FieldError {
            field: to_snake_case(field),
            message: part.to_string(),
        });
    }

    // Formatted "<Field> is ..." / "<Field> must ..." messages
    let mut words = part.split_whitespace();
    let field = words.next()?;
    let verb = words.next()?;
    if !matches!(verb, "is" | "must" | "validation") {
        return None;
    }
    if !field.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    Some(FieldError {
        field: to_snake_case(field),
        message: part.to_string(),
    })
}

fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
