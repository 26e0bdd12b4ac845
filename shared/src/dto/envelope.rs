//! # API Response Envelope
//!
//! Every backend endpoint wraps its response in the same envelope shape.
//! Success responses carry `message` and usually `data`; failure responses
//! carry `error` and may add `message` with extra detail.

use serde::{Deserialize, Serialize};

/// The `{message, data?, error?}` shape returned by every backend endpoint.
///
/// The HTTP status is authoritative: a non-2xx response is a failure even if
/// the body happens to contain `data`. Callers never branch on the envelope
/// fields to decide success.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Error body shape used when a request fails.
///
/// Parsed from non-2xx responses regardless of the endpoint's success payload
/// type, so failures with unexpected bodies still surface their message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
