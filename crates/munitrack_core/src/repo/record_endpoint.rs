//! Endpoint contract, configuration and error taxonomy for one resource.
//!
//! # Responsibility
//! - Define the four-operation REST contract every resource speaks.
//! - Map failure bodies (`{message|error}`) to one human-readable string.
//!
//! # Invariants
//! - `ApiError::message()` is exactly the string recorded on the slice
//!   `error` field; no variant leaks a raw debug representation there.

use crate::model::record::RecordId;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ApiResult<T> = Result<T, ApiError>;

/// Loosely typed filter payload posted to a resource's filter route.
///
/// Filters vary per resource (date ranges, fund ids, name fragments); the
/// server validates them, so the core leaves them as JSON.
pub type ListFilter = Value;

/// Remote-access error for resource operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never completed (connect, TLS, timeout).
    Transport { message: String },
    /// The server answered with a non-success status and an application
    /// message.
    Status { status: u16, message: String },
    /// A single-record body did not match the expected record shape.
    Decode { message: String },
    /// The request could not be built locally (route, payload, attachment).
    InvalidRequest { message: String },
}

impl ApiError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Builds the server-error variant from a non-success response,
    /// extracting the first present `{message|error}` field of the body.
    pub fn from_status_body(status: u16, body: &[u8]) -> Self {
        Self::Status {
            status,
            message: failure_message(status, body),
        }
    }

    /// Human-readable message recorded on the slice `error` field.
    pub fn message(&self) -> &str {
        match self {
            Self::Transport { message }
            | Self::Status { message, .. }
            | Self::Decode { message }
            | Self::InvalidRequest { message } => message,
        }
    }

    /// HTTP status for server-reported failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl Error for ApiError {}

/// Failure body shape the backend uses for non-2xx responses.
#[derive(Debug, Deserialize)]
struct FailureBody {
    message: Option<String>,
    error: Option<String>,
}

fn failure_message(status: u16, body: &[u8]) -> String {
    if let Ok(parsed) = serde_json::from_slice::<FailureBody>(body) {
        for candidate in [parsed.message, parsed.error] {
            if let Some(value) = candidate {
                let trimmed = value.trim();
                if !trimmed.is_empty() {
                    return trimmed.to_string();
                }
            }
        }
    }
    format!("request failed with status {status}")
}

/// Route and failure-policy configuration for one resource endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    /// Stable module identifier used in logs and permission gating.
    pub module_id: &'static str,
    /// Collection route relative to the API root, e.g. `budget-transfers`.
    pub base_path: String,
    /// POST route for filtered listing; plain listing stays on GET
    /// `base_path`. `None` posts filters to `base_path` itself.
    pub filter_path: Option<String>,
    /// Replace rows with the empty placeholder when listing fails, instead
    /// of preserving the stale rows.
    pub clear_rows_on_list_failure: bool,
}

impl EndpointConfig {
    pub fn new(module_id: &'static str, base_path: impl Into<String>) -> Self {
        Self {
            module_id,
            base_path: base_path.into(),
            filter_path: None,
            clear_rows_on_list_failure: false,
        }
    }
}

/// File submitted alongside a record create (scanned certificates).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Multipart field name the server expects, e.g. `certificate`.
    pub field_name: String,
    pub file_name: String,
    /// MIME type, e.g. `application/pdf`.
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Transport contract for one remote resource collection.
///
/// Implementations own HTTP details only. Payloads stay loosely typed so
/// the slice engine can normalize untrusted shapes itself.
#[async_trait]
pub trait RecordEndpoint {
    /// Full listing, or filtered listing when a filter payload is present.
    async fn list(&self, filter: Option<&ListFilter>) -> ApiResult<Value>;
    /// Single record by id.
    async fn get(&self, id: RecordId) -> ApiResult<Value>;
    /// Creates a record; multipart when attachments are present.
    async fn create(&self, body: &Value, attachments: &[Attachment]) -> ApiResult<Value>;
    /// Full replacement of one record addressed by id.
    async fn update(&self, id: RecordId, body: &Value) -> ApiResult<Value>;
    /// Deletes by id; success bodies are empty.
    async fn delete(&self, id: RecordId) -> ApiResult<()>;
}
