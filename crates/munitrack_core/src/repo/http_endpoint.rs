//! Reqwest-backed endpoint adapter.
//!
//! # Responsibility
//! - Own transport details only: route construction, bearer credential
//!   injection, multipart assembly, HTTP error mapping, JSON decoding into
//!   loosely typed values.
//! - Emit `api_request` logging events with durations per operation.
//!
//! # Invariants
//! - Success bodies that are empty or not valid JSON decode to `Null`; the
//!   slice engine decides how much shape to trust.
//! - The credential is read from the session per request, never cached.

use crate::model::record::RecordId;
use crate::repo::record_endpoint::{
    ApiError, ApiResult, Attachment, EndpointConfig, ListFilter, RecordEndpoint,
};
use crate::repo::session::Session;
use async_trait::async_trait;
use log::{error, info};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Url};
use serde_json::Value;
use std::time::{Duration, Instant};
use uuid::Uuid;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP implementation of [`RecordEndpoint`] for one resource.
pub struct HttpRecordEndpoint {
    client: Client,
    api_root: Url,
    config: EndpointConfig,
    session: Session,
}

impl HttpRecordEndpoint {
    /// Builds an endpoint with the default request timeout.
    ///
    /// # Errors
    /// - Returns `ApiError::Transport` when the HTTP client cannot be
    ///   constructed.
    pub fn new(api_root: Url, config: EndpointConfig, session: Session) -> ApiResult<Self> {
        Self::with_timeout(api_root, config, session, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Builds an endpoint with an explicit request timeout.
    ///
    /// # Errors
    /// - Returns `ApiError::Transport` when the HTTP client cannot be
    ///   constructed.
    pub fn with_timeout(
        api_root: Url,
        config: EndpointConfig,
        session: Session,
        timeout: Duration,
    ) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ApiError::transport(err.to_string()))?;
        Ok(Self {
            client,
            api_root,
            config,
            session,
        })
    }

    fn collection_url(&self) -> ApiResult<Url> {
        join_route(&self.api_root, &self.config.base_path)
    }

    fn record_url(&self, id: RecordId) -> ApiResult<Url> {
        join_route(&self.api_root, &format!("{}/{id}", self.config.base_path))
    }

    fn filter_url(&self) -> ApiResult<Url> {
        match self.config.filter_path.as_deref() {
            Some(path) => join_route(&self.api_root, path),
            None => self.collection_url(),
        }
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        // Read at request time so a sign-in refresh applies to the next
        // request without rebuilding endpoints.
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Sends one request and returns the successful body bytes.
    async fn execute(&self, operation: &'static str, request: RequestBuilder) -> ApiResult<Vec<u8>> {
        let request_id = Uuid::new_v4();
        let started_at = Instant::now();

        let outcome = self.send_and_check(request).await;
        match &outcome {
            Ok(body) => info!(
                "event=api_request module=repo resource={} op={} request_id={} status=ok duration_ms={} bytes={}",
                self.config.module_id,
                operation,
                request_id,
                started_at.elapsed().as_millis(),
                body.len()
            ),
            Err(err) => error!(
                "event=api_request module=repo resource={} op={} request_id={} status=error duration_ms={} error={}",
                self.config.module_id,
                operation,
                request_id,
                started_at.elapsed().as_millis(),
                err
            ),
        }
        outcome
    }

    async fn send_and_check(&self, request: RequestBuilder) -> ApiResult<Vec<u8>> {
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(ApiError::from_status_body(status.as_u16(), body.as_ref()));
        }
        Ok(body.to_vec())
    }
}

#[async_trait]
impl RecordEndpoint for HttpRecordEndpoint {
    async fn list(&self, filter: Option<&ListFilter>) -> ApiResult<Value> {
        let body = match filter {
            Some(filter) => {
                let url = self.filter_url()?;
                self.execute("list_filtered", self.client.post(url).json(filter))
                    .await?
            }
            None => {
                let url = self.collection_url()?;
                self.execute("list", self.client.get(url)).await?
            }
        };
        Ok(decode_body(&body))
    }

    async fn get(&self, id: RecordId) -> ApiResult<Value> {
        let url = self.record_url(id)?;
        let body = self.execute("get", self.client.get(url)).await?;
        Ok(decode_body(&body))
    }

    async fn create(&self, body: &Value, attachments: &[Attachment]) -> ApiResult<Value> {
        let url = self.collection_url()?;
        let request = if attachments.is_empty() {
            self.client.post(url).json(body)
        } else {
            self.client.post(url).multipart(multipart_form(body, attachments)?)
        };
        let response = self.execute("create", request).await?;
        Ok(decode_body(&response))
    }

    async fn update(&self, id: RecordId, body: &Value) -> ApiResult<Value> {
        let url = self.record_url(id)?;
        let response = self
            .execute("update", self.client.put(url).json(body))
            .await?;
        Ok(decode_body(&response))
    }

    async fn delete(&self, id: RecordId) -> ApiResult<()> {
        let url = self.record_url(id)?;
        self.execute("delete", self.client.delete(url)).await?;
        Ok(())
    }
}

fn join_route(api_root: &Url, path: &str) -> ApiResult<Url> {
    // Url::join treats a base without a trailing slash as a file name;
    // concatenate normalized halves instead so routes compose predictably.
    let joined = format!(
        "{}/{}",
        api_root.as_str().trim_end_matches('/'),
        path.trim_matches('/')
    );
    Url::parse(&joined)
        .map_err(|err| ApiError::invalid_request(format!("invalid route `{joined}`: {err}")))
}

fn map_transport_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::transport(format!("request timed out: {error}"))
    } else {
        ApiError::transport(error.to_string())
    }
}

fn decode_body(body: &[u8]) -> Value {
    if body.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(body).unwrap_or(Value::Null)
}

fn multipart_form(body: &Value, attachments: &[Attachment]) -> ApiResult<Form> {
    let mut form = Form::new();
    for (field, rendered) in record_form_fields(body)? {
        form = form.text(field, rendered);
    }
    for attachment in attachments {
        let part = Part::bytes(attachment.bytes.clone())
            .file_name(attachment.file_name.clone())
            .mime_str(&attachment.content_type)
            .map_err(|err| {
                ApiError::invalid_request(format!(
                    "invalid attachment content type `{}`: {err}",
                    attachment.content_type
                ))
            })?;
        form = form.part(attachment.field_name.clone(), part);
    }
    Ok(form)
}

/// Flattens a serialized record into text form fields.
///
/// Scalars post their display form; nested values post compact JSON.
fn record_form_fields(body: &Value) -> ApiResult<Vec<(String, String)>> {
    let Value::Object(map) = body else {
        return Err(ApiError::invalid_request(
            "multipart create requires an object-shaped record",
        ));
    };

    let mut fields = Vec::with_capacity(map.len());
    for (key, value) in map {
        let rendered = match value {
            Value::Null => String::new(),
            Value::String(text) => text.clone(),
            Value::Bool(flag) => flag.to_string(),
            Value::Number(number) => number.to_string(),
            nested => serde_json::to_string(nested).map_err(|err| {
                ApiError::invalid_request(format!("unencodable field `{key}`: {err}"))
            })?,
        };
        fields.push((key.clone(), rendered));
    }
    Ok(fields)
}
