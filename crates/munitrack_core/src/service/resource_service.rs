//! Asynchronous CRUD driver for one resource.
//!
//! # Responsibility
//! - Dispatch fetch/create/update/delete against a [`RecordEndpoint`] and
//!   fold each outcome into the resource's [`SliceState`].
//! - Normalize untrusted listing payloads before they reach the state.
//!
//! # Invariants
//! - Every operation settles the state exactly once: begin, then one
//!   success or failure application.
//! - Errors are recorded on the state *and* returned to the dispatching
//!   caller; nothing is thrown past it.
//! - Operations on one service value serialize through `&mut self`; no
//!   retry, debounce or cancellation exists. Racing the same remote
//!   resource from two services keeps the original last-response-wins
//!   behavior.

use crate::model::record::{RecordId, ResourceRecord};
use crate::repo::record_endpoint::{
    ApiError, ApiResult, Attachment, EndpointConfig, ListFilter, RecordEndpoint,
};
use crate::service::slice_state::SliceState;
use log::warn;
use serde_json::Value;

/// Use-case driver binding one record type to one endpoint configuration.
pub struct ResourceService<R: ResourceRecord, E: RecordEndpoint> {
    endpoint: E,
    config: EndpointConfig,
    state: SliceState<R>,
}

impl<R, E> ResourceService<R, E>
where
    R: ResourceRecord,
    E: RecordEndpoint,
{
    /// Creates a service using the provided endpoint implementation.
    pub fn new(endpoint: E, config: EndpointConfig) -> Self {
        Self {
            endpoint,
            config,
            state: SliceState::new(),
        }
    }

    /// Read-only snapshot of the resource state.
    pub fn state(&self) -> &SliceState<R> {
        &self.state
    }

    /// Stable module identifier of this resource.
    pub fn module_id(&self) -> &'static str {
        self.config.module_id
    }

    /// Per-resource reset action: clears rows and error.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Requests the full (optionally filtered) collection.
    ///
    /// The response replaces the rows wholesale after defensive
    /// normalization; repairs are logged, never surfaced as errors. On
    /// failure the previous rows survive unless this resource is
    /// configured to fall back to the empty placeholder.
    pub async fn fetch_all(&mut self, filter: Option<&ListFilter>) -> ApiResult<&[R]> {
        self.state.begin();
        match self.endpoint.list(filter).await {
            Ok(payload) => {
                let rows = rows_from_value::<R>(self.config.module_id, payload);
                self.state.apply_list(rows);
                Ok(self.state.rows())
            }
            Err(err) => {
                self.state.apply_list_failure(
                    err.message().to_string(),
                    self.config.clear_rows_on_list_failure,
                );
                Err(err)
            }
        }
    }

    /// Requests one record and focuses it as the current record.
    ///
    /// On failure the previously focused record is left untouched.
    pub async fn fetch_one(&mut self, id: RecordId) -> ApiResult<R> {
        self.state.begin();
        let outcome = self
            .endpoint
            .get(id)
            .await
            .and_then(record_from_value::<R>);
        match outcome {
            Ok(record) => {
                self.state.apply_current(record.clone());
                Ok(record)
            }
            Err(err) => {
                self.state.fail(err.message().to_string());
                Err(err)
            }
        }
    }

    /// Submits a new record as JSON.
    pub async fn create(&mut self, record: &R) -> ApiResult<R> {
        self.create_with_attachments(record, &[]).await
    }

    /// Submits a new record, as multipart when attachments are present.
    ///
    /// On success the server's canonical record (server-assigned id,
    /// timestamps) joins the rows, not the submitted payload.
    pub async fn create_with_attachments(
        &mut self,
        record: &R,
        attachments: &[Attachment],
    ) -> ApiResult<R> {
        self.state.begin();
        let outcome = match encode_record(record) {
            Ok(body) => self
                .endpoint
                .create(&body, attachments)
                .await
                .and_then(record_from_value::<R>),
            Err(err) => Err(err),
        };
        match outcome {
            Ok(created) => {
                self.state.apply_created(created.clone());
                Ok(created)
            }
            Err(err) => {
                self.state.fail(err.message().to_string());
                Err(err)
            }
        }
    }

    /// Submits a full replacement of one existing record.
    ///
    /// On success the matching local row is replaced in place; a record
    /// whose id is absent locally is silently dropped (no insert-on-miss).
    pub async fn update(&mut self, record: &R) -> ApiResult<R> {
        self.state.begin();
        let outcome = match encode_record(record) {
            Ok(body) => self
                .endpoint
                .update(record.record_id(), &body)
                .await
                .and_then(record_from_value::<R>),
            Err(err) => Err(err),
        };
        match outcome {
            Ok(updated) => {
                self.state.apply_updated(updated.clone());
                Ok(updated)
            }
            Err(err) => {
                self.state.fail(err.message().to_string());
                Err(err)
            }
        }
    }

    /// Requests deletion by id.
    ///
    /// No local existence check happens first; deleting an id the server
    /// already removed settles as a server-reported failure without
    /// corrupting the rows.
    pub async fn delete(&mut self, id: RecordId) -> ApiResult<()> {
        self.state.begin();
        match self.endpoint.delete(id).await {
            Ok(()) => {
                self.state.apply_deleted(id);
                Ok(())
            }
            Err(err) => {
                self.state.fail(err.message().to_string());
                Err(err)
            }
        }
    }
}

/// Coerces an untrusted listing payload into decodable rows.
///
/// Non-array payloads coerce to the empty collection; elements that do not
/// decode as the record type are skipped. Both repairs are logged.
fn rows_from_value<R: ResourceRecord>(module_id: &str, payload: Value) -> Vec<R> {
    let Value::Array(elements) = payload else {
        warn!("event=list_normalized module=service resource={module_id} reason=non_array_payload");
        return Vec::new();
    };

    let total = elements.len();
    let rows: Vec<R> = elements
        .into_iter()
        .filter_map(|element| serde_json::from_value(element).ok())
        .collect();
    if rows.len() < total {
        warn!(
            "event=list_normalized module=service resource={module_id} reason=undecodable_elements dropped={}",
            total - rows.len()
        );
    }
    rows
}

fn record_from_value<R: ResourceRecord>(payload: Value) -> ApiResult<R> {
    serde_json::from_value(payload)
        .map_err(|err| ApiError::decode(format!("record body did not match the expected shape: {err}")))
}

fn encode_record<R: ResourceRecord>(record: &R) -> ApiResult<Value> {
    serde_json::to_value(record)
        .map_err(|err| ApiError::invalid_request(format!("record could not be serialized: {err}")))
}
