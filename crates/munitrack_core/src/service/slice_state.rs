//! Per-resource client state and outcome application.
//!
//! # Responsibility
//! - Hold the last server-confirmed rows, the focused record, and the
//!   in-flight/error status for one resource.
//! - Apply operation outcomes without ever leaving the rows malformed.
//!
//! # Invariants
//! - `rows` is always a well-formed sequence with unique record ids; every
//!   mutation path re-establishes this before touching the rows.
//! - A failed mutation never partially applies.

use crate::model::record::{RecordId, ResourceRecord};
use std::collections::HashSet;

/// Lifecycle status of the most recent operation on one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResourceStatus {
    /// No operation dispatched yet.
    #[default]
    Idle,
    /// An operation is in flight.
    Loading,
    /// The most recent operation applied its outcome.
    Succeeded,
    /// The most recent operation failed; see `error`.
    Failed,
}

/// Client-side reflection of one server-owned collection.
#[derive(Debug, Clone)]
pub struct SliceState<R> {
    rows: Vec<R>,
    current: Option<R>,
    status: ResourceStatus,
    error: Option<String>,
}

impl<R> Default for SliceState<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            current: None,
            status: ResourceStatus::Idle,
            error: None,
        }
    }
}

impl<R: ResourceRecord> SliceState<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows as of the last applied server response.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Record focused by the last single-record fetch, if any.
    pub fn current(&self) -> Option<&R> {
        self.current.as_ref()
    }

    pub fn status(&self) -> ResourceStatus {
        self.status
    }

    /// Message of the most recent failure, until the next operation starts.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Per-resource reset action: clears rows and error, nothing else.
    ///
    /// Status and the focused record deliberately survive a reset; the
    /// action's contract is exactly "collection and error to empty/null".
    pub fn reset(&mut self) {
        self.rows.clear();
        self.error = None;
    }

    /// Marks an operation as started.
    pub(crate) fn begin(&mut self) {
        self.status = ResourceStatus::Loading;
        self.error = None;
    }

    /// Records a failure message without touching rows or current.
    pub(crate) fn fail(&mut self, message: String) {
        self.status = ResourceStatus::Failed;
        self.error = Some(message);
    }

    /// Replaces the rows wholesale with a normalized listing.
    pub(crate) fn apply_list(&mut self, rows: Vec<R>) {
        self.rows = dedupe_by_id(rows);
        self.status = ResourceStatus::Succeeded;
    }

    /// Records a listing failure, optionally falling back to the empty
    /// placeholder instead of preserving stale rows.
    pub(crate) fn apply_list_failure(&mut self, message: String, clear_rows: bool) {
        if clear_rows {
            self.rows.clear();
        }
        self.fail(message);
    }

    /// Focuses one fetched record.
    pub(crate) fn apply_current(&mut self, record: R) {
        self.current = Some(record);
        self.status = ResourceStatus::Succeeded;
    }

    /// Adds the server's canonical created record.
    ///
    /// Appends to the end; a row already carrying the same id is replaced
    /// in place instead, re-establishing id uniqueness.
    pub(crate) fn apply_created(&mut self, record: R) {
        let id = record.record_id();
        match self.rows.iter().position(|row| row.record_id() == id) {
            Some(index) => self.rows[index] = record,
            None => self.rows.push(record),
        }
        self.status = ResourceStatus::Succeeded;
    }

    /// Replaces the matching row in place; no insert on miss.
    ///
    /// The focused record refreshes whenever its id matches, whether or not
    /// the row is present locally.
    pub(crate) fn apply_updated(&mut self, record: R) {
        let id = record.record_id();
        let refresh_current = self
            .current
            .as_ref()
            .is_some_and(|current| current.record_id() == id);

        if let Some(index) = self.rows.iter().position(|row| row.record_id() == id) {
            self.rows[index] = record.clone();
        }
        if refresh_current {
            self.current = Some(record);
        }
        self.status = ResourceStatus::Succeeded;
    }

    /// Removes the matching row (no-op when absent) and unfocuses it.
    pub(crate) fn apply_deleted(&mut self, id: RecordId) {
        self.rows.retain(|row| row.record_id() != id);
        if self
            .current
            .as_ref()
            .is_some_and(|current| current.record_id() == id)
        {
            self.current = None;
        }
        self.status = ResourceStatus::Succeeded;
    }
}

fn dedupe_by_id<R: ResourceRecord>(rows: Vec<R>) -> Vec<R> {
    let mut seen = HashSet::with_capacity(rows.len());
    rows.into_iter()
        .filter(|row| seen.insert(row.record_id()))
        .collect()
}
