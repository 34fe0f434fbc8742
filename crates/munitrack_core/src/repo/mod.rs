//! Remote-access boundary for server-owned resource collections.
//!
//! # Responsibility
//! - Define the transport contract the slice engine dispatches against.
//! - Keep HTTP, credential and multipart details inside this boundary.
//!
//! # Invariants
//! - Transport implementations return loosely typed JSON payloads; shape
//!   trust decisions belong to the slice engine, not the transport.
//! - Every failure maps to one human-readable `ApiError` message; nothing
//!   panics past this boundary.

pub mod http_endpoint;
pub mod record_endpoint;
pub mod session;
