//! Record identity contract shared by every resource collection.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Server-assigned identifier for one record within a resource collection.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = i64;

/// Contract satisfied by every record the slice engine manages.
///
/// The engine treats records as opaque values with one required attribute:
/// a unique identifier. Wire payloads name that field inconsistently
/// (`id` on newer resources, `ID` on the civil-registry ones); each record
/// type resolves the drift with serde renames so callers never see it.
///
/// # Invariants
/// - `record_id` is stable for the lifetime of the record on the server.
/// - Identifiers are unique within one collection; every slice mutation
///   path re-establishes this before touching the rows.
pub trait ResourceRecord: Clone + Serialize + DeserializeOwned {
    /// Returns the server-assigned identifier.
    fn record_id(&self) -> RecordId;
}
