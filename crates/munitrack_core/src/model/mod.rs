//! Domain records mirrored from the municipal management server.
//!
//! # Responsibility
//! - Define the canonical record shape for every remote resource family.
//! - Absorb wire-format naming drift (`id` vs `ID`) behind one identity
//!   contract so the slice engine never inspects field names.
//!
//! # Invariants
//! - Every record exposes one stable server-assigned `RecordId`.
//! - Records are opaque to the slice engine apart from that identifier.

pub mod admin;
pub mod budget;
pub mod record;
pub mod registry;
pub mod report;
pub mod role;
