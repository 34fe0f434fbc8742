//! Generic resource-slice engine.
//!
//! # Responsibility
//! - Hold per-resource client state with explicit in-flight/error status.
//! - Drive the four CRUD operations against the transport boundary and
//!   fold every outcome into that state.
//!
//! # Invariants
//! - One engine serves every resource; instantiation differs only by
//!   record type and endpoint configuration.

pub mod resource_service;
pub mod slice_state;
