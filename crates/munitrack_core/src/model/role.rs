//! Role and module-access data model.
//!
//! # Responsibility
//! - Mirror the settings backend's role rows, including per-module
//!   capability grants.
//! - Carry the enumerated authorization tag that replaces the legacy
//!   display-label check for super-admin status.
//!
//! # Invariants
//! - At most one module-access entry per module id is assumed; duplicate
//!   ids resolve first-match-wins (documented tie-break, never reordered).
//! - Untagged payloads resolve their tag from the legacy description
//!   mapping so data the server sends today keeps working.

use crate::model::record::{RecordId, ResourceRecord};
use crate::permission::capability::ModuleCapabilities;
use serde::{Deserialize, Serialize};

/// Display label older payloads use to mark the super-admin role.
const LEGACY_ADMIN_DESCRIPTION: &str = "Administration";

/// Enumerated authorization tag for a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleTag {
    /// Bypasses module-access resolution with the full grant.
    Administrator,
    /// Resolves capabilities from the module-access list.
    Standard,
}

/// Capability grant for one module.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleAccess {
    #[serde(rename = "ModuleID")]
    pub module_id: String,
    #[serde(flatten)]
    pub capabilities: ModuleCapabilities,
}

/// User role as served by the settings backend.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Role {
    pub id: RecordId,
    #[serde(rename = "Description")]
    pub description: String,
    /// Enumerated tag; absent on payloads predating the field.
    #[serde(rename = "Tag")]
    pub tag: Option<RoleTag>,
    #[serde(rename = "ModuleAccesses")]
    pub module_accesses: Option<Vec<ModuleAccess>>,
}

impl Role {
    /// Returns the effective authorization tag.
    ///
    /// Payloads predating the `Tag` field mark the super-admin role only by
    /// its display label; those resolve to `Administrator` here.
    pub fn effective_tag(&self) -> RoleTag {
        match self.tag {
            Some(tag) => tag,
            None if self.description == LEGACY_ADMIN_DESCRIPTION => RoleTag::Administrator,
            None => RoleTag::Standard,
        }
    }

    /// Returns whether this role carries the super-admin bypass.
    pub fn is_administrator(&self) -> bool {
        self.effective_tag() == RoleTag::Administrator
    }
}

impl ResourceRecord for Role {
    fn record_id(&self) -> RecordId {
        self.id
    }
}
