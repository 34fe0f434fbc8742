//! Capability resolution with per-(role, module) memoization.

use crate::model::record::RecordId;
use crate::model::role::{Role, RoleTag};
use crate::permission::capability::ModuleCapabilities;
use std::collections::HashMap;

/// Resolves the capability set for one module against the selected role.
///
/// # Contract
/// - No selected role resolves to the full grant (bootstrap bypass: the
///   server has not told us who is signed in yet).
/// - Administrator-tagged roles resolve to the full grant unconditionally.
/// - Roles without a module-access list resolve to the empty grant.
/// - Otherwise the first access entry whose module id equals the requested
///   one is returned verbatim; absent entries resolve to the empty grant.
pub fn module_capabilities(role: Option<&Role>, module_id: &str) -> ModuleCapabilities {
    let Some(role) = role else {
        return ModuleCapabilities::all();
    };
    if role.effective_tag() == RoleTag::Administrator {
        return ModuleCapabilities::all();
    }
    let Some(accesses) = role.module_accesses.as_deref() else {
        return ModuleCapabilities::none();
    };

    // First match wins when a role carries duplicate module ids.
    accesses
        .iter()
        .find(|access| access.module_id == module_id)
        .map(|access| access.capabilities)
        .unwrap_or_else(ModuleCapabilities::none)
}

/// Memoizing wrapper over [`module_capabilities`].
///
/// Lookups are cached by `(role id, module id)`. Call [`clear`] after role
/// definitions are re-fetched so a stale grant cannot survive a settings
/// change.
///
/// [`clear`]: PermissionResolver::clear
#[derive(Debug, Default)]
pub struct PermissionResolver {
    cache: HashMap<(Option<RecordId>, String), ModuleCapabilities>,
}

impl PermissionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves one capability set, serving repeats from the cache.
    pub fn resolve(&mut self, role: Option<&Role>, module_id: &str) -> ModuleCapabilities {
        let key = (role.map(|selected| selected.id), module_id.to_string());
        if let Some(cached) = self.cache.get(&key) {
            return *cached;
        }

        let capabilities = module_capabilities(role, module_id);
        self.cache.insert(key, capabilities);
        capabilities
    }

    /// Drops every cached grant.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Returns how many grants are currently cached.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}
