//! Module capability flags consulted before showing UI controls.

use serde::{Deserialize, Serialize};

/// Capability set for one module grant.
///
/// Wire field names match the server payload (`View`, `Add`, ...); flags
/// absent from a payload deserialize as `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ModuleCapabilities {
    pub view: bool,
    pub add: bool,
    pub edit: bool,
    pub delete: bool,
    pub print: bool,
    /// Approval authority reserved for the mayor's office.
    pub mayor: bool,
}

impl ModuleCapabilities {
    /// Full grant used for the super-admin bypass.
    pub const fn all() -> Self {
        Self {
            view: true,
            add: true,
            edit: true,
            delete: true,
            print: true,
            mayor: true,
        }
    }

    /// Empty grant; every capability absent.
    pub const fn none() -> Self {
        Self {
            view: false,
            add: false,
            edit: false,
            delete: false,
            print: false,
            mayor: false,
        }
    }

    /// Returns whether at least one capability is granted.
    pub fn grants_anything(&self) -> bool {
        self.view || self.add || self.edit || self.delete || self.print || self.mayor
    }
}
