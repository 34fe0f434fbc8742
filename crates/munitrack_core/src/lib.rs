//! Client-side core for the munitrack municipal management system.
//! This crate is the single source of truth for resource-slice and
//! permission-resolution invariants; the presentation layer renders its
//! state and never talks to the server directly.

pub mod format;
pub mod logging;
pub mod model;
pub mod permission;
pub mod repo;
pub mod resources;
pub mod service;

pub use format::amount_words::{amount_in_words, format_amount};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::admin::{Location, Project};
pub use model::budget::{BeginningBalance, BudgetTransfer, FundTransfer};
pub use model::record::{RecordId, ResourceRecord};
pub use model::registry::{BurialRecord, CommunityTaxCertificate, MarriageRecord};
pub use model::report::{FinancialStatement, GeneralLedgerEntry, StatementComparison};
pub use model::role::{ModuleAccess, Role, RoleTag};
pub use permission::capability::ModuleCapabilities;
pub use permission::resolver::{module_capabilities, PermissionResolver};
pub use repo::http_endpoint::HttpRecordEndpoint;
pub use repo::record_endpoint::{
    ApiError, ApiResult, Attachment, EndpointConfig, ListFilter, RecordEndpoint,
};
pub use repo::session::Session;
pub use service::resource_service::ResourceService;
pub use service::slice_state::{ResourceStatus, SliceState};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
