//! Concrete resource instantiations of the slice engine.
//!
//! # Responsibility
//! - Pin the stable module identifier and route configuration for every
//!   resource the application manages.
//! - Construct HTTP-backed services binding record types to endpoints.
//!
//! # Invariants
//! - Module identifiers are unique and never change once shipped; role
//!   module-access entries reference them verbatim.

use crate::model::admin::{Location, Project};
use crate::model::budget::{BeginningBalance, BudgetTransfer, FundTransfer};
use crate::model::record::ResourceRecord;
use crate::model::registry::{BurialRecord, CommunityTaxCertificate, MarriageRecord};
use crate::model::report::{FinancialStatement, GeneralLedgerEntry, StatementComparison};
use crate::model::role::Role;
use crate::repo::http_endpoint::HttpRecordEndpoint;
use crate::repo::record_endpoint::{ApiResult, EndpointConfig};
use crate::repo::session::Session;
use crate::service::resource_service::ResourceService;
use reqwest::Url;

/// Module identifier for budget transfers.
pub const MODULE_BUDGET_TRANSFERS: &str = "budget_transfers";
/// Module identifier for fund transfers.
pub const MODULE_FUND_TRANSFERS: &str = "fund_transfers";
/// Module identifier for beginning balances.
pub const MODULE_BEGINNING_BALANCES: &str = "beginning_balances";
/// Module identifier for community tax certificates.
pub const MODULE_COMMUNITY_TAX: &str = "community_tax";
/// Module identifier for the marriage registry.
pub const MODULE_MARRIAGE_RECORDS: &str = "marriage_records";
/// Module identifier for the burial registry.
pub const MODULE_BURIAL_RECORDS: &str = "burial_records";
/// Module identifier for financial statements.
pub const MODULE_FINANCIAL_STATEMENTS: &str = "financial_statements";
/// Module identifier for general ledgers.
pub const MODULE_GENERAL_LEDGERS: &str = "general_ledgers";
/// Module identifier for statement comparisons.
pub const MODULE_STATEMENT_COMPARISONS: &str = "statement_comparisons";
/// Module identifier for locations.
pub const MODULE_LOCATIONS: &str = "locations";
/// Module identifier for projects.
pub const MODULE_PROJECTS: &str = "projects";
/// Module identifier for role administration.
pub const MODULE_ROLES: &str = "roles";

const SUPPORTED_MODULE_IDS: &[&str] = &[
    MODULE_BUDGET_TRANSFERS,
    MODULE_FUND_TRANSFERS,
    MODULE_BEGINNING_BALANCES,
    MODULE_COMMUNITY_TAX,
    MODULE_MARRIAGE_RECORDS,
    MODULE_BURIAL_RECORDS,
    MODULE_FINANCIAL_STATEMENTS,
    MODULE_GENERAL_LEDGERS,
    MODULE_STATEMENT_COMPARISONS,
    MODULE_LOCATIONS,
    MODULE_PROJECTS,
    MODULE_ROLES,
];

/// Returns every module identifier the permission layer can gate on.
pub fn supported_module_ids() -> &'static [&'static str] {
    SUPPORTED_MODULE_IDS
}

/// Resource service wired to the HTTP endpoint adapter.
pub type HttpResourceService<R> = ResourceService<R, HttpRecordEndpoint>;

/// Budget transfer slice.
pub fn budget_transfers(
    api_root: &Url,
    session: &Session,
) -> ApiResult<HttpResourceService<BudgetTransfer>> {
    http_service(
        api_root,
        session,
        EndpointConfig::new(MODULE_BUDGET_TRANSFERS, "budget-transfers"),
    )
}

/// Fund transfer slice.
pub fn fund_transfers(
    api_root: &Url,
    session: &Session,
) -> ApiResult<HttpResourceService<FundTransfer>> {
    http_service(
        api_root,
        session,
        EndpointConfig::new(MODULE_FUND_TRANSFERS, "fund-transfers"),
    )
}

/// Beginning balance slice.
pub fn beginning_balances(
    api_root: &Url,
    session: &Session,
) -> ApiResult<HttpResourceService<BeginningBalance>> {
    http_service(
        api_root,
        session,
        EndpointConfig::new(MODULE_BEGINNING_BALANCES, "beginning-balances"),
    )
}

/// Community tax certificate slice; listing filters by issue date and payer.
pub fn community_tax_certificates(
    api_root: &Url,
    session: &Session,
) -> ApiResult<HttpResourceService<CommunityTaxCertificate>> {
    http_service(
        api_root,
        session,
        EndpointConfig {
            filter_path: Some("community-tax-certificates/filter".to_string()),
            ..EndpointConfig::new(MODULE_COMMUNITY_TAX, "community-tax-certificates")
        },
    )
}

/// Marriage registry slice; creates carry scanned certificates as
/// multipart attachments.
pub fn marriage_records(
    api_root: &Url,
    session: &Session,
) -> ApiResult<HttpResourceService<MarriageRecord>> {
    http_service(
        api_root,
        session,
        EndpointConfig::new(MODULE_MARRIAGE_RECORDS, "marriage-records"),
    )
}

/// Burial registry slice; creates carry scanned certificates as multipart
/// attachments.
pub fn burial_records(
    api_root: &Url,
    session: &Session,
) -> ApiResult<HttpResourceService<BurialRecord>> {
    http_service(
        api_root,
        session,
        EndpointConfig::new(MODULE_BURIAL_RECORDS, "burial-records"),
    )
}

/// Financial statement slice; report tables show the empty placeholder
/// rather than stale figures when listing fails.
pub fn financial_statements(
    api_root: &Url,
    session: &Session,
) -> ApiResult<HttpResourceService<FinancialStatement>> {
    http_service(
        api_root,
        session,
        EndpointConfig {
            filter_path: Some("financial-statements/filter".to_string()),
            clear_rows_on_list_failure: true,
            ..EndpointConfig::new(MODULE_FINANCIAL_STATEMENTS, "financial-statements")
        },
    )
}

/// General ledger slice; listing filters by account and posting period.
pub fn general_ledgers(
    api_root: &Url,
    session: &Session,
) -> ApiResult<HttpResourceService<GeneralLedgerEntry>> {
    http_service(
        api_root,
        session,
        EndpointConfig {
            filter_path: Some("general-ledgers/filter".to_string()),
            ..EndpointConfig::new(MODULE_GENERAL_LEDGERS, "general-ledgers")
        },
    )
}

/// Statement comparison slice; same placeholder fallback as statements.
pub fn statement_comparisons(
    api_root: &Url,
    session: &Session,
) -> ApiResult<HttpResourceService<StatementComparison>> {
    http_service(
        api_root,
        session,
        EndpointConfig {
            filter_path: Some("statement-comparisons/filter".to_string()),
            clear_rows_on_list_failure: true,
            ..EndpointConfig::new(MODULE_STATEMENT_COMPARISONS, "statement-comparisons")
        },
    )
}

/// Location slice.
pub fn locations(api_root: &Url, session: &Session) -> ApiResult<HttpResourceService<Location>> {
    http_service(
        api_root,
        session,
        EndpointConfig::new(MODULE_LOCATIONS, "locations"),
    )
}

/// Project slice.
pub fn projects(api_root: &Url, session: &Session) -> ApiResult<HttpResourceService<Project>> {
    http_service(
        api_root,
        session,
        EndpointConfig::new(MODULE_PROJECTS, "projects"),
    )
}

/// Role administration slice; also feeds the permission resolver.
pub fn roles(api_root: &Url, session: &Session) -> ApiResult<HttpResourceService<Role>> {
    http_service(api_root, session, EndpointConfig::new(MODULE_ROLES, "roles"))
}

fn http_service<R: ResourceRecord>(
    api_root: &Url,
    session: &Session,
    config: EndpointConfig,
) -> ApiResult<HttpResourceService<R>> {
    let endpoint = HttpRecordEndpoint::new(api_root.clone(), config.clone(), session.clone())?;
    Ok(ResourceService::new(endpoint, config))
}

#[cfg(test)]
mod tests {
    use super::supported_module_ids;
    use std::collections::HashSet;

    #[test]
    fn module_ids_are_unique_and_cover_every_resource() {
        let ids = supported_module_ids();
        let distinct: HashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), 12);
        assert_eq!(distinct.len(), ids.len());
    }
}
