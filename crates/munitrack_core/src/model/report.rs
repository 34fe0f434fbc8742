//! Financial reporting records.

use crate::model::record::{RecordId, ResourceRecord};
use serde::{Deserialize, Serialize};

/// One line of a periodic financial statement.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialStatement {
    pub id: RecordId,
    /// Reporting period, e.g. `2026-06`.
    pub period: String,
    pub fund_id: RecordId,
    pub account_code: String,
    pub account_title: String,
    pub debit: f64,
    pub credit: f64,
}

impl ResourceRecord for FinancialStatement {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

/// Posted general ledger entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralLedgerEntry {
    pub id: RecordId,
    pub entry_date: String,
    pub account_code: String,
    pub account_title: String,
    pub fund_id: RecordId,
    pub debit: f64,
    pub credit: f64,
    /// Source document reference (voucher, official receipt).
    pub reference: String,
}

impl ResourceRecord for GeneralLedgerEntry {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

/// Side-by-side comparison of one account across two reporting periods.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatementComparison {
    pub id: RecordId,
    pub period_a: String,
    pub period_b: String,
    pub account_code: String,
    pub account_title: String,
    pub amount_a: f64,
    pub amount_b: f64,
    pub variance: f64,
}

impl ResourceRecord for StatementComparison {
    fn record_id(&self) -> RecordId {
        self.id
    }
}
