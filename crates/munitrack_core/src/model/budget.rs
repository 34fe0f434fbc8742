//! Budget and fund movement records.
//!
//! # Responsibility
//! - Mirror the server's budget transfer, fund transfer and beginning
//!   balance rows.
//!
//! # Invariants
//! - Monetary amounts travel as plain JSON numbers; the server is the
//!   authority on rounding and currency.
//! - Dates travel as ISO-8601 strings formatted by the server.

use crate::model::record::{RecordId, ResourceRecord};
use serde::{Deserialize, Serialize};

/// One appropriation moved between departments within a fund.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetTransfer {
    pub id: RecordId,
    /// Human-facing transfer number assigned by the treasury office.
    pub transfer_no: String,
    pub date: String,
    pub from_department: String,
    pub to_department: String,
    pub fund_id: RecordId,
    pub amount: f64,
    /// Free-text justification shown on the printed voucher.
    pub particulars: String,
}

impl ResourceRecord for BudgetTransfer {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

/// Cash moved between funds (general, special education, trust).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FundTransfer {
    pub id: RecordId,
    pub reference_no: String,
    pub date: String,
    pub source_fund: String,
    pub destination_fund: String,
    pub amount: f64,
    pub remarks: String,
}

impl ResourceRecord for FundTransfer {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

/// Opening balance of one account at the start of a fiscal year.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BeginningBalance {
    pub id: RecordId,
    pub fiscal_year: i32,
    pub fund_id: RecordId,
    pub account_code: String,
    pub account_title: String,
    pub amount: f64,
}

impl ResourceRecord for BeginningBalance {
    fn record_id(&self) -> RecordId {
        self.id
    }
}
