//! Civil-registry record collections.
//!
//! These resources predate the rest of the backend and keep its original
//! PascalCase wire naming, including the `ID` identifier casing.

use crate::model::record::{RecordId, ResourceRecord};
use serde::{Deserialize, Serialize};

/// Community tax certificate (cedula) issuance record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CommunityTaxCertificate {
    #[serde(rename = "ID")]
    pub id: RecordId,
    /// Serialized as `CTCNo` to match the certificate schema naming.
    #[serde(rename = "CTCNo")]
    pub ctc_no: String,
    pub date_issued: String,
    pub full_name: String,
    pub address: String,
    pub basic_tax: f64,
    pub additional_tax: f64,
    pub interest: f64,
    pub total_amount_paid: f64,
}

impl ResourceRecord for CommunityTaxCertificate {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

/// Marriage registry entry; scanned certificates ride along as multipart
/// attachments on create.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MarriageRecord {
    #[serde(rename = "ID")]
    pub id: RecordId,
    pub registry_no: String,
    pub date_of_marriage: String,
    pub husband_name: String,
    pub wife_name: String,
    pub place_of_marriage: String,
    pub solemnizing_officer: String,
    pub remarks: String,
}

impl ResourceRecord for MarriageRecord {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

/// Burial registry entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BurialRecord {
    #[serde(rename = "ID")]
    pub id: RecordId,
    pub registry_no: String,
    pub deceased_name: String,
    pub date_of_death: String,
    pub date_of_burial: String,
    pub cause_of_death: String,
    pub burial_place: String,
}

impl ResourceRecord for BurialRecord {
    fn record_id(&self) -> RecordId {
        self.id
    }
}
