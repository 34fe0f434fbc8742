//! Settings and project administration records.

use crate::model::record::{RecordId, ResourceRecord};
use serde::{Deserialize, Serialize};

/// Geographic unit used by registry and tax records.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub id: RecordId,
    pub name: String,
    /// Short administrative code, e.g. a barangay PSGC fragment.
    pub code: String,
    pub parent_id: Option<RecordId>,
}

impl ResourceRecord for Location {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

/// Municipal project tracked against an appropriation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub budget: f64,
    pub status: String,
}

impl ResourceRecord for Project {
    fn record_id(&self) -> RecordId {
        self.id
    }
}
