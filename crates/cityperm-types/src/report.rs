use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for cityperm reports.
pub const SCHEMA_REPORT_V1: &str = "cityperm.report.v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// One (distributor, location) decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Decision {
    pub code: String,
    pub city: String,
    pub province: String,
    pub country: String,
    pub permitted: bool,
}

/// All decisions for one distributor, in catalog order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DistributorReport {
    pub name: String,
    /// Number of `decisions` with `permitted == true`.
    pub permitted: u64,
    pub decisions: Vec<Decision>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReportData {
    pub locations_scanned: u64,
    pub distributors_evaluated: u64,
    pub decisions_total: u64,
    pub permitted_total: u64,
}

/// The report envelope written by `cityperm check --format json`.
///
/// `distributors` is always in configuration (submission) order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PermissionReport {
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub data: ReportData,
    pub distributors: Vec<DistributorReport>,
}

impl PermissionReport {
    pub fn distributor(&self, name: &str) -> Option<&DistributorReport> {
        self.distributors.iter().find(|d| d.name == name)
    }
}
