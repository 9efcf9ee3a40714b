//! Stable DTOs and IDs used across the cityperm workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted permission report
//! - stable string IDs (schemas, tool name, match kinds)

#![forbid(unsafe_code)]

pub mod ids;
pub mod report;

pub use report::{
    Decision, DistributorReport, PermissionReport, ReportData, SCHEMA_REPORT_V1, ToolMeta,
};
