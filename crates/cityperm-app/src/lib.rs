//! Use case orchestration for cityperm.
//!
//! This crate provides the application layer: use cases that coordinate the catalog, settings,
//! domain, and render layers. It is intentionally thin and delegates heavy lifting to them.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod permit;
mod render;
mod report;

pub use check::{CheckInput, CheckOutput, run_check};
pub use permit::{PermitInput, PermitOutput, run_permit};
pub use render::{OutputFormat, render_report};
pub use report::{
    build_report, parse_report_json, report_schema_json, serialize_report, to_renderable,
};
