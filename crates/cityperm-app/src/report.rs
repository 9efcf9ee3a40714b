use anyhow::Context;
use cityperm_domain::report::DomainReport;
use cityperm_render::{RenderableBlock, RenderableData, RenderableDecision, RenderableReport};
use cityperm_types::{
    Decision, DistributorReport, PermissionReport, ReportData, SCHEMA_REPORT_V1, ToolMeta, ids,
};
use time::OffsetDateTime;

/// Wrap an aggregated domain report in the serializable envelope.
pub fn build_report(
    domain: DomainReport,
    locations_scanned: usize,
    started_at: OffsetDateTime,
    finished_at: OffsetDateTime,
) -> PermissionReport {
    let data = ReportData {
        locations_scanned: count(locations_scanned),
        distributors_evaluated: count(domain.blocks.len()),
        decisions_total: count(domain.decisions_total()),
        permitted_total: count(domain.permitted_total()),
    };

    let distributors = domain
        .blocks
        .into_iter()
        .map(|block| DistributorReport {
            permitted: count(block.permitted_count()),
            name: block.distributor,
            decisions: block
                .results
                .into_iter()
                .map(|r| Decision {
                    code: r.code,
                    city: r.city,
                    province: r.province,
                    country: r.country,
                    permitted: r.permitted,
                })
                .collect(),
        })
        .collect();

    PermissionReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: ids::TOOL_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        data,
        distributors,
    }
}

fn count(n: usize) -> u64 {
    u64::try_from(n).unwrap_or(u64::MAX)
}

/// Read a previously written JSON report back in (used by `cityperm render`).
pub fn parse_report_json(text: &str) -> anyhow::Result<PermissionReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema}");
    }

    serde_json::from_value(value).context("parse cityperm v1 report")
}

pub fn serialize_report(report: &PermissionReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

/// JSON schema of the report envelope, pretty-printed.
pub fn report_schema_json() -> anyhow::Result<String> {
    let schema = schemars::schema_for!(PermissionReport);
    serde_json::to_string_pretty(&schema).context("serialize report schema")
}

pub fn to_renderable(report: &PermissionReport) -> RenderableReport {
    RenderableReport {
        blocks: report
            .distributors
            .iter()
            .map(|d| RenderableBlock {
                name: d.name.clone(),
                permitted: d.permitted,
                decisions: d
                    .decisions
                    .iter()
                    .map(|x| RenderableDecision {
                        city: x.city.clone(),
                        province: x.province.clone(),
                        country: x.country.clone(),
                        permitted: x.permitted,
                    })
                    .collect(),
            })
            .collect(),
        data: RenderableData {
            locations_scanned: report.data.locations_scanned,
            decisions_total: report.data.decisions_total,
            permitted_total: report.data.permitted_total,
        },
    }
}
