//! The `check` use case: load the catalog, evaluate every distributor, produce a report.

use anyhow::Context;
use camino::Utf8Path;
use cityperm_catalog::CatalogOptions;
use cityperm_settings::{CitypermConfigV1, Overrides, ResolvedConfig};
use cityperm_types::PermissionReport;
use time::OffsetDateTime;
use tracing::info;

use crate::report::build_report;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Location catalog (CSV).
    pub catalog_path: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: PermissionReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Resolve config text (empty is allowed, defaults apply).
pub(crate) fn resolve(config_text: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        CitypermConfigV1::default()
    } else {
        cityperm_settings::parse_config_toml(config_text).context("parse config")?
    };
    cityperm_settings::resolve_config(cfg, overrides).context("resolve config")
}

/// Run the check use case. Any loader error aborts before evaluation starts.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    let resolved = resolve(input.config_text, input.overrides.clone())?;

    let options = CatalogOptions {
        has_headers: resolved.has_headers,
    };
    let locations = cityperm_catalog::load_catalog(input.catalog_path, options)
        .with_context(|| format!("load catalog {}", input.catalog_path))?;

    let domain_report = match resolved.threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .thread_name(|i| format!("cityperm-eval-{i}"))
                .build()
                .context("build evaluation thread pool")?;
            cityperm_domain::aggregate_in(&pool, &resolved.distributors, &locations)
        }
        None => cityperm_domain::aggregate(&resolved.distributors, &locations),
    };

    let finished_at = OffsetDateTime::now_utc();
    info!(
        distributors = domain_report.blocks.len(),
        decisions = domain_report.decisions_total(),
        permitted = domain_report.permitted_total(),
        "check finished"
    );

    let report = build_report(domain_report, locations.len(), started_at, finished_at);

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}
