use crate::{model::CitypermConfigV1, model::DistributorConfig, presets};
use anyhow::Context;
use cityperm_domain::model::Distributor;
use cityperm_domain::rule::{ExactRule, PrefixRule};
use cityperm_types::ids;
use std::collections::BTreeSet;
use tracing::warn;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub preset: Option<String>,
    pub threads: Option<usize>,
}

#[derive(Debug)]
pub struct ResolvedConfig {
    /// Preset that seeded the distributor list, if any.
    pub preset: Option<String>,
    /// Distributors in submission order: preset entries first, then config entries.
    pub distributors: Vec<Distributor>,
    pub threads: Option<usize>,
    pub has_headers: bool,
}

impl ResolvedConfig {
    pub fn distributor(&self, name: &str) -> Option<&Distributor> {
        self.distributors.iter().find(|d| d.name == name)
    }
}

pub fn resolve_config(
    cfg: CitypermConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != ids::SCHEMA_CONFIG_V1
    {
        anyhow::bail!(
            "unsupported config schema: {schema} (expected {})",
            ids::SCHEMA_CONFIG_V1
        );
    }

    // With nothing configured, fall back to the sample set so a bare run does something useful.
    let preset = overrides.preset.clone().or(cfg.preset.clone()).or_else(|| {
        cfg.distributors
            .is_empty()
            .then(|| ids::PRESET_SAMPLE.to_string())
    });

    let mut entries = match preset.as_deref() {
        Some(name) => presets::preset(name).with_context(|| {
            format!(
                "unknown preset: {name} (expected '{}' or '{}')",
                ids::PRESET_SAMPLE,
                ids::PRESET_NONE
            )
        })?,
        None => Vec::new(),
    };
    entries.extend(cfg.distributors);

    let threads = overrides.threads.or(cfg.threads);
    if threads == Some(0) {
        anyhow::bail!("threads must be at least 1");
    }

    let mut seen = BTreeSet::new();
    let mut distributors = Vec::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.name.clone()) {
            warn!(distributor = %entry.name, "duplicate distributor name");
        }
        let d = build_distributor(entry)?;
        distributors.push(d);
    }

    Ok(ResolvedConfig {
        preset,
        distributors,
        threads,
        has_headers: cfg.catalog.has_headers,
    })
}

fn build_distributor(entry: DistributorConfig) -> anyhow::Result<Distributor> {
    if entry.name.trim().is_empty() {
        anyhow::bail!("distributor name must not be empty");
    }
    validate_scopes(&entry.name, "include", &entry.include)?;
    validate_scopes(&entry.name, "exclude", &entry.exclude)?;

    let kind = entry.match_kind.as_deref().unwrap_or(ids::MATCH_PREFIX);
    let distributor = match kind {
        ids::MATCH_PREFIX => {
            Distributor::new(entry.name, PrefixRule::new(entry.include, entry.exclude))
        }
        ids::MATCH_EXACT => {
            Distributor::new(entry.name, ExactRule::new(entry.include, entry.exclude))
        }
        other => anyhow::bail!(
            "unknown match kind for {}: {other} (expected prefix|exact)",
            entry.name
        ),
    };
    Ok(distributor)
}

fn validate_scopes(name: &str, list: &str, scopes: &[String]) -> anyhow::Result<()> {
    // An empty scope would cover every code.
    if scopes.iter().any(|s| s.trim().is_empty()) {
        anyhow::bail!("empty scope in {list} list for {name}");
    }
    Ok(())
}
