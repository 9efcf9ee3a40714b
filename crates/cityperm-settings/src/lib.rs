//! Config parsing and preset/distributor resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{CatalogConfig, CitypermConfigV1, DistributorConfig};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `cityperm.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<CitypermConfigV1> {
    let cfg: CitypermConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the distributors and run options used by the engine (presets + overrides + config).
pub fn resolve_config(
    cfg: CitypermConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
