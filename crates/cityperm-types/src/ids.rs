//! Stable identifiers shared by config, reports and the CLI.

pub const TOOL_NAME: &str = "cityperm";

// Schemas
pub const SCHEMA_CONFIG_V1: &str = "cityperm.config.v1";

// Rule match kinds (`match = "..."` in config)
pub const MATCH_PREFIX: &str = "prefix";
pub const MATCH_EXACT: &str = "exact";

// Presets
pub const PRESET_SAMPLE: &str = "sample";
pub const PRESET_NONE: &str = "none";
