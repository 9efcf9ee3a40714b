use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `cityperm.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CitypermConfigV1 {
    /// Optional schema string for tooling (`cityperm.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Built-in distributor set to start from (`sample` or `none`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    /// Size of a dedicated evaluation thread pool. Unset uses the global pool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threads: Option<usize>,

    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Distributors in evaluation (and report) order.
    #[serde(default)]
    pub distributors: Vec<DistributorConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CatalogConfig {
    /// Treat the first CSV row as a header.
    #[serde(default)]
    pub has_headers: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DistributorConfig {
    pub name: String,

    /// Matching strategy: `prefix` (default) or `exact`.
    #[serde(default, rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_kind: Option<String>,

    #[serde(default)]
    pub include: Vec<String>,

    /// Evaluated before `include`; any match denies.
    #[serde(default)]
    pub exclude: Vec<String>,
}
