use crate::model::DistributorConfig;
use cityperm_types::ids;

/// Preset distributor sets.
///
/// Keep these small and readable. Anything real belongs in repo config.
pub fn preset(name: &str) -> Option<Vec<DistributorConfig>> {
    match name {
        ids::PRESET_SAMPLE => Some(sample()),
        ids::PRESET_NONE => Some(Vec::new()),
        _ => None,
    }
}

fn prefix(name: &str, include: &[&str], exclude: &[&str]) -> DistributorConfig {
    DistributorConfig {
        name: name.to_string(),
        match_kind: None,
        include: include.iter().map(|s| s.to_string()).collect(),
        exclude: exclude.iter().map(|s| s.to_string()).collect(),
    }
}

fn sample() -> Vec<DistributorConfig> {
    vec![
        prefix(
            "DISTRIBUTOR1",
            &["IN", "US"],
            &["KARNATAKA-IN", "CHENNAI-TAMILNADU-IN"],
        ),
        prefix("DISTRIBUTOR2", &["IN"], &["TAMILNADU-IN"]),
        prefix("DISTRIBUTOR3", &["HUBLI-KARNATAKA-IN"], &[]),
    ]
}
