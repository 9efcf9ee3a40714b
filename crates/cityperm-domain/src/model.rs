use crate::rule::PermissionRule;

/// A catalog entry. Built once by the loader and never mutated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    /// Full hierarchical code, most-specific-first (`CHENNAI-TAMILNADU-IN`).
    pub code: String,
    pub province_code: String,
    pub country_code: String,
    pub city_name: String,
    pub province_name: String,
    pub country_name: String,
}

/// A named distributor bound to exactly one rule.
#[derive(Debug)]
pub struct Distributor {
    pub name: String,
    pub rule: Box<dyn PermissionRule>,
}

impl Distributor {
    pub fn new(name: impl Into<String>, rule: impl PermissionRule + 'static) -> Self {
        Self {
            name: name.into(),
            rule: Box::new(rule),
        }
    }

    pub fn permits(&self, code: &str) -> bool {
        self.rule.permit(code)
    }
}
