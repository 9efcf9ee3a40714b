//! Permission rules: the `permit(code)` capability and its variants.
//!
//! Location codes are hierarchical and written most-specific-first, e.g.
//! `CHENNAI-TAMILNADU-IN`. A rule scope covers a code when the code starts with
//! the scope, or when the scope is a delimited ancestor of the code
//! (`TAMILNADU-IN` and `IN` both cover `CHENNAI-TAMILNADU-IN`).

use std::fmt;

/// Delimiters between hierarchy levels of a location code.
pub const CODE_DELIMITERS: [char; 2] = ['-', '.'];

/// A matching strategy deciding whether a location code is permitted.
///
/// Implementations must be total (any string input) and free of interior
/// mutation: one rule instance is read by evaluation tasks on other threads.
pub trait PermissionRule: fmt::Debug + Send + Sync {
    fn permit(&self, code: &str) -> bool;
}

/// Returns true when `scope` covers `code`.
///
/// This is the only notion of "match" the rules use: a code that no include
/// scope covers in this sense (literal prefix or delimited ancestor) is denied.
/// A literal prefix need not end on a delimiter, so `US` also covers
/// `USHUAIA-TDF-AR`.
///
/// Direction matters: `HUBLI-KARNATAKA-IN` does not cover `KARNATAKA-IN`.
pub fn scope_covers(scope: &str, code: &str) -> bool {
    if code.starts_with(scope) {
        return true;
    }
    match code.strip_suffix(scope) {
        Some(rest) => rest.ends_with(CODE_DELIMITERS),
        None => false,
    }
}

/// Include/exclude rule over code scopes at any granularity.
///
/// Excludes are consulted first and win outright; includes grant; anything
/// else is denied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrefixRule {
    pub exclude: Vec<String>,
    pub include: Vec<String>,
}

impl PrefixRule {
    pub fn new<I, E>(include: I, exclude: E) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            include: include.into_iter().map(Into::into).collect(),
            exclude: exclude.into_iter().map(Into::into).collect(),
        }
    }
}

impl PermissionRule for PrefixRule {
    fn permit(&self, code: &str) -> bool {
        if self.exclude.iter().any(|e| scope_covers(e, code)) {
            return false;
        }
        self.include.iter().any(|e| scope_covers(e, code))
    }
}

/// Exact-set membership with the same exclude-before-include precedence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExactRule {
    pub exclude: Vec<String>,
    pub include: Vec<String>,
}

impl ExactRule {
    pub fn new<I, E>(include: I, exclude: E) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            include: include.into_iter().map(Into::into).collect(),
            exclude: exclude.into_iter().map(Into::into).collect(),
        }
    }
}

impl PermissionRule for ExactRule {
    fn permit(&self, code: &str) -> bool {
        if self.exclude.iter().any(|e| e == code) {
            return false;
        }
        self.include.iter().any(|e| e == code)
    }
}
