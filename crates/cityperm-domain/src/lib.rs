//! Pure permission evaluation (no IO).
//!
//! Input: distributors and a location catalog constructed elsewhere.
//! Output: one ordered result block per distributor.

#![forbid(unsafe_code)]

pub mod model;
pub mod report;
pub mod rule;

mod aggregate;
mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use aggregate::{aggregate, aggregate_in};
pub use engine::evaluate;
