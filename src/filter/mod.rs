//! Filter module
//!
//! Caller-supplied predicates (`quals`) and their translation into request
//! parameters. Equality quals map one-to-one onto named parameters; range
//! quals on a timestamp column become an `after`/`before` window.

mod mapping;
mod types;

pub use mapping::{timestamp_millis, TimeRange};
pub use types::{Operator, Qual, QualSet};

#[cfg(test)]
mod tests;
