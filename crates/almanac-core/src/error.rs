// File: crates/almanac-core/src/error.rs
// Summary: Typed engine errors (invalid configuration, empty domain).

use thiserror::Error;

/// Errors surfaced by the engine. Configuration errors are rejected before
/// any computation; `EmptyDomain` means no finite value was available to
/// derive a domain from. Individual missing values are never errors.
#[derive(Debug, Error, PartialEq)]
pub enum AlmanacError {
    #[error("bucket count must be at least 1, got {0}")]
    InvalidBucketCount(usize),
    #[error("invalid domain [{min}, {max}]")]
    InvalidDomain { min: f64, max: f64 },
    #[error("no finite values in the sequence")]
    EmptyDomain,
}
