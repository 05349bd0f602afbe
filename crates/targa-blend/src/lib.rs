#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// in-place channel adjustment module.
pub mod adjust;

/// two-image blend operators module.
pub mod blend;

/// channel isolation and recombination module.
pub mod channel;

/// image rotation module.
pub mod flip;

/// module containing parallelization utilities.
pub mod parallel;
