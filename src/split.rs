//! Deterministic train/validation splitting.

mod ratio;
mod splitter;

pub use ratio::ValRatio;
pub use splitter::{split, split_with_rng, SplitResult, Splitter, SplitterBuilder};

/// Validation fraction used when none is given.
pub const DEFAULT_VAL_RATIO: f64 = 0.2;

/// Seed used when reproducibility is wanted but no seed is given.
pub const DEFAULT_SEED: u64 = 42;

// Backward compatible name.
pub use splitter::split as train_val_split;
