//! Small helpers for setting up reproducible machine-learning experiments.
//!
//! Every helper is available as a flat function, under its older name, and
//! through the [`QQ`] facade.

pub mod cli;
mod dataset;
mod error;
mod helper;
pub mod io;
mod qq;
mod split;
mod validator;
mod visual;

pub use {
    crate::dataset::{Dataset, Subset},
    crate::error::{Error, Result},
    crate::helper::{
        dev, env, get_device_info, print_environment_info, seed, set_all_seeds, Device,
        DeviceInfo, EnvironmentInfo, SeedSource,
    },
    crate::qq::QQ,
    crate::split::{
        split, split_with_rng, train_val_split, SplitResult, Splitter, SplitterBuilder, ValRatio,
        DEFAULT_SEED, DEFAULT_VAL_RATIO,
    },
    crate::validator::{ensure_between, ensure_open_between},
    crate::visual::{set_plt_style, style, PlotStyle},
};
