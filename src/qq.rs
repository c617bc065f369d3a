use crate::dataset::Dataset;
use crate::error::Result;
use crate::helper::{self, DeviceInfo, EnvironmentInfo, SeedSource};
use crate::split::{self, SplitResult};
use crate::visual::{self, PlotStyle};

const HELP: &str = "\
QQ Utilities:
  QQ::env()        - Show environment info
  QQ::dev()        - Get device info
  QQ::seed(n)      - Set seeds (default: 42)
  QQ::style()      - Get the matplotlib style
  QQ::split(d, ..) - Split dataset
  QQ::help()       - Show this help

Usage:
  use qqgjyx::QQ;
  println!(\"{}\", QQ::env());
  let seeds = QQ::seed(123);
  let (train, val) = QQ::split(&dataset, 0.2, Some(42))?;
";

/// One entry point for every helper in the crate.
pub struct QQ;

impl QQ {
    pub fn env() -> EnvironmentInfo {
        helper::env()
    }

    pub fn dev() -> DeviceInfo {
        helper::dev()
    }

    pub fn seed(value: u64) -> SeedSource {
        helper::seed(value)
    }

    pub fn style() -> PlotStyle {
        visual::style()
    }

    pub fn split<D: Dataset + ?Sized>(
        dataset: &D,
        val_ratio: f64,
        seed: Option<u64>,
    ) -> Result<SplitResult<'_, D>> {
        split::split(dataset, val_ratio, seed)
    }

    pub fn help() -> &'static str {
        HELP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_lists_every_helper() {
        let help = QQ::help();
        assert!(help.starts_with("QQ Utilities:"));
        for name in [
            "QQ::env()",
            "QQ::dev()",
            "QQ::seed(n)",
            "QQ::style()",
            "QQ::split(d, ..)",
            "QQ::help()",
        ] {
            assert!(help.contains(name), "missing {name}");
        }
    }

    #[test]
    fn facade_matches_flat_functions() {
        assert_eq!(QQ::env(), helper::env());
        assert_eq!(QQ::seed(123), helper::seed(123));
        assert_eq!(QQ::style(), visual::style());

        let data: Vec<u32> = (0..100).collect();
        let (train, val) = QQ::split(&data, 0.2, Some(42)).unwrap();
        let (flat_train, flat_val) = split::train_val_split(&data, 0.2, Some(42)).unwrap();
        assert_eq!(train.len(), 80);
        assert_eq!(val.len(), 20);
        assert_eq!(train.indices(), flat_train.indices());
        assert_eq!(val.indices(), flat_val.indices());
    }
}
