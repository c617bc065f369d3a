use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::validator::ensure_open_between;

/// Fraction of the data sent to the validation split.
///
/// Always finite and strictly between 0 and 1, so both splits can be
/// non-empty.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct ValRatio(f64);

impl ValRatio {
    pub fn get(self) -> f64 {
        self.0
    }

    /// Number of items assigned to validation out of `total`.
    ///
    /// `total * ratio` rounded half up, then clamped to `1..=total - 1`.
    /// Fewer than two items cannot fill both splits.
    pub fn val_count(self, total: usize) -> Result<usize> {
        if total < 2 {
            return Err(Error::InvalidInput(format!(
                "cannot split {total} item(s) into two non-empty sets"
            )));
        }
        let k = (total as f64 * self.0).round() as usize;
        Ok(k.clamp(1, total - 1))
    }
}

impl TryFrom<f64> for ValRatio {
    type Error = Error;

    fn try_from(ratio: f64) -> Result<Self> {
        ensure_open_between(ratio, 0.0, 1.0, "val_ratio").map(ValRatio)
    }
}

impl FromStr for ValRatio {
    type Err = Error;

    /// Parse a ratio such as "0.2", or a named form such as "val=0.2".
    fn from_str(spec: &str) -> Result<Self> {
        let value = match spec.split_once('=') {
            Some(("val", value)) => value,
            Some(_) => return Err(Error::InvalidSplitSpecification(spec.to_string())),
            None => spec,
        };
        let ratio = value
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::InvalidSplitSpecification(spec.to_string()))?;
        ValRatio::try_from(ratio)
    }
}

impl fmt::Display for ValRatio {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_closed_bounds() {
        for ratio in [0.0, 1.0, -0.1, 1.5, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(ValRatio::try_from(ratio), Err(Error::InvalidRange { .. })),
                "{ratio} should be rejected"
            );
        }
    }

    #[test]
    fn parses_plain_and_named() {
        assert_eq!("0.2".parse::<ValRatio>().unwrap().get(), 0.2);
        assert_eq!("val=0.25".parse::<ValRatio>().unwrap().get(), 0.25);
        assert!(matches!(
            "train=0.8".parse::<ValRatio>(),
            Err(Error::InvalidSplitSpecification(_))
        ));
        assert!(matches!(
            "abc".parse::<ValRatio>(),
            Err(Error::InvalidSplitSpecification(_))
        ));
        assert!(matches!(
            "1".parse::<ValRatio>(),
            Err(Error::InvalidRange { .. })
        ));
    }

    #[test]
    fn val_count_rounds_half_up() {
        let ratio = ValRatio::try_from(0.25).unwrap();
        // 10 * 0.25 = 2.5
        assert_eq!(ratio.val_count(10).unwrap(), 3);
        let ratio = ValRatio::try_from(0.2).unwrap();
        assert_eq!(ratio.val_count(10).unwrap(), 2);
        assert_eq!(ratio.val_count(100).unwrap(), 20);
    }

    #[test]
    fn val_count_keeps_both_sides_non_empty() {
        let tiny = ValRatio::try_from(1e-9).unwrap();
        assert_eq!(tiny.val_count(10).unwrap(), 1);
        let huge = ValRatio::try_from(1.0 - 1e-9).unwrap();
        assert_eq!(huge.val_count(10).unwrap(), 9);
        assert_eq!(huge.val_count(2).unwrap(), 1);
        assert_eq!(tiny.val_count(2).unwrap(), 1);
    }

    #[test]
    fn val_count_rejects_tiny_totals() {
        let ratio = ValRatio::try_from(0.5).unwrap();
        assert!(matches!(ratio.val_count(0), Err(Error::InvalidInput(_))));
        assert!(matches!(ratio.val_count(1), Err(Error::InvalidInput(_))));
    }
}
