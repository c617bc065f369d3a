//! Numeric bounds checks shared by the configuration types.

use crate::error::{Error, Result};

/// Check that `low <= value <= high`, returning the value on success.
pub fn ensure_between(value: f64, low: f64, high: f64, name: &str) -> Result<f64> {
    if !(low <= value && value <= high) {
        return Err(Error::invalid_range(name, value, low, high));
    }
    Ok(value)
}

/// Check that `low < value < high`, returning the value on success.
///
/// NaN never satisfies the bounds.
pub fn ensure_open_between(value: f64, low: f64, high: f64, name: &str) -> Result<f64> {
    if !(low < value && value < high) {
        return Err(Error::invalid_range(name, value, low, high));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_between_accepts_bounds() {
        assert_eq!(ensure_between(5.0, 0.0, 10.0, "value").unwrap(), 5.0);
        assert_eq!(ensure_between(0.0, 0.0, 10.0, "value").unwrap(), 0.0);
        assert_eq!(ensure_between(10.0, 0.0, 10.0, "value").unwrap(), 10.0);
    }

    #[test]
    fn ensure_between_rejects_outside() {
        let err = ensure_between(11.0, 0.0, 10.0, "dpi").unwrap_err();
        assert_eq!(err.to_string(), "dpi must be between 0 and 10, got 11");
        assert!(ensure_between(-0.5, 0.0, 10.0, "value").is_err());
        assert!(ensure_between(f64::NAN, 0.0, 10.0, "value").is_err());
    }

    #[test]
    fn ensure_open_between_rejects_bounds() {
        assert!(ensure_open_between(0.0, 0.0, 1.0, "val_ratio").is_err());
        assert!(ensure_open_between(1.0, 0.0, 1.0, "val_ratio").is_err());
        assert!(ensure_open_between(f64::NAN, 0.0, 1.0, "val_ratio").is_err());
        assert_eq!(ensure_open_between(0.5, 0.0, 1.0, "val_ratio").unwrap(), 0.5);
    }
}
