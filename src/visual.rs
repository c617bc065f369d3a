//! Plot styling.

use std::fmt;

use log::info;

use crate::error::Result;
use crate::validator::ensure_between;

/// A matplotlib style: a base style sheet plus rc parameter overrides.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotStyle {
    /// Base style sheet applied before the overrides.
    pub base: &'static str,
    /// TrueType embedding for PDF and PostScript output.
    pub fonttype: u8,
    pub font_family: &'static str,
    pub dpi: u32,
    pub figsize: (f64, f64),
    pub font_size: f64,
    pub label_size: f64,
    pub title_size: f64,
    pub tick_size: f64,
    pub legend_size: f64,
}

impl Default for PlotStyle {
    fn default() -> Self {
        PlotStyle {
            base: "science",
            fonttype: 42,
            font_family: "sans-serif",
            dpi: 600,
            figsize: (10.0, 7.0),
            font_size: 13.0,
            label_size: 17.0,
            title_size: 17.0,
            tick_size: 13.0,
            legend_size: 13.0,
        }
    }
}

impl PlotStyle {
    /// Use a different resolution for both display and saved figures.
    pub fn with_dpi(mut self, dpi: u32) -> Result<Self> {
        ensure_between(f64::from(dpi), 1.0, 2400.0, "dpi")?;
        self.dpi = dpi;
        Ok(self)
    }

    /// rc parameters as `(key, value)` pairs, in matplotlibrc syntax.
    pub fn to_rc_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("pdf.fonttype", self.fonttype.to_string()),
            ("ps.fonttype", self.fonttype.to_string()),
            ("font.family", self.font_family.to_string()),
            ("figure.dpi", self.dpi.to_string()),
            ("savefig.dpi", self.dpi.to_string()),
            ("figure.figsize", format!("{}, {}", self.figsize.0, self.figsize.1)),
            ("font.size", self.font_size.to_string()),
            ("axes.labelsize", self.label_size.to_string()),
            ("axes.titlesize", self.title_size.to_string()),
            ("xtick.labelsize", self.tick_size.to_string()),
            ("ytick.labelsize", self.tick_size.to_string()),
            ("legend.fontsize", self.legend_size.to_string()),
        ]
    }
}

impl fmt::Display for PlotStyle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "# base style: {}", self.base)?;
        for (key, value) in self.to_rc_params() {
            writeln!(f, "{key}: {value}")?;
        }
        Ok(())
    }
}

/// The house plot style.
pub fn style() -> PlotStyle {
    let style = PlotStyle::default();
    info!("Using plot style '{}' at {} dpi", style.base, style.dpi);
    style
}

// Backward compatible name.
pub use self::style as set_plt_style;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn style_is_stable() {
        assert_eq!(style(), style());
        assert_eq!(style(), set_plt_style());
    }

    #[test]
    fn rc_params_match_house_style() {
        let params = style().to_rc_params();
        let get = |key: &str| {
            params
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.clone())
        };
        assert_eq!(get("pdf.fonttype").as_deref(), Some("42"));
        assert_eq!(get("figure.dpi").as_deref(), Some("600"));
        assert_eq!(get("figure.figsize").as_deref(), Some("10, 7"));
        assert_eq!(get("axes.titlesize").as_deref(), Some("17"));
        assert_eq!(params.len(), 12);
    }

    #[test]
    fn rendered_as_matplotlibrc() {
        let text = style().to_string();
        assert!(text.starts_with("# base style: science\n"));
        assert!(text.contains("font.family: sans-serif\n"));
    }

    #[test]
    fn dpi_is_validated() {
        assert_eq!(style().with_dpi(300).unwrap().dpi, 300);
        assert!(matches!(
            style().with_dpi(0),
            Err(Error::InvalidRange { .. })
        ));
    }
}
