//! Value types shared by the scene graph and the chart layer.
//!
//! Validation happens once, when a value is written. Rendering reads stored
//! fields and never re-derives them.

use std::fmt;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is negative when non-negative required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Format a number for markup output.
///
/// Rounds to six decimals so trigonometric residue (`cos 90° = 6e-17`) does
/// not leak into attributes, prints integral values without a fraction and
/// never prints `-0`.
pub fn fmt_num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let scaled = v * 1e6;
    if !scaled.is_finite() {
        // already far beyond six-decimal precision
        return format!("{}", v);
    }
    let mut r = scaled.round() / 1e6;
    if r == 0.0 {
        r = 0.0;
    }
    format!("{}", r)
}

/// Clamp a value to the unit interval. NaN maps to 0.
pub fn unit_clamp(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// A coordinate or size: absolute pixels or a percentage of the parent
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Dimension {
    Px(f64),
    Percent(f64),
}

impl Dimension {
    pub const ZERO: Dimension = Dimension::Px(0.0);
    pub const FULL: Dimension = Dimension::Percent(100.0);

    /// Percentage of the parent viewport
    pub fn percent(p: f64) -> Self {
        Dimension::Percent(p)
    }

    /// Create a pixel dimension with validation (rejects NaN/infinite)
    pub fn try_px(v: f64) -> Result<Self, NumericError> {
        if v.is_nan() {
            Err(NumericError::NaN)
        } else if v.is_infinite() {
            Err(NumericError::Infinite)
        } else {
            Ok(Dimension::Px(v))
        }
    }

    /// Create a non-negative pixel size with validation
    pub fn try_size(v: f64) -> Result<Self, NumericError> {
        let d = Self::try_px(v)?;
        if v < 0.0 { Err(NumericError::Negative) } else { Ok(d) }
    }

    /// Pixel value, if this is not a percentage
    pub fn as_px(self) -> Option<f64> {
        match self {
            Dimension::Px(v) => Some(v),
            Dimension::Percent(_) => None,
        }
    }

    /// Pixel value, resolving percentages against `reference`
    pub fn resolve(self, reference: f64) -> f64 {
        match self {
            Dimension::Px(v) => v,
            Dimension::Percent(p) => reference * p / 100.0,
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Dimension::ZERO
    }
}

impl From<f64> for Dimension {
    fn from(v: f64) -> Self {
        Dimension::Px(v)
    }
}

impl From<i32> for Dimension {
    fn from(v: i32) -> Self {
        Dimension::Px(f64::from(v))
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Px(v) => f.write_str(&fmt_num(*v)),
            Dimension::Percent(p) => write!(f, "{}%", fmt_num(*p)),
        }
    }
}

/// An sRGB color, rendered as `#rrggbb`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Build a color from arbitrary integers, clamping each channel to [0, 255]
    pub fn clamped(r: i64, g: i64, b: i64) -> Self {
        let c = |v: i64| v.clamp(0, 255) as u8;
        Rgb(c(r), c(g), c(b))
    }

    /// Parse `#rrggbb` or `#rgb`
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            6 => Some(Rgb(
                u8::from_str_radix(&hex[0..2], 16).ok()?,
                u8::from_str_radix(&hex[2..4], 16).ok()?,
                u8::from_str_radix(&hex[4..6], 16).ok()?,
            )),
            3 => {
                let d = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
                Some(Rgb(d(0)?, d(1)?, d(2)?))
            }
            _ => None,
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== fmt_num tests ====================

    #[test]
    fn fmt_num_integral_has_no_fraction() {
        assert_eq!(fmt_num(250.0), "250");
        assert_eq!(fmt_num(-3.0), "-3");
    }

    #[test]
    fn fmt_num_rounds_trig_residue() {
        let c = (90.0f64).to_radians().cos();
        assert_eq!(fmt_num(c), "0");
        assert_eq!(fmt_num(0.1 + 0.2), "0.3");
    }

    #[test]
    fn fmt_num_huge_values_stay_finite() {
        assert_eq!(fmt_num(1e303), format!("{}", 1e303));
        assert_eq!(fmt_num(-f64::MAX), format!("{}", -f64::MAX));
        assert!(!fmt_num(f64::MAX).contains("inf"));
    }

    #[test]
    fn fmt_num_never_negative_zero() {
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(-1e-9), "0");
    }

    // ==================== Dimension tests ====================

    #[test]
    fn dimension_display() {
        assert_eq!(Dimension::Px(12.5).to_string(), "12.5");
        assert_eq!(Dimension::percent(50.0).to_string(), "50%");
        assert_eq!(Dimension::FULL.to_string(), "100%");
    }

    #[test]
    fn dimension_try_px_rejects_nan_and_infinity() {
        assert_eq!(Dimension::try_px(f64::NAN), Err(NumericError::NaN));
        assert_eq!(Dimension::try_px(f64::INFINITY), Err(NumericError::Infinite));
        assert!(Dimension::try_px(-4.0).is_ok());
    }

    #[test]
    fn dimension_try_size_rejects_negative() {
        assert_eq!(Dimension::try_size(-1.0), Err(NumericError::Negative));
        assert_eq!(Dimension::try_size(3.0), Ok(Dimension::Px(3.0)));
    }

    #[test]
    fn dimension_resolve_percent() {
        assert_eq!(Dimension::percent(50.0).resolve(300.0), 150.0);
        assert_eq!(Dimension::Px(7.0).resolve(300.0), 7.0);
        assert_eq!(Dimension::percent(10.0).as_px(), None);
    }

    // ==================== Rgb tests ====================

    #[test]
    fn rgb_clamps_channels() {
        assert_eq!(Rgb::clamped(-20, 300, 128), Rgb(0, 255, 128));
    }

    #[test]
    fn rgb_hex_roundtrip() {
        assert_eq!(Rgb(255, 16, 0).to_hex(), "#ff1000");
        assert_eq!(Rgb::from_hex("#ff1000"), Some(Rgb(255, 16, 0)));
        assert_eq!(Rgb::from_hex("#abc"), Some(Rgb(0xaa, 0xbb, 0xcc)));
        assert_eq!(Rgb::from_hex("ff1000"), None);
        assert_eq!(Rgb::from_hex("#ff10"), None);
    }

    #[test]
    fn unit_clamp_bounds() {
        assert_eq!(unit_clamp(1.5), 1.0);
        assert_eq!(unit_clamp(-0.2), 0.0);
        assert_eq!(unit_clamp(0.25), 0.25);
        assert_eq!(unit_clamp(f64::NAN), 0.0);
    }
}
