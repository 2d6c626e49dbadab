//! Font metrics and line wrapping
//!
//! Widths are computed as `Σ advance(c) × size / units_per_em`. The advance
//! table comes either from a built-in proportional approximation or from a
//! TrueType/OpenType face read with `ttf-parser`.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use ttf_parser::{Face, GlyphId};

use crate::defaults::FONT_SIZE;
use crate::errors::FontError;

mod wrap;

pub use wrap::wrap;

/// Per-character advance widths in font units
pub trait GlyphMetrics: Send + Sync {
    fn advance_width(&self, c: char) -> f64;

    fn units_per_em(&self) -> f64;
}

/// Proportional character widths for printable ASCII, in hundredths of an
/// average character width.
#[rustfmt::skip]
const AW_CHAR: [u8; 95] = [
    45,  55,  62, 115,  90, 132, 125,  40,
    55,  55,  71, 115,  45,  48,  45,  50,
    91,  91,  91,  91,  91,  91,  91,  91,
    91,  91,  50,  50, 120, 120, 120,  78,
   142, 102, 105, 110, 115, 105,  98, 105,
   125,  58,  58, 107,  95, 145, 125, 115,
    95, 115, 107,  95,  97, 118, 102, 150,
   100,  93, 100,  58,  50,  58, 119,  72,
    72,  86,  92,  80,  92,  85,  52,  92,
    92,  47,  47,  88,  48, 135,  92,  86,
    92,  92,  69,  75,  58,  92,  80, 121,
    81,  80,  76,  91,  49,  91, 118,
];

/// Built-in metrics for a generic sans-serif face. Needs no font file.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproxMetrics;

impl ApproxMetrics {
    /// One em spans this many table units
    const UNITS_PER_EM: f64 = 175.0;
}

impl GlyphMetrics for ApproxMetrics {
    fn advance_width(&self, c: char) -> f64 {
        match c {
            ' '..='~' => f64::from(AW_CHAR[c as usize - 0x20]),
            '\n' | '\r' => 0.0,
            _ => 100.0,
        }
    }

    fn units_per_em(&self) -> f64 {
        Self::UNITS_PER_EM
    }
}

/// Metrics read from a TrueType/OpenType face
#[derive(Clone)]
pub struct TtfMetrics {
    data: Arc<[u8]>,
    index: u32,
    units_per_em: u16,
    ascii: [u16; 128],
    notdef: u16,
}

impl TtfMetrics {
    pub fn from_bytes(data: Vec<u8>, index: u32) -> Result<Self, FontError> {
        let face = Face::parse(&data, index).map_err(|e| FontError::Parse {
            message: e.to_string(),
        })?;
        let notdef = face.glyph_hor_advance(GlyphId(0)).unwrap_or(0);
        let mut ascii = [notdef; 128];
        for byte in 0u8..128 {
            if let Some(id) = face.glyph_index(char::from(byte)) {
                ascii[usize::from(byte)] = face.glyph_hor_advance(id).unwrap_or(notdef);
            }
        }
        let units_per_em = face.units_per_em().max(1);
        Ok(Self {
            data: data.into(),
            index,
            units_per_em,
            ascii,
            notdef,
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FontError> {
        let data = std::fs::read(path)?;
        Self::from_bytes(data, 0)
    }
}

impl fmt::Debug for TtfMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TtfMetrics")
            .field("bytes", &self.data.len())
            .field("index", &self.index)
            .field("units_per_em", &self.units_per_em)
            .finish()
    }
}

impl GlyphMetrics for TtfMetrics {
    fn advance_width(&self, c: char) -> f64 {
        if c.is_ascii() {
            return f64::from(self.ascii[c as usize]);
        }
        // Non-ASCII lookups re-read the face; parsing only touches table headers.
        let advance = Face::parse(&self.data, self.index)
            .ok()
            .and_then(|face| face.glyph_index(c).and_then(|id| face.glyph_hor_advance(id)))
            .unwrap_or(self.notdef);
        f64::from(advance)
    }

    fn units_per_em(&self) -> f64 {
        f64::from(self.units_per_em)
    }
}

/// A font binding: family and weight as written to markup, size in pixels,
/// and the metrics used to measure text set in it.
#[derive(Clone)]
pub struct Font {
    pub family: String,
    pub weight: String,
    pub size: f64,
    metrics: Arc<dyn GlyphMetrics>,
}

impl Font {
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            weight: "normal".to_string(),
            size,
            metrics: Arc::new(ApproxMetrics),
        }
    }

    pub fn with_weight(mut self, weight: impl Into<String>) -> Self {
        self.weight = weight.into();
        self
    }

    pub fn with_metrics(mut self, metrics: impl GlyphMetrics + 'static) -> Self {
        self.metrics = Arc::new(metrics);
        self
    }

    pub fn metrics(&self) -> &dyn GlyphMetrics {
        self.metrics.as_ref()
    }

    /// Width of `text` in pixels at this font's size
    pub fn text_width(&self, text: &str) -> f64 {
        let units: f64 = text.chars().map(|c| self.metrics.advance_width(c)).sum();
        units * self.size / self.metrics.units_per_em()
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new("sans-serif", FONT_SIZE)
    }
}

impl PartialEq for Font {
    fn eq(&self, other: &Self) -> bool {
        self.family == other.family && self.weight == other.weight && self.size == other.size
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font")
            .field("family", &self.family)
            .field("weight", &self.weight)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Mono;

    impl GlyphMetrics for Mono {
        fn advance_width(&self, _c: char) -> f64 {
            500.0
        }

        fn units_per_em(&self) -> f64 {
            1000.0
        }
    }

    #[test]
    fn text_width_scales_with_size() {
        let font = Font::new("mono", 10.0).with_metrics(Mono);
        assert_eq!(font.text_width("abcd"), 20.0);
        assert_eq!(font.text_width(""), 0.0);
    }

    #[test]
    fn approx_metrics_are_proportional() {
        let m = ApproxMetrics;
        assert!(m.advance_width('W') > m.advance_width('i'));
        assert_eq!(m.advance_width('0'), 91.0);
        assert_eq!(m.advance_width('é'), 100.0);
    }

    #[test]
    fn font_equality_ignores_metrics_source() {
        let a = Font::new("serif", 12.0);
        let b = Font::new("serif", 12.0).with_metrics(Mono);
        assert_eq!(a, b);
        assert_ne!(a, a.clone().with_weight("bold"));
    }

    #[test]
    fn garbage_bytes_are_a_parse_error() {
        let err = TtfMetrics::from_bytes(vec![0, 1, 2, 3], 0).unwrap_err();
        assert!(matches!(err, FontError::Parse { .. }));
    }

    #[test]
    fn missing_font_file_is_an_io_error() {
        let err = TtfMetrics::from_file("/nonexistent/svgraph/font.ttf").unwrap_err();
        assert!(matches!(err, FontError::Io(_)));
    }
}
