//! Error types with diagnostics using miette
//!
//! Rendering never fails: missing data degrades to omitted markup. The errors
//! here are raised only for caller-input violations while assembling a chart
//! and for font loading.

use miette::Diagnostic;
use thiserror::Error;

/// Which data axis a configuration error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors raised when a plot or frame is configured with unusable values
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid {axis} extent: max ({max}) must be greater than min ({min})")]
    #[diagnostic(
        code(svgraph::config::invalid_extent),
        help("swap the bounds or widen the range so that {axis}max > {axis}min")
    )]
    InvalidExtent { axis: Axis, min: f64, max: f64 },

    #[error("non-finite {axis} extent bound")]
    #[diagnostic(code(svgraph::config::non_finite_extent))]
    NonFiniteExtent { axis: Axis },
}

// ============================================================================
// Font Errors
// ============================================================================

/// Errors raised while loading glyph metrics
#[derive(Error, Diagnostic, Debug)]
pub enum FontError {
    #[error("failed to parse font face: {message}")]
    #[diagnostic(
        code(svgraph::font::parse),
        help("only TrueType and OpenType faces are supported")
    )]
    Parse { message: String },

    #[error("failed to read font file")]
    #[diagnostic(code(svgraph::font::io))]
    Io(#[from] std::io::Error),
}
