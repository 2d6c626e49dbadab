//! Default sizes and settings (all in pixels)

/// One indentation level in rendered markup
pub const INDENT: &str = "   ";

/// Namespace declared by the outermost document
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Axis line thickness, also the length of tick marks
pub const AXIS_THICKNESS: f64 = 4.0;
/// Gap between a tick mark and its label
pub const DIST_TO_LABEL: f64 = 5.0;
/// Gap between the axis line and its title
pub const TITLE_OFFSET: f64 = 40.0;

/// Left margin reserved for the y-axis labels
pub const PLOT_LEFT: f64 = 100.0;
/// Right margin after the plot area
pub const PLOT_RIGHT: f64 = 20.0;
/// Bottom margin reserved for the x-axis labels
pub const PLOT_BOTTOM: f64 = 100.0;
/// Top margin as a fraction of the graph height
pub const PLOT_TOP_FRACTION: f64 = 0.10;

/// Legend box origin and size, as fractions of the graph size
pub const LEGEND_X_FRACTION: f64 = 0.75;
pub const LEGEND_W_FRACTION: f64 = 0.20;
pub const LEGEND_H_FRACTION: f64 = 0.5;
/// Vertical step between legend entries (each entry takes two steps)
pub const LEGEND_DY: f64 = 10.0;
/// Left inset of legend entries
pub const LEGEND_INSET: f64 = 10.0;

/// Default font size used by text templates
pub const FONT_SIZE: f64 = 12.0;

/// Inner margin on each side of a text box
pub const TEXT_BOX_MARGIN: f64 = 3.0;
