//! Build SVG documents from a scene graph, and charts on top of it.
//!
//! The [`scene`] module holds the tree: shapes, text, transform groups and
//! nested viewports. The [`chart`] module maps data onto a plot area and
//! lays out axis frames, series and legends as scene nodes.
//!
//! ```
//! use svgraph::chart::{Graph, Icon, Scatter};
//! use svgraph::scene::Circle;
//!
//! let mut graph = Graph::new(600.0, 400.0);
//! graph.set_plot_extrema(0.0, 10.0, 0.0, 100.0)?;
//! let dot = Icon::new(Circle::new(3.0, 3.0, 3.0), 6.0, 6.0);
//! graph.plot.add_series(Scatter::new(vec![2.0, 5.0], vec![40.0, 80.0], dot));
//! let svg = graph.render();
//! assert!(svg.starts_with("<svg width=\"600\" height=\"400\""));
//! # Ok::<(), svgraph::ConfigError>(())
//! ```

pub mod chart;
pub mod defaults;
pub mod errors;
pub mod log;
pub mod scene;
pub mod text;
pub mod types;

pub use errors::{ConfigError, FontError};
pub use scene::{Node, Render};
pub use types::{Dimension, Rgb};
