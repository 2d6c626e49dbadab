//! Charts on top of the scene graph
//!
//! A [`Graph`] owns a [`Plot`] (extent, pixel rectangle, series), a
//! [`Legend`] and a [`Frame`]. Each render rebuilds the scene tree from
//! these, so every mapping reflects the current extent.

pub mod frame;
pub mod graph;
pub mod legend;
pub mod mapper;
pub mod plot;
pub mod series;

pub use frame::{Axis, Frame, FrameLayout, Tick};
pub use graph::{Graph, GraphLayout};
pub use legend::{Icon, Legend};
pub use mapper::{CoordinateMapper, PlotExtent, map_x, map_x_with, map_y, map_y_with};
pub use plot::{Edges, Plot};
pub use series::{ErrorBars, ErrorWhisker, PlotBox, PlotLine, Plottable, Scatter, ScatterLines, Series};
