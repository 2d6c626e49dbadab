//! A complete chart document

use crate::defaults::{
    LEGEND_H_FRACTION, LEGEND_W_FRACTION, LEGEND_X_FRACTION, PLOT_BOTTOM, PLOT_LEFT, PLOT_RIGHT,
    PLOT_TOP_FRACTION,
};
use crate::errors::ConfigError;
use crate::log;
use crate::scene::{Container, LinearGradient, Node, Rect, Text, Viewport};

use super::frame::Frame;
use super::legend::Legend;
use super::plot::Plot;

/// Margins and legend placement used by [`Graph::set_sizes`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphLayout {
    pub plot_left: f64,
    pub plot_right: f64,
    pub plot_bottom: f64,
    /// Top margin as a fraction of the graph height
    pub plot_top_fraction: f64,
    pub legend_x_fraction: f64,
    pub legend_w_fraction: f64,
    /// Legend height as a fraction of the height left after top and bottom margins
    pub legend_h_fraction: f64,
}

impl Default for GraphLayout {
    fn default() -> Self {
        Self {
            plot_left: PLOT_LEFT,
            plot_right: PLOT_RIGHT,
            plot_bottom: PLOT_BOTTOM,
            plot_top_fraction: PLOT_TOP_FRACTION,
            legend_x_fraction: LEGEND_X_FRACTION,
            legend_w_fraction: LEGEND_W_FRACTION,
            legend_h_fraction: LEGEND_H_FRACTION,
        }
    }
}

/// A document holding a background, an optional title, the plot, its legend
/// and the axis frame, rendered in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    pub width: f64,
    pub height: f64,
    pub background: Rect,
    pub title: Option<Text>,
    pub plot: Plot,
    pub legend: Legend,
    pub frame: Frame,
    pub layout: GraphLayout,
    defs: Vec<LinearGradient>,
}

impl Graph {
    pub fn new(width: f64, height: f64) -> Self {
        let mut graph = Self {
            width,
            height,
            background: Rect::default(),
            title: None,
            plot: Plot::default(),
            legend: Legend::default(),
            frame: Frame::default(),
            layout: GraphLayout::default(),
            defs: Vec::new(),
        };
        graph.set_sizes();
        graph
    }

    pub fn with_layout(mut self, layout: GraphLayout) -> Self {
        self.layout = layout;
        self.set_sizes();
        self
    }

    /// Place the plot and legend inside the graph from the current layout
    pub fn set_sizes(&mut self) {
        let (w, h) = (self.width, self.height);
        let l = self.layout;
        let dy = l.plot_top_fraction * h;

        self.plot.x = l.plot_left;
        self.plot.y = dy;
        self.plot.w = w - l.plot_left - l.plot_right;
        self.plot.h = h - l.plot_bottom - dy;

        self.legend.set_rect(
            w * l.legend_x_fraction,
            dy,
            w * l.legend_w_fraction,
            l.legend_h_fraction * (h - 2.0 * dy),
        );
    }

    pub fn set_plot_extrema(&mut self, xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<(), ConfigError> {
        self.plot.set_extent(xmin, xmax, ymin, ymax)
    }

    pub fn add_def(&mut self, gradient: LinearGradient) {
        self.defs.push(gradient);
    }

    /// Assemble the document tree
    pub fn to_viewport(&self) -> Viewport {
        let mut doc = Viewport::document(self.width, self.height);
        for def in &self.defs {
            doc.add_def(def.clone());
        }
        doc.add_child(self.background.clone());
        if let Some(title) = &self.title {
            doc.add_child(title.clone());
        }
        doc.add_labeled("Plot", self.plot.to_section());
        doc.add_labeled("Legend", self.legend.to_section());
        doc.add_labeled("Frame", self.frame.to_section(&self.plot));
        doc
    }

    /// The graph as a node, for embedding in another drawing
    pub fn to_node(&self) -> Node {
        self.to_viewport().into()
    }

    pub fn render(&self) -> String {
        log::debug!(
            width = self.width,
            height = self.height,
            series = self.plot.series().len(),
            "rendering graph"
        );
        self.to_node().render(0)
    }
}
