//! The plot area: an extent, a pixel rectangle and the series drawn in it

use crate::errors::ConfigError;
use crate::scene::{Container, Node, Rect, Render, Section};

use super::mapper::{CoordinateMapper, PlotExtent};
use super::series::{Plottable, Series};

/// Which plot edges are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edges {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Edges {
    pub const ALL: Edges = Edges {
        top: true,
        bottom: true,
        left: true,
        right: true,
    };

    pub const NONE: Edges = Edges {
        top: false,
        bottom: false,
        left: false,
        right: false,
    };
}

impl Default for Edges {
    fn default() -> Self {
        Edges::ALL
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    /// Pixel origin within the graph
    pub x: f64,
    pub y: f64,
    /// Pixel size
    pub w: f64,
    pub h: f64,
    extent: PlotExtent,
    pub edges: Edges,
    pub background: Rect,
    series: Vec<Series>,
    extras: Vec<Node>,
    pub active: bool,
}

impl Default for Plot {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            w: 0.0,
            h: 0.0,
            extent: PlotExtent::default(),
            edges: Edges::default(),
            background: Rect::default(),
            series: Vec::new(),
            extras: Vec::new(),
            active: true,
        }
    }
}

impl Plot {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h, ..Self::default() }
    }

    pub fn extent(&self) -> PlotExtent {
        self.extent
    }

    pub fn set_extent(&mut self, xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<(), ConfigError> {
        self.extent = PlotExtent::try_new(xmin, xmax, ymin, ymax)?;
        Ok(())
    }

    pub fn with_extent(mut self, extent: PlotExtent) -> Self {
        self.extent = extent;
        self
    }

    /// Mapper for the current extent and size
    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(self.extent, self.w, self.h)
    }

    pub fn add_series(&mut self, series: impl Into<Series>) {
        self.series.push(series.into());
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Add an arbitrary node drawn after the series, in plot pixel space
    pub fn add_node(&mut self, node: impl Into<Node>) {
        self.extras.push(node.into());
    }

    pub fn to_section(&self) -> Section {
        let mut section = Section::new(self.x, self.y, self.w, self.h);
        section.set_active(self.active);
        section.add_child(self.background.clone());
        let mapper = self.mapper();
        for node in self.series.iter().filter_map(|s| s.to_node(&mapper)) {
            section.add_child(node);
        }
        for node in &self.extras {
            section.add_child(node.copy());
        }
        section
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::series::PlotLine;
    use crate::errors::Axis;
    use glam::dvec2;

    #[test]
    fn set_extent_validates() {
        let mut plot = Plot::new(0.0, 0.0, 100.0, 100.0);
        let err = plot.set_extent(5.0, 1.0, 0.0, 1.0).unwrap_err();
        assert_eq!(err, ConfigError::InvalidExtent { axis: Axis::X, min: 5.0, max: 1.0 });
        assert_eq!(plot.extent(), PlotExtent::default());
    }

    #[test]
    fn series_follow_extent_changes() {
        let mut plot = Plot::new(0.0, 0.0, 100.0, 100.0);
        plot.add_series(PlotLine::new(dvec2(0.0, 0.0), dvec2(1.0, 1.0)));
        let before = Node::from(plot.to_section()).render(0);
        plot.set_extent(0.0, 2.0, 0.0, 2.0).unwrap();
        let after = Node::from(plot.to_section()).render(0);
        assert!(before.contains("d=\"M 0 100 L 100 0\""));
        assert!(after.contains("d=\"M 0 100 L 50 50\""));
    }

    #[test]
    fn background_comes_first() {
        let plot = Plot::new(10.0, 20.0, 30.0, 40.0);
        let section = plot.to_section();
        assert_eq!(section.children()[0].node.kind(), "rect");
        assert_eq!((section.x(), section.y()), (10.0, 20.0));
    }
}
