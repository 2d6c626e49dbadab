//! Plotted series
//!
//! Every series keeps its data-space input untouched and maps it through the
//! plot's [`CoordinateMapper`] each time it is turned into nodes, so changing
//! the plot extent restyles nothing but moves everything.

use enum_dispatch::enum_dispatch;
use glam::{DVec2, dvec2};

use crate::scene::{AffineGroup, Container, Node, PathData, PathShape, Rect, Style};
use crate::types::Rgb;

use super::legend::Icon;
use super::mapper::CoordinateMapper;

/// Anything that can be drawn inside a plot area
#[enum_dispatch]
pub trait Plottable {
    /// Nodes for this series in plot-local pixel coordinates, or `None` when
    /// there is nothing to draw
    fn to_node(&self, mapper: &CoordinateMapper) -> Option<Node>;
}

#[enum_dispatch(Plottable)]
#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    Scatter(Scatter),
    ScatterLines(ScatterLines),
    PlotBox(PlotBox),
    ErrorBars(ErrorBars),
    ErrorWhisker(ErrorWhisker),
    PlotLine(PlotLine),
}

fn line_style() -> Style {
    Style::new().with_stroke(Rgb::BLACK, 1.0).with_fill_opacity(0.0)
}

/// One icon copy centred on every data point
#[derive(Debug, Clone, PartialEq)]
pub struct Scatter {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub icon: Icon,
}

impl Scatter {
    pub fn new(xs: Vec<f64>, ys: Vec<f64>, icon: Icon) -> Self {
        Self { xs, ys, icon }
    }
}

impl Plottable for Scatter {
    fn to_node(&self, mapper: &CoordinateMapper) -> Option<Node> {
        let mut group = AffineGroup::default();
        for p in mapper.points(&self.xs, &self.ys) {
            group.add_child(self.icon.centred(p.x, p.y));
        }
        Some(group.into())
    }
}

/// Markers joined left to right by one polyline
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterLines {
    pub markers: Scatter,
    pub line: Style,
}

impl ScatterLines {
    pub fn new(xs: Vec<f64>, ys: Vec<f64>, icon: Icon) -> Self {
        Self {
            markers: Scatter::new(xs, ys, icon),
            line: line_style(),
        }
    }

    /// Mapped points in drawing order: ascending pixel x, ties by y
    pub fn path_points(&self, mapper: &CoordinateMapper) -> Vec<DVec2> {
        let mut points = mapper.points(&self.markers.xs, &self.markers.ys);
        points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
        points
    }
}

impl Plottable for ScatterLines {
    fn to_node(&self, mapper: &CoordinateMapper) -> Option<Node> {
        let mut group = AffineGroup::default();
        let mut data = PathData::new();
        data.polyline(&self.path_points(mapper));
        group.add_child(PathShape::new(data).with_style(self.line.clone()));
        if let Some(Node::Group(markers)) = self.markers.to_node(mapper) {
            for child in markers.children() {
                group.add_child(child.node.copy());
            }
        }
        Some(group.into())
    }
}

/// A range box between two corners with a line across its middle
#[derive(Debug, Clone, PartialEq)]
pub struct PlotBox {
    pub corner1: DVec2,
    pub corner2: DVec2,
    pub fill: Style,
    pub midline: Style,
}

impl PlotBox {
    pub fn new(corner1: DVec2, corner2: DVec2) -> Self {
        Self {
            corner1,
            corner2,
            fill: Style::new().with_fill(Rgb::WHITE).with_fill_opacity(0.0),
            midline: line_style(),
        }
    }

    /// Pixel origin and non-negative size
    pub fn pixel_rect(&self, mapper: &CoordinateMapper) -> (DVec2, DVec2) {
        let a = mapper.point(self.corner1);
        let b = mapper.point(self.corner2);
        (a.min(b), (a - b).abs())
    }
}

impl Plottable for PlotBox {
    fn to_node(&self, mapper: &CoordinateMapper) -> Option<Node> {
        let (origin, size) = self.pixel_rect(mapper);
        let mut group = AffineGroup::new(origin.x, origin.y);
        group.add_child(Rect::new(0.0, 0.0, size.x, size.y).with_style(self.fill.clone()));
        let mid = PathData::new().m(0.0, size.y / 2.0).l(size.x, size.y / 2.0);
        group.add_child(PathShape::new(mid).with_style(self.midline.clone()));
        Some(group.into())
    }
}

/// Pixel size of a data-space `(width, height)` measured from the origin
fn pixel_extent(mapper: &CoordinateMapper, width: f64, height: f64) -> DVec2 {
    let x0 = mapper.x(0.0);
    let y0 = mapper.y(0.0);
    dvec2((mapper.x(width) - x0).abs(), (mapper.y(height) - y0).abs())
}

/// A symmetric I-beam of half-height `radius` centred on a point
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorBars {
    pub center: DVec2,
    pub radius: f64,
    /// Data-space width of the caps
    pub width: f64,
    pub style: Style,
}

impl ErrorBars {
    pub fn new(center: DVec2, radius: f64) -> Self {
        Self {
            center,
            radius,
            width: 1.0,
            style: line_style(),
        }
    }
}

impl Plottable for ErrorBars {
    fn to_node(&self, mapper: &CoordinateMapper) -> Option<Node> {
        let e = pixel_extent(mapper, self.width, 2.0 * self.radius);
        let bar = PathData::new()
            .m(0.0, 0.0)
            .l(e.x, 0.0)
            .m(e.x / 2.0, 0.0)
            .l(e.x / 2.0, e.y)
            .m(e.x, e.y)
            .l(0.0, e.y);
        let at = mapper.point(self.center) - e / 2.0;
        let mut group = AffineGroup::new(at.x, at.y);
        group.add_child(PathShape::new(bar).with_style(self.style.clone()));
        Some(group.into())
    }
}

/// A one-sided error whisker: above the point for a positive radius, below
/// it for a negative one
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorWhisker {
    pub center: DVec2,
    pub radius: f64,
    pub width: f64,
    pub style: Style,
}

impl ErrorWhisker {
    pub fn new(center: DVec2, radius: f64) -> Self {
        Self {
            center,
            radius,
            width: 1.0,
            style: line_style(),
        }
    }
}

impl Plottable for ErrorWhisker {
    fn to_node(&self, mapper: &CoordinateMapper) -> Option<Node> {
        let e = pixel_extent(mapper, self.width, self.radius);
        let p = mapper.point(self.center);
        let (bar, y) = if self.radius > 0.0 {
            let bar = PathData::new()
                .m(0.0, 0.0)
                .l(e.x, 0.0)
                .m(e.x / 2.0, 0.0)
                .l(e.x / 2.0, e.y);
            (bar, p.y - e.y)
        } else if self.radius < 0.0 {
            let bar = PathData::new()
                .m(e.x / 2.0, 0.0)
                .l(e.x / 2.0, e.y)
                .m(0.0, e.y)
                .l(e.x, e.y);
            (bar, p.y)
        } else {
            return None;
        };
        let mut group = AffineGroup::new(p.x - e.x / 2.0, y);
        group.add_child(PathShape::new(bar).with_style(self.style.clone()));
        Some(group.into())
    }
}

/// A straight segment between two data points
#[derive(Debug, Clone, PartialEq)]
pub struct PlotLine {
    pub from: DVec2,
    pub to: DVec2,
    pub style: Style,
}

impl PlotLine {
    pub fn new(from: DVec2, to: DVec2) -> Self {
        Self {
            from,
            to,
            style: line_style(),
        }
    }
}

impl Plottable for PlotLine {
    fn to_node(&self, mapper: &CoordinateMapper) -> Option<Node> {
        let mut data = PathData::new();
        data.segment(mapper.point(self.from), mapper.point(self.to));
        Some(PathShape::new(data).with_style(self.style.clone()).into())
    }
}
