//! Axis frame layout
//!
//! The frame draws the plot border, tick marks, tick labels and axis titles
//! as one composite path plus text nodes. Ticks that land exactly on a plot
//! extremum can double as a border corner: when the plot does not draw the
//! adjoining edge itself, the tick is folded into a merged polyline so the
//! corner has no seam and no duplicate stroke.

use glam::{DVec2, dvec2};

use crate::defaults::{AXIS_THICKNESS, DIST_TO_LABEL, TITLE_OFFSET};
use crate::log;
use crate::scene::{Anchor, Baseline, Container, Node, PathData, PathShape, Render, Section, Style, Text};
use crate::types::{Dimension, Rgb};

use super::mapper::{map_x, map_y};
use super::plot::{Edges, Plot};

/// A labelled position on one axis, in data space
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

impl Tick {
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// Settings and ticks for one axis
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    /// Tick mark length; zero disables tick marks and corner merging
    pub thickness: f64,
    pub ticks: Vec<Tick>,
    /// Template for tick labels; no labels without one
    pub tick_text: Option<Text>,
    pub title: Option<Text>,
    pub dist_to_label: f64,
    pub title_offset: f64,
}

impl Default for Axis {
    fn default() -> Self {
        Self {
            thickness: AXIS_THICKNESS,
            ticks: Vec::new(),
            tick_text: None,
            title: None,
            dist_to_label: DIST_TO_LABEL,
            title_offset: TITLE_OFFSET,
        }
    }
}

impl Axis {
    pub fn add_tick(&mut self, value: f64, label: impl Into<String>) {
        self.ticks.push(Tick::new(value, label));
    }

    /// One tick per value, labelled with the value itself
    pub fn with_ticks(mut self, values: &[f64]) -> Self {
        for v in values {
            self.add_tick(*v, v.to_string());
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
struct PixelTick {
    pixel: f64,
    label: String,
    value: f64,
}

/// In-range ticks sorted by value, with their pixel positions
fn pixel_ticks(
    ticks: &[Tick],
    in_range: impl Fn(f64) -> bool,
    map: impl Fn(&[f64]) -> Vec<f64>,
) -> Vec<PixelTick> {
    let mut sorted: Vec<&Tick> = ticks.iter().filter(|t| in_range(t.value)).collect();
    sorted.sort_by(|a, b| a.value.total_cmp(&b.value));
    let values: Vec<f64> = sorted.iter().map(|t| t.value).collect();
    map(&values)
        .into_iter()
        .zip(sorted)
        .map(|(pixel, t)| PixelTick {
            pixel,
            label: t.label.clone(),
            value: t.value,
        })
        .collect()
}

/// Remove the first tick when `cond` holds and it sits on `extremum`
fn take_first(ticks: &mut Vec<PixelTick>, cond: bool, extremum: f64) -> Option<PixelTick> {
    if cond && ticks.first().is_some_and(|t| t.value == extremum) {
        Some(ticks.remove(0))
    } else {
        None
    }
}

/// Remove the last tick when `cond` holds and it sits on `extremum`
fn take_last(ticks: &mut Vec<PixelTick>, cond: bool, extremum: f64) -> Option<PixelTick> {
    if cond && ticks.last().is_some_and(|t| t.value == extremum) {
        ticks.pop()
    } else {
        None
    }
}

/// Everything the frame draws, in graph pixel coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLayout {
    pub border: PathData,
    pub labels: Vec<Text>,
    pub titles: Vec<Text>,
    /// Edges absorbed by a merged corner polyline
    pub merged: Edges,
}

/// The axes around a plot
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub style: Style,
    pub active: bool,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            x_axis: Axis::default(),
            y_axis: Axis::default(),
            style: Style::new().with_stroke(Rgb::BLACK, 1.0).with_fill_opacity(0.0),
            active: true,
        }
    }
}

impl Frame {
    /// Compute the border path and text placement for `plot`
    pub fn layout(&self, plot: &Plot) -> FrameLayout {
        let mut out = FrameLayout {
            border: PathData::new(),
            labels: Vec::new(),
            titles: Vec::new(),
            merged: Edges::NONE,
        };
        self.layout_y(plot, &mut out);
        self.layout_x(plot, &mut out);
        self.layout_titles(plot, &mut out);

        let (x, y, w, h) = (plot.x, plot.y, plot.w, plot.h);
        let wanted = plot.edges;
        if wanted.top && !out.merged.top {
            out.border.segment(dvec2(x, y), dvec2(x + w, y));
        }
        if wanted.right && !out.merged.right {
            out.border.segment(dvec2(x + w, y), dvec2(x + w, y + h));
        }
        if wanted.bottom && !out.merged.bottom {
            out.border.segment(dvec2(x + w, y + h), dvec2(x, y + h));
        }
        if wanted.left && !out.merged.left {
            out.border.segment(dvec2(x, y + h), dvec2(x, y));
        }

        log::debug!(
            merged_left = out.merged.left,
            merged_bottom = out.merged.bottom,
            labels = out.labels.len(),
            commands = out.border.len(),
            "frame laid out"
        );
        out
    }

    fn layout_y(&self, plot: &Plot, out: &mut FrameLayout) {
        let axis = &self.y_axis;
        let ext = plot.extent();
        let ticks = pixel_ticks(&axis.ticks, |v| ext.contains_y(v), |vs| {
            map_y(vs, ext.ymin(), ext.ymax(), plot.h)
                .into_iter()
                .map(|p| p + plot.y)
                .collect()
        });

        let lw = axis.thickness;
        let x2 = plot.x;
        let x1 = x2 - lw;
        let may_merge = lw > 0.0 && plot.edges.left;

        let mut inner = ticks.clone();
        let bottom = take_first(&mut inner, may_merge && !plot.edges.bottom, ext.ymin());
        let top = take_last(&mut inner, may_merge && !plot.edges.top, ext.ymax());

        let corner: Option<Vec<DVec2>> = match (&bottom, &top) {
            (Some(b), Some(t)) => Some(vec![
                dvec2(x1, b.pixel),
                dvec2(x2, b.pixel),
                dvec2(x2, t.pixel),
                dvec2(x1, t.pixel),
            ]),
            (Some(b), None) => Some(vec![dvec2(x1, b.pixel), dvec2(x2, b.pixel), dvec2(x2, plot.y)]),
            (None, Some(t)) => Some(vec![
                dvec2(x2, plot.y + plot.h),
                dvec2(x2, t.pixel),
                dvec2(x1, t.pixel),
            ]),
            (None, None) => None,
        };
        if let Some(points) = corner {
            out.border.polyline(&points);
            out.merged.left = true;
        }

        if lw > 0.0 {
            for tick in &inner {
                log::trace!(value = tick.value, pixel = tick.pixel, "y tick");
                out.border.segment(dvec2(x1, tick.pixel), dvec2(x2, tick.pixel));
            }
        }

        if let Some(template) = &axis.tick_text {
            let x = x1 - axis.dist_to_label;
            out.labels
                .extend(ticks.iter().map(|t| template.instance(&t.label, x, t.pixel)));
        }
    }

    fn layout_x(&self, plot: &Plot, out: &mut FrameLayout) {
        let axis = &self.x_axis;
        let ext = plot.extent();
        let ticks = pixel_ticks(&axis.ticks, |v| ext.contains_x(v), |vs| {
            map_x(vs, ext.xmin(), ext.xmax(), plot.w)
                .into_iter()
                .map(|p| p + plot.x)
                .collect()
        });

        let lw = axis.thickness;
        let y2 = plot.y + plot.h;
        let y1 = y2 + lw;
        let may_merge = lw > 0.0 && plot.edges.bottom;

        let mut inner = ticks.clone();
        let left = take_first(&mut inner, may_merge && !plot.edges.left, ext.xmin());
        let right = take_last(&mut inner, may_merge && !plot.edges.right, ext.xmax());

        let corner: Option<Vec<DVec2>> = match (&left, &right) {
            (Some(l), Some(r)) => Some(vec![
                dvec2(l.pixel, y1),
                dvec2(l.pixel, y2),
                dvec2(r.pixel, y2),
                dvec2(r.pixel, y1),
            ]),
            (None, Some(r)) => Some(vec![dvec2(plot.x, y2), dvec2(r.pixel, y2), dvec2(r.pixel, y1)]),
            (Some(l), None) => Some(vec![
                dvec2(l.pixel, y1),
                dvec2(l.pixel, y2),
                dvec2(plot.x + plot.w, y2),
            ]),
            (None, None) => None,
        };
        if let Some(points) = corner {
            out.border.polyline(&points);
            out.merged.bottom = true;
        }

        if lw > 0.0 {
            for tick in &inner {
                log::trace!(value = tick.value, pixel = tick.pixel, "x tick");
                out.border.segment(dvec2(tick.pixel, y1), dvec2(tick.pixel, y2));
            }
        }

        if let Some(template) = &axis.tick_text {
            let y = y1 + axis.dist_to_label;
            out.labels
                .extend(ticks.iter().map(|t| template.instance(&t.label, t.pixel, y)));
        }
    }

    fn layout_titles(&self, plot: &Plot, out: &mut FrameLayout) {
        if let Some(title) = &self.x_axis.title {
            let mut t = title.clone();
            t.x = Dimension::Px(plot.x + plot.w / 2.0);
            t.y = Dimension::Px(plot.y + plot.h + self.x_axis.thickness + self.x_axis.title_offset);
            t.anchor = Some(Anchor::Middle);
            t.baseline = Some(Baseline::Central);
            out.titles.push(t);
        }
        if let Some(title) = &self.y_axis.title {
            let mut t = title.clone();
            t.x = Dimension::Px(plot.x - self.y_axis.thickness - self.y_axis.title_offset);
            t.y = Dimension::Px(plot.y + plot.h / 2.0);
            t.angle = -90.0;
            t.anchor = Some(Anchor::Middle);
            t.baseline = Some(Baseline::Central);
            out.titles.push(t);
        }
    }

    /// The frame as a full-size section over the graph
    pub fn to_section(&self, plot: &Plot) -> Section {
        let layout = self.layout(plot);
        let mut section = Section::new(0.0, 0.0, Dimension::FULL, Dimension::FULL);
        section.set_active(self.active);
        section.add_child(PathShape::new(layout.border).with_style(self.style.clone()));
        for text in layout.labels.into_iter().chain(layout.titles) {
            section.add_child(Node::from(text));
        }
        section
    }
}
