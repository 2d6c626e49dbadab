//! Leaf shapes
//!
//! Each shape is a plain value type that knows how to write itself as one
//! markup element. Shapes own no children.

use std::f64::consts::PI;
use std::fmt;

use glam::{DVec2, dvec2};

use crate::types::{Dimension, fmt_num};

use super::markup::{Attrs, leaf};
use super::style::Style;
use super::{Render, RenderContext};

/// `is_active` / `set_active` for types with a plain `active: bool` field
macro_rules! active_flag {
    () => {
        fn is_active(&self) -> bool {
            self.active
        }

        fn set_active(&mut self, active: bool) {
            self.active = active;
        }
    };
}
pub(crate) use active_flag;

macro_rules! impl_styled {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::scene::Styled for $ty {
                fn style(&self) -> &$crate::scene::Style {
                    &self.style
                }

                fn style_mut(&mut self) -> &mut $crate::scene::Style {
                    &mut self.style
                }
            }
        )*
    };
}
pub(crate) use impl_styled;

// ============================================================================
// Path data
// ============================================================================

/// One command of a path's `d` attribute
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(DVec2),
    LineTo(DVec2),
    Arc {
        radius: DVec2,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: DVec2,
    },
    Close,
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo(p) => write!(f, "M {} {}", fmt_num(p.x), fmt_num(p.y)),
            PathCommand::LineTo(p) => write!(f, "L {} {}", fmt_num(p.x), fmt_num(p.y)),
            PathCommand::Arc { radius, rotation, large_arc, sweep, to } => write!(
                f,
                "A {} {} {} {} {} {} {}",
                fmt_num(radius.x),
                fmt_num(radius.y),
                fmt_num(*rotation),
                u8::from(*large_arc),
                u8::from(*sweep),
                fmt_num(to.x),
                fmt_num(to.y)
            ),
            PathCommand::Close => f.write_str("Z"),
        }
    }
}

/// Fluent builder for path data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData(Vec<PathCommand>);

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn m(mut self, x: f64, y: f64) -> Self {
        self.move_to(dvec2(x, y));
        self
    }

    pub fn l(mut self, x: f64, y: f64) -> Self {
        self.line_to(dvec2(x, y));
        self
    }

    pub fn a(mut self, rx: f64, ry: f64, large_arc: bool, sweep: bool, x: f64, y: f64) -> Self {
        self.0.push(PathCommand::Arc {
            radius: dvec2(rx, ry),
            rotation: 0.0,
            large_arc,
            sweep,
            to: dvec2(x, y),
        });
        self
    }

    pub fn z(mut self) -> Self {
        self.0.push(PathCommand::Close);
        self
    }

    pub fn move_to(&mut self, p: DVec2) {
        self.0.push(PathCommand::MoveTo(p));
    }

    pub fn line_to(&mut self, p: DVec2) {
        self.0.push(PathCommand::LineTo(p));
    }

    /// Append a straight segment as an independent sub-path
    pub fn segment(&mut self, from: DVec2, to: DVec2) {
        self.move_to(from);
        self.line_to(to);
    }

    /// Append an open polyline as one sub-path
    pub fn polyline(&mut self, points: &[DVec2]) {
        if let Some((first, rest)) = points.split_first() {
            self.move_to(*first);
            for p in rest {
                self.line_to(*p);
            }
        }
    }

    /// Append every command of `other`
    pub fn append(&mut self, other: &PathData) {
        self.0.extend_from_slice(&other.0);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.0
    }

    /// Split into sub-paths, each starting at a move command
    pub fn subpaths(&self) -> Vec<&[PathCommand]> {
        let mut out = Vec::new();
        let mut start = 0;
        for (i, cmd) in self.0.iter().enumerate() {
            if matches!(cmd, PathCommand::MoveTo(_)) && i > start {
                out.push(&self.0[start..i]);
                start = i;
            }
        }
        if start < self.0.len() {
            out.push(&self.0[start..]);
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", cmd)?;
        }
        Ok(())
    }
}

// ============================================================================
// Shape Types
// ============================================================================

/// A rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub x: Dimension,
    pub y: Dimension,
    pub width: Dimension,
    pub height: Dimension,
    pub rx: Option<f64>,
    pub ry: Option<f64>,
    pub style: Style,
    pub active: bool,
}

impl Default for Rect {
    /// A rectangle covering its whole viewport, transparent until styled
    fn default() -> Self {
        Self {
            x: Dimension::ZERO,
            y: Dimension::ZERO,
            width: Dimension::FULL,
            height: Dimension::FULL,
            rx: None,
            ry: None,
            style: Style::new().with_fill_opacity(0.0),
            active: true,
        }
    }
}

impl Rect {
    pub fn new(
        x: impl Into<Dimension>,
        y: impl Into<Dimension>,
        width: impl Into<Dimension>,
        height: impl Into<Dimension>,
    ) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            width: width.into(),
            height: height.into(),
            ..Self::default()
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_corner_radius(mut self, rx: f64, ry: f64) -> Self {
        self.rx = Some(rx);
        self.ry = Some(ry);
        self
    }
}

impl Render for Rect {
    fn render_with(&self, ctx: &RenderContext, depth: usize) -> String {
        if !self.active {
            return String::new();
        }
        let attrs = Attrs::new()
            .add("x", self.x)
            .add("y", self.y)
            .add("width", self.width)
            .add("height", self.height)
            .opt("rx", self.rx.map(fmt_num))
            .opt("ry", self.ry.map(fmt_num))
            .extend(self.style.attrs(ctx));
        leaf(depth, "rect", &attrs)
    }

    active_flag!();
}

/// A circle
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub style: Style,
    pub active: bool,
}

impl Circle {
    pub fn new(cx: f64, cy: f64, r: f64) -> Self {
        Self {
            cx,
            cy,
            r,
            style: Style::new(),
            active: true,
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Render for Circle {
    fn render_with(&self, ctx: &RenderContext, depth: usize) -> String {
        if !self.active {
            return String::new();
        }
        let attrs = Attrs::new()
            .add("cx", fmt_num(self.cx))
            .add("cy", fmt_num(self.cy))
            .add("r", fmt_num(self.r))
            .extend(self.style.attrs(ctx));
        leaf(depth, "circle", &attrs)
    }

    active_flag!();
}

/// A free-form path
#[derive(Debug, Clone, PartialEq)]
pub struct PathShape {
    pub data: PathData,
    pub style: Style,
    pub active: bool,
}

impl PathShape {
    pub fn new(data: PathData) -> Self {
        Self {
            data,
            style: Style::new(),
            active: true,
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Render for PathShape {
    fn render_with(&self, ctx: &RenderContext, depth: usize) -> String {
        // An empty `d` is invalid markup; drop the element instead
        if !self.active || self.data.is_empty() {
            return String::new();
        }
        let attrs = Attrs::new().add("d", &self.data).extend(self.style.attrs(ctx));
        leaf(depth, "path", &attrs)
    }

    active_flag!();
}

/// A closed polygon
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub points: Vec<DVec2>,
    pub style: Style,
    pub active: bool,
}

impl Polygon {
    pub fn new(points: Vec<DVec2>) -> Self {
        Self {
            points,
            style: Style::new(),
            active: true,
        }
    }
}

impl Render for Polygon {
    fn render_with(&self, ctx: &RenderContext, depth: usize) -> String {
        if !self.active || self.points.is_empty() {
            return String::new();
        }
        let points = self
            .points
            .iter()
            .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
            .collect::<Vec<_>>()
            .join(" ");
        let attrs = Attrs::new().add("points", points).extend(self.style.attrs(ctx));
        leaf(depth, "polygon", &attrs)
    }

    active_flag!();
}

/// A pie slice: an arc of `theta` radians starting at twelve o'clock,
/// closed through the centre, then rotated by `angle` degrees about it
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub theta: f64,
    pub angle: f64,
    pub style: Style,
    pub active: bool,
}

impl Wedge {
    pub fn new(cx: f64, cy: f64, r: f64, theta: f64) -> Self {
        Self {
            cx,
            cy,
            r,
            theta,
            angle: 0.0,
            style: Style::new(),
            active: true,
        }
    }

    pub fn path(&self) -> PathData {
        let x1 = self.cx;
        let y1 = self.cy - self.r;
        let x2 = x1 + self.r * (PI - self.theta).sin();
        let y2 = self.cy + self.r * (PI - self.theta).cos();
        let large_arc = x2 - x1 < 0.0;
        PathData::new()
            .m(x1, y1)
            .a(self.r, self.r, large_arc, true, x2, y2)
            .l(self.cx, self.cy)
            .z()
    }
}

impl Render for Wedge {
    fn render_with(&self, ctx: &RenderContext, depth: usize) -> String {
        if !self.active {
            return String::new();
        }
        let transform = format!(
            "rotate({}, {}, {})",
            fmt_num(self.angle),
            fmt_num(self.cx),
            fmt_num(self.cy)
        );
        let attrs = Attrs::new()
            .add("d", self.path())
            .add("transform", transform)
            .extend(self.style.attrs(ctx));
        leaf(depth, "path", &attrs)
    }

    active_flag!();
}

/// An external raster or vector image
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub x: Dimension,
    pub y: Dimension,
    pub href: String,
    pub active: bool,
}

impl Image {
    pub fn new(x: impl Into<Dimension>, y: impl Into<Dimension>, href: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            href: href.into(),
            active: true,
        }
    }
}

impl Render for Image {
    fn render_with(&self, _ctx: &RenderContext, depth: usize) -> String {
        if !self.active || self.href.is_empty() {
            return String::new();
        }
        let attrs = Attrs::new()
            .add("x", self.x)
            .add("y", self.y)
            .add("href", &self.href);
        leaf(depth, "image", &attrs)
    }

    active_flag!();
}

impl_styled!(Rect, Circle, PathShape, Polygon, Wedge);

// ============================================================================
// Tests
// ============================================================================
