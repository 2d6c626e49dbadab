//! Transform-carrying groups

use glam::{DAffine2, DVec2};

use crate::types::fmt_num;

use super::markup::{Attrs, wrap};
use super::shapes::active_flag;
use super::{Child, Container, Render, RenderContext, render_children};

/// A group establishing a local frame: rotate by `angle` degrees about the
/// pivot `(xc, yc)`, scale by `(xscale, yscale)`, then translate by `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct AffineGroup {
    pub x: f64,
    pub y: f64,
    pub xc: f64,
    pub yc: f64,
    pub xscale: f64,
    pub yscale: f64,
    pub angle: f64,
    children: Vec<Child>,
    pub active: bool,
}

impl Default for AffineGroup {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            xc: 0.0,
            yc: 0.0,
            xscale: 1.0,
            yscale: 1.0,
            angle: 0.0,
            children: Vec::new(),
            active: true,
        }
    }
}

impl AffineGroup {
    /// A pure translation
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, ..Self::default() }
    }

    pub fn with_scale(mut self, xscale: f64, yscale: f64) -> Self {
        self.xscale = xscale;
        self.yscale = yscale;
        self
    }

    pub fn with_rotation(mut self, angle: f64, xc: f64, yc: f64) -> Self {
        self.angle = angle;
        self.xc = xc;
        self.yc = yc;
        self
    }

    /// The six matrix coefficients `[a, b, c, d, e, f]`
    pub fn matrix(&self) -> [f64; 6] {
        let (s, c) = self.angle.to_radians().sin_cos();
        let (sx, sy) = (self.xscale, self.yscale);
        [
            sx * c,
            sy * s,
            -sx * s,
            sy * c,
            self.x + self.xc * (1.0 + sx * s - sx * c),
            self.y + self.yc * (1.0 - sy * s - sy * c),
        ]
    }

    pub fn affine(&self) -> DAffine2 {
        DAffine2::from_cols_array(&self.matrix())
    }

    /// Map a point from this group's local frame to its parent's frame
    pub fn apply(&self, p: DVec2) -> DVec2 {
        self.affine().transform_point2(p)
    }

    pub fn transform(&self) -> String {
        let m = self.matrix().map(fmt_num);
        format!("matrix({})", m.join(","))
    }

    /// Wrap already-rendered lines in this group's `<g>` element
    pub(crate) fn wrap_body(&self, depth: usize, body: &[String]) -> String {
        wrap(depth, "g", &Attrs::new().add("transform", self.transform()), body)
    }
}

impl Container for AffineGroup {
    fn children(&self) -> &[Child] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Child> {
        &mut self.children
    }
}

impl Render for AffineGroup {
    fn render_with(&self, ctx: &RenderContext, depth: usize) -> String {
        if !self.active {
            return String::new();
        }
        let body = render_children(&self.children, ctx, depth + 1);
        self.wrap_body(depth, &body)
    }

    active_flag!();
}
