//! Display attributes shared by every drawable leaf

use crate::log;
use crate::types::{Rgb, fmt_num, unit_clamp};

use super::RenderContext;
use super::markup::Attrs;

/// Fill and stroke attributes of a drawable node.
///
/// Setters validate once: opacities clamp to [0, 1], stroke width clamps at
/// 0, and an empty dash pattern clears the attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    fill: Option<Rgb>,
    fill_opacity: Option<f64>,
    stroke: Option<Rgb>,
    stroke_width: Option<f64>,
    stroke_opacity: Option<f64>,
    stroke_dasharray: Option<Vec<u32>>,
    gradient: Option<String>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill(&self) -> Option<Rgb> {
        self.fill
    }

    pub fn set_fill(&mut self, fill: Option<Rgb>) {
        self.fill = fill;
    }

    pub fn fill_opacity(&self) -> Option<f64> {
        self.fill_opacity
    }

    pub fn set_fill_opacity(&mut self, opacity: Option<f64>) {
        self.fill_opacity = opacity.map(unit_clamp);
    }

    pub fn stroke(&self) -> Option<Rgb> {
        self.stroke
    }

    pub fn set_stroke(&mut self, stroke: Option<Rgb>) {
        self.stroke = stroke;
    }

    pub fn stroke_width(&self) -> Option<f64> {
        self.stroke_width
    }

    pub fn set_stroke_width(&mut self, width: Option<f64>) {
        self.stroke_width = width.map(|w| if w.is_nan() { 0.0 } else { w.max(0.0) });
    }

    pub fn stroke_opacity(&self) -> Option<f64> {
        self.stroke_opacity
    }

    pub fn set_stroke_opacity(&mut self, opacity: Option<f64>) {
        self.stroke_opacity = opacity.map(unit_clamp);
    }

    pub fn stroke_dasharray(&self) -> Option<&[u32]> {
        self.stroke_dasharray.as_deref()
    }

    pub fn set_stroke_dasharray(&mut self, pattern: &[u32]) {
        self.stroke_dasharray = if pattern.is_empty() { None } else { Some(pattern.to_vec()) };
    }

    /// Name of the gradient definition this fill refers to
    pub fn gradient(&self) -> Option<&str> {
        self.gradient.as_deref()
    }

    pub fn set_gradient(&mut self, name: Option<&str>) {
        self.gradient = name.map(str::to_string);
    }

    pub fn with_fill(mut self, fill: Rgb) -> Self {
        self.set_fill(Some(fill));
        self
    }

    pub fn with_fill_opacity(mut self, opacity: f64) -> Self {
        self.set_fill_opacity(Some(opacity));
        self
    }

    pub fn with_stroke(mut self, stroke: Rgb, width: f64) -> Self {
        self.set_stroke(Some(stroke));
        self.set_stroke_width(Some(width));
        self
    }

    pub fn with_stroke_opacity(mut self, opacity: f64) -> Self {
        self.set_stroke_opacity(Some(opacity));
        self
    }

    pub fn with_dasharray(mut self, pattern: &[u32]) -> Self {
        self.set_stroke_dasharray(pattern);
        self
    }

    pub fn with_gradient(mut self, name: &str) -> Self {
        self.set_gradient(Some(name));
        self
    }

    /// Style attributes in output order.
    ///
    /// A gradient reference overrides the plain fill when the render pass
    /// can see a definition with that name; otherwise it is dropped.
    pub fn attrs(&self, ctx: &RenderContext) -> Attrs {
        let gradient = self.gradient.as_deref().and_then(|name| {
            if ctx.resolves_gradient(name) {
                Some(format!("url(#{})", name))
            } else {
                log::warn!(gradient = name, "unresolved gradient reference omitted");
                None
            }
        });
        let fill = gradient.or_else(|| self.fill.map(Rgb::to_hex));
        let dash = self.stroke_dasharray.as_ref().map(|d| {
            d.iter().map(u32::to_string).collect::<Vec<_>>().join(" ")
        });

        Attrs::new()
            .opt("fill", fill)
            .opt("fill-opacity", self.fill_opacity.map(fmt_num))
            .opt("stroke", self.stroke.map(Rgb::to_hex))
            .opt("stroke-width", self.stroke_width.map(fmt_num))
            .opt("stroke-opacity", self.stroke_opacity.map(fmt_num))
            .opt("stroke-dasharray", dash)
    }
}

/// Nodes that carry a [`Style`].
///
/// `inherit_style` is the attribute-level copy: it copies display attributes
/// from any other styled node into this one, leaving geometry untouched.
pub trait Styled {
    fn style(&self) -> &Style;
    fn style_mut(&mut self) -> &mut Style;

    fn inherit_style(&mut self, other: &dyn Styled) {
        *self.style_mut() = other.style().clone();
    }
}
