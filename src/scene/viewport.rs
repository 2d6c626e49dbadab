//! Nested coordinate systems
//!
//! A document is the outermost [`Viewport`] and the only one that declares
//! the namespace. A [`Section`] pairs a transform group with its own
//! embedded viewport, so a sub-drawing can be placed, scaled and sized
//! independently of its parent.

use crate::defaults::SVG_NAMESPACE;
use crate::log;
use crate::types::Dimension;

use super::group::AffineGroup;
use super::markup::{Attrs, wrap};
use super::shapes::active_flag;
use super::{Child, Container, LinearGradient, Render, RenderContext, render_children};

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub width: Dimension,
    pub height: Dimension,
    /// Outermost document flag
    pub top: bool,
    defs: Vec<LinearGradient>,
    children: Vec<Child>,
    pub active: bool,
}

impl Viewport {
    /// The outermost viewport of a document
    pub fn document(width: impl Into<Dimension>, height: impl Into<Dimension>) -> Self {
        Self {
            top: true,
            ..Self::embedded(width, height)
        }
    }

    /// A viewport nested in another drawing
    pub fn embedded(width: impl Into<Dimension>, height: impl Into<Dimension>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
            top: false,
            defs: Vec::new(),
            children: Vec::new(),
            active: true,
        }
    }

    pub fn add_def(&mut self, gradient: LinearGradient) {
        self.defs.push(gradient);
    }

    pub fn defs(&self) -> &[LinearGradient] {
        &self.defs
    }

    fn render_defs(&self, depth: usize) -> Option<String> {
        let body: Vec<String> = self.defs.iter().map(|g| g.render(depth + 1)).collect();
        if body.iter().all(String::is_empty) {
            return None;
        }
        Some(wrap(depth, "defs", &Attrs::new(), &body))
    }
}

impl Container for Viewport {
    fn children(&self) -> &[Child] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Child> {
        &mut self.children
    }
}

impl Render for Viewport {
    fn render_with(&self, ctx: &RenderContext, depth: usize) -> String {
        if !self.active {
            return String::new();
        }
        log::debug!(
            width = %self.width,
            height = %self.height,
            children = self.children.len(),
            "rendering viewport"
        );

        let declare_namespace = self.top && !ctx.in_document();
        let attrs = Attrs::new()
            .add("width", self.width)
            .add("height", self.height)
            .opt("xmlns", declare_namespace.then_some(SVG_NAMESPACE));

        let inner = ctx.enter_viewport(&self.defs);
        let mut body = Vec::with_capacity(self.children.len() + 1);
        body.extend(self.render_defs(depth + 1));
        body.extend(render_children(&self.children, &inner, depth + 1));
        wrap(depth, "svg", &attrs, &body)
    }

    active_flag!();
}

/// A transform group owning exactly one embedded viewport
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    group: AffineGroup,
    viewport: Viewport,
}

impl Section {
    pub fn new(x: f64, y: f64, width: impl Into<Dimension>, height: impl Into<Dimension>) -> Self {
        Self {
            group: AffineGroup::new(x, y),
            viewport: Viewport::embedded(width, height),
        }
    }

    pub fn x(&self) -> f64 {
        self.group.x
    }

    pub fn set_x(&mut self, x: f64) {
        self.group.x = x;
    }

    pub fn y(&self) -> f64 {
        self.group.y
    }

    pub fn set_y(&mut self, y: f64) {
        self.group.y = y;
    }

    pub fn width(&self) -> Dimension {
        self.viewport.width
    }

    pub fn set_width(&mut self, width: impl Into<Dimension>) {
        self.viewport.width = width.into();
    }

    pub fn height(&self) -> Dimension {
        self.viewport.height
    }

    pub fn set_height(&mut self, height: impl Into<Dimension>) {
        self.viewport.height = height.into();
    }

    pub fn set_scale(&mut self, xscale: f64, yscale: f64) {
        self.group.xscale = xscale;
        self.group.yscale = yscale;
    }

    pub fn set_rotation(&mut self, angle: f64, xc: f64, yc: f64) {
        self.group.angle = angle;
        self.group.xc = xc;
        self.group.yc = yc;
    }

    pub fn group(&self) -> &AffineGroup {
        &self.group
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn add_def(&mut self, gradient: LinearGradient) {
        self.viewport.add_def(gradient);
    }
}

impl Container for Section {
    fn children(&self) -> &[Child] {
        self.viewport.children()
    }

    fn children_mut(&mut self) -> &mut Vec<Child> {
        self.viewport.children_mut()
    }
}

impl Render for Section {
    fn render_with(&self, ctx: &RenderContext, depth: usize) -> String {
        if !self.is_active() {
            return String::new();
        }
        let inner = self.viewport.render_with(ctx, depth + 1);
        self.group.wrap_body(depth, &[inner])
    }

    fn is_active(&self) -> bool {
        self.group.active && self.viewport.active
    }

    fn set_active(&mut self, active: bool) {
        self.group.active = active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Node, Rect, Style};
    use crate::types::Rgb;

    #[test]
    fn document_declares_namespace_once() {
        let mut doc = Viewport::document(200, 100);
        doc.add_child(Viewport::document(50, 50));
        let out = Node::from(doc).render(0);
        assert_eq!(out.matches("xmlns=").count(), 1);
        assert!(out.starts_with(
            "<svg width=\"200\" height=\"100\" xmlns=\"http://www.w3.org/2000/svg\">"
        ));
        assert!(out.contains("\n   <svg width=\"50\" height=\"50\">\n"));
    }

    #[test]
    fn embedded_viewport_never_declares_namespace() {
        let out = Node::from(Viewport::embedded(Dimension::percent(50.0), 10)).render(0);
        assert_eq!(out, "<svg width=\"50%\" height=\"10\">\n</svg>");
    }

    #[test]
    fn defs_block_precedes_children() {
        let mut grad = LinearGradient::new("fade");
        grad.add_stop(0.0, Rgb::WHITE, 1.0);
        let mut doc = Viewport::document(10, 10);
        doc.add_def(grad);
        doc.add_child(Rect::default().with_style(Style::new().with_gradient("fade")));
        let out = Node::from(doc).render(0);

        let defs = out.find("<defs>").unwrap();
        let rect = out.find("<rect").unwrap();
        assert!(defs < rect);
        assert!(out.contains("fill=\"url(#fade)\""));
    }

    #[test]
    fn unknown_gradient_reference_is_omitted() {
        let mut doc = Viewport::document(10, 10);
        doc.add_child(Rect::default().with_style(Style::new().with_gradient("nowhere")));
        let out = Node::from(doc).render(0);
        assert!(!out.contains("url("));
        assert!(!out.contains("<defs>"));
    }

    #[test]
    fn section_delegates_to_group_and_viewport() {
        let mut section = Section::new(5.0, 6.0, 30, 40);
        section.set_x(7.0);
        section.set_height(45);
        section.add_child(Rect::default());
        assert_eq!(section.x(), 7.0);
        assert_eq!(section.group().x, 7.0);
        assert_eq!(section.height(), Dimension::Px(45.0));
        assert_eq!(section.viewport().children().len(), 1);

        let out = Node::from(section).render(0);
        assert_eq!(
            out,
            concat!(
                "<g transform=\"matrix(1,0,0,1,7,6)\">\n",
                "   <svg width=\"30\" height=\"45\">\n",
                "      <rect x=\"0\" y=\"0\" width=\"100%\" height=\"100%\" fill-opacity=\"0\"/>\n",
                "   </svg>\n",
                "</g>"
            )
        );
    }

    #[test]
    fn render_is_idempotent() {
        let mut doc = Viewport::document(100, 100);
        let mut section = Section::new(10.0, 10.0, 50, 50);
        section.add_child(Rect::new(0.0, 0.0, 5.0, 5.0));
        doc.add_labeled("inner", section);
        let node = Node::from(doc);
        let first = node.render(0);
        assert_eq!(node.render(0), first);
        assert!(!first.is_empty());
    }
}
