//! Text nodes
//!
//! A [`Text`] needs a bound [`Font`] to render. Without one it switches
//! itself off and contributes nothing, so a partially configured chart still
//! produces a document.

use std::cell::Cell;

use crate::defaults::TEXT_BOX_MARGIN;
use crate::log;
use crate::text::{Font, wrap};
use crate::types::{Dimension, Rgb, fmt_num};

use super::markup::{Attrs, escape_xml, indent};
use super::shapes::{active_flag, impl_styled};
use super::style::Style;
use super::viewport::Section;
use super::{Container, Render, RenderContext};

/// Horizontal alignment relative to the text position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    pub fn as_str(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// Vertical alignment relative to the text position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Baseline {
    Auto,
    TextBottom,
    Alphabetic,
    Ideographic,
    Middle,
    Central,
    Mathematical,
    Hanging,
    TextTop,
}

impl Baseline {
    pub fn as_str(self) -> &'static str {
        match self {
            Baseline::Auto => "auto",
            Baseline::TextBottom => "text-bottom",
            Baseline::Alphabetic => "alphabetic",
            Baseline::Ideographic => "ideographic",
            Baseline::Middle => "middle",
            Baseline::Central => "central",
            Baseline::Mathematical => "mathematical",
            Baseline::Hanging => "hanging",
            Baseline::TextTop => "text-top",
        }
    }
}

/// A single line of text
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub x: Dimension,
    pub y: Dimension,
    pub text: String,
    /// Rotation in degrees about `(x, y)`
    pub angle: f64,
    pub font: Option<Font>,
    pub anchor: Option<Anchor>,
    pub baseline: Option<Baseline>,
    pub style: Style,
    active: Cell<bool>,
}

impl Default for Text {
    fn default() -> Self {
        Self {
            x: Dimension::ZERO,
            y: Dimension::ZERO,
            text: String::new(),
            angle: 0.0,
            font: None,
            anchor: None,
            baseline: None,
            style: Style::new().with_fill(Rgb::BLACK),
            active: Cell::new(true),
        }
    }
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    pub fn at(mut self, x: impl Into<Dimension>, y: impl Into<Dimension>) -> Self {
        self.x = x.into();
        self.y = y.into();
        self
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn with_baseline(mut self, baseline: Baseline) -> Self {
        self.baseline = Some(baseline);
        self
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// A copy of this template carrying different content at a new position
    pub fn instance(&self, text: impl Into<String>, x: f64, y: f64) -> Self {
        let mut t = self.clone();
        t.text = text.into();
        t.x = Dimension::Px(x);
        t.y = Dimension::Px(y);
        t
    }

    /// Rendered width in pixels, if a font is bound
    pub fn width(&self) -> Option<f64> {
        self.font.as_ref().map(|f| f.text_width(&self.text))
    }
}

impl Render for Text {
    fn render_with(&self, ctx: &RenderContext, depth: usize) -> String {
        if !self.active.get() {
            return String::new();
        }
        let Some(font) = &self.font else {
            log::warn!(text = %self.text, "text node has no font; deactivating");
            self.active.set(false);
            return String::new();
        };

        let relative =
            matches!(self.x, Dimension::Percent(_)) || matches!(self.y, Dimension::Percent(_));
        let rotated = self.angle != 0.0 && !relative;
        if self.angle != 0.0 && relative {
            log::warn!(text = %self.text, "rotation needs a pixel position; drawing unrotated");
        }
        let (x, y) = if rotated {
            (Dimension::ZERO, Dimension::ZERO)
        } else {
            (self.x, self.y)
        };
        let transform = rotated.then(|| {
            format!("translate({}, {}) rotate({})", self.x, self.y, fmt_num(self.angle))
        });

        let attrs = Attrs::new()
            .add("x", x)
            .add("y", y)
            .add("font-family", &font.family)
            .add("font-size", fmt_num(font.size))
            .add("font-weight", &font.weight)
            .opt("dominant-baseline", self.baseline.map(Baseline::as_str))
            .opt("text-anchor", self.anchor.map(Anchor::as_str))
            .add("xml:space", "preserve")
            .opt("transform", transform)
            .extend(self.style.attrs(ctx));
        format!("{}<text{}>{}</text>", indent(depth), attrs, escape_xml(&self.text))
    }

    fn is_active(&self) -> bool {
        self.active.get()
    }

    fn set_active(&mut self, active: bool) {
        self.active.set(active);
    }
}

/// A block of text wrapped to a column width.
///
/// Renders as a section of `width` pixels holding one [`Text`] per wrapped
/// line, centred on `(i + 0.5) × line_height`.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    /// Fixed block height. When zero, the height follows the line count.
    pub height: f64,
    /// Line height used when `height` is zero. Zero means 1.2 × font size.
    pub line_height: f64,
    /// Spaces per tab
    pub indent: usize,
    pub template: Text,
    pub background: super::Rect,
    pub active: bool,
}

impl Paragraph {
    pub fn new(template: Text, width: f64) -> Self {
        let mut background = super::Rect::default()
            .with_style(Style::new().with_fill(Rgb::WHITE).with_fill_opacity(1.0));
        background.set_active(false);
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height: 0.0,
            line_height: 0.0,
            indent: 4,
            template,
            background,
            active: true,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        match &self.template.font {
            Some(font) => wrap(font, &self.template.text, self.width, self.indent),
            None => Vec::new(),
        }
    }

    fn effective_line_height(&self, count: usize) -> f64 {
        if self.height > 0.0 && count > 0 {
            self.height / count as f64
        } else if self.line_height > 0.0 {
            self.line_height
        } else {
            self.template.font.as_ref().map_or(0.0, |f| f.size * 1.2)
        }
    }

    /// Height of the laid-out block
    pub fn height(&self) -> f64 {
        if self.height > 0.0 {
            return self.height;
        }
        let count = self.lines().len();
        self.effective_line_height(count) * count as f64
    }

    /// Lay the wrapped lines out as a section
    pub fn to_section(&self) -> Section {
        let lines = self.lines();
        let lh = self.effective_line_height(lines.len());
        let mut section = Section::new(self.x, self.y, self.width, lh * lines.len() as f64);
        if self.height > 0.0 {
            section.set_height(self.height);
        }
        section.add_child(self.background.clone());
        for (i, line) in lines.into_iter().enumerate() {
            let mut t = self.template.instance(line, 0.0, lh * (i as f64 + 0.5));
            t.baseline = Some(Baseline::Central);
            section.add_child(t);
        }
        section
    }
}

impl Render for Paragraph {
    fn render_with(&self, ctx: &RenderContext, depth: usize) -> String {
        if !self.active {
            return String::new();
        }
        if self.template.font.is_none() {
            log::warn!("paragraph template has no font; nothing to lay out");
            return String::new();
        }
        self.to_section().render_with(ctx, depth)
    }

    active_flag!();
}

/// Vertical placement of a [`TextBox`] line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

/// One line of text aligned inside a fixed box.
///
/// Horizontally the text starts at the left margin, centres on 50% or ends
/// at the right margin. Vertically it hangs from the top margin, centres on
/// 50% or sits on the bottom margin.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub align: Anchor,
    pub valign: VAlign,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
    pub text: Text,
    pub background: super::Rect,
    pub active: bool,
}

impl TextBox {
    pub fn new(text: Text, width: f64, height: f64) -> Self {
        let mut background = super::Rect::default();
        background.set_active(false);
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
            align: Anchor::Middle,
            valign: VAlign::Center,
            margin_left: TEXT_BOX_MARGIN,
            margin_right: TEXT_BOX_MARGIN,
            margin_top: TEXT_BOX_MARGIN,
            margin_bottom: TEXT_BOX_MARGIN,
            text,
            background,
            active: true,
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_alignment(mut self, align: Anchor, valign: VAlign) -> Self {
        self.align = align;
        self.valign = valign;
        self
    }

    pub fn with_margins(mut self, left: f64, right: f64, top: f64, bottom: f64) -> Self {
        self.margin_left = left;
        self.margin_right = right;
        self.margin_top = top;
        self.margin_bottom = bottom;
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text.text = text.into();
    }

    /// The text copy as placed inside the box
    pub fn placed_text(&self) -> Text {
        let mut t = self.text.clone();
        t.x = match self.align {
            Anchor::Start => Dimension::Px(self.margin_left),
            Anchor::Middle => Dimension::percent(50.0),
            Anchor::End => Dimension::Px(self.width - self.margin_right),
        };
        t.anchor = Some(self.align);
        let (y, baseline) = match self.valign {
            VAlign::Top => (Dimension::Px(self.margin_top), Baseline::Hanging),
            VAlign::Center => (Dimension::percent(50.0), Baseline::Central),
            VAlign::Bottom => (Dimension::Px(self.height - self.margin_bottom), Baseline::Auto),
        };
        t.y = y;
        t.baseline = Some(baseline);
        t
    }

    pub fn to_section(&self) -> Section {
        let mut section = Section::new(self.x, self.y, self.width, self.height);
        section.add_child(self.background.clone());
        section.add_child(self.placed_text());
        section
    }
}

impl Render for TextBox {
    fn render_with(&self, ctx: &RenderContext, depth: usize) -> String {
        if !self.active {
            return String::new();
        }
        self.to_section().render_with(ctx, depth)
    }

    active_flag!();
}

impl_styled!(Text);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Node, Styled};

    fn font() -> Font {
        Font::new("Arial", 12.0)
    }

    #[test]
    fn text_without_font_deactivates() {
        let node = Node::from(Text::new("orphan"));
        assert!(node.is_active());
        assert_eq!(node.render(0), "");
        assert!(!node.is_active());
    }

    #[test]
    fn text_attribute_order() {
        let t = Text::new("a < b")
            .with_font(font())
            .at(10, 20)
            .with_anchor(Anchor::Middle)
            .with_baseline(Baseline::Central);
        assert_eq!(
            t.render_with(&RenderContext::default(), 0),
            concat!(
                "<text x=\"10\" y=\"20\" font-family=\"Arial\" font-size=\"12\" ",
                "font-weight=\"normal\" dominant-baseline=\"central\" text-anchor=\"middle\" ",
                "xml:space=\"preserve\" fill=\"#000000\">a &lt; b</text>"
            )
        );
    }

    #[test]
    fn rotated_text_moves_position_into_transform() {
        let t = Text::new("y").with_font(font()).at(5, 50).with_angle(-90.0);
        let out = t.render_with(&RenderContext::default(), 0);
        assert!(out.contains("x=\"0\" y=\"0\""), "{}", out);
        assert!(out.contains("transform=\"translate(5, 50) rotate(-90)\""), "{}", out);
    }

    #[test]
    fn rotated_text_at_percent_position_drops_rotation() {
        let t = Text::new("y")
            .with_font(font())
            .at(Dimension::percent(50.0), 20)
            .with_angle(30.0);
        let out = t.render_with(&RenderContext::default(), 0);
        assert!(out.contains("x=\"50%\" y=\"20\""), "{}", out);
        assert!(!out.contains("transform"), "{}", out);
    }

    #[test]
    fn text_inherits_display_attributes() {
        let source = crate::scene::Rect::default()
            .with_style(Style::new().with_fill(Rgb(0, 0, 255)).with_fill_opacity(0.5));
        let mut t = Text::new("blue").with_font(font());
        t.inherit_style(&source);
        assert_eq!(t.style(), source.style());
        assert!(t.render_with(&RenderContext::default(), 0).contains("fill=\"#0000ff\""));
    }

    #[test]
    fn reactivated_text_renders_once_font_is_bound() {
        let mut t = Text::new("late");
        assert_eq!(t.render_with(&RenderContext::default(), 0), "");
        t.font = Some(font());
        t.set_active(true);
        assert!(t.render_with(&RenderContext::default(), 0).ends_with(">late</text>"));
    }

    #[test]
    fn paragraph_centres_lines() {
        let mut p = Paragraph::new(Text::new("one two").with_font(font()), 1.0);
        p.line_height = 10.0;
        let section = p.to_section();
        let ys: Vec<Dimension> = section
            .children()
            .iter()
            .filter_map(|c| match &c.node {
                Node::Text(t) => Some(t.y),
                _ => None,
            })
            .collect();
        assert_eq!(ys, vec![Dimension::Px(5.0), Dimension::Px(15.0)]);
        assert_eq!(p.height(), 20.0);
    }

    #[test]
    fn paragraph_fixed_height_sets_line_height() {
        let mut p = Paragraph::new(Text::new("a\nb\nc\nd").with_font(font()), 100.0);
        p.height = 40.0;
        assert_eq!(p.height(), 40.0);
        let section = p.to_section();
        assert_eq!(section.height(), Dimension::Px(40.0));
        let last = section.children().last().map(|c| &c.node);
        let Some(Node::Text(t)) = last else { panic!("expected text") };
        assert_eq!(t.y, Dimension::Px(35.0));
    }

    #[test]
    fn paragraph_background_is_off_by_default() {
        let p = Paragraph::new(Text::new("x").with_font(font()), 50.0);
        let out = p.render_with(&RenderContext::default(), 0);
        assert!(!out.contains("<rect"));
        assert_eq!(out.matches("<text").count(), 1);
    }

    // ==================== TextBox ====================

    #[test]
    fn text_box_places_text_for_every_alignment() {
        let template = Text::new("label").with_font(font());
        let mid = Dimension::percent(50.0);
        let px = Dimension::Px;
        let cases = [
            (Anchor::Start, VAlign::Top, px(3.0), px(3.0), Baseline::Hanging),
            (Anchor::Start, VAlign::Center, px(3.0), mid, Baseline::Central),
            (Anchor::Start, VAlign::Bottom, px(3.0), px(37.0), Baseline::Auto),
            (Anchor::Middle, VAlign::Top, mid, px(3.0), Baseline::Hanging),
            (Anchor::Middle, VAlign::Center, mid, mid, Baseline::Central),
            (Anchor::Middle, VAlign::Bottom, mid, px(37.0), Baseline::Auto),
            (Anchor::End, VAlign::Top, px(97.0), px(3.0), Baseline::Hanging),
            (Anchor::End, VAlign::Center, px(97.0), mid, Baseline::Central),
            (Anchor::End, VAlign::Bottom, px(97.0), px(37.0), Baseline::Auto),
        ];
        for (align, valign, x, y, baseline) in cases {
            let b = TextBox::new(template.clone(), 100.0, 40.0).with_alignment(align, valign);
            let t = b.placed_text();
            assert_eq!((t.x, t.y), (x, y), "{:?}/{:?}", align, valign);
            assert_eq!(t.anchor, Some(align));
            assert_eq!(t.baseline, Some(baseline));
        }
    }

    #[test]
    fn text_box_margins_move_edge_alignments() {
        let b = TextBox::new(Text::new("m").with_font(font()), 80.0, 20.0)
            .with_margins(5.0, 10.0, 2.0, 4.0)
            .with_alignment(Anchor::End, VAlign::Bottom);
        let t = b.placed_text();
        assert_eq!((t.x, t.y), (Dimension::Px(70.0), Dimension::Px(16.0)));
    }

    #[test]
    fn text_box_renders_section_and_leaves_template_alone() {
        let template = Text::new("hi").with_font(font()).at(1, 1);
        let mut b = TextBox::new(template.clone(), 60.0, 20.0).at(10.0, 5.0);
        b.background.set_active(true);
        let out = b.render_with(&RenderContext::default(), 0);
        assert!(out.starts_with("<g transform=\"matrix(1,0,0,1,10,5)\">"), "{}", out);
        assert!(out.contains("<svg width=\"60\" height=\"20\">"), "{}", out);
        assert!(out.contains("<rect"), "{}", out);
        assert!(out.contains("x=\"50%\" y=\"50%\""), "{}", out);
        assert_eq!(b.text, template);
    }

    #[test]
    fn text_box_background_is_off_by_default() {
        let mut b = TextBox::new(Text::new("x").with_font(font()), 30.0, 10.0);
        assert!(!b.render_with(&RenderContext::default(), 0).contains("<rect"));
        b.set_text("y");
        assert!(b.render_with(&RenderContext::default(), 0).contains(">y</text>"));
    }
}
