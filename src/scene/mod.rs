//! Scene graph
//!
//! A scene is an owned tree of [`Node`]s. Structural nodes ([`AffineGroup`],
//! [`Viewport`], [`Section`]) own their children by value; there are no
//! parent pointers. Rendering is a single depth-first walk that reads the
//! tree and never mutates it, so rendering the same tree twice yields the
//! same markup.

use enum_dispatch::enum_dispatch;

pub mod gradient;
pub mod group;
pub mod markup;
pub mod shapes;
pub mod style;
pub mod text;
pub mod viewport;

pub use gradient::{LinearGradient, Stop};
pub use group::AffineGroup;
pub use shapes::{Circle, Image, PathCommand, PathData, PathShape, Polygon, Rect, Wedge};
pub use style::{Style, Styled};
pub use text::{Anchor, Baseline, Paragraph, Text, TextBox, VAlign};
pub use viewport::{Section, Viewport};

use markup::{escape_comment, indent};

/// State threaded down one render pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderContext {
    /// Gradient names visible from the current position. `None` outside any
    /// viewport, where references are passed through unchecked.
    gradients: Option<Vec<String>>,
    in_document: bool,
}

impl RenderContext {
    /// Make `names` visible to gradient references
    pub fn with_gradients(mut self, names: impl IntoIterator<Item = String>) -> Self {
        let mut visible = self.gradients.take().unwrap_or_default();
        visible.extend(names);
        self.gradients = Some(visible);
        self
    }

    pub fn resolves_gradient(&self, name: &str) -> bool {
        match &self.gradients {
            None => true,
            Some(names) => names.iter().any(|n| n == name),
        }
    }

    /// True once the walk is inside a viewport
    pub fn in_document(&self) -> bool {
        self.in_document
    }

    /// Context for the children of a viewport carrying `defs`
    pub(crate) fn enter_viewport(&self, defs: &[LinearGradient]) -> Self {
        let names = defs
            .iter()
            .filter(|g| g.is_defined())
            .map(|g| g.name.clone())
            .collect::<Vec<_>>();
        let mut inner = self.clone().with_gradients(names);
        inner.in_document = true;
        inner
    }
}

/// The capability set shared by every node kind
#[enum_dispatch]
pub trait Render {
    /// Markup for this node at `depth`, or an empty string when the node
    /// contributes nothing
    fn render_with(&self, ctx: &RenderContext, depth: usize) -> String;

    fn is_active(&self) -> bool;

    fn set_active(&mut self, active: bool);
}

/// A drawable or structural tree element
#[enum_dispatch(Render)]
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Rect(Rect),
    Circle(Circle),
    Path(PathShape),
    Polygon(Polygon),
    Wedge(Wedge),
    Image(Image),
    Text(Text),
    Paragraph(Paragraph),
    TextBox(TextBox),
    Group(AffineGroup),
    Viewport(Viewport),
    Section(Section),
}

impl Node {
    /// Render this node as the root of a pass
    pub fn render(&self, depth: usize) -> String {
        self.render_with(&RenderContext::default(), depth)
    }

    /// Structurally independent deep copy
    pub fn copy(&self) -> Node {
        self.clone()
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Node::Rect(_) => "rect",
            Node::Circle(_) => "circle",
            Node::Path(_) => "path",
            Node::Polygon(_) => "polygon",
            Node::Wedge(_) => "wedge",
            Node::Image(_) => "image",
            Node::Text(_) => "text",
            Node::Paragraph(_) => "paragraph",
            Node::TextBox(_) => "text box",
            Node::Group(_) => "group",
            Node::Viewport(_) => "viewport",
            Node::Section(_) => "section",
        }
    }
}

/// An owned child with an optional debugging label
#[derive(Debug, Clone, PartialEq)]
pub struct Child {
    pub node: Node,
    pub label: Option<String>,
}

/// Nodes that own an ordered child list
pub trait Container {
    fn children(&self) -> &[Child];

    fn children_mut(&mut self) -> &mut Vec<Child>;

    fn add_child(&mut self, node: impl Into<Node>) {
        self.children_mut().push(Child { node: node.into(), label: None });
    }

    /// Add a child preceded by a `<!--label-->` comment in the output
    fn add_labeled(&mut self, label: &str, node: impl Into<Node>) {
        self.children_mut().push(Child {
            node: node.into(),
            label: Some(label.to_string()),
        });
    }

    /// Insert at `index`, clamped to the current length
    fn insert_child(&mut self, index: usize, node: impl Into<Node>) {
        let children = self.children_mut();
        let at = index.min(children.len());
        children.insert(at, Child { node: node.into(), label: None });
    }

    fn clear_children(&mut self) {
        self.children_mut().clear();
    }

    /// First child carrying `label`
    fn labeled(&self, label: &str) -> Option<&Node> {
        self.children()
            .iter()
            .find(|c| c.label.as_deref() == Some(label))
            .map(|c| &c.node)
    }
}

/// Render active children in insertion order, dropping empty output
pub(crate) fn render_children(children: &[Child], ctx: &RenderContext, depth: usize) -> Vec<String> {
    let mut out = Vec::with_capacity(children.len());
    for child in children {
        if !child.node.is_active() {
            continue;
        }
        let markup = child.node.render_with(ctx, depth);
        if markup.is_empty() {
            continue;
        }
        if let Some(label) = &child.label {
            out.push(format!("{}<!--{}-->", indent(depth), escape_comment(label)));
        }
        out.push(markup);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rgb;

    #[test]
    fn copy_is_equal_and_independent() {
        let mut group = AffineGroup::new(10.0, 20.0);
        group.add_child(Circle::new(1.0, 2.0, 3.0));
        let original = Node::from(group);

        let mut copy = original.copy();
        assert_eq!(copy, original);

        if let Node::Group(g) = &mut copy {
            g.x = 99.0;
            if let Some(Child { node: Node::Circle(c), .. }) = g.children_mut().first_mut() {
                c.r = 42.0;
            }
        }
        assert_ne!(copy, original);
        let Node::Group(g) = &original else { panic!("expected a group") };
        assert_eq!(g.x, 10.0);
        assert_eq!(g.children()[0].node, Node::from(Circle::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn insert_child_clamps_index() {
        let mut group = AffineGroup::default();
        group.add_child(Circle::new(0.0, 0.0, 1.0));
        group.insert_child(10, Circle::new(0.0, 0.0, 2.0));
        group.insert_child(0, Circle::new(0.0, 0.0, 3.0));
        let radii: Vec<f64> = group
            .children()
            .iter()
            .map(|c| match &c.node {
                Node::Circle(c) => c.r,
                _ => f64::NAN,
            })
            .collect();
        assert_eq!(radii, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn labels_precede_children_and_inactive_children_are_skipped() {
        let mut group = AffineGroup::default();
        group.add_labeled("dot", Circle::new(1.0, 1.0, 1.0));
        let mut hidden = Rect::new(0.0, 0.0, 5.0, 5.0);
        hidden.set_active(false);
        group.add_labeled("hidden", hidden);

        let out = Node::from(group).render(0);
        assert_eq!(
            out,
            "<g transform=\"matrix(1,0,0,1,0,0)\">\n   <!--dot-->\n   <circle cx=\"1\" cy=\"1\" r=\"1\"/>\n</g>"
        );
    }

    #[test]
    fn dashed_labels_still_form_valid_comments() {
        let mut group = AffineGroup::default();
        for label in ["a---b", "x-", "----"] {
            group.add_labeled(label, Circle::new(1.0, 1.0, 1.0));
        }
        let out = Node::from(group).render(0);
        let bodies: Vec<&str> = out
            .lines()
            .filter_map(|l| l.trim().strip_prefix("<!--")?.strip_suffix("-->"))
            .collect();
        assert_eq!(bodies, vec!["a- - -b", "x- ", "- - - - "]);
        for body in bodies {
            assert!(!body.contains("--") && !body.ends_with('-'), "{:?}", body);
        }
    }

    #[test]
    fn inactive_root_renders_empty() {
        let mut node = Node::from(Rect::default());
        node.set_active(false);
        assert_eq!(node.render(2), "");
    }

    #[test]
    fn gradient_visibility_is_scoped_to_viewports() {
        let ctx = RenderContext::default();
        assert!(ctx.resolves_gradient("anything"));

        let mut grad = LinearGradient::new("fade");
        grad.add_stop(0.0, Rgb::BLACK, 1.0);
        let inner = ctx.enter_viewport(&[grad, LinearGradient::new("empty")]);
        assert!(inner.in_document());
        assert!(inner.resolves_gradient("fade"));
        assert!(!inner.resolves_gradient("empty"));
    }

    #[test]
    fn labeled_lookup() {
        let mut group = AffineGroup::default();
        group.add_labeled("Plot", Rect::default());
        assert_eq!(group.labeled("Plot").map(Node::kind), Some("rect"));
        assert!(group.labeled("Legend").is_none());
    }
}
