//! Icons and the legend box

use crate::defaults::{LEGEND_DY, LEGEND_INSET};
use crate::scene::{AffineGroup, Container, Node, Rect, Render, Section, Text};
use crate::text::Font;

/// A reusable drawing with a fixed size, instanced once per placement
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    pub width: f64,
    pub height: f64,
    drawing: Node,
}

impl Icon {
    pub fn new(drawing: impl Into<Node>, width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            drawing: drawing.into(),
        }
    }

    pub fn drawing(&self) -> &Node {
        &self.drawing
    }

    /// An independent copy with its top-left corner at `(x, y)`
    pub fn placed(&self, x: f64, y: f64) -> Section {
        let mut section = Section::new(x, y, self.width, self.height);
        section.add_child(self.drawing.copy());
        section
    }

    /// An independent copy centred on `(x, y)`
    pub fn centred(&self, x: f64, y: f64) -> Section {
        self.placed(x - self.width / 2.0, y - self.height / 2.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct LegendItem {
    name: String,
    icon: Icon,
}

/// Legend entries stacked top to bottom, each an icon followed by its name
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Half the vertical pitch between entries
    pub dy: f64,
    /// Template for entry names
    pub text: Text,
    pub background: Rect,
    items: Vec<LegendItem>,
    pub active: bool,
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            dy: LEGEND_DY,
            text: Text::new("").with_font(Font::default()),
            background: Rect::default(),
            items: Vec::new(),
            active: true,
        }
    }
}

impl Legend {
    pub fn add_item(&mut self, name: impl Into<String>, icon: Icon) {
        self.items.push(LegendItem { name: name.into(), icon });
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn set_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
    }

    pub fn to_section(&self) -> Section {
        let mut section = Section::new(self.x, self.y, self.width, self.height);
        section.set_active(self.active);
        section.add_child(self.background.clone());
        for (i, item) in self.items.iter().enumerate() {
            let mut entry = AffineGroup::new(LEGEND_INSET, i as f64 * 2.0 * self.dy);
            let (w, h) = (item.icon.width, item.icon.height);
            entry.add_child(self.text.instance(&item.name, 2.0 * w, h / 2.0));
            entry.add_child(item.icon.placed(0.0, 0.0));
            section.add_labeled(&item.name, entry);
        }
        section
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Circle;

    fn dot() -> Icon {
        Icon::new(Circle::new(3.0, 3.0, 3.0), 6.0, 6.0)
    }

    #[test]
    fn placed_icons_are_independent() {
        let icon = dot();
        let mut a = icon.placed(1.0, 2.0);
        let b = icon.placed(1.0, 2.0);
        a.set_x(50.0);
        assert_eq!(b.x(), 1.0);
        assert_eq!(icon.centred(10.0, 10.0).x(), 7.0);
    }

    #[test]
    fn entries_stack_by_two_steps() {
        let mut legend = Legend::default();
        legend.add_item("first", dot());
        legend.add_item("second", dot());
        let section = legend.to_section();

        let offsets: Vec<f64> = section
            .children()
            .iter()
            .filter_map(|c| match &c.node {
                Node::Group(g) => Some(g.y),
                _ => None,
            })
            .collect();
        assert_eq!(offsets, vec![0.0, 20.0]);
    }

    #[test]
    fn entry_text_sits_right_of_icon() {
        let mut legend = Legend::default();
        legend.add_item("series", dot());
        let section = legend.to_section();
        let Some(Node::Group(entry)) = section.children().last().map(|c| &c.node) else {
            panic!("expected an entry group");
        };
        let Node::Text(t) = &entry.children()[0].node else { panic!("expected text") };
        assert_eq!(t.text, "series");
        assert_eq!((t.x.as_px(), t.y.as_px()), (Some(12.0), Some(3.0)));
        assert_eq!(entry.x, LEGEND_INSET);
    }

    #[test]
    fn inactive_legend_renders_nothing() {
        let mut legend = Legend::default();
        legend.add_item("x", dot());
        legend.active = false;
        assert_eq!(Node::from(legend.to_section()).render(0), "");
    }
}
