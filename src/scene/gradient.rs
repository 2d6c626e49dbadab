//! Linear gradient definitions, emitted inside a viewport's `<defs>` block

use crate::types::{Rgb, fmt_num, unit_clamp};

use super::markup::{Attrs, leaf, wrap};

/// One colour stop. Percent and opacity are clamped to [0, 1] on creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stop {
    percent: f64,
    color: Rgb,
    opacity: f64,
}

impl Stop {
    pub fn new(percent: f64, color: Rgb, opacity: f64) -> Self {
        Self {
            percent: unit_clamp(percent),
            color,
            opacity: unit_clamp(opacity),
        }
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    fn render(&self, depth: usize) -> String {
        let attrs = Attrs::new()
            .add("offset", fmt_num(self.percent))
            .add("stop-color", self.color)
            .add("stop-opacity", fmt_num(self.opacity));
        leaf(depth, "stop", &attrs)
    }
}

/// A named linear gradient. The orientation runs from `(x1, y1)` to
/// `(x2, y2)` in fractions of the filled bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub name: String,
    orientation: [f64; 4],
    stops: Vec<Stop>,
    pub active: bool,
}

impl LinearGradient {
    /// A left-to-right gradient with no stops
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            orientation: [0.0, 0.0, 1.0, 0.0],
            stops: Vec::new(),
            active: true,
        }
    }

    pub fn with_orientation(mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        self.orientation = [x1, y1, x2, y2].map(unit_clamp);
        self
    }

    pub fn orientation(&self) -> [f64; 4] {
        self.orientation
    }

    pub fn add_stop(&mut self, percent: f64, color: Rgb, opacity: f64) {
        self.stops.push(Stop::new(percent, color, opacity));
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Whether this definition produces any output
    pub fn is_defined(&self) -> bool {
        self.active && !self.stops.is_empty()
    }

    pub fn render(&self, depth: usize) -> String {
        if !self.is_defined() {
            return String::new();
        }
        let [x1, y1, x2, y2] = self.orientation;
        let attrs = Attrs::new()
            .add("id", &self.name)
            .add("x1", fmt_num(x1))
            .add("y1", fmt_num(y1))
            .add("x2", fmt_num(x2))
            .add("y2", fmt_num(y2));
        let stops: Vec<String> = self.stops.iter().map(|s| s.render(depth + 1)).collect();
        wrap(depth, "linearGradient", &attrs, &stops)
    }
}
