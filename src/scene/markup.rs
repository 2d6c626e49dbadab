//! Markup assembly helpers
//!
//! Every element is written from a fixed, ordered attribute list. Absent
//! values are filtered out here, so attribute order in the output is
//! deterministic and identical between render passes.

use std::fmt;

use crate::defaults::INDENT;

/// Indentation prefix for a nesting depth
pub fn indent(depth: usize) -> String {
    INDENT.repeat(depth)
}

/// Escape text content and attribute values
pub fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Comment bodies may not contain `--` or end in `-`
pub fn escape_comment(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 2);
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        if c == '-' && chars.peek().is_none_or(|&next| next == '-') {
            out.push(' ');
        }
    }
    out
}

/// Ordered `(name, value)` attribute list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attrs(Vec<(&'static str, String)>);

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an attribute that is always present
    pub fn add(mut self, name: &'static str, value: impl fmt::Display) -> Self {
        self.0.push((name, value.to_string()));
        self
    }

    /// Append an attribute only when a value is present
    pub fn opt<T: fmt::Display>(mut self, name: &'static str, value: Option<T>) -> Self {
        if let Some(v) = value {
            self.0.push((name, v.to_string()));
        }
        self
    }

    /// Append all attributes of `other`, keeping their order
    pub fn extend(mut self, other: Attrs) -> Self {
        self.0.extend(other.0);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.iter().find(|(n, _)| *n == name).map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Attrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.0 {
            write!(f, " {}=\"{}\"", name, escape_xml(value))?;
        }
        Ok(())
    }
}

/// A self-closing leaf element on its own line
pub fn leaf(depth: usize, tag: &str, attrs: &Attrs) -> String {
    format!("{}<{}{}/>", indent(depth), tag, attrs)
}

/// A structural element wrapping already-rendered child lines
pub fn wrap(depth: usize, tag: &str, attrs: &Attrs, body: &[String]) -> String {
    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(format!("{}<{}{}>", indent(depth), tag, attrs));
    lines.extend(body.iter().filter(|b| !b.is_empty()).cloned());
    lines.push(format!("{}</{}>", indent(depth), tag));
    lines.join("\n")
}
