// src/ports/markup.rs
//
// Owned output tree for sanitized cell content. Parsed scraper nodes are never
// mutated: every element is rebuilt bottom-up and either kept or spliced into
// its parent.
use ego_tree::NodeRef;
use html_escape::{encode_double_quoted_attribute, encode_text};
use scraper::Node;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

// The parser swallows one newline right after these start tags
const LEADING_NEWLINE_ELEMENTS: &[&str] = &["pre", "textarea", "listing"];

#[derive(Debug, Clone, PartialEq)]
pub enum Markup {
    Text(String),
    Element(Element),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Markup>,
}

/// Outcome of rewriting one element
#[derive(Debug)]
pub enum Rewrite {
    Keep(Element),
    /// Drop the element, promote these children to its position
    Unwrap(Vec<Markup>),
}

impl Element {
    #[cfg(test)]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    fn from_parsed(element: &scraper::node::Element, children: Vec<Markup>) -> Self {
        let mut attrs: Vec<(String, String)> = element
            .attrs()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        // parser attribute order is unspecified
        attrs.sort();

        Self {
            name: element.name().to_string(),
            attrs,
            children,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let idx = self.attrs.iter().position(|(key, _)| key == name)?;
        Some(self.attrs.remove(idx).1)
    }

    /// Append a declaration to the inline style, keeping existing ones
    pub fn merge_style(&mut self, declaration: &str) {
        let existing = self
            .attr("style")
            .unwrap_or_default()
            .trim()
            .trim_end_matches(';')
            .to_string();

        let style = if existing.is_empty() {
            declaration.to_string()
        } else {
            format!("{existing};{declaration}")
        };
        self.set_attr("style", style);
    }

    /// Remove `background-color` declarations from the inline style.
    /// An emptied style attribute is dropped.
    pub fn strip_background_color(&mut self) {
        let Some(style) = self.attr("style") else {
            return;
        };

        let kept = style
            .split(';')
            .filter(|decl| !decl.trim().starts_with("background-color"))
            .filter(|decl| !decl.trim().is_empty())
            .collect::<Vec<_>>()
            .join(";");

        if kept.is_empty() {
            self.remove_attr("style");
        } else {
            self.set_attr("style", kept);
        }
    }

    fn write_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&encode_double_quoted_attribute(value));
            out.push('"');
        }

        if VOID_ELEMENTS.contains(&self.name.as_str()) {
            out.push_str("/>");
            return;
        }

        out.push('>');
        if LEADING_NEWLINE_ELEMENTS.contains(&self.name.as_str())
            && matches!(self.children.first(), Some(Markup::Text(text)) if text.starts_with('\n'))
        {
            out.push('\n');
        }
        for child in &self.children {
            child.write_to(out);
        }
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }
}

impl Markup {
    fn write_to(&self, out: &mut String) {
        match self {
            Markup::Text(text) => out.push_str(&encode_text(text)),
            Markup::Element(element) => element.write_to(out),
        }
    }
}

/// Rebuild the children of `node` as an owned tree.
///
/// Children are rebuilt before their parent is handed to `rewrite`, so an
/// unwrapped element promotes already-rewritten content. Comments, doctypes
/// and processing instructions are dropped.
pub fn rebuild_children<F>(node: NodeRef<'_, Node>, rewrite: &F) -> Vec<Markup>
where
    F: Fn(Element) -> Rewrite,
{
    let mut out = Vec::new();

    for child in node.children() {
        match child.value() {
            Node::Text(text) => out.push(Markup::Text(text.to_string())),
            Node::Element(element) => {
                let children = rebuild_children(child, rewrite);
                match rewrite(Element::from_parsed(element, children)) {
                    Rewrite::Keep(element) => out.push(Markup::Element(element)),
                    Rewrite::Unwrap(children) => out.extend(children),
                }
            }
            _ => {}
        }
    }

    out
}

/// Serialize a node list. Void elements use the self-closing form, so line
/// breaks always come out as `<br/>`.
pub fn render(nodes: &[Markup]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.write_to(&mut out);
    }
    out
}
