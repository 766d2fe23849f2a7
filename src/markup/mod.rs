//! Minimal retained markup tree
//! Elements carry classes, attributes and inline style; the tree serializes to HTML.

mod html;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A node in the markup tree: plain text or an element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Text(String),
    Element(Element),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub class: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Style::is_empty")]
    pub style: Style,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// Inline style declarations keyed by kebab-case CSS property
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style(BTreeMap<String, String>);

/// Whether `name` can be written as a tag or attribute name without escaping.
/// Rejects whitespace, quotes, `<`, `>`, `/`, `=` and control characters.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace()
                || c.is_control()
                || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

impl Node {
    pub fn text(s: impl Into<String>) -> Self {
        Node::Text(s.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(s) => out.push_str(s),
            Node::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        html::write_node(&mut out, self);
        out
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Text(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Text(s)
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            class: Vec::new(),
            attrs: BTreeMap::new(),
            style: Style::default(),
            children: Vec::new(),
        }
    }

    /// Add one or more whitespace-separated classes; blank input is ignored
    pub fn class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn add_class(&mut self, class: &str) {
        self.class
            .extend(class.split_whitespace().map(str::to_string));
    }

    /// Set an attribute. `class` is routed into the class list.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if name == "class" {
            self.add_class(&value);
        } else {
            self.attrs.insert(name, value);
        }
    }

    pub fn style(mut self, property: &str, value: impl Into<String>) -> Self {
        self.style.set(property, value);
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class.iter().any(|c| c == class)
    }

    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Depth-first search for the first descendant (or self) carrying `class`
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children
            .iter()
            .filter_map(Node::as_element)
            .find_map(|el| el.find_by_class(class))
    }

    pub fn class_string(&self) -> String {
        self.class.join(" ")
    }
}

impl Style {
    pub fn set(&mut self, property: &str, value: impl Into<String>) {
        self.0.insert(property.to_string(), value.into());
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// Render as a `style` attribute value: `prop: value; prop: value`
    pub fn to_css(&self) -> String {
        self.iter()
            .map(|(p, v)| format!("{}: {}", p, v))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_name() {
        for name in ["div", "data-testid", "onclick", "viewBox", "aria-label", "xml:lang"] {
            assert!(is_valid_name(name), "{} should be valid", name);
        }
        for name in ["", "a b", "x>", "x\"y", "x'y", "a/b", "a=b", "<b", "tab\t", "nul\0"] {
            assert!(!is_valid_name(name), "{:?} should be rejected", name);
        }
    }

    #[test]
    fn test_class_attr_routes_into_class_list() {
        let el = Element::new("div").class("a").attr("class", "b c");
        assert_eq!(el.class, vec!["a", "b", "c"]);
        assert!(el.attr_value("class").is_none());
    }

    #[test]
    fn test_blank_class_is_ignored() {
        let el = Element::new("div").class("tiptrigger").class("");
        assert_eq!(el.class_string(), "tiptrigger");
    }

    #[test]
    fn test_style_set_replaces_existing() {
        let mut style = Style::default();
        style.set("min-width", "10px");
        style.set("color", "red");
        style.set("color", "blue");
        assert_eq!(style.to_css(), "color: blue; min-width: 10px");
    }

    #[test]
    fn test_find_by_class_is_depth_first() {
        let tree = Element::new("div")
            .child(Element::new("span").child(Element::new("b").class("hit").child("first")))
            .child(Element::new("i").class("hit").child("second"));
        let found = tree.find_by_class("hit").unwrap();
        assert_eq!(found.tag, "b");
    }

    #[test]
    fn test_text_content_concatenates_descendants() {
        let node: Node = Element::new("p")
            .child("Hello, ")
            .child(Element::new("em").child("world"))
            .into();
        assert_eq!(node.text_content(), "Hello, world");
    }

    #[test]
    fn test_node_from_toml() {
        let src = r#"
tag = "a"
class = ["link"]
children = ["docs"]

[attrs]
href = "https://example.com"

[style]
color = "red"
"#;
        let node: Node = toml::from_str(src).unwrap();
        let el = node.as_element().unwrap();
        assert_eq!(el.tag, "a");
        assert_eq!(el.attr_value("href"), Some("https://example.com"));
        assert_eq!(el.style.get("color"), Some("red"));
        assert_eq!(node.text_content(), "docs");
    }

    #[test]
    fn test_style_serializes_as_json_object() {
        let el = Element::new("div").style("min-width", "140px").style("color", "white");
        let json = serde_json::to_value(&el).unwrap();
        assert_eq!(json["style"]["min-width"], "140px");
        assert_eq!(json["style"]["color"], "white");
        assert!(json.get("children").is_none());
    }
}
