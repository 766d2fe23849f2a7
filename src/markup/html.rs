//! HTML serialization for the markup tree

use super::{is_valid_name, Element, Node};

/// Elements written as `<tag .../>` with no children
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "path"];

pub(super) fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text(s) => escape_into(out, s),
        Node::Element(el) => write_element(out, el),
    }
}

fn write_element(out: &mut String, el: &Element) {
    // An unwritable tag keeps its content but loses the wrapper
    if !is_valid_name(&el.tag) {
        tracing::warn!("Dropping element with invalid tag name {:?}", el.tag);
        for child in &el.children {
            write_node(out, child);
        }
        return;
    }

    out.push('<');
    out.push_str(&el.tag);

    if !el.class.is_empty() {
        write_attr(out, "class", &el.class_string());
    }
    if !el.style.is_empty() {
        write_attr(out, "style", &el.style.to_css());
    }
    for (name, value) in &el.attrs {
        if is_valid_name(name) {
            write_attr(out, name, value);
        } else {
            tracing::warn!("Dropping attribute with invalid name {:?}", name);
        }
    }

    if el.children.is_empty() && VOID_TAGS.contains(&el.tag.as_str()) {
        out.push_str("/>");
        return;
    }

    out.push('>');
    for child in &el.children {
        write_node(out, child);
    }
    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_into(out, value);
    out.push('"');
}

fn escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::markup::{Element, Node};

    #[test]
    fn test_attribute_order_class_style_then_attrs() {
        let node: Node = Element::new("div")
            .attr("role", "tooltip")
            .attr("data-id", "7")
            .style("color", "white")
            .class("tooltip")
            .into();
        assert_eq!(
            node.to_html(),
            r#"<div class="tooltip" style="color: white" data-id="7" role="tooltip"></div>"#
        );
    }

    #[test]
    fn test_escapes_text_and_attributes() {
        let node: Node = Element::new("span")
            .attr("title", "say \"hi\" & 'bye'")
            .child("<b>bold</b>")
            .into();
        assert_eq!(
            node.to_html(),
            "<span title=\"say &quot;hi&quot; &amp; &#39;bye&#39;\">&lt;b&gt;bold&lt;/b&gt;</span>"
        );
    }

    #[test]
    fn test_void_and_empty_elements() {
        let node: Node = Element::new("svg")
            .child(Element::new("path").attr("d", "M0 0z"))
            .child(Element::new("g"))
            .into();
        assert_eq!(node.to_html(), r#"<svg><path d="M0 0z"/><g></g></svg>"#);

        let node: Node = Element::new("p")
            .child(Element::new("br"))
            .child(Element::new("hr"))
            .child(Element::new("img").attr("src", "a.png"))
            .child(Element::new("input").attr("type", "text"))
            .child(Element::new("circle"))
            .into();
        assert_eq!(
            node.to_html(),
            r#"<p><br/><hr/><img src="a.png"/><input type="text"/><circle></circle></p>"#
        );
    }

    #[test]
    fn test_invalid_attribute_names_are_dropped() {
        let node: Node = Element::new("div")
            .attr("x><script>alert(1)</script><b", "v")
            .attr("data-ok", "1")
            .attr("a b", "2")
            .child("body")
            .into();
        let html = node.to_html();
        assert_eq!(html, r#"<div data-ok="1">body</div>"#);
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_invalid_tag_keeps_children_only() {
        let node: Node = Element::new("div")
            .child(Element::new("b><script").attr("id", "x").child("safe <text>"))
            .into();
        assert_eq!(node.to_html(), "<div>safe &lt;text&gt;</div>");
    }
}
