//! Hover-triggered tooltip component
//!
//! `render` maps a `TooltipConfig` to a markup tree: a trigger container holding the
//! caller's trigger content plus a positioned overlay. Showing and hiding the overlay
//! is left to the stylesheet (see `stylesheet()`), the component keeps no state.

mod stylesheet;

pub use stylesheet::stylesheet;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::markup::{Element, Node};

pub const DEFAULT_MIN_WIDTH: &str = "140px";
pub const DEFAULT_TEXT_COLOR: &str = "white";
pub const DEFAULT_BG_COLOR: &str = "dodgerBlue";

/// Colour of the default info glyph
pub const INFO_GLYPH_COLOR: &str = "#029dd1";

/// Material "info outline" icon path (24x24 viewbox)
const INFO_OUTLINE_PATH: &str = "M11 7h2v2h-2zm0 4h2v6h-2zm1-9C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm0 18c-4.41 0-8-3.59-8-8s3.59-8 8-8 8 3.59 8 8-3.59 8-8 8z";

/// Side of the trigger the overlay is anchored to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Bottom,
    Top,
    Left,
    Right,
}

impl Position {
    pub const ALL: [Position; 4] = [Position::Bottom, Position::Top, Position::Left, Position::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            Position::Bottom => "bottom",
            Position::Top => "top",
            Position::Left => "left",
            Position::Right => "right",
        }
    }

    /// Overlay class selecting placement in the stylesheet
    pub fn class(self) -> String {
        format!("bs-tooltip-{}", self.as_str())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    /// Text shown inside the overlay
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Rich content shown inside the overlay, after `content`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay_element: Option<Node>,

    /// Hovered/focused content; the info glyph when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<Node>,

    /// Overlay minimum width; `None` or empty omits the style
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<String>,

    pub position: Position,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner_class_name: Option<String>,

    pub text_color: String,
    pub bg_color: String,

    /// Forwarded verbatim to the trigger container
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            content: None,
            overlay_element: None,
            trigger: None,
            min_width: Some(DEFAULT_MIN_WIDTH.to_string()),
            position: Position::Bottom,
            class_name: None,
            inner_class_name: None,
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            bg_color: DEFAULT_BG_COLOR.to_string(),
            attributes: BTreeMap::new(),
        }
    }
}

impl TooltipConfig {
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Effective min width, treating an empty string as unset
    pub fn effective_min_width(&self) -> Option<&str> {
        self.min_width.as_deref().filter(|w| !w.is_empty())
    }
}

/// The default trigger: an info-outline icon
pub fn info_glyph() -> Node {
    Element::new("svg")
        .class("tip-icon")
        .attr("viewBox", "0 0 24 24")
        .attr("width", "1em")
        .attr("height", "1em")
        .attr("fill", "currentColor")
        .style("color", INFO_GLYPH_COLOR)
        .child(Element::new("path").attr("d", INFO_OUTLINE_PATH))
        .into()
}

/// Render the tooltip tree for `config`
pub fn render(config: &TooltipConfig) -> Node {
    let mut inner = Element::new("div").class("tooltip-inner");
    if let Some(class) = &config.inner_class_name {
        inner.add_class(class);
    }
    if let Some(width) = config.effective_min_width() {
        inner.style.set("min-width", width);
    }
    inner.style.set("background-color", config.bg_color.as_str());
    inner.style.set("color", config.text_color.as_str());

    if let Some(text) = config.content.as_deref().filter(|t| !t.is_empty()) {
        inner.children.push(Node::text(text));
    }
    if let Some(el) = &config.overlay_element {
        inner.children.push(el.clone());
    }

    let overlay = Element::new("div")
        .class("tooltip")
        .class(&config.position.class())
        .attr("role", "tooltip")
        .child(Element::new("div").class("arrow").style("color", config.bg_color.as_str()))
        .child(inner);

    let mut container = Element::new("div").class("tiptrigger");
    if let Some(class) = &config.class_name {
        container.add_class(class);
    }
    for (name, value) in &config.attributes {
        container.set_attr(name.as_str(), value.as_str());
    }

    container
        .child(config.trigger.clone().unwrap_or_else(info_glyph))
        .child(overlay)
        .into()
}
