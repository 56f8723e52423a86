use crate::simplify::raw::{get_array, get_bounding_box, get_f64, get_str, is_visible};
use crate::types::Point;
use serde::Serialize;
use serde_json::Value as JsonValue;

use super::css::{px, shorthand};

/// Auto-layout direction; the discriminator of [`SimplifiedLayout`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    Row,
    Column,
    #[default]
    None,
}

/// How a node sizes itself along each axis inside an auto-layout parent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LayoutSizing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical: Option<&'static str>,
}

/// Flexbox-like description of a node's layout
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifiedLayout {
    pub mode: LayoutMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_self: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grow: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizing: Option<LayoutSizing>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub overflow_scroll: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_relative_to_parent: Option<Point>,
}

impl SimplifiedLayout {
    /// True when nothing but the `mode` discriminator is set
    pub fn is_bare(&self) -> bool {
        *self
            == Self {
                mode: self.mode,
                ..Self::default()
            }
    }
}

/// Build the layout of `node` placed inside `parent`
///
/// Top-level nodes have no parent. The result always carries a `mode`; when
/// nothing else is set the layout is meaningless and should not be interned.
pub fn build_layout(node: &JsonValue, parent: Option<&JsonValue>) -> SimplifiedLayout {
    let mode = layout_mode(node);
    let mut layout = SimplifiedLayout {
        mode,
        ..SimplifiedLayout::default()
    };

    if mode != LayoutMode::None {
        layout.justify_content = get_str(node, "primaryAxisAlignItems").and_then(convert_align);
        layout.align_items = if children_stretch(node, mode) {
            Some("stretch")
        } else {
            get_str(node, "counterAxisAlignItems").and_then(convert_align)
        };
        layout.wrap = (get_str(node, "layoutWrap") == Some("WRAP")).then_some(true);
        layout.gap = get_f64(node, "itemSpacing")
            .filter(|spacing| *spacing != 0.0)
            .map(px);
        layout.padding = build_padding(node);
    }

    if let Some(dirs) = get_str(node, "overflowDirection") {
        if dirs.contains("HORIZONTAL") {
            layout.overflow_scroll.push("x");
        }
        if dirs.contains("VERTICAL") {
            layout.overflow_scroll.push("y");
        }
    }

    layout.align_self = match get_str(node, "layoutAlign") {
        Some("STRETCH") => Some("stretch"),
        _ => None,
    };
    layout.grow = get_f64(node, "layoutGrow").filter(|grow| *grow > 0.0);

    let sizing = LayoutSizing {
        horizontal: get_str(node, "layoutSizingHorizontal").and_then(convert_sizing),
        vertical: get_str(node, "layoutSizingVertical").and_then(convert_sizing),
    };
    if sizing != LayoutSizing::default() {
        layout.sizing = Some(sizing);
    }

    if let Some(parent) = parent.filter(|p| is_frame(p)) {
        let absolute = get_str(node, "layoutPositioning") == Some("ABSOLUTE");
        let in_flow = layout_mode(parent) != LayoutMode::None && !absolute;
        if !in_flow {
            if absolute {
                layout.position = Some("absolute");
            }
            layout.location_relative_to_parent = relative_location(node, parent);
        }
    }

    layout
}

fn layout_mode(node: &JsonValue) -> LayoutMode {
    match get_str(node, "layoutMode") {
        Some("HORIZONTAL") => LayoutMode::Row,
        Some("VERTICAL") => LayoutMode::Column,
        _ => LayoutMode::None,
    }
}

/// Frames are the nodes that can carry auto-layout
fn is_frame(node: &JsonValue) -> bool {
    matches!(
        get_str(node, "type"),
        Some("FRAME" | "COMPONENT" | "COMPONENT_SET" | "INSTANCE")
    ) || node.get("layoutMode").is_some()
}

/// Alignment along either axis; `MIN` is the default and maps to `None`
fn convert_align(align: &str) -> Option<&'static str> {
    match align {
        "MAX" => Some("flex-end"),
        "CENTER" => Some("center"),
        "SPACE_BETWEEN" => Some("space-between"),
        "BASELINE" => Some("baseline"),
        _ => None,
    }
}

fn convert_sizing(sizing: &str) -> Option<&'static str> {
    match sizing {
        "FIXED" => Some("fixed"),
        "FILL" => Some("fill"),
        "HUG" => Some("hug"),
        _ => None,
    }
}

/// True when every visible in-flow child stretches along the counter axis
fn children_stretch(node: &JsonValue, mode: LayoutMode) -> bool {
    let fill_key = match mode {
        LayoutMode::Row => "layoutSizingVertical",
        LayoutMode::Column => "layoutSizingHorizontal",
        LayoutMode::None => return false,
    };

    let mut in_flow = get_array(node, "children")
        .unwrap_or_default()
        .iter()
        .filter(|child| is_visible(child))
        .filter(|child| get_str(child, "layoutPositioning") != Some("ABSOLUTE"))
        .peekable();

    in_flow.peek().is_some()
        && in_flow.all(|child| {
            get_str(child, "layoutAlign") == Some("STRETCH")
                || get_str(child, fill_key) == Some("FILL")
        })
}

fn build_padding(node: &JsonValue) -> Option<String> {
    let side = |key: &str| get_f64(node, key).unwrap_or(0.0);
    let (top, right, bottom, left) = (
        side("paddingTop"),
        side("paddingRight"),
        side("paddingBottom"),
        side("paddingLeft"),
    );

    if top == 0.0 && right == 0.0 && bottom == 0.0 && left == 0.0 {
        None
    } else {
        Some(shorthand(top, right, bottom, left))
    }
}

fn relative_location(node: &JsonValue, parent: &JsonValue) -> Option<Point> {
    let own = get_bounding_box(node, "absoluteBoundingBox")?;
    let parent = get_bounding_box(parent, "absoluteBoundingBox")?;
    Some(Point {
        x: own.x - parent.x,
        y: own.y - parent.y,
    })
}
