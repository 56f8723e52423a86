//! Depth-first walk from raw nodes to [`SimplifiedNode`]s

use crate::error::{Result, SimplifyError};
use crate::parser::ComponentLookup;
use crate::types::{ComponentPropertyValue, SimplifiedNode, IMAGE_SVG_TYPE};
use serde_json::Value as JsonValue;

use super::builders::{
    build_border_radius, build_effects, build_layout, build_stroke, build_text_style, visible_paints,
};
use super::raw::{get_array, get_bounding_box, get_f64, get_non_empty_array, get_str, is_visible};
use super::vars::{
    GlobalVars, EFFECT_PREFIX, FILL_PREFIX, LAYOUT_PREFIX, STROKE_PREFIX, TEXT_STYLE_PREFIX,
};
use super::SimplifyOptions;

/// Read-only inputs shared by every step of a walk
#[derive(Debug, Clone, Copy)]
pub struct WalkContext<'a> {
    pub components: &'a ComponentLookup,
    pub options: &'a SimplifyOptions,
}

/// Simplify a list of sibling nodes, dropping hidden ones
///
/// `parent` is the raw node the siblings belong to, `depth` their depth
/// (top-level nodes are at depth 0).
pub fn simplify_nodes(
    nodes: &[JsonValue],
    parent: Option<&JsonValue>,
    depth: usize,
    ctx: &WalkContext<'_>,
    globals: &mut GlobalVars,
) -> Result<Vec<SimplifiedNode>> {
    let mut simplified = Vec::with_capacity(nodes.len());
    for node in nodes {
        if let Some(node) = simplify_node(node, parent, depth, ctx, globals)? {
            simplified.push(node);
        }
    }
    Ok(simplified)
}

/// Simplify one raw node and its visible subtree
///
/// # Returns
/// * `Ok(Some(node))` - The simplified node
/// * `Ok(None)` - If the node is hidden or beyond the configured depth
/// * `Err(SimplifyError)` - If the node is not a JSON object
pub fn simplify_node(
    node: &JsonValue,
    parent: Option<&JsonValue>,
    depth: usize,
    ctx: &WalkContext<'_>,
    globals: &mut GlobalVars,
) -> Result<Option<SimplifiedNode>> {
    if !node.is_object() {
        return Err(SimplifyError::InvalidInput(format!(
            "expected a node object at depth {}, found {}",
            depth, node
        )));
    }
    if !is_visible(node) {
        tracing::debug!(id = get_str(node, "id").unwrap_or_default(), "skipping hidden node");
        return Ok(None);
    }
    if ctx.options.max_depth.is_some_and(|max| depth > max) {
        return Ok(None);
    }

    let node_type = get_str(node, "type").unwrap_or_default();
    let mut simplified = SimplifiedNode {
        id: get_str(node, "id").unwrap_or_default().to_string(),
        name: get_str(node, "name").unwrap_or_default().to_string(),
        node_type: node_type.to_string(),
        bounding_box: get_bounding_box(node, "absoluteBoundingBox"),
        ..SimplifiedNode::default()
    };

    let text_style = build_text_style(node);
    if !text_style.is_empty() {
        simplified.text_style = Some(globals.intern_or_create(text_style, TEXT_STYLE_PREFIX));
    }

    if get_non_empty_array(node, "fills").is_some() {
        let fills = visible_paints(node, "fills");
        if !fills.is_empty() {
            simplified.fills = Some(globals.intern_or_create(fills, FILL_PREFIX));
        }
    }

    let stroke = build_stroke(node);
    if !stroke.colors.is_empty() {
        simplified.strokes = Some(globals.intern_or_create(stroke, STROKE_PREFIX));
    }

    let effects = build_effects(node);
    if !effects.is_empty() {
        simplified.effects = Some(globals.intern_or_create(effects, EFFECT_PREFIX));
    }

    let layout = build_layout(node, parent);
    if !layout.is_bare() {
        simplified.layout = Some(globals.intern_or_create(layout, LAYOUT_PREFIX));
    }

    simplified.text = get_str(node, "characters")
        .filter(|text| !text.is_empty())
        .map(str::to_string);
    simplified.opacity = get_f64(node, "opacity").filter(|opacity| *opacity != 1.0);
    simplified.border_radius = build_border_radius(node);

    let component_id = get_str(node, "componentId").filter(|_| node_type == "INSTANCE");
    if let Some(component_id) = component_id {
        // Instances are opaque leaves: their internals belong to the component
        match ctx.components.resolve(component_id) {
            Some(component) => {
                simplified.component_name = Some(component.name).filter(|name| !name.is_empty());
                simplified.component_remote = component.remote;
            }
            None => tracing::warn!(
                id = %simplified.id,
                component_id,
                "instance references an unknown component"
            ),
        }
        simplified.component_properties = component_properties(node);
    } else if let Some(children) = get_array(node, "children") {
        simplified.children = simplify_nodes(children, Some(node), depth + 1, ctx, globals)?;
    }

    if node_type == "VECTOR" {
        simplified.node_type = IMAGE_SVG_TYPE.to_string();
    }

    Ok(Some(simplified))
}

/// Instance property overrides in source order, values stringified
///
/// Overrides without a value are skipped.
fn component_properties(node: &JsonValue) -> Vec<ComponentPropertyValue> {
    let Some(properties) = node.get("componentProperties").and_then(|v| v.as_object()) else {
        return Vec::new();
    };

    properties
        .iter()
        .filter_map(|(name, property)| {
            let value = match property.get("value") {
                None | Some(JsonValue::Null) => return None,
                Some(JsonValue::String(s)) => s.clone(),
                Some(other) => other.to_string(),
            };
            if value.is_empty() {
                return None;
            }
            Some(ComponentPropertyValue {
                name: name.clone(),
                value,
                property_type: get_str(property, "type").unwrap_or_default().to_string(),
            })
        })
        .collect()
}
