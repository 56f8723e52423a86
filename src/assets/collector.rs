use crate::simplify::{GlobalVars, StyleValue};
use crate::types::{ImageAsset, ImageAssetKind, SimplifiedNode, IMAGE_SVG_TYPE};
use std::collections::HashSet;

/// Collect downloadable images from a simplified tree
///
/// Walks `nodes` in document order. Every `IMAGE-SVG` node yields an SVG asset.
/// Every image fill yields a FILL asset the first time its `imageRef` is seen;
/// later nodes sharing the same reference add nothing.
///
/// # Arguments
/// * `nodes` - Top-level simplified nodes
/// * `globals` - The table the nodes' `fills` ids point into
pub fn collect_image_assets(nodes: &[SimplifiedNode], globals: &GlobalVars) -> Vec<ImageAsset> {
    let mut assets = Vec::new();
    let mut seen_refs = HashSet::new();
    collect_recursive(nodes, globals, &mut seen_refs, &mut assets);
    assets
}

fn collect_recursive(
    nodes: &[SimplifiedNode],
    globals: &GlobalVars,
    seen_refs: &mut HashSet<String>,
    assets: &mut Vec<ImageAsset>,
) {
    for node in nodes {
        if node.node_type == IMAGE_SVG_TYPE {
            assets.push(ImageAsset {
                node_id: node.id.clone(),
                file_name: format!("{}.svg", file_stem(node)),
                kind: ImageAssetKind::Svg,
                image_ref: None,
            });
        }

        let fills = node.fills.as_deref().and_then(|id| globals.get(id));
        if let Some(StyleValue::Fills(paints)) = fills {
            for image_ref in paints.iter().filter_map(|paint| paint.image_ref.as_deref()) {
                if seen_refs.insert(image_ref.to_string()) {
                    assets.push(ImageAsset {
                        node_id: node.id.clone(),
                        file_name: format!("{}_fill.png", file_stem(node)),
                        kind: ImageAssetKind::Fill,
                        image_ref: Some(image_ref.to_string()),
                    });
                }
            }
        }

        collect_recursive(&node.children, globals, seen_refs, assets);
    }
}

/// Sanitized node name, or the sanitized id for unnamed nodes
fn file_stem(node: &SimplifiedNode) -> String {
    if node.name.is_empty() {
        sanitize_file_name(&node.id)
    } else {
        sanitize_file_name(&node.name)
    }
}

/// Replace every character that is not an ASCII letter or digit with `_`
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
