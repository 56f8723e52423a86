#![recursion_limit = "256"]

use figsimplify::{
    parse_raw_design, simplify_design, simplify_response, to_yaml, ImageAssetKind, SimplifiedNode,
    SimplifyError, SimplifyOptions,
};
use serde_json::{json, Value as JsonValue};

fn file_response() -> JsonValue {
    let brand_fill = json!([{"type": "SOLID", "color": {"r": 0.2, "g": 0.4, "b": 0.6, "a": 0.8}}]);
    let photo_fill = json!([{"type": "IMAGE", "imageRef": "img-ref-1", "scaleMode": "FILL"}]);
    let body_style = json!({"fontFamily": "Inter", "fontWeight": 400, "fontSize": 16, "lineHeightPx": 24});

    json!({
        "name": "Marketing site",
        "lastModified": "2024-05-01T10:00:00Z",
        "thumbnailUrl": "https://example.com/thumb.png",
        "document": {
            "id": "0:0",
            "type": "DOCUMENT",
            "children": [{
                "id": "0:1",
                "name": "Page 1",
                "type": "CANVAS",
                "children": [{
                    "id": "1:1",
                    "name": "Hero",
                    "type": "FRAME",
                    "layoutMode": "VERTICAL",
                    "itemSpacing": 16,
                    "paddingTop": 24, "paddingRight": 24, "paddingBottom": 24, "paddingLeft": 24,
                    "absoluteBoundingBox": {"x": 0, "y": 0, "width": 1440, "height": 800},
                    "fills": brand_fill.clone(),
                    "children": [
                        {
                            "id": "1:2",
                            "name": "Title",
                            "type": "TEXT",
                            "characters": "Welcome",
                            "style": body_style.clone()
                        },
                        {
                            "id": "1:3",
                            "name": "Subtitle",
                            "type": "TEXT",
                            "characters": "Glad you're here",
                            "style": body_style
                        },
                        {
                            "id": "1:4",
                            "name": "Secret",
                            "type": "FRAME",
                            "visible": false,
                            "children": [{"id": "1:5", "name": "Deep", "type": "VECTOR"}]
                        },
                        {
                            "id": "1:6",
                            "name": "Card",
                            "type": "RECTANGLE",
                            "cornerRadius": 10,
                            "fills": brand_fill
                        },
                        {
                            "id": "1:7",
                            "name": "Badge",
                            "type": "RECTANGLE",
                            "rectangleCornerRadii": [5, 10, 15, 20],
                            "opacity": 0.5
                        },
                        {"id": "1:8", "name": "My Icon", "type": "VECTOR"},
                        {"id": "1:9", "name": "Photo", "type": "RECTANGLE", "fills": photo_fill.clone()},
                        {"id": "1:10", "name": "Photo copy", "type": "RECTANGLE", "fills": photo_fill},
                        {
                            "id": "1:11",
                            "name": "CTA",
                            "type": "INSTANCE",
                            "componentId": "2:1",
                            "componentProperties": {"Label#0:1": {"value": "Sign up", "type": "TEXT"}},
                            "children": [{"id": "I1:11;2:2", "name": "Arrow", "type": "VECTOR"}]
                        }
                    ]
                }]
            }]
        },
        "components": {"2:1": {"key": "abc", "name": "Size=Large", "componentSetId": "2:0"}},
        "componentSets": {"2:0": {"key": "def", "name": "Button"}}
    })
}

fn find<'a>(nodes: &'a [SimplifiedNode], id: &str) -> Option<&'a SimplifiedNode> {
    nodes.iter().find_map(|node| {
        if node.id == id {
            Some(node)
        } else {
            find(&node.children, id)
        }
    })
}

#[test]
fn test_simplify_file_response() {
    let design = simplify_response(&file_response(), &SimplifyOptions::default()).unwrap();

    assert_eq!(design.name, "Marketing site");
    assert_eq!(design.nodes.len(), 1);
    assert_eq!(design.nodes[0].node_type, "CANVAS");

    // Hidden subtree is gone at every depth
    assert!(find(&design.nodes, "1:4").is_none());
    assert!(find(&design.nodes, "1:5").is_none());

    // Shared fill and text style intern to one entry each
    let hero = find(&design.nodes, "1:1").unwrap();
    let card = find(&design.nodes, "1:6").unwrap();
    assert_eq!(hero.fills, card.fills);
    let title = find(&design.nodes, "1:2").unwrap();
    let subtitle = find(&design.nodes, "1:3").unwrap();
    assert_eq!(title.text_style, subtitle.text_style);

    let fill_ids: Vec<_> = design
        .global_vars
        .iter()
        .map(|(id, _)| id.as_str())
        .filter(|id| id.starts_with("fill-"))
        .collect();
    assert_eq!(fill_ids.len(), 2, "brand color and photo fill");

    // Corner radii and opacity
    assert_eq!(card.border_radius.as_deref(), Some("10px"));
    let badge = find(&design.nodes, "1:7").unwrap();
    assert_eq!(badge.border_radius.as_deref(), Some("5px 10px 15px 20px"));
    assert_eq!(badge.opacity, Some(0.5));
    assert_eq!(card.opacity, None);

    // Instance resolves through its component set and stays a leaf
    let cta = find(&design.nodes, "1:11").unwrap();
    assert_eq!(cta.component_name.as_deref(), Some("Button"));
    assert!(cta.children.is_empty());
    assert!(find(&design.nodes, "I1:11;2:2").is_none());
}

#[test]
fn test_no_duplicate_global_values() {
    let design = simplify_response(&file_response(), &SimplifyOptions::default()).unwrap();

    let values: Vec<_> = design.global_vars.iter().map(|(_, value)| value).collect();
    for (i, a) in values.iter().enumerate() {
        for b in &values[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_brand_color_normalization() {
    let design = simplify_response(&file_response(), &SimplifyOptions::default()).unwrap();
    let hero = find(&design.nodes, "1:1").unwrap();

    let globals = serde_json::to_value(&design.global_vars).unwrap();
    let fill = &globals["styles"][hero.fills.as_deref().unwrap()][0];
    assert_eq!(fill["hex"], json!("#336699"));
    assert_eq!(fill["rgba"], json!("rgba(51, 102, 153, 0.8)"));
    assert_eq!(fill["opacity"], json!(0.8));
}

#[test]
fn test_image_assets() {
    let design = simplify_response(&file_response(), &SimplifyOptions::default()).unwrap();

    let icon = find(&design.nodes, "1:8").unwrap();
    assert_eq!(icon.node_type, "IMAGE-SVG");

    let svgs: Vec<_> = design
        .image_assets
        .iter()
        .filter(|a| a.kind == ImageAssetKind::Svg)
        .collect();
    assert_eq!(svgs.len(), 1);
    assert_eq!(svgs[0].node_id, "1:8");
    assert_eq!(svgs[0].file_name, "My_Icon.svg");

    let fills: Vec<_> = design
        .image_assets
        .iter()
        .filter(|a| a.kind == ImageAssetKind::Fill)
        .collect();
    assert_eq!(fills.len(), 1);
    assert_eq!(fills[0].node_id, "1:9");
    assert_eq!(fills[0].image_ref.as_deref(), Some("img-ref-1"));
}

#[test]
fn test_serialized_output_has_no_empty_keys() {
    let design = simplify_response(&file_response(), &SimplifyOptions::default()).unwrap();
    let value = serde_json::to_value(&design).unwrap();

    fn check(node: &JsonValue) {
        for (key, value) in node.as_object().unwrap() {
            match value {
                JsonValue::Null => panic!("null value for {}", key),
                JsonValue::String(s) => assert!(!s.is_empty(), "empty string for {}", key),
                JsonValue::Array(a) => assert!(!a.is_empty(), "empty array for {}", key),
                _ => {}
            }
        }
        if let Some(children) = node.get("children").and_then(|c| c.as_array()) {
            children.iter().for_each(check);
        }
    }
    value["nodes"].as_array().unwrap().iter().for_each(check);

    assert_eq!(value["globalVars"]["styles"].as_object().unwrap().len(), design.global_vars.len());
}

#[test]
fn test_nodes_response_and_yaml() {
    let response = json!({
        "name": "Marketing site",
        "nodes": {
            "1:8": {
                "document": {"id": "1:8", "name": "My Icon", "type": "VECTOR"},
                "components": {},
                "componentSets": {}
            }
        }
    });

    let raw = parse_raw_design(&response.to_string()).unwrap();
    let design = simplify_design(&raw, &SimplifyOptions::default()).unwrap();
    assert_eq!(design.nodes[0].node_type, "IMAGE-SVG");

    let yaml = to_yaml(&design).unwrap();
    assert!(yaml.contains("type: IMAGE-SVG"));
    assert!(yaml.contains("fileNameSuggestion: My_Icon.svg"));
}

#[test]
fn test_malformed_response_is_fatal() {
    let result = simplify_response(&json!({"name": "x"}), &SimplifyOptions::default());
    assert!(matches!(result, Err(SimplifyError::InvalidInput(_))));

    assert!(matches!(parse_raw_design("not json"), Err(SimplifyError::Json(_))));
}
