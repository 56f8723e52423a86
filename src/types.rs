use crate::simplify::GlobalVars;
use serde::Serialize;

/// Node type emitted in place of `VECTOR` so consumers render the shape as an image
pub const IMAGE_SVG_TYPE: &str = "IMAGE-SVG";

/// Final output of a simplification run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifiedDesign {
    pub name: String,
    pub last_modified: String,
    pub thumbnail_url: String,
    pub nodes: Vec<SimplifiedNode>,
    pub global_vars: GlobalVars,
    pub image_assets: Vec<ImageAsset>,
}

/// Minimal representation of a raw design node
///
/// Style-bearing fields hold ids into [`GlobalVars`], never inline values.
/// Every field is skipped on serialization when it holds an empty or default value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifiedNode {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub node_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fills: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strokes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effects: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub component_remote: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub component_properties: Vec<ComponentPropertyValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SimplifiedNode>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Absolute bounding box of a node, in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// 2D point or offset
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Instance-level override of a component property
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentPropertyValue {
    pub name: String,
    pub value: String,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub property_type: String,
}

/// Kind of downloadable image asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ImageAssetKind {
    /// A vector node, exported as SVG by node id
    #[serde(rename = "SVG")]
    Svg,
    /// A bitmap referenced by an image fill
    #[serde(rename = "FILL")]
    Fill,
}

/// A downloadable image referenced by the simplified tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAsset {
    pub node_id: String,
    #[serde(rename = "fileNameSuggestion")]
    pub file_name: String,
    #[serde(rename = "type")]
    pub kind: ImageAssetKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
}
