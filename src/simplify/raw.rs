//! Lenient accessors over raw API nodes
//!
//! Raw nodes stay as `serde_json::Value`. A field that is missing or carries an
//! unexpected JSON type reads as `None`, so a sparse node simply yields fewer
//! output keys.

use crate::types::{BoundingBox, Point};
use serde_json::Value as JsonValue;

pub fn get_str<'a>(node: &'a JsonValue, key: &str) -> Option<&'a str> {
    node.get(key).and_then(|v| v.as_str())
}

pub fn get_f64(node: &JsonValue, key: &str) -> Option<f64> {
    node.get(key).and_then(|v| v.as_f64())
}

pub fn get_bool(node: &JsonValue, key: &str) -> Option<bool> {
    node.get(key).and_then(|v| v.as_bool())
}

pub fn get_array<'a>(node: &'a JsonValue, key: &str) -> Option<&'a [JsonValue]> {
    node.get(key).and_then(|v| v.as_array()).map(|v| v.as_slice())
}

/// Non-empty array field
pub fn get_non_empty_array<'a>(node: &'a JsonValue, key: &str) -> Option<&'a [JsonValue]> {
    get_array(node, key).filter(|arr| !arr.is_empty())
}

/// Checks visibility; only an explicit `visible: false` hides a node, paint or effect
pub fn is_visible(value: &JsonValue) -> bool {
    get_bool(value, "visible").unwrap_or(true)
}

pub fn get_point(node: &JsonValue, key: &str) -> Option<Point> {
    let point = node.get(key)?;
    Some(Point {
        x: get_f64(point, "x")?,
        y: get_f64(point, "y")?,
    })
}

/// Read a rectangle with all four numeric fields
pub fn get_bounding_box(node: &JsonValue, key: &str) -> Option<BoundingBox> {
    let rect = node.get(key)?;
    Some(BoundingBox {
        x: get_f64(rect, "x")?,
        y: get_f64(rect, "y")?,
        width: get_f64(rect, "width")?,
        height: get_f64(rect, "height")?,
    })
}
