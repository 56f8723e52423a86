use crate::simplify::raw::{get_array, get_f64, get_str, is_visible};
use crate::types::Point;
use serde::Serialize;
use serde_json::Value as JsonValue;

use super::css::round2;

/// Solid color in the three forms consumers ask for
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedColor {
    pub hex: String,
    pub rgba: String,
    pub opacity: f64,
}

/// A color stop of a gradient paint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientStop {
    pub position: f64,
    pub color: NormalizedColor,
}

/// Normalized fill or stroke paint
///
/// Only the fields relevant to `paint_type` are set. Unknown paint types keep
/// just their type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedPaint {
    #[serde(rename = "type")]
    pub paint_type: String,
    #[serde(flatten)]
    pub color: Option<NormalizedColor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gradient_handle_positions: Vec<Point>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gradient_stops: Vec<GradientStop>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_mode: Option<String>,
}

impl NormalizedPaint {
    fn of_type(paint_type: &str) -> Self {
        Self {
            paint_type: paint_type.to_string(),
            color: None,
            gradient_handle_positions: Vec::new(),
            gradient_stops: Vec::new(),
            image_ref: None,
            scale_mode: None,
        }
    }
}

/// Normalize a raw `{r, g, b, a}` color
///
/// Channels in 0.0-1.0 become 0-255 bytes. The effective alpha is the color
/// alpha multiplied by `opacity`, rounded to two decimals.
///
/// # Returns
/// * `Some(NormalizedColor)` - The hex, rgba and opacity forms
/// * `None` - If any of r, g, b is missing or not a number
pub fn normalize_color(color: &JsonValue, opacity: f64) -> Option<NormalizedColor> {
    let r = channel_to_byte(get_f64(color, "r")?);
    let g = channel_to_byte(get_f64(color, "g")?);
    let b = channel_to_byte(get_f64(color, "b")?);
    let alpha = round2(get_f64(color, "a").unwrap_or(1.0) * opacity);

    Some(NormalizedColor {
        hex: format!("#{:02X}{:02X}{:02X}", r, g, b),
        rgba: format!("rgba({}, {}, {}, {})", r, g, b, alpha),
        opacity: alpha,
    })
}

/// Normalize a single raw paint
///
/// Never fails: a paint with a missing or unknown `type` keeps only its type.
pub fn normalize_paint(paint: &JsonValue) -> NormalizedPaint {
    let paint_type = get_str(paint, "type").unwrap_or_default();
    let mut normalized = NormalizedPaint::of_type(paint_type);
    let opacity = get_f64(paint, "opacity").unwrap_or(1.0);

    match paint_type {
        "SOLID" => {
            normalized.color = paint
                .get("color")
                .and_then(|color| normalize_color(color, opacity));
        }
        "GRADIENT_LINEAR" | "GRADIENT_RADIAL" | "GRADIENT_ANGULAR" | "GRADIENT_DIAMOND" => {
            normalized.gradient_handle_positions = get_array(paint, "gradientHandlePositions")
                .unwrap_or_default()
                .iter()
                .filter_map(|handle| {
                    Some(Point {
                        x: get_f64(handle, "x")?,
                        y: get_f64(handle, "y")?,
                    })
                })
                .collect();
            normalized.gradient_stops = get_array(paint, "gradientStops")
                .unwrap_or_default()
                .iter()
                .filter_map(|stop| {
                    Some(GradientStop {
                        position: get_f64(stop, "position")?,
                        color: normalize_color(stop.get("color")?, opacity)?,
                    })
                })
                .collect();
        }
        "IMAGE" => {
            normalized.image_ref = get_str(paint, "imageRef").map(str::to_string);
            normalized.scale_mode = get_str(paint, "scaleMode").map(str::to_string);
        }
        _ => {}
    }

    normalized
}

/// Normalize every visible paint of a node's paint array (`fills` or `strokes`)
///
/// Paints with `visible: false` are dropped; the result is empty when the
/// array is missing or holds only invisible paints.
pub fn visible_paints(node: &JsonValue, key: &str) -> Vec<NormalizedPaint> {
    get_array(node, key)
        .unwrap_or_default()
        .iter()
        .filter(|paint| is_visible(paint))
        .map(normalize_paint)
        .collect()
}

/// Convert a float in range 0.0-1.0 to a byte in range 0-255
///
/// Clamps the input to [0.0, 1.0] range and rounds to nearest integer.
fn channel_to_byte(value: f64) -> u8 {
    let clamped = value.clamp(0.0, 1.0);
    (clamped * 255.0).round() as u8
}
