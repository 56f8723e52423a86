use crate::simplify::raw::{get_array, get_f64, get_str};
use serde::Serialize;
use serde_json::Value as JsonValue;

use super::paint::{visible_paints, NormalizedPaint};

/// Per-side stroke weights
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrokeWeights {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl StrokeWeights {
    fn uniform(weight: f64) -> Self {
        Self {
            top: weight,
            right: weight,
            bottom: weight,
            left: weight,
        }
    }
}

/// Normalized stroke of a node
///
/// `colors` is empty when the node has no visible stroke paint; callers must
/// check it before interning.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StrokeStyle {
    pub colors: Vec<NormalizedPaint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weights: Option<StrokeWeights>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dashes: Vec<f64>,
}

/// Build the stroke description of a node
///
/// `individualStrokeWeights` takes precedence over a uniform `strokeWeight`.
pub fn build_stroke(node: &JsonValue) -> StrokeStyle {
    let weights = node
        .get("individualStrokeWeights")
        .and_then(|w| {
            Some(StrokeWeights {
                top: get_f64(w, "top")?,
                right: get_f64(w, "right")?,
                bottom: get_f64(w, "bottom")?,
                left: get_f64(w, "left")?,
            })
        })
        .or_else(|| get_f64(node, "strokeWeight").map(StrokeWeights::uniform));

    StrokeStyle {
        colors: visible_paints(node, "strokes"),
        weights,
        align: get_str(node, "strokeAlign").map(str::to_string),
        dashes: get_array(node, "strokeDashes")
            .unwrap_or_default()
            .iter()
            .filter_map(|d| d.as_f64())
            .collect(),
    }
}
