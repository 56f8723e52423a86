use crate::simplify::raw::{get_array, get_f64, get_point, get_str, is_visible};
use crate::types::Point;
use serde::Serialize;
use serde_json::Value as JsonValue;

use super::paint::{normalize_color, NormalizedColor};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shadow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<NormalizedColor>,
    pub offset: Point,
    pub radius: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spread: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Blur {
    pub radius: f64,
}

/// Visible effects of a node, grouped by kind
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectsStyle {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub drop_shadows: Vec<Shadow>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inner_shadows: Vec<Shadow>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub layer_blurs: Vec<Blur>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub background_blurs: Vec<Blur>,
}

impl EffectsStyle {
    pub fn is_empty(&self) -> bool {
        self.drop_shadows.is_empty()
            && self.inner_shadows.is_empty()
            && self.layer_blurs.is_empty()
            && self.background_blurs.is_empty()
    }
}

/// Partition the visible `effects` of a node by effect type
pub fn build_effects(node: &JsonValue) -> EffectsStyle {
    let mut effects = EffectsStyle::default();

    for effect in get_array(node, "effects").unwrap_or_default() {
        if !is_visible(effect) {
            continue;
        }
        match get_str(effect, "type") {
            Some("DROP_SHADOW") => effects.drop_shadows.push(build_shadow(effect)),
            Some("INNER_SHADOW") => effects.inner_shadows.push(build_shadow(effect)),
            Some("LAYER_BLUR") => effects.layer_blurs.push(build_blur(effect)),
            Some("BACKGROUND_BLUR") => effects.background_blurs.push(build_blur(effect)),
            _ => {}
        }
    }

    effects
}

fn build_shadow(effect: &JsonValue) -> Shadow {
    Shadow {
        color: effect
            .get("color")
            .and_then(|color| normalize_color(color, 1.0)),
        offset: get_point(effect, "offset").unwrap_or(Point { x: 0.0, y: 0.0 }),
        radius: get_f64(effect, "radius").unwrap_or(0.0),
        spread: get_f64(effect, "spread").filter(|s| *s != 0.0),
    }
}

fn build_blur(effect: &JsonValue) -> Blur {
    Blur {
        radius: get_f64(effect, "radius").unwrap_or(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partition_by_type() {
        let node = json!({
            "effects": [
                {
                    "type": "DROP_SHADOW",
                    "visible": true,
                    "color": {"r": 0.0, "g": 0.0, "b": 0.0, "a": 0.25},
                    "offset": {"x": 0.0, "y": 4.0},
                    "radius": 4.0,
                    "spread": 0.0
                },
                {
                    "type": "INNER_SHADOW",
                    "color": {"r": 1.0, "g": 1.0, "b": 1.0, "a": 1.0},
                    "offset": {"x": 1.0, "y": 1.0},
                    "radius": 2.0,
                    "spread": 1.0
                },
                {"type": "LAYER_BLUR", "radius": 8.0},
                {"type": "BACKGROUND_BLUR", "radius": 12.0}
            ]
        });

        let effects = build_effects(&node);
        assert_eq!(effects.drop_shadows.len(), 1);
        assert_eq!(effects.inner_shadows.len(), 1);
        assert_eq!(effects.layer_blurs[0].radius, 8.0);
        assert_eq!(effects.background_blurs[0].radius, 12.0);

        let shadow = &effects.drop_shadows[0];
        assert_eq!(shadow.offset, Point { x: 0.0, y: 4.0 });
        assert_eq!(shadow.color.as_ref().unwrap().rgba, "rgba(0, 0, 0, 0.25)");
        assert_eq!(shadow.spread, None);
        assert_eq!(effects.inner_shadows[0].spread, Some(1.0));
    }

    #[test]
    fn test_invisible_effects_are_excluded() {
        let node = json!({
            "effects": [
                {"type": "LAYER_BLUR", "visible": false, "radius": 8.0},
                {"type": "BACKGROUND_BLUR", "radius": 4.0}
            ]
        });

        let effects = build_effects(&node);
        assert!(effects.layer_blurs.is_empty());
        assert_eq!(effects.background_blurs.len(), 1);

        let value = serde_json::to_value(&effects).unwrap();
        assert_eq!(value, json!({"backgroundBlurs": [{"radius": 4.0}]}));
    }

    #[test]
    fn test_no_effects_is_empty() {
        assert!(build_effects(&json!({"effects": []})).is_empty());
        assert!(build_effects(&json!({})).is_empty());
        assert!(build_effects(&json!({"effects": [{"type": "LAYER_BLUR", "visible": false}]})).is_empty());
    }
}
