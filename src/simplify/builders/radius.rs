use crate::simplify::raw::{get_array, get_f64};
use serde_json::Value as JsonValue;

use super::css::px;

/// Format a node's corner radius as a CSS `border-radius` value
///
/// `rectangleCornerRadii` (top-left, top-right, bottom-right, bottom-left)
/// takes precedence over a uniform `cornerRadius`. Zero radii are omitted.
pub fn build_border_radius(node: &JsonValue) -> Option<String> {
    if let Some(radii) = get_array(node, "rectangleCornerRadii") {
        let radii: Vec<f64> = radii.iter().filter_map(|r| r.as_f64()).collect();
        if radii.len() == 4 && radii.iter().any(|r| *r != 0.0) {
            let parts: Vec<String> = radii.into_iter().map(px).collect();
            return Some(parts.join(" "));
        }
    }

    get_f64(node, "cornerRadius")
        .filter(|radius| *radius != 0.0)
        .map(px)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_uniform_radius() {
        assert_eq!(build_border_radius(&json!({"cornerRadius": 10})).as_deref(), Some("10px"));
        assert_eq!(build_border_radius(&json!({"cornerRadius": 2.5})).as_deref(), Some("2.5px"));
    }

    #[test]
    fn test_independent_radii_keep_corner_order() {
        let node = json!({"cornerRadius": 10, "rectangleCornerRadii": [5, 10, 15, 20]});
        assert_eq!(build_border_radius(&node).as_deref(), Some("5px 10px 15px 20px"));
    }

    #[test]
    fn test_zero_and_malformed_radii() {
        assert_eq!(build_border_radius(&json!({"cornerRadius": 0})), None);
        assert_eq!(build_border_radius(&json!({"rectangleCornerRadii": [0, 0, 0, 0]})), None);
        // Wrong arity falls back to the uniform radius
        let node = json!({"rectangleCornerRadii": [1, 2], "cornerRadius": 4});
        assert_eq!(build_border_radius(&node).as_deref(), Some("4px"));
        assert_eq!(build_border_radius(&json!({})), None);
    }
}
