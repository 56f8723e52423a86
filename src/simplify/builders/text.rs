use crate::simplify::raw::{get_f64, get_str};
use serde::Serialize;
use serde_json::{Number, Value as JsonValue};

use super::css::px;

/// Typography of a text node
///
/// `lineHeight` and `letterSpacing` are CSS-ready pixel strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_case: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align_horizontal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align_vertical: Option<String>,
}

impl TextStyle {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Build the text style of a node from its `style` block
///
/// Returns an empty style when the node has no `style` object.
pub fn build_text_style(node: &JsonValue) -> TextStyle {
    let Some(style) = node.get("style").filter(|s| s.is_object()) else {
        return TextStyle::default();
    };

    TextStyle {
        font_family: get_str(style, "fontFamily").map(str::to_string),
        font_weight: get_number(style, "fontWeight"),
        font_size: get_number(style, "fontSize"),
        line_height: get_f64(style, "lineHeightPx").map(px),
        letter_spacing: get_f64(style, "letterSpacing").map(px),
        text_case: get_str(style, "textCase").map(str::to_string),
        text_align_horizontal: get_str(style, "textAlignHorizontal").map(str::to_string),
        text_align_vertical: get_str(style, "textAlignVertical").map(str::to_string),
    }
}

/// Keep the raw number so integral weights and sizes stay integral in the output
fn get_number(style: &JsonValue, key: &str) -> Option<Number> {
    match style.get(key) {
        Some(JsonValue::Number(n)) => Some(n.clone()),
        _ => None,
    }
}
