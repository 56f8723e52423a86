use crate::error::{Result, SimplifyError};
use serde_json::Value as JsonValue;

use super::components::ComponentLookup;

/// A design response reduced to what the simplifier walks
///
/// Built from either a whole-file response (`document`) or a nodes response
/// (`nodes`), so the walker only ever sees a flat list of top-level nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawDesign {
    pub name: String,
    pub last_modified: String,
    pub thumbnail_url: String,
    pub nodes: Vec<JsonValue>,
    pub components: ComponentLookup,
}

impl RawDesign {
    /// Normalize an API response into a [`RawDesign`]
    ///
    /// # Returns
    /// * `Ok(RawDesign)` - Top-level nodes and merged component lookups
    /// * `Err(SimplifyError::InvalidInput)` - If the response has neither shape
    pub fn from_value(response: &JsonValue) -> Result<Self> {
        let root = response
            .as_object()
            .ok_or_else(|| SimplifyError::InvalidInput("response is not a JSON object".to_string()))?;

        let text = |key: &str| {
            root.get(key)
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string()
        };
        let mut design = RawDesign {
            name: text("name"),
            last_modified: text("lastModified"),
            thumbnail_url: text("thumbnailUrl"),
            ..RawDesign::default()
        };

        if let Some(nodes) = root.get("nodes") {
            let nodes = nodes.as_object().ok_or_else(|| {
                SimplifyError::InvalidInput("`nodes` is not an object".to_string())
            })?;
            for (id, entry) in nodes {
                if entry.is_null() {
                    tracing::warn!(id = %id, "node not found in response, skipping");
                    continue;
                }
                let document = entry.get("document").ok_or_else(|| {
                    SimplifyError::InvalidInput(format!("node entry {} has no document", id))
                })?;
                design.nodes.push(document.clone());
                design.components.extend_from(entry);
            }
        } else if let Some(document) = root.get("document") {
            let children = document
                .get("children")
                .and_then(|v| v.as_array())
                .ok_or_else(|| {
                    SimplifyError::InvalidInput("`document` has no children array".to_string())
                })?;
            design.nodes = children.clone();
            design.components.extend_from(response);
        } else {
            return Err(SimplifyError::InvalidInput(
                "expected a `document` or `nodes` field".to_string(),
            ));
        }

        Ok(design)
    }
}
