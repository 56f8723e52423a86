use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// Component definition as listed in an API response's `components` map
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentMeta {
    pub name: String,
    pub component_set_id: Option<String>,
    pub remote: bool,
}

/// Component set (variant group) as listed in a response's `componentSets` map
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentSetMeta {
    pub name: String,
    pub remote: bool,
}

/// Display name and origin of the component an instance points to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedComponent {
    pub name: String,
    pub remote: bool,
}

/// Component lookups keyed by component id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentLookup {
    pub components: HashMap<String, ComponentMeta>,
    pub component_sets: HashMap<String, ComponentSetMeta>,
}

impl ComponentLookup {
    /// Merge the `components` and `componentSets` maps of a response object
    ///
    /// Entries that don't match the expected shape are skipped.
    pub fn extend_from(&mut self, container: &JsonValue) {
        if let Some(components) = container.get("components").and_then(|v| v.as_object()) {
            for (id, meta) in components {
                match serde_json::from_value::<ComponentMeta>(meta.clone()) {
                    Ok(meta) => {
                        self.components.insert(id.clone(), meta);
                    }
                    Err(err) => tracing::debug!(id = %id, %err, "skipping malformed component"),
                }
            }
        }

        if let Some(sets) = container.get("componentSets").and_then(|v| v.as_object()) {
            for (id, meta) in sets {
                match serde_json::from_value::<ComponentSetMeta>(meta.clone()) {
                    Ok(meta) => {
                        self.component_sets.insert(id.clone(), meta);
                    }
                    Err(err) => tracing::debug!(id = %id, %err, "skipping malformed component set"),
                }
            }
        }
    }

    /// Resolve the component an instance references
    ///
    /// Variants report the name of their component set, so all variants of a
    /// button resolve to "Button" rather than "Size=Large, State=Hover".
    pub fn resolve(&self, component_id: &str) -> Option<ResolvedComponent> {
        let component = self.components.get(component_id)?;
        let set = component
            .component_set_id
            .as_deref()
            .and_then(|set_id| self.component_sets.get(set_id));

        Some(match set {
            Some(set) => ResolvedComponent {
                name: set.name.clone(),
                remote: component.remote || set.remote,
            },
            None => ResolvedComponent {
                name: component.name.clone(),
                remote: component.remote,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lookup() -> ComponentLookup {
        let mut lookup = ComponentLookup::default();
        lookup.extend_from(&json!({
            "components": {
                "1:1": {"key": "k1", "name": "Icon/Close", "remote": true},
                "1:2": {"key": "k2", "name": "Size=Large", "componentSetId": "1:9"},
                "1:3": {"key": "k3", "name": "Orphan", "componentSetId": "9:9"},
                "1:4": "not an object"
            },
            "componentSets": {
                "1:9": {"key": "k9", "name": "Button"}
            }
        }));
        lookup
    }

    #[test]
    fn test_resolve_plain_component() {
        let resolved = lookup().resolve("1:1").unwrap();
        assert_eq!(resolved.name, "Icon/Close");
        assert!(resolved.remote);
    }

    #[test]
    fn test_resolve_variant_uses_set_name() {
        let resolved = lookup().resolve("1:2").unwrap();
        assert_eq!(resolved.name, "Button");
        assert!(!resolved.remote);
    }

    #[test]
    fn test_resolve_with_missing_set_falls_back() {
        assert_eq!(lookup().resolve("1:3").unwrap().name, "Orphan");
    }

    #[test]
    fn test_unknown_and_malformed_components() {
        let lookup = lookup();
        assert!(lookup.resolve("404:1").is_none());
        assert!(lookup.resolve("1:4").is_none());
        assert_eq!(lookup.components.len(), 3);
    }
}
