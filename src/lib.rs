//! # figsimplify
//!
//! A library for turning Figma REST API documents into a compact,
//! de-duplicated representation that code generators can consume.
//!
//! The raw tree is walked once. Hidden nodes are dropped, and repeated
//! styles are interned into a shared table referenced by id. Vector shapes
//! become image placeholders, and instances become opaque leaves. Image
//! assets are then collected from the result.
//!
//! ## Example
//!
//! ```no_run
//! use figsimplify::{parse_raw_design, simplify_design, SimplifyOptions};
//!
//! let json = std::fs::read_to_string("file.json").unwrap();
//!
//! // Accepts both `GET /files/:key` and `GET /files/:key/nodes` responses
//! let raw = parse_raw_design(&json).unwrap();
//! let design = simplify_design(&raw, &SimplifyOptions::default()).unwrap();
//!
//! println!("Nodes: {}", design.nodes.len());
//! println!("Shared styles: {}", design.global_vars.len());
//! println!("Image assets: {}", design.image_assets.len());
//! ```

pub mod assets;
pub mod error;
pub mod parser;
pub mod simplify;
pub mod types;

// Re-export commonly used items
pub use error::{Result, SimplifyError};
pub use parser::RawDesign;
pub use simplify::{simplify_design, GlobalVars, SimplifyOptions, StyleValue};
pub use types::{ImageAsset, ImageAssetKind, SimplifiedDesign, SimplifiedNode};

use serde_json::Value as JsonValue;

/// Parse an API response body into a [`RawDesign`]
pub fn parse_raw_design(json: &str) -> Result<RawDesign> {
    let value: JsonValue = serde_json::from_str(json)?;
    RawDesign::from_value(&value)
}

/// Simplify an already-parsed API response
pub fn simplify_response(response: &JsonValue, options: &SimplifyOptions) -> Result<SimplifiedDesign> {
    let raw = RawDesign::from_value(response)?;
    simplify_design(&raw, options)
}

/// Serialize a design as YAML
pub fn to_yaml(design: &SimplifiedDesign) -> Result<String> {
    Ok(serde_yaml::to_string(design)?)
}
