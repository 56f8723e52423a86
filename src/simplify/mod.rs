//! Tree simplification and style de-duplication
//!
//! - `raw`: lenient accessors over raw API nodes
//! - `builders`: per-category style extraction (paint, text, stroke, effects, layout, radius)
//! - `vars`: the global variable table that interns style values
//! - `walker`: the depth-first walk producing simplified nodes
pub mod builders;
pub mod raw;
pub mod vars;
pub mod walker;

pub use vars::{GlobalVars, StyleValue};
pub use walker::{simplify_node, simplify_nodes, WalkContext};

use crate::assets::collect_image_assets;
use crate::error::Result;
use crate::parser::RawDesign;
use crate::types::SimplifiedDesign;

/// Options controlling a simplification run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimplifyOptions {
    /// Deepest level to emit; top-level nodes are level 0. `None` walks the whole tree.
    pub max_depth: Option<usize>,
}

/// Simplify a normalized design into the output bundle
///
/// Walks every top-level node with a fresh [`GlobalVars`] table, then collects
/// image assets from the result. Either the whole design converts or an error
/// is returned; there is no partial output.
pub fn simplify_design(design: &RawDesign, options: &SimplifyOptions) -> Result<SimplifiedDesign> {
    let ctx = WalkContext {
        components: &design.components,
        options,
    };
    let mut globals = GlobalVars::new();

    let nodes = simplify_nodes(&design.nodes, None, 0, &ctx, &mut globals)?;
    let image_assets = collect_image_assets(&nodes, &globals);

    tracing::debug!(
        nodes = nodes.len(),
        global_vars = globals.len(),
        image_assets = image_assets.len(),
        "simplified design"
    );

    Ok(SimplifiedDesign {
        name: design.name.clone(),
        last_modified: design.last_modified.clone(),
        thumbnail_url: design.thumbnail_url.clone(),
        nodes,
        global_vars: globals,
        image_assets,
    })
}
