//! Builders that extract one style category from a raw node
//!
//! - `paint`: normalize fills, strokes and colors
//! - `text`: typography from the `style` block
//! - `stroke`: stroke paints, weights and alignment
//! - `effects`: shadows and blurs
//! - `layout`: auto-layout and positioning relative to the parent
//! - `radius`: corner radii as a CSS `border-radius` string
pub mod css;
pub mod effects;
pub mod layout;
pub mod paint;
pub mod radius;
pub mod stroke;
pub mod text;

pub use effects::{build_effects, Blur, EffectsStyle, Shadow};
pub use layout::{build_layout, LayoutMode, LayoutSizing, SimplifiedLayout};
pub use paint::{normalize_color, normalize_paint, visible_paints, GradientStop, NormalizedColor, NormalizedPaint};
pub use radius::build_border_radius;
pub use stroke::{build_stroke, StrokeStyle, StrokeWeights};
pub use text::{build_text_style, TextStyle};
