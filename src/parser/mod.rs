pub mod components;
pub mod design;

// Re-export commonly used items
pub use components::{ComponentLookup, ComponentMeta, ComponentSetMeta, ResolvedComponent};
pub use design::RawDesign;
