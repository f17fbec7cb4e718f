pub mod component_type;
pub mod dependency_reference;
pub mod development_component;

pub use component_type::DevelopmentComponentType;
pub use dependency_reference::{DependencyReference, DependencyUsage};
pub use development_component::DevelopmentComponent;
