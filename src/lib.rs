// Public API exports
pub mod coerce;
pub mod component;
pub mod error;
pub mod header;
pub mod parameter;
pub mod projector;
pub mod selector;
pub mod tree;

#[cfg(test)]
mod fixtures;

// Re-export main types for convenience
pub use error::{ProjectError, Result};

pub use tree::{Chunk, Document, Item, NodeRef};

pub use selector::{resolve, resolve_all, resolve_scope, Axis, Selector, Step};

pub use coerce::{Argb, PointF, Rectangle};

pub use header::{
    project_dependencies, project_header, Author, DependencyRecord, HeaderRecord, Projection,
};

pub use parameter::{project_parameters, Direction, ParameterRecord};

pub use component::{
    project_component, project_component_with, ComponentBase, ComponentKind, ComponentRecord,
    ComponentRegistry, GenericProjector, PanelProperties, SliderProperties, VariantProjector,
};

pub use projector::{
    ComponentBatch, ComponentFailure, DocumentRecord, Projector, ProjectorBuilder,
};
