
use crate::coerce::{as_string, as_uuid, Field};
use crate::component::{
    project_component_with, ComponentRecord, ComponentRegistry, VariantProjector,
};
use crate::error::{ProjectError, Result};
use crate::header::{project_header, HeaderRecord};
use crate::selector::{resolve_all, Selector};
use crate::tree::{Document, NodeRef};
use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

/// Where component objects live in an archive
pub const DEFAULT_COMPONENTS_SELECTOR: &str = "//DefinitionObjects//Object";

/// Everything projected from one document
#[derive(Debug, Clone, Serialize)]
pub struct DocumentRecord {
    pub header: HeaderRecord,
    pub components: Vec<ComponentRecord>,
    /// Components that could not be projected, in document order
    pub failures: Vec<ComponentFailure>,
}

/// A component that failed to project, with whatever identity could be read
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentFailure {
    /// Position among the document's components
    pub index: usize,
    pub name: Option<String>,
    pub instance_id: Option<Uuid>,
    pub error: ProjectError,
}

/// Result of projecting every component of a document
#[derive(Debug, Clone, Default)]
pub struct ComponentBatch {
    pub components: Vec<ComponentRecord>,
    pub failures: Vec<ComponentFailure>,
}

const FAILED_NAME: Field<String> = Field::optional("name", "Name", as_string);
const FAILED_INSTANCE_ID: Field<Uuid> =
    Field::optional("instance_id", "Container/InstanceGuid", as_uuid);

/// Mutable builder for configuring a projector
pub struct ProjectorBuilder {
    registry: ComponentRegistry,
    components_selector: String,
    fail_fast: bool,
}

impl ProjectorBuilder {
    /// Create a new builder with the built-in variants and per-component
    /// failure isolation
    pub fn new() -> Self {
        Self {
            registry: ComponentRegistry::new(),
            components_selector: DEFAULT_COMPONENTS_SELECTOR.to_string(),
            fail_fast: false,
        }
    }

    /// Set the selector locating component chunks from the document root
    pub fn components_selector(mut self, selector: impl Into<String>) -> Self {
        self.components_selector = selector.into();
        self
    }

    /// Abort on the first component failure instead of collecting it
    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Add a variant projector for an exact component name
    ///
    /// A name that is already registered keeps its existing projector; the
    /// rejected entry is logged and dropped.
    pub fn register(
        mut self,
        name: impl Into<String>,
        projector: impl VariantProjector + 'static,
    ) -> Self {
        let name = name.into();
        if !self.registry.register(name.clone(), projector) {
            warn!(name = %name, "Component variant already registered, keeping existing");
        }
        self
    }

    /// Replace the whole variant table
    pub fn registry(mut self, registry: ComponentRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn build(self) -> Result<Projector> {
        Ok(Projector {
            registry: self.registry,
            components: self.components_selector.parse()?,
            fail_fast: self.fail_fast,
        })
    }
}

impl Default for ProjectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Projects whole documents, isolating per-component failures
pub struct Projector {
    registry: ComponentRegistry,
    components: Selector,
    fail_fast: bool,
}

impl Projector {
    /// Projector with default settings
    pub fn new() -> Self {
        Self {
            registry: ComponentRegistry::new(),
            components: Selector::descendant("DefinitionObjects").then_descendant("Object"),
            fail_fast: false,
        }
    }

    pub fn builder() -> ProjectorBuilder {
        ProjectorBuilder::new()
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Project the header and every component of a document
    ///
    /// Header failures fail the document. Component failures are collected
    /// into `failures` unless the projector is fail-fast.
    pub fn project(&self, document: &Document) -> Result<DocumentRecord> {
        let header = project_header(document)?;
        let batch = self.project_components(document)?;

        Ok(DocumentRecord {
            header,
            components: batch.components,
            failures: batch.failures,
        })
    }

    /// Component chunks of a document, in document order
    pub fn component_nodes<'a>(&self, document: &'a Document) -> Vec<NodeRef<'a>> {
        resolve_all(document.root(), &self.components)
    }

    pub fn project_components(&self, document: &Document) -> Result<ComponentBatch> {
        let mut batch = ComponentBatch::default();

        for (index, node) in self.component_nodes(document).into_iter().enumerate() {
            match self.project_component(node) {
                Ok(record) => {
                    debug!(
                        index,
                        name = %record.base.name,
                        variant = record.kind.variant_name(),
                        "Projected component"
                    );
                    batch.components.push(record);
                }
                Err(error) if self.fail_fast => return Err(error),
                Err(error) => {
                    let failure = ComponentFailure {
                        index,
                        name: FAILED_NAME.read(node).ok().flatten(),
                        instance_id: FAILED_INSTANCE_ID.read(node).ok().flatten(),
                        error,
                    };
                    warn!(
                        index,
                        name = failure.name.as_deref().unwrap_or("<unnamed>"),
                        error = %failure.error,
                        "Skipping component"
                    );
                    batch.failures.push(failure);
                }
            }
        }

        Ok(batch)
    }

    /// Project one component chunk through this projector's variant table
    pub fn project_component(&self, root: NodeRef<'_>) -> Result<ComponentRecord> {
        project_component_with(root, &self.registry)
    }
}

impl Default for Projector {
    fn default() -> Self {
        Self::new()
    }
}
