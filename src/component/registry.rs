use super::{ComponentKind, GenericProjector, PanelProjector, SliderProjector};
use crate::error::Result;
use crate::tree::NodeRef;
use std::collections::HashMap;

/// Core trait for assembling a component's variant payload
pub trait VariantProjector: Send + Sync {
    /// Build the variant-specific part of a component record
    ///
    /// # Arguments
    /// * `root` - The component's `Object` chunk
    fn project(&self, root: NodeRef<'_>) -> Result<ComponentKind>;
}

/// Discriminator dispatch table for component variants
pub struct ComponentRegistry {
    /// Projector for names with no registered entry
    fallback: Box<dyn VariantProjector>,
    /// Exact component name -> projector
    map: HashMap<String, Box<dyn VariantProjector>>,
}

impl ComponentRegistry {
    /// Registry with the built-in `Number Slider` and `Panel` entries
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(SliderProjector::NAME, SliderProjector);
        registry.register(PanelProjector::NAME, PanelProjector);
        registry
    }

    /// Registry where every name maps to the generic fallback
    pub fn empty() -> Self {
        Self {
            fallback: Box::new(GenericProjector),
            map: HashMap::new(),
        }
    }

    /// Register a projector for an exact, case-sensitive component name
    ///
    /// Existing entries are kept; returns whether the name was added.
    ///
    /// # Example
    /// ```ignore
    /// registry.register("Value List", ValueListProjector);
    /// ```
    pub fn register(
        &mut self,
        name: impl Into<String>,
        projector: impl VariantProjector + 'static,
    ) -> bool {
        let name = name.into();
        if self.map.contains_key(&name) {
            return false;
        }
        self.map.insert(name, Box::new(projector));
        true
    }

    /// Select the projector for a component name
    ///
    /// Falls back to the generic projector for unknown names
    pub fn select(&self, name: &str) -> &dyn VariantProjector {
        self.map.get(name).map(|p| &**p).unwrap_or(&*self.fallback)
    }

    /// Get the number of registered projectors (excluding fallback)
    pub fn projector_count(&self) -> usize {
        self.map.len()
    }

    /// List all registered component names, sorted
    pub fn registered_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.map.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
