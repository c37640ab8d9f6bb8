use super::{ComponentKind, VariantProjector};
use crate::error::Result;
use crate::tree::NodeRef;

/// Fallback for component names with no registered variant
pub struct GenericProjector;

impl VariantProjector for GenericProjector {
    fn project(&self, _root: NodeRef<'_>) -> Result<ComponentKind> {
        Ok(ComponentKind::Generic)
    }
}
