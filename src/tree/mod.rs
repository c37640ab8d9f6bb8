mod node;
mod node_ref;


pub use node::{Chunk, Field, Item};
pub use node_ref::NodeRef;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root chunk of a single design file
///
/// Immutable from the projector's point of view. Produced by an external
/// archive decoder; JSON is the hand-off format accepted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub root: Chunk,
}

impl Document {
    pub fn new(root: Chunk) -> Self {
        Self { root }
    }

    pub fn root(&self) -> NodeRef<'_> {
        NodeRef::Chunk(&self.root)
    }

    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load a decoded archive tree from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .context(format!("Failed to read tree file: {}", path.display()))?;
        let document = Self::from_json_str(&json)
            .context(format!("Failed to parse tree JSON: {}", path.display()))?;
        Ok(document)
    }
}

impl From<Chunk> for Document {
    fn from(root: Chunk) -> Self {
        Self::new(root)
    }
}
