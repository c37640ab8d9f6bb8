use super::{Chunk, Item};

/// Borrowed view of either node kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeRef<'a> {
    Chunk(&'a Chunk),
    Item(&'a Item),
}

impl<'a> NodeRef<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            NodeRef::Chunk(chunk) => &chunk.name,
            NodeRef::Item(item) => &item.name,
        }
    }

    pub fn index(&self) -> Option<u32> {
        match self {
            NodeRef::Chunk(chunk) => chunk.index,
            NodeRef::Item(item) => item.index,
        }
    }

    pub fn as_chunk(&self) -> Option<&'a Chunk> {
        match self {
            NodeRef::Chunk(chunk) => Some(chunk),
            NodeRef::Item(_) => None,
        }
    }

    pub fn as_item(&self) -> Option<&'a Item> {
        match self {
            NodeRef::Item(item) => Some(item),
            NodeRef::Chunk(_) => None,
        }
    }

    pub fn inner_text(&self) -> String {
        match self {
            NodeRef::Chunk(chunk) => chunk.inner_text(),
            NodeRef::Item(item) => item.inner_text(),
        }
    }

    /// Text of a named part: a composite field of an item, or the first
    /// direct child item of a chunk
    pub fn part(&self, name: &str) -> Option<String> {
        match self {
            NodeRef::Item(item) => item.field(name).map(|f| f.text.clone()),
            NodeRef::Chunk(chunk) => chunk
                .items
                .iter()
                .find(|i| i.name == name)
                .map(Item::inner_text),
        }
    }

    /// Direct children in document order: items first, then chunks
    pub fn children(&self) -> Vec<NodeRef<'a>> {
        match self {
            NodeRef::Item(_) => Vec::new(),
            NodeRef::Chunk(chunk) => chunk
                .items
                .iter()
                .map(NodeRef::Item)
                .chain(chunk.chunks.iter().map(NodeRef::Chunk))
                .collect(),
        }
    }
}

impl<'a> From<&'a Chunk> for NodeRef<'a> {
    fn from(chunk: &'a Chunk) -> Self {
        NodeRef::Chunk(chunk)
    }
}

impl<'a> From<&'a Item> for NodeRef<'a> {
    fn from(item: &'a Item) -> Self {
        NodeRef::Item(item)
    }
}
