use serde::{Deserialize, Serialize};

/// Named container holding nested chunks and items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// Chunk name (not unique among siblings)
    pub name: String,
    /// Position attribute for repeated chunks (e.g. `param_input` 0, 1, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    /// Leaf values, in archive order
    #[serde(default)]
    pub items: Vec<Item>,
    /// Nested chunks, in archive order
    #[serde(default)]
    pub chunks: Vec<Chunk>,
}

/// Named leaf holding a type tag and a text value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    /// Archive type tag (e.g. `gh_string`, `gh_drawing_rectanglef`)
    #[serde(default)]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    #[serde(default)]
    pub text: String,
    /// Named parts of a composite value (points, rectangles, versions)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
}

/// One named part of a composite item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub text: String,
}

impl Chunk {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            index: None,
            items: Vec::new(),
            chunks: Vec::new(),
        }
    }

    pub fn with_index(mut self, index: u32) -> Self {
        self.index = Some(index);
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_chunk(mut self, chunk: Chunk) -> Self {
        self.chunks.push(chunk);
        self
    }

    /// Concatenated text of every descendant item, in document order
    pub fn inner_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for item in &self.items {
            out.push_str(&item.inner_text());
        }
        for chunk in &self.chunks {
            chunk.collect_text(out);
        }
    }
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        type_name: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            index: None,
            text: text.into(),
            fields: Vec::new(),
        }
    }

    /// Plain string item
    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name, "gh_string", text)
    }

    /// Composite item built from `(field, text)` pairs
    pub fn composite(
        name: impl Into<String>,
        type_name: impl Into<String>,
        fields: &[(&str, &str)],
    ) -> Self {
        let mut item = Self::new(name, type_name, "");
        item.fields = fields
            .iter()
            .map(|(name, text)| Field {
                name: name.to_string(),
                text: text.to_string(),
            })
            .collect();
        item
    }

    pub fn with_index(mut self, index: u32) -> Self {
        self.index = Some(index);
        self
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Item text, or the concatenated parts of a composite item
    pub fn inner_text(&self) -> String {
        if self.fields.is_empty() {
            self.text.clone()
        } else {
            self.fields.iter().map(|f| f.text.as_str()).collect()
        }
    }
}
