#[cfg(test)]
mod tests;

use crate::coerce::{
    as_bytes_base64, as_float, as_guid, as_int, as_string, as_text, as_uuid, part,
    version_triple, Field,
};
use crate::error::Result;
use crate::selector::{resolve_all, Selector};
use crate::tree::{Document, NodeRef};
use serde::Serialize;
use uuid::Uuid;

/// Document-level metadata of a design file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderRecord {
    /// Archive format version, `Major.Minor.Revision`
    pub archive_version: String,
    /// Version of the authoring tool that wrote the file
    pub plugin_version: String,
    pub document_id: Uuid,
    pub document_date: String,
    pub document_description: String,
    pub document_name: String,
    pub projection: Projection,
    pub author: Author,
    /// Component count as recorded in the file
    pub object_count: i32,
    pub dependencies: Vec<DependencyRecord>,
    /// Decoded thumbnail image bytes
    #[serde(skip_serializing)]
    pub thumbnail: Vec<u8>,
}

/// Canvas viewport saved with the document
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Projection {
    pub target_x: i32,
    pub target_y: i32,
    pub zoom: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub email: String,
    pub name: String,
    pub copyright: String,
}

/// A plugin library the document depends on
///
/// Every field is optional; `id` is nil when absent or unparsable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DependencyRecord {
    pub assembly_full_name: Option<String>,
    pub assembly_version: Option<String>,
    pub author: Option<String>,
    pub id: Uuid,
    pub name: Option<String>,
}

const ARCHIVE_VERSION: Field<String> =
    Field::required("archive_version", "//ArchiveVersion", version_triple);
const PLUGIN_VERSION: Field<String> =
    Field::required("plugin_version", "//plugin_version", version_triple);
const DOCUMENT_ID: Field<Uuid> =
    Field::required("document_id", "//DocumentHeader/DocumentID", as_uuid);
const DATE: Field<String> = Field::required("document_date", "//DefinitionProperties/Date", as_string);
const DESCRIPTION: Field<String> =
    Field::required("document_description", "//DefinitionProperties/Description", as_text);
const NAME: Field<String> = Field::required("document_name", "//DefinitionProperties/Name", as_string);
const TARGET: Field<(i32, i32)> = Field::required("projection_target", "//Projection/Target", target);
const ZOOM: Field<f64> = Field::required("projection_zoom", "//Projection/Zoom", as_float);
const AUTHOR_EMAIL: Field<String> = Field::required("author_email", "//Author/EMail", as_text);
const AUTHOR_NAME: Field<String> = Field::required("author_name", "//Author/Name", as_text);
const AUTHOR_COPYRIGHT: Field<String> =
    Field::required("author_copyright", "//Author/Copyright", as_text);
const OBJECT_COUNT: Field<i32> = Field::required("object_count", "//ObjectCount", as_int);
const THUMBNAIL: Field<Vec<u8>> = Field::required("thumbnail", "//Thumbnail", as_bytes_base64);

const LIBRARIES: &str = "//GHALibraries/Library";
const LIB_ASSEMBLY_FULL_NAME: Field<String> =
    Field::optional("assembly_full_name", "AssemblyFullName", as_text);
const LIB_ASSEMBLY_VERSION: Field<String> =
    Field::optional("assembly_version", "AssemblyVersion", as_text);
const LIB_AUTHOR: Field<String> = Field::optional("author", "Author", as_text);
const LIB_ID: Field<Uuid> = Field::optional("id", "Id", as_guid);
const LIB_NAME: Field<String> = Field::optional("name", "Name", as_text);

fn target(node: NodeRef<'_>) -> Result<(i32, i32)> {
    Ok((part(node, "X", "integer")?, part(node, "Y", "integer")?))
}

/// Assemble the header of a document
///
/// Every field except the dependency list is required; the first missing
/// or malformed one fails the whole header.
pub fn project_header(document: &Document) -> Result<HeaderRecord> {
    let root = document.root();
    let (target_x, target_y) = TARGET.take(root)?;

    Ok(HeaderRecord {
        archive_version: ARCHIVE_VERSION.take(root)?,
        plugin_version: PLUGIN_VERSION.take(root)?,
        document_id: DOCUMENT_ID.take(root)?,
        document_date: DATE.take(root)?,
        document_description: DESCRIPTION.take(root)?,
        document_name: NAME.take(root)?,
        projection: Projection {
            target_x,
            target_y,
            zoom: ZOOM.take(root)? as f32,
        },
        author: Author {
            email: AUTHOR_EMAIL.take(root)?,
            name: AUTHOR_NAME.take(root)?,
            copyright: AUTHOR_COPYRIGHT.take(root)?,
        },
        object_count: OBJECT_COUNT.take(root)?,
        dependencies: project_dependencies(root)?,
        thumbnail: THUMBNAIL.take(root)?,
    })
}

/// Plugin libraries listed under `GHALibraries`, in document order
///
/// Zero libraries is an empty list. Missing sub-fields leave the
/// corresponding record field unset.
pub fn project_dependencies(root: NodeRef<'_>) -> Result<Vec<DependencyRecord>> {
    let selector: Selector = LIBRARIES.parse()?;

    resolve_all(root, &selector)
        .into_iter()
        .map(|library| {
            Ok(DependencyRecord {
                assembly_full_name: LIB_ASSEMBLY_FULL_NAME.read(library)?,
                assembly_version: LIB_ASSEMBLY_VERSION.read(library)?,
                author: LIB_AUTHOR.read(library)?,
                id: LIB_ID.read(library)?.unwrap_or_default(),
                name: LIB_NAME.read(library)?,
            })
        })
        .collect()
}
