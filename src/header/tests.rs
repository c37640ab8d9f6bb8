use super::*;
use crate::error::ProjectError;
use crate::fixtures::{self, DOCUMENT_GUID, LIBRARY_GUID};
use crate::tree::{Chunk, Item};

#[test]
fn test_project_full_header() {
    let doc = fixtures::document(
        vec![fixtures::library(0, "Kangaroo2"), fixtures::library(1, "Human")],
        vec![fixtures::slider_object()],
    );

    let header = project_header(&doc).unwrap();
    assert_eq!(header.archive_version, "0.2.2");
    assert_eq!(header.plugin_version, "1.0.7");
    assert_eq!(header.document_id.to_string(), DOCUMENT_GUID);
    assert_eq!(header.document_date, "638412345678901234");
    assert_eq!(header.document_description, "");
    assert_eq!(header.document_name, "bench.ghx");
    assert_eq!(
        header.projection,
        Projection {
            target_x: -12,
            target_y: 34,
            zoom: 1.25
        }
    );
    assert_eq!(header.author.email, "dev@example.com");
    assert_eq!(header.author.name, "Dev");
    assert_eq!(header.author.copyright, "");
    assert_eq!(header.object_count, 1);
    assert_eq!(header.thumbnail, vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);

    let names: Vec<Option<&str>> = header
        .dependencies
        .iter()
        .map(|d| d.name.as_deref())
        .collect();
    assert_eq!(names, vec![Some("Kangaroo2"), Some("Human")]);
    assert_eq!(header.dependencies[0].id.to_string(), LIBRARY_GUID);
    assert_eq!(
        header.dependencies[0].assembly_version.as_deref(),
        Some("1.0.0.0")
    );
}

#[test]
fn test_no_libraries_is_empty_list() {
    let doc = fixtures::document(vec![], vec![]);
    let header = project_header(&doc).unwrap();
    assert!(header.dependencies.is_empty());
    assert_eq!(header.object_count, 0);
}

#[test]
fn test_dependency_fields_are_individually_optional() {
    let root = Chunk::new("Definition").with_chunk(
        Chunk::new("GHALibraries")
            .with_chunk(
                Chunk::new("Library")
                    .with_item(Item::text("Name", "Partial"))
                    .with_item(Item::new("Id", "gh_guid", "{not a guid}")),
            )
            .with_chunk(Chunk::new("Library")),
    );

    let deps = project_dependencies(NodeRef::from(&root)).unwrap();
    assert_eq!(deps.len(), 2);
    assert_eq!(deps[0].name.as_deref(), Some("Partial"));
    assert!(deps[0].id.is_nil());
    assert_eq!(deps[0].author, None);
    assert_eq!(deps[1], DependencyRecord::default());
}

#[test]
fn test_empty_dependency_text_is_kept() {
    let root = Chunk::new("Definition").with_chunk(
        Chunk::new("GHALibraries").with_chunk(
            Chunk::new("Library")
                .with_item(Item::text("AssemblyVersion", ""))
                .with_item(Item::text("Name", "Unversioned")),
        ),
    );

    let deps = project_dependencies(NodeRef::from(&root)).unwrap();
    assert_eq!(deps[0].assembly_version.as_deref(), Some(""));
    assert_eq!(deps[0].author, None);
}

#[test]
fn test_libraries_outside_ghalibraries_are_ignored() {
    let root = Chunk::new("Definition").with_chunk(
        Chunk::new("Other").with_chunk(Chunk::new("Library").with_item(Item::text("Name", "x"))),
    );
    assert!(project_dependencies(NodeRef::from(&root)).unwrap().is_empty());
}

fn without(doc: &Document, chunk: &str, item: &str) -> Document {
    fn strip(node: &mut Chunk, chunk: &str, item: &str) {
        if node.name == chunk {
            node.items.retain(|i| i.name != item);
        }
        for child in &mut node.chunks {
            strip(child, chunk, item);
        }
    }

    let mut doc = doc.clone();
    strip(&mut doc.root, chunk, item);
    doc
}

#[test]
fn test_missing_required_field_names_the_field() {
    let doc = fixtures::document(vec![], vec![]);

    let err = project_header(&without(&doc, "DocumentHeader", "DocumentID")).unwrap_err();
    assert_eq!(
        err,
        ProjectError::MissingField {
            path: "//DocumentHeader/DocumentID".to_string()
        }
    );

    let err = project_header(&without(&doc, "Author", "EMail")).unwrap_err();
    assert_eq!(err.path(), "//Author/EMail");

    // the Thumbnail chunk is still there but holds no payload
    let err = project_header(&without(&doc, "Thumbnail", "Thumbnail")).unwrap_err();
    assert_eq!(
        err,
        ProjectError::EmptyField {
            path: "//Thumbnail".to_string()
        }
    );
}

#[test]
fn test_empty_document_name_is_empty_field() {
    let mut doc = fixtures::document(vec![], vec![]);
    let props = doc.root.chunks[0]
        .chunks
        .iter_mut()
        .find(|c| c.name == "DefinitionProperties")
        .unwrap();
    props.items.retain(|i| i.name != "Name");
    props.items.push(Item::text("Name", ""));

    let err = project_header(&doc).unwrap_err();
    assert_eq!(
        err,
        ProjectError::EmptyField {
            path: "//DefinitionProperties/Name".to_string()
        }
    );
}

#[test]
fn test_malformed_version_part() {
    let mut doc = fixtures::document(vec![], vec![]);
    doc.root.items[0] = Item::composite(
        "ArchiveVersion",
        "gh_version",
        &[("Major", "0"), ("Minor", "two"), ("Revision", "2")],
    );

    let err = project_header(&doc).unwrap_err();
    assert_eq!(err.path(), "//ArchiveVersion/Minor");
}

#[test]
fn test_malformed_thumbnail_is_hard_failure() {
    let mut doc = fixtures::document(vec![], vec![]);
    let thumbnail = doc.root.chunks.iter_mut().find(|c| c.name == "Thumbnail").unwrap();
    thumbnail.items[0].text = "@@@".to_string();

    let err = project_header(&doc).unwrap_err();
    assert!(matches!(err, ProjectError::TypeCoercion { expected: "base64", .. }));
    assert_eq!(err.path(), "//Thumbnail");
}
