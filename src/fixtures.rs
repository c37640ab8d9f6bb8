//! Archive-shaped trees shared by the unit tests

use crate::tree::{Chunk, Document, Item};

pub const SLIDER_GUID: &str = "57da07bd-ecab-415d-9d86-af36d7073abc";
pub const PANEL_GUID: &str = "59e0b89a-e487-49f8-bab8-b5bab16be14c";
pub const ADDITION_GUID: &str = "a0d62394-a118-422d-abb3-6af115c75b25";
pub const INSTANCE_GUID: &str = "2b1f7c3e-9a0d-4c55-8e1f-0d5f3f0a1b2c";
pub const DOCUMENT_GUID: &str = "8c0e5f0c-7b4b-4f5e-a4f3-1f3a1ce0f9d2";
pub const LIBRARY_GUID: &str = "3a0d1f70-6bb4-4b12-9a4a-31f0e8b2d6a1";

pub fn bounds(x: &str, y: &str, w: &str, h: &str) -> Item {
    Item::composite(
        "Bounds",
        "gh_drawing_rectanglef",
        &[("X", x), ("Y", y), ("W", w), ("H", h)],
    )
}

pub fn pivot(x: &str, y: &str) -> Item {
    Item::composite("Pivot", "gh_drawing_pointf", &[("X", x), ("Y", y)])
}

pub fn attributes(selected: bool) -> Chunk {
    Chunk::new("Attributes")
        .with_item(bounds("100", "200", "50", "20"))
        .with_item(pivot("110.5", "210"))
        .with_item(Item::new("Selected", "gh_bool", selected.to_string()))
}

pub fn parameter(kind: &str, index: u32, name: &str) -> Chunk {
    Chunk::new(kind)
        .with_index(index)
        .with_item(Item::text("Description", format!("{} parameter", name)))
        .with_item(Item::new("InstanceGuid", "gh_guid", INSTANCE_GUID))
        .with_item(Item::text("Name", name))
        .with_item(Item::text("NickName", &name[..1]))
        .with_item(Item::new("Optional", "gh_bool", "false"))
        .with_item(Item::new("SourceCount", "gh_int32", "0"))
        .with_chunk(
            Chunk::new("Attributes")
                .with_item(bounds("90", "195", "10", "10"))
                .with_item(pivot("95", "200")),
        )
}

/// Object chunk with the given GUID and discriminator and its Container
pub fn object(guid: &str, name: &str, container: Chunk) -> Chunk {
    Chunk::new("Object")
        .with_item(Item::new("GUID", "gh_guid", guid))
        .with_item(Item::text("Name", name))
        .with_chunk(container)
}

pub fn container(name: &str, nickname: &str) -> Chunk {
    Chunk::new("Container")
        .with_item(Item::text("Description", format!("{} component", name)))
        .with_item(Item::new("InstanceGuid", "gh_guid", INSTANCE_GUID))
        .with_item(Item::text("Name", name))
        .with_item(Item::text("NickName", nickname))
}

pub fn slider_object() -> Chunk {
    let slider = Chunk::new("Slider")
        .with_item(Item::new("Digits", "gh_int32", "2"))
        .with_item(Item::new("GripDisplay", "gh_int32", "1"))
        .with_item(Item::new("Interval", "gh_int32", "1"))
        .with_item(Item::new("Max", "gh_double", "10"))
        .with_item(Item::new("Min", "gh_double", "0"))
        .with_item(Item::new("SnapCount", "gh_int32", "0"))
        .with_item(Item::new("Value", "gh_double", "5"));

    object(
        SLIDER_GUID,
        "Number Slider",
        container("Number Slider", "Length")
            .with_chunk(attributes(false))
            .with_chunk(slider),
    )
}

pub fn panel_object() -> Chunk {
    let properties = Chunk::new("PanelProperties")
        .with_item(Item::new("Colour", "gh_drawing_color", "255;255;250;90"))
        .with_item(Item::new("DrawIndices", "gh_bool", "true"))
        .with_item(Item::new("DrawPaths", "gh_bool", "true"))
        .with_item(Item::new("Multiline", "gh_bool", "true"))
        .with_item(Item::new("SpecialCodes", "gh_bool", "false"))
        .with_item(Item::new("Stream", "gh_bool", "false"))
        .with_item(Item::new("Wrap", "gh_bool", "true"));

    object(
        PANEL_GUID,
        "Panel",
        container("Panel", "Notes")
            .with_item(Item::text("UserText", "hello\nworld"))
            .with_chunk(attributes(true))
            .with_chunk(properties),
    )
}

pub fn addition_object() -> Chunk {
    object(
        ADDITION_GUID,
        "Addition",
        container("Addition", "A+B")
            .with_item(Item::new("Optional", "gh_bool", "True"))
            .with_chunk(attributes(false))
            .with_chunk(parameter("param_input", 0, "A"))
            .with_chunk(parameter("param_input", 1, "B"))
            .with_chunk(parameter("param_output", 0, "Result")),
    )
}

/// Component without `Container/Attributes`, like a group
pub fn group_object() -> Chunk {
    object(
        "c552a431-af5b-46a9-a8a4-cf3e9e0c1a2d",
        "Group",
        container("Group", "Inputs"),
    )
}

pub fn library(index: u32, name: &str) -> Chunk {
    Chunk::new("Library")
        .with_index(index)
        .with_item(Item::text(
            "AssemblyFullName",
            format!("{}, Version=1.0.0.0, Culture=neutral", name),
        ))
        .with_item(Item::text("AssemblyVersion", "1.0.0.0"))
        .with_item(Item::text("Author", "McNeel"))
        .with_item(Item::new("Id", "gh_guid", LIBRARY_GUID))
        .with_item(Item::text("Name", name))
}

/// Full archive with the given plugin libraries and component objects
pub fn document(libraries: Vec<Chunk>, objects: Vec<Chunk>) -> Document {
    let mut ghalibraries = Chunk::new("GHALibraries").with_item(Item::new(
        "Count",
        "gh_int32",
        libraries.len().to_string(),
    ));
    ghalibraries.chunks = libraries;

    let mut definition_objects = Chunk::new("DefinitionObjects").with_item(Item::new(
        "ObjectCount",
        "gh_int32",
        objects.len().to_string(),
    ));
    for (i, object) in objects.into_iter().enumerate() {
        definition_objects = definition_objects.with_chunk(object.with_index(i as u32));
    }

    let definition = Chunk::new("Definition")
        .with_item(Item::composite(
            "plugin_version",
            "gh_version",
            &[("Major", "1"), ("Minor", "0"), ("Revision", "7")],
        ))
        .with_chunk(
            Chunk::new("DocumentHeader")
                .with_item(Item::new("DocumentID", "gh_guid", DOCUMENT_GUID))
                .with_item(Item::new("Preview", "gh_string", "Shaded")),
        )
        .with_chunk(
            Chunk::new("DefinitionProperties")
                .with_item(Item::new("Date", "gh_date", "638412345678901234"))
                .with_item(Item::text("Description", ""))
                .with_item(Item::text("Name", "bench.ghx"))
                .with_chunk(
                    Chunk::new("Projection")
                        .with_item(Item::composite(
                            "Target",
                            "gh_drawing_point",
                            &[("X", "-12"), ("Y", "34")],
                        ))
                        .with_item(Item::new("Zoom", "gh_single", "1.25")),
                ),
        )
        .with_chunk(
            Chunk::new("Author")
                .with_item(Item::text("Copyright", ""))
                .with_item(Item::text("EMail", "dev@example.com"))
                .with_item(Item::text("Name", "Dev")),
        )
        .with_chunk(ghalibraries)
        .with_chunk(definition_objects);

    Document::new(
        Chunk::new("Archive")
            .with_item(Item::composite(
                "ArchiveVersion",
                "gh_version",
                &[("Major", "0"), ("Minor", "2"), ("Revision", "2")],
            ))
            .with_chunk(definition)
            .with_chunk(
                Chunk::new("Thumbnail")
                    .with_item(Item::new("Thumbnail", "gh_drawing_bitmap", "iVBORw0KGgo=")),
            ),
    )
}
