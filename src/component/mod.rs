mod generic;
mod panel;
mod registry;
mod slider;


pub use generic::GenericProjector;
pub use panel::{PanelProjector, PanelProperties};
pub use registry::{ComponentRegistry, VariantProjector};
pub use slider::{SliderProjector, SliderProperties};

use crate::coerce::{as_bool, as_string, as_uuid, point, rectangle, Field, PointF, Rectangle};
use crate::error::{ProjectError, Result};
use crate::parameter::{project_parameters, Direction, ParameterRecord};
use crate::selector::resolve_scope;
use crate::tree::NodeRef;
use serde::Serialize;
use uuid::Uuid;

/// A design component projected from its `Object` chunk
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentRecord {
    pub base: ComponentBase,
    pub kind: ComponentKind,
    pub inputs: Vec<ParameterRecord>,
    pub outputs: Vec<ParameterRecord>,
}

/// Fields every component carries regardless of its variant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentBase {
    /// Component type id
    pub identifier: Uuid,
    /// Declared component name, also the variant discriminator
    pub name: String,
    pub description: String,
    /// Id of this placed instance
    pub instance_id: Uuid,
    pub nickname: String,
    pub optional: Option<bool>,
    pub bounds: Rectangle,
    pub pivot: PointF,
    pub selected: bool,
}

/// Variant payload selected by the component name
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "variant", content = "properties")]
pub enum ComponentKind {
    Generic,
    NumericSlider(SliderProperties),
    Panel(PanelProperties),
}

impl ComponentKind {
    pub fn variant_name(&self) -> &'static str {
        match self {
            ComponentKind::Generic => "Generic",
            ComponentKind::NumericSlider(_) => "NumericSlider",
            ComponentKind::Panel(_) => "Panel",
        }
    }
}

const IDENTIFIER: Field<Uuid> = Field::required("identifier", "GUID", as_uuid);
const NAME: Field<String> = Field::required("name", "Name", as_string);
const DESCRIPTION: Field<String> = Field::required("description", "Container/Description", as_string);
const INSTANCE_ID: Field<Uuid> = Field::required("instance_id", "Container/InstanceGuid", as_uuid);
const NICKNAME: Field<String> = Field::required("nickname", "Container/NickName", as_string);
const OPTIONAL: Field<bool> = Field::optional("optional", "Container/Optional", as_bool);

const ATTRIBUTES: &str = "Container/Attributes";
const BOUNDS: Field<Rectangle> = Field::required("bounds", "Bounds", rectangle);
const PIVOT: Field<PointF> = Field::required("pivot", "Pivot", point);
const SELECTED: Field<bool> = Field::required("selected", "Selected", as_bool);

/// Read the component's declared name
pub fn discriminate(root: NodeRef<'_>) -> Result<String> {
    NAME.take(root)
}

/// Project a component using the built-in variant table
pub fn project_component(root: NodeRef<'_>) -> Result<ComponentRecord> {
    project_component_with(root, &ComponentRegistry::new())
}

/// Project a component, dispatching its variant through `registry`
///
/// Fails fast: the first missing or malformed field aborts the record.
pub fn project_component_with(
    root: NodeRef<'_>,
    registry: &ComponentRegistry,
) -> Result<ComponentRecord> {
    let name = discriminate(root)?;
    let base = project_base(root, name)?;
    let kind = registry.select(&base.name).project(root)?;

    Ok(ComponentRecord {
        base,
        kind,
        inputs: project_parameters(root, Direction::Input)?,
        outputs: project_parameters(root, Direction::Output)?,
    })
}

fn project_base(root: NodeRef<'_>, name: String) -> Result<ComponentBase> {
    let attributes = resolve_scope(root, &ATTRIBUTES.parse()?)?;
    let in_attributes = |e: ProjectError| e.under(ATTRIBUTES);

    Ok(ComponentBase {
        identifier: IDENTIFIER.take(root)?,
        name,
        description: DESCRIPTION.take(root)?,
        instance_id: INSTANCE_ID.take(root)?,
        nickname: NICKNAME.take(root)?,
        optional: OPTIONAL.read(root)?,
        bounds: BOUNDS.take(attributes).map_err(in_attributes)?,
        pivot: PIVOT.take(attributes).map_err(in_attributes)?,
        selected: SELECTED.take(attributes).map_err(in_attributes)?,
    })
}
