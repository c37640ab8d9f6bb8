
use crate::coerce::{
    as_bool, as_guid, as_int, as_string, as_uuid, point, rectangle, Field, PointF, Rectangle,
};
use crate::error::{ProjectError, Result};
use crate::selector::{resolve_all, resolve_scope, Selector};
use crate::tree::NodeRef;
use serde::Serialize;
use uuid::Uuid;

/// Which side of a component a parameter sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    Input,
    Output,
}

impl Direction {
    /// Chunk name parameters of this direction are stored under
    pub fn chunk_name(self) -> &'static str {
        match self {
            Direction::Input => "param_input",
            Direction::Output => "param_output",
        }
    }
}

/// One input or output parameter of a component
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterRecord {
    pub direction: Direction,
    /// Archive position attribute, when present
    pub index: Option<u32>,
    pub description: String,
    pub instance_id: Uuid,
    pub name: String,
    pub nickname: String,
    pub optional: Option<bool>,
    pub source_count: i32,
    /// Instance ids of the parameters wired into this one
    pub sources: Vec<Uuid>,
    pub bounds: Rectangle,
    pub pivot: PointF,
}

const DESCRIPTION: Field<String> = Field::required("description", "Description", as_string);
const INSTANCE_ID: Field<Uuid> = Field::required("instance_id", "InstanceGuid", as_uuid);
const NAME: Field<String> = Field::required("name", "Name", as_string);
const NICKNAME: Field<String> = Field::required("nickname", "NickName", as_string);
const OPTIONAL: Field<bool> = Field::optional("optional", "Optional", as_bool);
const SOURCE_COUNT: Field<i32> = Field::required("source_count", "SourceCount", as_int);

const ATTRIBUTES: &str = "Attributes";
const BOUNDS: Field<Rectangle> = Field::required("bounds", "Bounds", rectangle);
const PIVOT: Field<PointF> = Field::required("pivot", "Pivot", point);

/// Every parameter of one direction under a component, in document order
///
/// A component without parameters yields an empty list. The first
/// malformed parameter fails the whole list with its position in the path.
pub fn project_parameters(
    component: NodeRef<'_>,
    direction: Direction,
) -> Result<Vec<ParameterRecord>> {
    let selector = Selector::descendant(direction.chunk_name());

    resolve_all(component, &selector)
        .into_iter()
        .enumerate()
        .map(|(i, param)| {
            project_parameter(param, direction)
                .map_err(|e| e.under(&format!("{}[{}]", direction.chunk_name(), i)))
        })
        .collect()
}

/// Assemble a single parameter from its `param_input`/`param_output` chunk
pub fn project_parameter(param: NodeRef<'_>, direction: Direction) -> Result<ParameterRecord> {
    let attributes = resolve_scope(param, &Selector::child(ATTRIBUTES))?;
    let in_attributes = |e: ProjectError| e.under(ATTRIBUTES);

    Ok(ParameterRecord {
        direction,
        index: param.index(),
        description: DESCRIPTION.take(param)?,
        instance_id: INSTANCE_ID.take(param)?,
        name: NAME.take(param)?,
        nickname: NICKNAME.take(param)?,
        optional: OPTIONAL.read(param)?,
        source_count: SOURCE_COUNT.take(param)?,
        sources: sources(param),
        bounds: BOUNDS.take(attributes).map_err(in_attributes)?,
        pivot: PIVOT.take(attributes).map_err(in_attributes)?,
    })
}

/// Wired sources, skipping entries that are not valid ids
fn sources(param: NodeRef<'_>) -> Vec<Uuid> {
    resolve_all(param, &Selector::child("Source"))
        .into_iter()
        .filter_map(|node| as_guid(node).ok())
        .filter(|id| !id.is_nil())
        .collect()
}
