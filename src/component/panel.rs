use super::{ComponentKind, VariantProjector};
use crate::coerce::{as_bool, as_colour, as_string, Argb, Field};
use crate::error::{ProjectError, Result};
use crate::selector::resolve_scope;
use crate::tree::NodeRef;
use serde::Serialize;

/// Display properties and text of a `Panel`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelProperties {
    /// Panel contents
    pub user_text: String,
    pub colour: Argb,
    pub draw_indices: bool,
    pub draw_paths: bool,
    pub multiline: bool,
    pub special_codes: bool,
    pub stream: bool,
    pub wrap: bool,
}

const SCOPE: &str = "Container//PanelProperties";

const USER_TEXT: Field<String> = Field::required("user_text", "//UserText", as_string);
const COLOUR: Field<Argb> = Field::required("colour", "Colour", as_colour);
const DRAW_INDICES: Field<bool> = Field::required("draw_indices", "DrawIndices", as_bool);
const DRAW_PATHS: Field<bool> = Field::required("draw_paths", "DrawPaths", as_bool);
const MULTILINE: Field<bool> = Field::required("multiline", "Multiline", as_bool);
const SPECIAL_CODES: Field<bool> = Field::required("special_codes", "SpecialCodes", as_bool);
const STREAM: Field<bool> = Field::required("stream", "Stream", as_bool);
const WRAP: Field<bool> = Field::required("wrap", "Wrap", as_bool);

pub struct PanelProjector;

impl PanelProjector {
    pub const NAME: &'static str = "Panel";
}

impl VariantProjector for PanelProjector {
    fn project(&self, root: NodeRef<'_>) -> Result<ComponentKind> {
        let user_text = USER_TEXT.take(root)?;

        let scope = resolve_scope(root, &SCOPE.parse()?)?;
        let in_scope = |e: ProjectError| e.under(SCOPE);

        Ok(ComponentKind::Panel(PanelProperties {
            user_text,
            colour: COLOUR.take(scope).map_err(in_scope)?,
            draw_indices: DRAW_INDICES.take(scope).map_err(in_scope)?,
            draw_paths: DRAW_PATHS.take(scope).map_err(in_scope)?,
            multiline: MULTILINE.take(scope).map_err(in_scope)?,
            special_codes: SPECIAL_CODES.take(scope).map_err(in_scope)?,
            stream: STREAM.take(scope).map_err(in_scope)?,
            wrap: WRAP.take(scope).map_err(in_scope)?,
        }))
    }
}
