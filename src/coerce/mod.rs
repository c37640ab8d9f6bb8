mod composite;
mod field;


pub use composite::{
    argb_colour, as_colour, base64_bytes, point, rectangle, version_triple, Argb, PointF,
    Rectangle,
};
pub use field::{get, Coerce, Field};

pub(crate) use composite::part;

use crate::error::{ProjectError, Result};
use crate::tree::NodeRef;
use std::str::FromStr;
use uuid::Uuid;

/// Raw text of a node that only has to be present (may be empty)
pub fn as_text(node: NodeRef<'_>) -> Result<String> {
    Ok(node.inner_text())
}

/// Raw text of a node; empty text counts as missing
pub fn as_string(node: NodeRef<'_>) -> Result<String> {
    let text = node.inner_text();
    if text.is_empty() {
        return Err(ProjectError::empty(""));
    }
    Ok(text)
}

/// Case-insensitive `true` / `false`
pub fn as_bool(node: NodeRef<'_>) -> Result<bool> {
    parse_bool(&node.inner_text())
}

pub fn as_int(node: NodeRef<'_>) -> Result<i32> {
    parse_text(&node.inner_text(), "integer")
}

pub fn as_float(node: NodeRef<'_>) -> Result<f64> {
    parse_text(&node.inner_text(), "float")
}

/// Tolerant GUID read: unparsable text yields the nil identifier
pub fn as_guid(node: NodeRef<'_>) -> Result<Uuid> {
    Ok(Uuid::parse_str(node.inner_text().trim()).unwrap_or(Uuid::nil()))
}

/// Strict GUID read
pub fn as_uuid(node: NodeRef<'_>) -> Result<Uuid> {
    let text = node.inner_text();
    Uuid::parse_str(text.trim()).map_err(|_| ProjectError::coercion("guid", text))
}

/// Base64 payload; an empty payload counts as missing
pub fn as_bytes_base64(node: NodeRef<'_>) -> Result<Vec<u8>> {
    let text = node.inner_text();
    if text.trim().is_empty() {
        return Err(ProjectError::empty(""));
    }
    base64_bytes(&text)
}

pub(crate) fn parse_bool(text: &str) -> Result<bool> {
    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ProjectError::coercion("boolean", text))
    }
}

pub(crate) fn parse_text<T: FromStr>(text: &str, expected: &'static str) -> Result<T> {
    text.trim()
        .parse()
        .map_err(|_| ProjectError::coercion(expected, text))
}
