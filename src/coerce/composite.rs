use super::parse_text;
use crate::error::{ProjectError, Result};
use crate::tree::NodeRef;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;
use std::str::FromStr;

/// Floating point canvas position
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

/// Integer canvas bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Argb {
    pub alpha: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// Typed value of a named part of a composite node
///
/// Errors carry the part name as their path.
pub(crate) fn part<T: FromStr>(node: NodeRef<'_>, name: &str, expected: &'static str) -> Result<T> {
    let text = node
        .part(name)
        .ok_or_else(|| ProjectError::missing(name))?;
    parse_text(&text, expected).map_err(|e| e.under(name))
}

/// Reads the `X` and `Y` parts
pub fn point(node: NodeRef<'_>) -> Result<PointF> {
    Ok(PointF {
        x: part(node, "X", "float")?,
        y: part(node, "Y", "float")?,
    })
}

/// Reads the `X`, `Y`, `W` and `H` parts, truncating each toward zero
pub fn rectangle(node: NodeRef<'_>) -> Result<Rectangle> {
    let x: f32 = part(node, "X", "float")?;
    let y: f32 = part(node, "Y", "float")?;
    let w: f32 = part(node, "W", "float")?;
    let h: f32 = part(node, "H", "float")?;

    Ok(Rectangle {
        x: x as i32,
        y: y as i32,
        width: w as i32,
        height: h as i32,
    })
}

/// `Major.Minor.Revision`
pub fn version_triple(node: NodeRef<'_>) -> Result<String> {
    let major: u32 = part(node, "Major", "integer")?;
    let minor: u32 = part(node, "Minor", "integer")?;
    let revision: u32 = part(node, "Revision", "integer")?;
    Ok(format!("{}.{}.{}", major, minor, revision))
}

/// Splits `a;r;g;b` into its four channels
pub fn argb_colour(text: &str) -> Result<Argb> {
    let parts: Vec<&str> = text.split(';').collect();
    if parts.len() != 4 {
        return Err(ProjectError::coercion("argb colour", text));
    }

    let channel = |s: &str| -> Result<u8> {
        s.trim()
            .parse()
            .map_err(|_| ProjectError::coercion("argb colour", text))
    };

    Ok(Argb {
        alpha: channel(parts[0])?,
        red: channel(parts[1])?,
        green: channel(parts[2])?,
        blue: channel(parts[3])?,
    })
}

pub fn as_colour(node: NodeRef<'_>) -> Result<Argb> {
    argb_colour(&node.inner_text())
}

/// Standard base64 with padding; whitespace from line-wrapped payloads is
/// ignored
pub fn base64_bytes(text: &str) -> Result<Vec<u8>> {
    let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    STANDARD
        .decode(compact.as_bytes())
        .map_err(|_| ProjectError::coercion("base64", abbreviate(text)))
}

fn abbreviate(text: &str) -> String {
    const MAX: usize = 32;
    match text.char_indices().nth(MAX) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}
