use crate::error::{ProjectError, Result};
use crate::selector::{resolve, Selector};
use crate::tree::NodeRef;
use std::fmt;

/// Converts a resolved node into a typed value
pub type Coerce<T> = for<'a> fn(NodeRef<'a>) -> Result<T>;

/// Resolve `selector` under `root` and coerce the match
///
/// Required: a missing node or a coercion failure is an error whose path
/// starts with the selector. Optional: a missing node or any coercion
/// failure yields `None`, so empty text is only kept when the coercion
/// accepts it (`as_text` gives `Some("")`).
pub fn get<T>(
    root: NodeRef<'_>,
    selector: &Selector,
    required: bool,
    coerce: Coerce<T>,
) -> Result<Option<T>> {
    let Some(node) = resolve(root, selector, required)? else {
        return Ok(None);
    };

    if required {
        coerce(node)
            .map(Some)
            .map_err(|e| e.under(&selector.to_string()))
    } else {
        Ok(coerce(node).ok())
    }
}

/// Declarative description of one record field
pub struct Field<T> {
    /// Record field name, shown in `Debug` output
    pub name: &'static str,
    /// Selector text, relative to the record's scope node
    pub selector: &'static str,
    pub coerce: Coerce<T>,
    pub required: bool,
}

impl<T> Field<T> {
    pub const fn required(name: &'static str, selector: &'static str, coerce: Coerce<T>) -> Self {
        Self {
            name,
            selector,
            coerce,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, selector: &'static str, coerce: Coerce<T>) -> Self {
        Self {
            name,
            selector,
            coerce,
            required: false,
        }
    }

    /// Read honouring the field's own `required` flag
    pub fn read(&self, scope: NodeRef<'_>) -> Result<Option<T>> {
        get(scope, &self.selector()?, self.required, self.coerce)
    }

    /// Read a value that must be present
    pub fn take(&self, scope: NodeRef<'_>) -> Result<T> {
        let selector = self.selector()?;
        get(scope, &selector, true, self.coerce)?
            .ok_or_else(|| ProjectError::missing(selector.to_string()))
    }

    fn selector(&self) -> Result<Selector> {
        self.selector.parse()
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("selector", &self.selector)
            .field("required", &self.required)
            .finish()
    }
}
