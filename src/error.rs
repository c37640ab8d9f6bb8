use serde::Serialize;
use thiserror::Error;

/// Failure while projecting a chunk tree into a typed record
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum ProjectError {
    #[error("Missing required field: {path}")]
    MissingField { path: String },

    #[error("Required field is empty: {path}")]
    EmptyField { path: String },

    #[error("Cannot read {value:?} as {expected} at {path}")]
    TypeCoercion {
        path: String,
        expected: &'static str,
        value: String,
    },

    #[error("Missing required subtree: {path}")]
    MissingRequiredSubtree { path: String },

    #[error("Invalid selector: {selector:?}")]
    InvalidSelector { selector: String },
}

impl ProjectError {
    pub(crate) fn missing(path: impl Into<String>) -> Self {
        Self::MissingField { path: path.into() }
    }

    pub(crate) fn empty(path: impl Into<String>) -> Self {
        Self::EmptyField { path: path.into() }
    }

    pub(crate) fn coercion(expected: &'static str, value: impl Into<String>) -> Self {
        Self::TypeCoercion {
            path: String::new(),
            expected,
            value: value.into(),
        }
    }

    pub(crate) fn subtree(path: impl Into<String>) -> Self {
        Self::MissingRequiredSubtree { path: path.into() }
    }

    /// Path of the field that failed, relative to the record being assembled
    pub fn path(&self) -> &str {
        match self {
            Self::MissingField { path }
            | Self::EmptyField { path }
            | Self::TypeCoercion { path, .. }
            | Self::MissingRequiredSubtree { path } => path,
            Self::InvalidSelector { selector } => selector,
        }
    }

    /// Re-root the error path beneath `prefix`
    ///
    /// Coercions report paths relative to the node they were handed
    /// (empty for the node itself, `X` for a composite part); callers
    /// prepend the selector they resolved that node with.
    pub fn under(self, prefix: &str) -> Self {
        let join = |path: String| {
            if path.is_empty() {
                prefix.to_string()
            } else if prefix.is_empty() {
                path
            } else {
                format!("{}/{}", prefix, path)
            }
        };

        match self {
            Self::MissingField { path } => Self::MissingField { path: join(path) },
            Self::EmptyField { path } => Self::EmptyField { path: join(path) },
            Self::TypeCoercion {
                path,
                expected,
                value,
            } => Self::TypeCoercion {
                path: join(path),
                expected,
                value,
            },
            Self::MissingRequiredSubtree { path } => {
                Self::MissingRequiredSubtree { path: join(path) }
            }
            other @ Self::InvalidSelector { .. } => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProjectError>;
