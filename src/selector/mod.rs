mod resolve;


pub use resolve::{resolve, resolve_all, resolve_scope};

use crate::error::ProjectError;
use std::fmt;
use std::str::FromStr;

/// How a selector step relates to the node matched by the previous step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Direct child only
    Child,
    /// Any depth below
    Descendant,
}

/// A single name-matching step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub axis: Axis,
    /// Node name to match; `*` matches any name
    pub name: String,
}

impl Step {
    fn matches(&self, name: &str) -> bool {
        self.name == "*" || self.name == name
    }
}

/// Hierarchical path used to locate nodes relative to a scope node
///
/// Textual form: steps separated by `/`, a step written after `//` is
/// matched at any depth. `Container/Attributes/Bounds`, `//Library`,
/// `Container//Slider`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    steps: Vec<Step>,
}

impl Selector {
    pub fn child(name: impl Into<String>) -> Self {
        Self {
            steps: vec![Step {
                axis: Axis::Child,
                name: name.into(),
            }],
        }
    }

    pub fn descendant(name: impl Into<String>) -> Self {
        Self {
            steps: vec![Step {
                axis: Axis::Descendant,
                name: name.into(),
            }],
        }
    }

    pub fn then_child(mut self, name: impl Into<String>) -> Self {
        self.steps.push(Step {
            axis: Axis::Child,
            name: name.into(),
        });
        self
    }

    pub fn then_descendant(mut self, name: impl Into<String>) -> Self {
        self.steps.push(Step {
            axis: Axis::Descendant,
            name: name.into(),
        });
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Whether any step may skip levels
    pub fn is_deep(&self) -> bool {
        self.steps.iter().any(|s| s.axis == Axis::Descendant)
    }

    /// Test the names on the way from the scope (exclusive) down to a
    /// candidate node (inclusive)
    pub fn matches_path(&self, path: &[&str]) -> bool {
        match_steps(&self.steps, path)
    }
}

fn match_steps(steps: &[Step], path: &[&str]) -> bool {
    let Some((step, rest)) = steps.split_first() else {
        return path.is_empty();
    };

    match step.axis {
        Axis::Child => {
            !path.is_empty() && step.matches(path[0]) && match_steps(rest, &path[1..])
        }
        Axis::Descendant => {
            (0..path.len()).any(|i| step.matches(path[i]) && match_steps(rest, &path[i + 1..]))
        }
    }
}

impl FromStr for Selector {
    type Err = ProjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ProjectError::InvalidSelector {
            selector: s.to_string(),
        };

        let mut steps = Vec::new();
        let mut slashes = 0;

        for segment in s.split('/') {
            if segment.is_empty() {
                slashes += 1;
                continue;
            }

            // a leading "/" is just a relative child step
            let axis = match (steps.is_empty(), slashes) {
                (true, 0 | 1) | (false, 0) => Axis::Child,
                (true, 2) | (false, 1) => Axis::Descendant,
                _ => return Err(invalid()),
            };

            steps.push(Step {
                axis,
                name: segment.to_string(),
            });
            slashes = 0;
        }

        // trailing separator
        if steps.is_empty() || slashes > 0 {
            return Err(invalid());
        }

        Ok(Self { steps })
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            match (i, step.axis) {
                (0, Axis::Child) => {}
                (_, Axis::Child) => f.write_str("/")?,
                (_, Axis::Descendant) => f.write_str("//")?,
            }
            f.write_str(&step.name)?;
        }
        Ok(())
    }
}
