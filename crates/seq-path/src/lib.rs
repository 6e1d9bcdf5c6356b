//! Path tokens for the model addressing layer.
//!
//! A [`Path`] is an ordered list of unescaped string components, formatted
//! as an absolute token like `/a/b/c`. `/` and `~` inside a component are
//! escaped as `~1` and `~0`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("path must be absolute or empty")]
    NotAbsolute,
}

/// Unescapes one path component.
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes one path component.
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

/// An addressable path: ordered, unescaped components.
///
/// Paths are immutable; [`Path::join`] returns a new path and leaves the
/// receiver untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    components: Vec<String>,
}

impl Path {
    /// Creates the empty (root) path.
    pub fn new() -> Self {
        Self::default()
    }

    /// The unescaped components, in order.
    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` for the root path.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns a new path with `component` appended.
    #[must_use]
    pub fn join(&self, component: impl Into<String>) -> Path {
        let mut components = self.components.clone();
        components.push(component.into());
        Path { components }
    }

    /// Parses an absolute path token into unescaped components.
    ///
    /// Examples:
    /// - `"" -> []`
    /// - `"/" -> [""]`
    /// - `"/a~1b/~0k/0" -> ["a/b", "~k", "0"]`
    pub fn parse(input: &str) -> Result<Path, PathError> {
        if input.is_empty() {
            return Ok(Path::new());
        }
        if !input.starts_with('/') {
            return Err(PathError::NotAbsolute);
        }
        Ok(Path {
            components: input.split('/').skip(1).map(unescape_component).collect(),
        })
    }

    /// Formats the components into an absolute path token.
    pub fn format(&self) -> String {
        if self.components.is_empty() {
            return String::new();
        }
        let mut out = String::new();
        for component in &self.components {
            out.push('/');
            out.push_str(&escape_component(component));
        }
        out
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Path::parse(s)
    }
}

impl From<Vec<String>> for Path {
    fn from(components: Vec<String>) -> Self {
        Path { components }
    }
}

impl FromIterator<String> for Path {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Path {
            components: iter.into_iter().collect(),
        }
    }
}
