//! Query parameters for URL assembly.

use std::fmt;

use crate::constants::{NAME_VALUE_SEPARATOR, PARAMETER_SEPARATOR};
use crate::encoding::encode_component;

/// A single query parameter.
///
/// The name and value are stored raw and percent-encoded when rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
    name: String,
    value: String,
}

impl Parameter {
    /// Creates a parameter from a raw name and value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns the raw name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{NAME_VALUE_SEPARATOR}{}",
            encode_component(&self.name),
            encode_component(&self.value)
        )
    }
}

/// Ordered query parameters.
///
/// Insertion order is preserved and duplicate names are kept, so
/// `a=1&a=2` stays two separate pairs.
///
/// # Examples
///
/// ```
/// use url_builder::QueryParams;
///
/// let mut params = QueryParams::new();
/// params.push("q", "rust lang");
/// params.push("q", "a&b");
/// assert_eq!(params.to_string(), "q=rust%20lang&q=a%26b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct QueryParams {
    params: Vec<Parameter>,
}

impl QueryParams {
    /// Creates an empty parameter list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.push(Parameter::new(name, value));
    }

    /// Returns all values stored under `name`, in insertion order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.params
            .iter()
            .filter(move |p| p.name == name)
            .map(Parameter::value)
    }

    /// Returns true if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns an iterator over the parameters.
    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.params.iter()
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self.params.iter().map(Parameter::to_string).collect();
        f.write_str(&pairs.join(PARAMETER_SEPARATOR))
    }
}

impl<N, V> FromIterator<(N, V)> for QueryParams
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        params.extend(iter);
        params
    }
}

impl<N, V> Extend<(N, V)> for QueryParams
where
    N: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (N, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.push(name, value);
        }
    }
}
