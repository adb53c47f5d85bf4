//! Property value variants.

/// A property value.
///
/// A value is either a scalar string or a structured sequence of
/// semicolon-delimited components, each of which may itself be a
/// comma-delimited list (e.g. the suffixes component of an `N` property).
/// Values are stored unescaped; escaping is applied on encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    /// A single unescaped text value.
    Text(String),
    /// Semicolon-delimited components, each a comma-delimited list.
    Structured(Vec<Vec<String>>),
}

impl PropertyValue {
    /// Builds a structured value from plain component strings.
    #[must_use]
    pub fn structured_from<I, S>(components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Structured(
            components
                .into_iter()
                .map(|c| {
                    let c = c.into();
                    if c.is_empty() { Vec::new() } else { vec![c] }
                })
                .collect(),
        )
    }

    /// Returns the value as text if it is scalar.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Structured(_) => None,
        }
    }

    /// Returns the structured components if the value is structured.
    #[must_use]
    pub fn components(&self) -> Option<&[Vec<String>]> {
        match self {
            Self::Text(_) => None,
            Self::Structured(c) => Some(c),
        }
    }

    /// Returns whether the value carries no content at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Structured(c) => c.iter().all(|sub| sub.iter().all(String::is_empty)),
        }
    }
}
