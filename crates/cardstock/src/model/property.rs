//! Card property type.

use super::parameter::Parameter;
use super::value::PropertyValue;

/// A single card property: `[group.]NAME[;PARAM=VAL...]:value`.
///
/// Property names are normalized to lowercase for lookup; the serializer
/// upcases them on output. The value is stored unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Optional group label (e.g. "item1" in `item1.TEL`).
    pub group: Option<String>,
    /// Property name (lowercase, e.g. "fn", "email", "x-custom").
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<Parameter>,
    /// The property value.
    pub value: PropertyValue,
}

impl Property {
    /// Builds a property from positional value arguments.
    ///
    /// A single value yields a scalar property; several values become
    /// structured components. Returns `None` when every value argument is
    /// empty — callers treat this as a no-op rather than an error.
    #[must_use]
    pub fn create(name: &str, values: &[&str], params: Vec<Parameter>) -> Option<Self> {
        if values.iter().all(|v| v.is_empty()) {
            return None;
        }

        let value = match values {
            [single] => PropertyValue::Text((*single).to_string()),
            many => PropertyValue::structured_from(many.iter().copied()),
        };

        Some(Self {
            group: None,
            name: name.to_ascii_lowercase(),
            params,
            value,
        })
    }

    /// Creates a scalar text property.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            group: None,
            name: name.into().to_ascii_lowercase(),
            params: Vec::new(),
            value: PropertyValue::Text(value.into()),
        }
    }

    /// Attaches a group label.
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Returns the parameter with the given name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Parameter> {
        let name_upper = name.to_ascii_uppercase();
        self.params.iter().find(|p| p.name == name_upper)
    }

    /// Returns the first value of a parameter.
    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        self.get_param(name)?.value()
    }

    /// Returns whether this property carries the specified `TYPE` value.
    #[must_use]
    pub fn has_type(&self, type_value: &str) -> bool {
        self.get_param("TYPE")
            .is_some_and(|p| p.has_value(type_value))
    }

    /// Returns the value as text if it is scalar.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        self.value.as_text()
    }

    /// Returns the structured components if the value is structured.
    #[must_use]
    pub fn components(&self) -> Option<&[Vec<String>]> {
        self.value.components()
    }

    /// Adds a parameter to this property.
    pub fn add_param(&mut self, param: Parameter) {
        self.params.push(param);
    }
}
