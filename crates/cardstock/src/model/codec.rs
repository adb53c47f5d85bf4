//! Value-shape registry.
//!
//! Each property name maps to a codec that knows how to turn a raw line
//! value into a [`PropertyValue`] and back. The structured name property is
//! one concrete codec among an extensible set; unknown names flow through
//! the generic codec.

use super::value::PropertyValue;
use crate::build::escape::escape_text;
use crate::parse::values::{split_component, split_structured, unescape_text};

/// Parse/encode capability for a property value shape.
pub trait ValueCodec: Sync {
    /// Decodes a raw (still escaped) line value.
    fn parse_value(&self, raw: &str) -> PropertyValue;

    /// Encodes a value back into an escaped line value.
    fn encode_value(&self, value: &PropertyValue) -> String;
}

/// Returns the codec registered for a property name (lowercase).
#[must_use]
pub fn codec_for(name: &str) -> &'static dyn ValueCodec {
    match name {
        "n" => &NAME_CODEC,
        _ => &GENERIC_CODEC,
    }
}

static GENERIC_CODEC: GenericCodec = GenericCodec;
static NAME_CODEC: StructuredNameCodec = StructuredNameCodec;

/// Default codec: scalar unless the raw value holds an unescaped semicolon.
pub struct GenericCodec;

impl ValueCodec for GenericCodec {
    fn parse_value(&self, raw: &str) -> PropertyValue {
        let components = split_structured(raw);
        if components.len() == 1 {
            PropertyValue::Text(unescape_text(raw))
        } else {
            PropertyValue::Structured(components.iter().map(|c| split_component(c)).collect())
        }
    }

    fn encode_value(&self, value: &PropertyValue) -> String {
        match value {
            PropertyValue::Text(s) => escape_text(s),
            PropertyValue::Structured(components) => encode_components(components),
        }
    }
}

/// Codec for the structured `N` property.
///
/// The value is always five semicolon-delimited components (family, given,
/// additional, prefixes, suffixes); absent trailing components encode as
/// empty fields so trailing semicolons are preserved.
pub struct StructuredNameCodec;

/// Number of components in a structured name.
const NAME_COMPONENTS: usize = 5;

impl ValueCodec for StructuredNameCodec {
    fn parse_value(&self, raw: &str) -> PropertyValue {
        let mut components: Vec<Vec<String>> = split_structured(raw)
            .iter()
            .map(|c| split_component(c))
            .collect();
        components.resize(components.len().max(NAME_COMPONENTS), Vec::new());
        PropertyValue::Structured(components)
    }

    fn encode_value(&self, value: &PropertyValue) -> String {
        let mut components: Vec<Vec<String>> = match value {
            PropertyValue::Text(s) => vec![vec![s.clone()]],
            PropertyValue::Structured(c) => c.clone(),
        };
        components.resize(components.len().max(NAME_COMPONENTS), Vec::new());
        encode_components(&components)
    }
}

fn encode_components(components: &[Vec<String>]) -> String {
    let mut out = String::new();
    for (i, component) in components.iter().enumerate() {
        if i > 0 {
            out.push(';');
        }
        for (j, item) in component.iter().enumerate() {
            if j > 0 {
                out.push(',');
            }
            out.push_str(&escape_text(item));
        }
    }
    out
}
