//! Card and property serialization.

use super::escape::escape_param_value;
use crate::error::{EncodingError, EncodingResult};
use crate::model::codec::codec_for;
use crate::model::{Card, Parameter, Property};

/// Serializes a validated card.
///
/// Emits `BEGIN:VCARD`, the VERSION line, every property in
/// name-then-insertion order, and `END:VCARD`, each line LF-terminated.
/// No folding is applied here; long output lines are the folder's concern.
///
/// ## Errors
/// [`EncodingError::MissingVersion`] if the card's version is unset.
pub fn serialize_card(card: &Card) -> EncodingResult<String> {
    let version = card.version().ok_or(EncodingError::MissingVersion)?;

    let mut out = String::new();
    out.push_str("BEGIN:VCARD\n");
    out.push_str("VERSION:");
    out.push_str(version);
    out.push('\n');

    for prop in card.properties() {
        out.push_str(&property_line(prop));
        out.push('\n');
    }

    out.push_str("END:VCARD\n");
    Ok(out)
}

/// Reconstructs one content line: `[group.]NAME[;PARAM=VAL...]:value`.
///
/// The property name is upcased on output; the value is re-escaped by the
/// property's codec.
#[must_use]
pub fn property_line(prop: &Property) -> String {
    let mut line = String::new();

    if let Some(group) = &prop.group {
        line.push_str(group);
        line.push('.');
    }

    line.push_str(&prop.name.to_ascii_uppercase());

    for param in &prop.params {
        write_parameter(param, &mut line);
    }

    line.push(':');
    line.push_str(&codec_for(&prop.name).encode_value(&prop.value));
    line
}

fn write_parameter(param: &Parameter, out: &mut String) {
    out.push(';');
    out.push_str(&param.name);

    if param.values.is_empty() {
        // Bare flag, no '='.
        return;
    }

    out.push('=');
    for (i, value) in param.values.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }

        let (escaped, needs_quotes) = escape_param_value(value);
        if needs_quotes {
            out.push('"');
            out.push_str(&escaped);
            out.push('"');
        } else {
            out.push_str(&escaped);
        }
    }
}
