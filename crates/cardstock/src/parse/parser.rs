//! Card assembly from logical lines.

use super::lexer::{Cursor, parse_content_line, unfold};
use crate::error::{EncodingError, EncodingResult};
use crate::model::codec::codec_for;
use crate::model::{Card, Property};

/// Parses a single card leniently.
///
/// Never raises: structural problems are tolerated and malformed lines are
/// silently dropped. Empty input yields an empty card with the default
/// version.
#[must_use]
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_lenient(input: &str) -> Card {
    let mut card = Card::new();
    let mut cursor = Cursor::new(input);

    // Lenient unfolding has no failure path.
    if let Ok(lines) = unfold(&mut cursor, false) {
        apply_lines(&mut card, &lines);
    }

    tracing::debug!(properties = card.len(), "parsed lenient card");
    card
}

/// Parses a single card strictly.
///
/// Returns `Ok(None)` when the input holds no card content at all (e.g.
/// empty input, or an empty BEGIN/END bracket).
///
/// ## Errors
/// Any [`EncodingError`]: missing END, unexpected second BEGIN, missing
/// VERSION, or missing FN.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_strict(input: &str) -> EncodingResult<Option<Card>> {
    let mut cursor = Cursor::new(input);
    parse_next(&mut cursor)
}

/// Parses the next card from a shared cursor, strictly.
///
/// ## Errors
/// Same as [`parse_strict`].
pub(crate) fn parse_next(cursor: &mut Cursor<'_>) -> EncodingResult<Option<Card>> {
    let mut card = Card::new();
    card.clear_version();

    let lines = unfold(cursor, true)?;
    if lines.is_empty() {
        return Ok(None);
    }

    apply_lines(&mut card, &lines);

    if card.version().is_none() {
        return Err(EncodingError::MissingVersion);
    }
    if card.field("fn").is_empty() {
        return Err(EncodingError::MissingFullName);
    }

    tracing::debug!(properties = card.len(), "parsed strict card");
    Ok(Some(card))
}

/// Classifies each logical line and builds the card's properties.
fn apply_lines(card: &mut Card, lines: &[String]) {
    for line in lines {
        if let Some(version) = version_line(line) {
            card.set_version(version);
            continue;
        }

        match property_from_line(line) {
            Some(prop) => card.add_property(prop),
            None => tracing::warn!(line = %line, "dropping malformed content line"),
        }
    }
}

/// Matches a `VERSION:value` line; the value must be non-empty.
fn version_line(line: &str) -> Option<&str> {
    let rest = line
        .get(..8)
        .filter(|prefix| prefix.eq_ignore_ascii_case("VERSION:"))
        .map(|_| &line[8..])?;
    (!rest.is_empty()).then_some(rest)
}

/// Builds a property from one logical line via the value-shape registry.
fn property_from_line(line: &str) -> Option<Property> {
    let content = parse_content_line(line)?;
    let value = codec_for(&content.name).parse_value(&content.value);

    Some(Property {
        group: content.group,
        name: content.name,
        params: content.params,
        value,
    })
}
