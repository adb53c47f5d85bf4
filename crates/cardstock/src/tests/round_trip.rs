//! Parse/serialize round-trip coverage.

use super::fixtures::{FOLDED, JOE_STRUMMER};
use crate::{Card, parse_strict};

#[test_log::test]
fn serialization_reproduces_input() {
    let card = parse_strict(JOE_STRUMMER).unwrap().unwrap();
    assert_eq!(card.serialize().unwrap(), JOE_STRUMMER);
}

#[test_log::test]
fn reparse_yields_equal_card() {
    let card = parse_strict(JOE_STRUMMER).unwrap().unwrap();
    let reparsed = parse_strict(&card.serialize().unwrap()).unwrap().unwrap();
    assert_eq!(card, reparsed);
}

#[test_log::test]
fn serialization_is_idempotent() {
    let card = parse_strict(JOE_STRUMMER).unwrap().unwrap();
    let first = card.serialize().unwrap();
    let second = parse_strict(&first).unwrap().unwrap().serialize().unwrap();
    assert_eq!(first, second);
}

#[test_log::test]
fn folded_input_parses_to_same_card() {
    let folded = parse_strict(FOLDED).unwrap().unwrap();
    let flat = parse_strict(JOE_STRUMMER).unwrap().unwrap();
    assert_eq!(folded, flat);
}

#[test_log::test]
fn escape_sensitive_text_survives() {
    let mut card = Card::new();
    card.add("fn", &["Joe Strummer"]);
    card.add("note", &["semi; colon, comma\nand a \\ backslash"]);

    let text = card.serialize().unwrap();
    let reparsed = parse_strict(&text).unwrap().unwrap();
    assert_eq!(
        reparsed.field("note")[0].as_text(),
        Some("semi; colon, comma\nand a \\ backslash")
    );
}

#[test_log::test]
fn structured_value_with_empty_components_survives() {
    let mut card = Card::new();
    card.add("fn", &["Joe Strummer"]);
    card.add("adr", &["", "", "123 Main St", "Anytown", "CA", "12345", "USA"]);

    let text = card.serialize().unwrap();
    assert!(text.contains("ADR:;;123 Main St;Anytown;CA;12345;USA\n"));

    let reparsed = parse_strict(&text).unwrap().unwrap();
    assert_eq!(
        reparsed.field("adr")[0].components().map(<[Vec<String>]>::len),
        Some(7)
    );
}

#[test_log::test]
fn parameters_survive_round_trip() {
    let card = parse_strict(JOE_STRUMMER).unwrap().unwrap();
    let reparsed = parse_strict(&card.serialize().unwrap()).unwrap().unwrap();

    let tel = &reparsed.field("tel")[0];
    assert!(tel.has_type("home"));
    assert!(tel.has_type("voice"));
    assert_eq!(tel.get_param_value("PREF"), Some("1"));
}

#[test_log::test]
fn quoted_parameter_value_survives() {
    let input = "BEGIN:VCARD\nVERSION:4.0\nFN:Joe\n\
                 ADR;LABEL=\"123 Main St, Anytown\":;;123 Main St\nEND:VCARD\n";
    let card = parse_strict(input).unwrap().unwrap();
    assert_eq!(
        card.field("adr")[0].get_param_value("LABEL"),
        Some("123 Main St, Anytown")
    );

    let reparsed = parse_strict(&card.serialize().unwrap()).unwrap().unwrap();
    assert_eq!(
        reparsed.field("adr")[0].get_param_value("LABEL"),
        Some("123 Main St, Anytown")
    );
}

#[test_log::test]
fn folded_output_reparses_to_same_card() {
    let mut card = Card::new();
    card.add("fn", &["Joe Strummer"]);
    card.add("note", &["a".repeat(200).as_str()]);

    let folded = card.to_folded_string().unwrap();
    for line in folded.lines() {
        assert!(line.len() <= card.wrap_column(), "overlong line: {line:?}");
    }

    let reparsed = parse_strict(&folded).unwrap().unwrap();
    assert_eq!(card, reparsed);
}
