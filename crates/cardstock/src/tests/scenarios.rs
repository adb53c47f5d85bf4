//! End-to-end behavior on realistic exports.

use super::fixtures::{JOE_STRUMMER, LEGACY_21, TWO_CARDS};
use crate::error::EncodingError;
use crate::{Card, parse_all, parse_lenient, parse_strict};

#[test_log::test]
fn legacy_card_parses_strictly() {
    let card = parse_strict(LEGACY_21).unwrap().unwrap();
    assert_eq!(card.version(), Some("2.1"));
    assert_eq!(card.field("fn")[0].as_text(), Some("Joe Strummer"));
}

#[test_log::test]
fn legacy_bare_flags_are_kept_as_parameters() {
    let card = parse_strict(LEGACY_21).unwrap().unwrap();
    let tel = &card.field("tel")[0];
    assert!(tel.get_param("HOME").is_some());
    assert!(tel.get_param("VOICE").is_some());
    assert!(tel.get_param("HOME").is_some_and(|p| p.values.is_empty()));
}

#[test_log::test]
fn legacy_quoted_printable_soft_break_joins() {
    let card = parse_strict(LEGACY_21).unwrap().unwrap();
    assert_eq!(card.field("note")[0].as_text(), Some("first linesecond line"));
}

#[test_log::test]
fn legacy_bare_flags_reserialize_without_equals() {
    let card = parse_strict(LEGACY_21).unwrap().unwrap();
    assert!(card.serialize().unwrap().contains("TEL;HOME;VOICE:"));
}

#[test_log::test]
fn group_removal_cascades_after_parse() {
    let card = parse_strict(JOE_STRUMMER).unwrap();
    let mut card = card.unwrap();
    assert_eq!(card.group("item1").len(), 2);

    card.remove("email");

    assert!(card.field("email").is_empty());
    assert!(card.field("x-ablabel").is_empty());
    // Ungrouped siblings are untouched.
    assert_eq!(card.field("tel").len(), 1);
}

#[test_log::test]
fn stream_yields_cards_in_order() {
    let cards: Vec<Card> = parse_all(TWO_CARDS, false).collect::<Result<_, _>>().unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].field("fn")[0].as_text(), Some("John Doe"));
    assert_eq!(cards[1].field("fn")[0].as_text(), Some("Jane Doe"));
}

#[test_log::test]
fn stream_reports_malformed_second_card() {
    let input = "\
BEGIN:VCARD\nVERSION:4.0\nFN:John Doe\nEND:VCARD\n\
BEGIN:VCARD\nVERSION:4.0\nN:Doe;Jane;;;\nEND:VCARD\n";

    let mut stream = parse_all(input, false);
    assert!(stream.next().unwrap().is_ok());
    assert_eq!(stream.next(), Some(Err(EncodingError::MissingFullName)));
    assert_eq!(stream.next(), None);
}

#[test_log::test]
fn stream_skip_invalid_recovers() {
    let input = "\
BEGIN:VCARD\nVERSION:4.0\nFN:John Doe\nEND:VCARD\n\
BEGIN:VCARD\nVERSION:4.0\nN:Doe;Jane;;;\nEND:VCARD\n\
BEGIN:VCARD\nVERSION:4.0\nFN:Jane Doe\nEND:VCARD\n";

    let cards: Vec<Card> = parse_all(input, true).collect::<Result<_, _>>().unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[1].field("fn")[0].as_text(), Some("Jane Doe"));
}

#[test_log::test]
fn lenient_accepts_what_strict_rejects() {
    let input = "BEGIN:VCARD\nN:Strummer;Joe;;;\nTEL:235235\n";
    assert!(parse_strict(input).is_err());

    let card = parse_lenient(input);
    assert_eq!(card.field("tel").len(), 1);
    assert_eq!(card.version(), Some("4.0"));
}

#[test_log::test]
fn built_card_matches_hand_written_text() {
    let mut card = Card::new();
    card.add("n", &["Strummer", "Joe", "", "", ""]);
    card.add("fn", &["Joe Strummer"]);
    card.add_in_group("item1", "email", &["joe@strummer.com"]);

    assert_eq!(
        card.serialize().unwrap(),
        "BEGIN:VCARD\nVERSION:4.0\nN:Strummer;Joe;;;\nFN:Joe Strummer\n\
         item1.EMAIL:joe@strummer.com\nEND:VCARD\n"
    );
}

#[test_log::test]
fn empty_values_never_reach_the_card() {
    let mut card = Card::new();
    card.add("fn", &["Joe Strummer"]);
    card.add("email", &[""]);
    card.add("adr", &["", "", "", "", "", "", ""]);

    assert_eq!(card.len(), 1);
    assert_eq!(
        card.serialize().unwrap(),
        "BEGIN:VCARD\nVERSION:4.0\nFN:Joe Strummer\nEND:VCARD\n"
    );
}

#[test_log::test]
fn version_follows_the_parsed_card() {
    let card = parse_strict(LEGACY_21).unwrap().unwrap();
    assert!(card.serialize().unwrap().starts_with("BEGIN:VCARD\nVERSION:2.1\n"));
}
