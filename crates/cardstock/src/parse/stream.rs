//! Multi-card streaming parser.

use super::lexer::Cursor;
use super::parser::parse_next;
use crate::error::EncodingResult;
use crate::model::Card;

/// Returns a lazy stream of strictly-parsed cards over one input.
///
/// With `skip_invalid`, a card that fails to parse is swallowed and the
/// stream resynchronizes at the next `BEGIN:VCARD`; otherwise the error is
/// yielded and the stream ends.
#[must_use]
pub fn parse_all(input: &str, skip_invalid: bool) -> CardStream<'_> {
    CardStream {
        cursor: Cursor::new(input),
        skip_invalid,
        done: false,
    }
}

/// A lazy, finite, single-traversal sequence of cards.
///
/// The stream owns a cursor over the input and advances it as cards are
/// pulled, so it is exhaustible once and not restartable. It is a plain
/// `Iterator`: consumers may stop early, and cancellation is simply not
/// pulling the next item. Call [`parse_all`] again for an independent
/// traversal.
pub struct CardStream<'a> {
    cursor: Cursor<'a>,
    skip_invalid: bool,
    done: bool,
}

impl Iterator for CardStream<'_> {
    type Item = EncodingResult<Card>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            if self.cursor.is_exhausted() {
                self.done = true;
                return None;
            }

            match parse_next(&mut self.cursor) {
                Ok(Some(card)) => return Some(Ok(card)),
                // A region with no card content; keep scanning.
                Ok(None) => {}
                Err(err) if self.skip_invalid => {
                    tracing::debug!(error = %err, "skipping invalid card");
                    self.cursor.skip_to_next_begin();
                }
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }
    }
}
