//! Parsing: line unfolding, content-line splitting, card assembly, and the
//! multi-card stream.
//!
//! ## Usage
//!
//! ```rust
//! let input = "\
//! BEGIN:VCARD\n\
//! VERSION:4.0\n\
//! FN:Joe Strummer\n\
//! END:VCARD\n";
//!
//! let card = cardstock::parse_strict(input).unwrap().unwrap();
//! assert_eq!(card.field("fn")[0].as_text(), Some("Joe Strummer"));
//! ```

mod lexer;
mod parser;
mod stream;
pub mod values;

pub use lexer::{ContentLine, Cursor, parse_content_line, unfold};
pub use parser::{parse_lenient, parse_strict};
pub use stream::{CardStream, parse_all};
