//! Round-trippable vCard parsing and serialization.
//!
//! Covers RFC 6350 (vCard 4.0) text with lenient acceptance of the legacy
//! 2.1 and 3.0 dialects found in real exports: grouped properties, bare
//! parameter flags, and quoted-printable soft line breaks.
//!
//! ## Parsing
//!
//! ```rust
//! let input = "\
//! BEGIN:VCARD\n\
//! VERSION:4.0\n\
//! N:Strummer;Joe;;;\n\
//! FN:Joe Strummer\n\
//! item1.EMAIL:joe@strummer.com\n\
//! item1.X-ABLABEL:Work\n\
//! END:VCARD\n";
//!
//! let card = cardstock::parse_strict(input).unwrap().unwrap();
//! assert_eq!(card.field("fn")[0].as_text(), Some("Joe Strummer"));
//! assert_eq!(card.group("item1").len(), 2);
//! ```
//!
//! ## Building
//!
//! ```rust
//! use cardstock::Card;
//!
//! let mut card = Card::new();
//! card.add("fn", &["Joe Strummer"]);
//! card.add("n", &["Strummer", "Joe"]);
//!
//! let text = card.serialize().unwrap();
//! assert!(text.starts_with("BEGIN:VCARD\nVERSION:4.0\n"));
//! ```
//!
//! ## Streaming
//!
//! Concatenated card files are consumed lazily with [`parse_all`], which
//! yields each card (or the error that stopped it) in input order.

pub mod build;
pub mod error;
pub mod model;
pub mod parse;

pub use build::fold_line;
pub use error::{EncodingError, EncodingResult};
pub use model::{Card, CardConfig, Parameter, Property, PropertyValue};
pub use parse::{CardStream, parse_all, parse_lenient, parse_strict};

#[cfg(test)]
mod tests;
