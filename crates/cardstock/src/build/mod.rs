//! Serialization: escaping, content-line building, and output folding.

pub mod escape;
mod fold;
mod serializer;

pub use escape::{escape_param_value, escape_text};
pub use fold::fold_line;
pub use serializer::{property_line, serialize_card};
