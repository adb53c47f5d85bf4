//! Card data model.
//!
//! - [`Card`] - a contact card with name and group property indices
//! - [`Property`] - one property (group, name, parameters, value)
//! - [`Parameter`] - a property parameter
//! - [`PropertyValue`] - scalar or structured value
//! - [`codec`] - the per-property value-shape registry

mod card;
pub mod codec;
mod parameter;
mod property;
mod value;

pub use card::{Card, CardConfig};
pub use parameter::Parameter;
pub use property::Property;
pub use value::PropertyValue;
