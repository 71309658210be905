//! Tri-state nullable field wrapper.
//!
//! [`Nullable`] tells apart a field that was never addressed, one explicitly set to null, and
//! one holding a value. It decodes from and encodes to JSON through serde, and scans from and
//! produces values for a relational row interface through a small coercion engine that
//! narrows loosely-typed driver values into statically declared field types.

mod coerce;
mod driver;
mod error;
mod json;
mod nullable;
mod value;

/// Capability traits and coercion entry points.
pub use coerce::{FromValue, ToDriverValue, coerce, driver_value};
/// Primitive values accepted by a relational interface.
pub use driver::DriverValue;
/// Error and result aliases.
pub use error::{ConvertError, Result};
/// The tri-state wrapper.
pub use nullable::Nullable;
/// Loosely-typed input values and their kind tags.
pub use value::{Kind, Value};
