use time::OffsetDateTime;

use crate::value::Value;

/// Primitive value accepted by a relational parameter interface.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverValue {
	/// SQL `NULL`.
	Null,
	/// Signed 64-bit integer.
	I64(i64),
	/// 64-bit float.
	F64(f64),
	/// Boolean.
	Bool(bool),
	/// Byte sequence.
	Bytes(Vec<u8>),
	/// Text.
	Text(String),
	/// Date/time composite.
	Time(OffsetDateTime),
}

impl DriverValue {
	/// Whether this is the null sentinel.
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}
}

impl From<DriverValue> for Value {
	fn from(value: DriverValue) -> Self {
		match value {
			DriverValue::Null => Self::Null,
			DriverValue::I64(v) => Self::I64(v),
			DriverValue::F64(v) => Self::F64(v),
			DriverValue::Bool(v) => Self::Bool(v),
			DriverValue::Bytes(v) => Self::Bytes(v),
			DriverValue::Text(v) => Self::String(v),
			DriverValue::Time(v) => Self::Time(v),
		}
	}
}
