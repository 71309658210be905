use time::OffsetDateTime;

use crate::driver::DriverValue;
use crate::error::{ConvertError, Result};
use crate::value::{Kind, Value};

/// Types that can be narrowed from a loosely-typed [`Value`].
///
/// Primitive implementations run the generic engine ([`coerce`]). Other types implement this
/// directly to take full control of scanning; errors they return should be wrapped with
/// [`ConvertError::delegated`] so callers see them unchanged.
pub trait FromValue: Sized {
	/// Convert `value` into `Self`.
	fn from_value(value: Value) -> Result<Self>;
}

/// Types that can produce a primitive [`DriverValue`].
///
/// Primitive implementations run output coercion ([`driver_value`]).
pub trait ToDriverValue {
	/// Produce the driver representation of `self`.
	fn to_driver_value(&self) -> Result<DriverValue>;
}

/// Coerce `value` into a value of kind `target`.
///
/// Null yields the zero value of `target`. Integer narrowing is range-checked.
pub fn coerce(value: Value, target: Kind) -> Result<Value> {
	let source = value.kind();
	if source == target {
		return Ok(value);
	}

	match value {
		Value::Null => Ok(Value::zero(target)),
		Value::Bytes(bytes) if target == Kind::String => bytes_to_text(bytes).map(Value::String),
		Value::Bytes(bytes) if target.is_float() => parse_float(bytes, target),
		value if source.is_numeric() && target.is_numeric() => convert_number(&value, target),
		value if source.is_integer() && target == Kind::Bool => integer_to_bool(&value),
		_ => {
			tracing::trace!(%source, %target, "no coercion rule");
			Err(ConvertError::Unsupported)
		}
	}
}

/// Lower `value` to the primitive representation accepted by a relational interface.
pub fn driver_value(value: Value) -> Result<DriverValue> {
	Ok(match value {
		Value::Null => DriverValue::Null,
		Value::Bool(v) => DriverValue::Bool(v),
		Value::I8(v) => DriverValue::I64(i64::from(v)),
		Value::I16(v) => DriverValue::I64(i64::from(v)),
		Value::I32(v) => DriverValue::I64(i64::from(v)),
		Value::I64(v) => DriverValue::I64(v),
		Value::Isize(v) => DriverValue::I64(i64::try_from(v).map_err(|_| ConvertError::Unsupported)?),
		Value::U8(v) => DriverValue::I64(i64::from(v)),
		Value::U16(v) => DriverValue::I64(i64::from(v)),
		Value::U32(v) => DriverValue::I64(i64::from(v)),
		Value::U64(v) => DriverValue::I64(unsigned_to_i64(v)?),
		Value::Usize(v) => DriverValue::I64(unsigned_to_i64(u64::try_from(v).map_err(|_| ConvertError::Unsupported)?)?),
		Value::F32(v) => DriverValue::F64(f64::from(v)),
		Value::F64(v) => DriverValue::F64(v),
		Value::Bytes(v) => DriverValue::Bytes(v),
		Value::String(v) => DriverValue::Text(v),
		Value::Time(v) => DriverValue::Time(v),
		Value::Array(_) => return Err(ConvertError::UnsupportedKind { kind: Kind::Array }),
	})
}

#[derive(Debug, Clone, Copy)]
enum Number {
	Int(i128),
	Float(f64),
}

fn number(value: &Value) -> Option<Number> {
	Some(match *value {
		Value::I8(v) => Number::Int(i128::from(v)),
		Value::I16(v) => Number::Int(i128::from(v)),
		Value::I32(v) => Number::Int(i128::from(v)),
		Value::I64(v) => Number::Int(i128::from(v)),
		Value::Isize(v) => Number::Int(i128::try_from(v).ok()?),
		Value::U8(v) => Number::Int(i128::from(v)),
		Value::U16(v) => Number::Int(i128::from(v)),
		Value::U32(v) => Number::Int(i128::from(v)),
		Value::U64(v) => Number::Int(i128::from(v)),
		Value::Usize(v) => Number::Int(i128::try_from(v).ok()?),
		Value::F32(v) => Number::Float(f64::from(v)),
		Value::F64(v) => Number::Float(v),
		_ => return None,
	})
}

fn convert_number(value: &Value, target: Kind) -> Result<Value> {
	let number = number(value).ok_or(ConvertError::Unsupported)?;
	match (number, target) {
		(Number::Int(v), Kind::F32) => Ok(Value::F32(v as f32)),
		(Number::Int(v), Kind::F64) => Ok(Value::F64(v as f64)),
		(Number::Float(v), Kind::F32) => Ok(Value::F32(v as f32)),
		(Number::Float(v), Kind::F64) => Ok(Value::F64(v)),
		(Number::Int(v), _) => narrow_integer(v, target),
		(Number::Float(v), _) => {
			if !v.is_finite() {
				return Err(ConvertError::Unsupported);
			}
			narrow_integer(v.trunc() as i128, target)
		}
	}
}

fn narrow_integer(v: i128, target: Kind) -> Result<Value> {
	let narrowed = match target {
		Kind::I8 => i8::try_from(v).map(Value::I8),
		Kind::I16 => i16::try_from(v).map(Value::I16),
		Kind::I32 => i32::try_from(v).map(Value::I32),
		Kind::I64 => i64::try_from(v).map(Value::I64),
		Kind::Isize => isize::try_from(v).map(Value::Isize),
		Kind::U8 => u8::try_from(v).map(Value::U8),
		Kind::U16 => u16::try_from(v).map(Value::U16),
		Kind::U32 => u32::try_from(v).map(Value::U32),
		Kind::U64 => u64::try_from(v).map(Value::U64),
		Kind::Usize => usize::try_from(v).map(Value::Usize),
		_ => return Err(ConvertError::Unsupported),
	};

	narrowed.map_err(|_| {
		tracing::trace!(value = %v, %target, "integer out of range");
		ConvertError::Unsupported
	})
}

fn integer_to_bool(value: &Value) -> Result<Value> {
	match number(value) {
		Some(Number::Int(0)) => Ok(Value::Bool(false)),
		Some(Number::Int(1)) => Ok(Value::Bool(true)),
		_ => Err(ConvertError::Unsupported),
	}
}

fn bytes_to_text(bytes: Vec<u8>) -> Result<String> {
	String::from_utf8(bytes).map_err(|_| ConvertError::Unsupported)
}

fn parse_float(bytes: Vec<u8>, target: Kind) -> Result<Value> {
	let text = bytes_to_text(bytes)?;
	let parsed = match target {
		Kind::F32 => text.parse::<f32>().map(Value::F32),
		_ => text.parse::<f64>().map(Value::F64),
	};
	match parsed {
		Ok(value) if overflowed(&value) && !is_infinity_literal(&text) => {
			tracing::trace!(%text, %target, "float literal out of range");
			Err(ConvertError::Unsupported)
		}
		Ok(value) => Ok(value),
		Err(source) => Err(ConvertError::Parse { text, source }),
	}
}

fn overflowed(value: &Value) -> bool {
	match *value {
		Value::F32(v) => v.is_infinite(),
		Value::F64(v) => v.is_infinite(),
		_ => false,
	}
}

fn is_infinity_literal(text: &str) -> bool {
	let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
	unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

fn unsigned_to_i64(value: u64) -> Result<i64> {
	i64::try_from(value).map_err(|_| ConvertError::Overflow { value })
}

macro_rules! from_value {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl FromValue for $ty {
				fn from_value(value: Value) -> Result<Self> {
					match coerce(value, Kind::$variant)? {
						Value::$variant(inner) => Ok(inner),
						_ => Err(ConvertError::Unsupported),
					}
				}
			}
		)*
	};
}

macro_rules! to_driver_value {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl ToDriverValue for $ty {
				fn to_driver_value(&self) -> Result<DriverValue> {
					driver_value(Value::$variant(*self))
				}
			}
		)*
	};
}

from_value!(
	bool => Bool,
	i8 => I8,
	i16 => I16,
	i32 => I32,
	i64 => I64,
	isize => Isize,
	u8 => U8,
	u16 => U16,
	u32 => U32,
	u64 => U64,
	usize => Usize,
	f32 => F32,
	f64 => F64,
	Vec<u8> => Bytes,
	String => String,
	OffsetDateTime => Time,
);

to_driver_value!(
	bool => Bool,
	i8 => I8,
	i16 => I16,
	i32 => I32,
	i64 => I64,
	isize => Isize,
	u8 => U8,
	u16 => U16,
	u32 => U32,
	u64 => U64,
	usize => Usize,
	f32 => F32,
	f64 => F64,
	OffsetDateTime => Time,
);

impl ToDriverValue for str {
	fn to_driver_value(&self) -> Result<DriverValue> {
		Ok(DriverValue::Text(self.to_owned()))
	}
}

impl ToDriverValue for String {
	fn to_driver_value(&self) -> Result<DriverValue> {
		self.as_str().to_driver_value()
	}
}

impl ToDriverValue for [u8] {
	fn to_driver_value(&self) -> Result<DriverValue> {
		Ok(DriverValue::Bytes(self.to_vec()))
	}
}

impl ToDriverValue for Vec<u8> {
	fn to_driver_value(&self) -> Result<DriverValue> {
		self.as_slice().to_driver_value()
	}
}

impl FromValue for Value {
	fn from_value(value: Value) -> Result<Self> {
		Ok(value)
	}
}

impl ToDriverValue for Value {
	fn to_driver_value(&self) -> Result<DriverValue> {
		driver_value(self.clone())
	}
}

impl ToDriverValue for DriverValue {
	fn to_driver_value(&self) -> Result<DriverValue> {
		Ok(self.clone())
	}
}

impl<T: ToDriverValue> ToDriverValue for Option<T> {
	fn to_driver_value(&self) -> Result<DriverValue> {
		match self {
			Some(inner) => inner.to_driver_value(),
			None => Ok(DriverValue::Null),
		}
	}
}

impl<T: ToDriverValue + ?Sized> ToDriverValue for Box<T> {
	fn to_driver_value(&self) -> Result<DriverValue> {
		(**self).to_driver_value()
	}
}

impl<T: ToDriverValue + ?Sized> ToDriverValue for &T {
	fn to_driver_value(&self) -> Result<DriverValue> {
		(**self).to_driver_value()
	}
}

#[cfg(test)]
mod tests;
