use std::fmt;

use time::OffsetDateTime;

/// Loosely-typed value delivered by a row cursor or a text decoder.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Null sentinel.
	Null,
	/// Boolean.
	Bool(bool),
	/// 8-bit signed integer.
	I8(i8),
	/// 16-bit signed integer.
	I16(i16),
	/// 32-bit signed integer.
	I32(i32),
	/// 64-bit signed integer.
	I64(i64),
	/// Pointer-sized signed integer.
	Isize(isize),
	/// 8-bit unsigned integer.
	U8(u8),
	/// 16-bit unsigned integer.
	U16(u16),
	/// 32-bit unsigned integer.
	U32(u32),
	/// 64-bit unsigned integer.
	U64(u64),
	/// Pointer-sized unsigned integer.
	Usize(usize),
	/// 32-bit float.
	F32(f32),
	/// 64-bit float.
	F64(f64),
	/// Raw byte sequence.
	Bytes(Vec<u8>),
	/// UTF-8 text.
	String(String),
	/// Date/time composite.
	Time(OffsetDateTime),
	/// Driver-delivered list of values.
	Array(Vec<Value>),
}

/// Payload-free tag for each [`Value`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
	/// [`Value::Null`].
	Null,
	/// [`Value::Bool`].
	Bool,
	/// [`Value::I8`].
	I8,
	/// [`Value::I16`].
	I16,
	/// [`Value::I32`].
	I32,
	/// [`Value::I64`].
	I64,
	/// [`Value::Isize`].
	Isize,
	/// [`Value::U8`].
	U8,
	/// [`Value::U16`].
	U16,
	/// [`Value::U32`].
	U32,
	/// [`Value::U64`].
	U64,
	/// [`Value::Usize`].
	Usize,
	/// [`Value::F32`].
	F32,
	/// [`Value::F64`].
	F64,
	/// [`Value::Bytes`].
	Bytes,
	/// [`Value::String`].
	String,
	/// [`Value::Time`].
	Time,
	/// [`Value::Array`].
	Array,
}

impl Kind {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool => "bool",
			Self::I8 => "i8",
			Self::I16 => "i16",
			Self::I32 => "i32",
			Self::I64 => "i64",
			Self::Isize => "isize",
			Self::U8 => "u8",
			Self::U16 => "u16",
			Self::U32 => "u32",
			Self::U64 => "u64",
			Self::Usize => "usize",
			Self::F32 => "f32",
			Self::F64 => "f64",
			Self::Bytes => "bytes",
			Self::String => "string",
			Self::Time => "time",
			Self::Array => "array",
		}
	}

	/// Any integer width, signed or unsigned.
	pub fn is_integer(self) -> bool {
		matches!(
			self,
			Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::Isize | Self::U8 | Self::U16 | Self::U32 | Self::U64 | Self::Usize
		)
	}

	/// Unsigned integer widths.
	pub fn is_unsigned(self) -> bool {
		matches!(self, Self::U8 | Self::U16 | Self::U32 | Self::U64 | Self::Usize)
	}

	/// Floating-point widths.
	pub fn is_float(self) -> bool {
		matches!(self, Self::F32 | Self::F64)
	}

	/// Integer or floating-point.
	pub fn is_numeric(self) -> bool {
		self.is_integer() || self.is_float()
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Value {
	/// Kind tag of this value.
	pub fn kind(&self) -> Kind {
		match self {
			Self::Null => Kind::Null,
			Self::Bool(_) => Kind::Bool,
			Self::I8(_) => Kind::I8,
			Self::I16(_) => Kind::I16,
			Self::I32(_) => Kind::I32,
			Self::I64(_) => Kind::I64,
			Self::Isize(_) => Kind::Isize,
			Self::U8(_) => Kind::U8,
			Self::U16(_) => Kind::U16,
			Self::U32(_) => Kind::U32,
			Self::U64(_) => Kind::U64,
			Self::Usize(_) => Kind::Usize,
			Self::F32(_) => Kind::F32,
			Self::F64(_) => Kind::F64,
			Self::Bytes(_) => Kind::Bytes,
			Self::String(_) => Kind::String,
			Self::Time(_) => Kind::Time,
			Self::Array(_) => Kind::Array,
		}
	}

	/// Whether this is the null sentinel.
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Zero value of `kind`.
	pub fn zero(kind: Kind) -> Self {
		match kind {
			Kind::Null => Self::Null,
			Kind::Bool => Self::Bool(false),
			Kind::I8 => Self::I8(0),
			Kind::I16 => Self::I16(0),
			Kind::I32 => Self::I32(0),
			Kind::I64 => Self::I64(0),
			Kind::Isize => Self::Isize(0),
			Kind::U8 => Self::U8(0),
			Kind::U16 => Self::U16(0),
			Kind::U32 => Self::U32(0),
			Kind::U64 => Self::U64(0),
			Kind::Usize => Self::Usize(0),
			Kind::F32 => Self::F32(0.0),
			Kind::F64 => Self::F64(0.0),
			Kind::Bytes => Self::Bytes(Vec::new()),
			Kind::String => Self::String(String::new()),
			Kind::Time => Self::Time(OffsetDateTime::UNIX_EPOCH),
			Kind::Array => Self::Array(Vec::new()),
		}
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.to_owned())
	}
}

impl From<&[u8]> for Value {
	fn from(value: &[u8]) -> Self {
		Self::Bytes(value.to_vec())
	}
}

macro_rules! value_from {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<$ty> for Value {
				fn from(value: $ty) -> Self {
					Self::$variant(value)
				}
			}
		)*
	};
}

value_from!(
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
	Vec<Value> => Array,
);
