use std::num::ParseFloatError;

use thiserror::Error;

use crate::value::Kind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors produced while coercing values across the relational boundary.
#[derive(Debug, Error)]
pub enum ConvertError {
	/// No coercion rule matches the input and target kinds.
	#[error("unsupported type conversion")]
	Unsupported,
	/// Unsigned value does not fit the signed 64-bit driver representation.
	#[error("unsigned integer value {value} is too large for i64")]
	Overflow {
		/// Offending unsigned value.
		value: u64,
	},
	/// Byte sequence did not hold a floating-point literal.
	#[error("invalid float literal {text:?}")]
	Parse {
		/// Text decoded from the byte sequence.
		text: String,
		/// Underlying parse failure.
		#[source]
		source: ParseFloatError,
	},
	/// Output coercion met a kind the driver interface cannot carry.
	#[error("unsupported driver value kind: {kind}")]
	UnsupportedKind {
		/// Kind of the rejected value.
		kind: Kind,
	},
	/// Error raised by a type's own scan or produce logic.
	#[error(transparent)]
	Delegated(Box<dyn std::error::Error + Send + Sync>),
}

impl ConvertError {
	/// Wrap an error from custom conversion logic without reinterpreting it.
	pub fn delegated(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
		Self::Delegated(err.into())
	}

	/// Whether this is the generic unsupported-conversion failure.
	pub fn is_unsupported(&self) -> bool {
		matches!(self, Self::Unsupported)
	}
}
