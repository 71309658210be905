use crate::coerce::{FromValue, ToDriverValue};
use crate::driver::DriverValue;
use crate::error::Result;
use crate::value::Value;

/// Tri-state field: absent, explicit null, or present with a value.
///
/// `Absent` means the field was never addressed by a decode or scan. `Null` means it was
/// addressed and held the null sentinel (or failed to convert). Every decode or scan call
/// overwrites the whole state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nullable<T> {
	/// Key or column was not addressed.
	Absent,
	/// Key or column was addressed and held null.
	Null,
	/// Key or column was addressed and held a value.
	Value(T),
}

impl<T> Default for Nullable<T> {
	fn default() -> Self {
		Self::Absent
	}
}

impl<T> Nullable<T> {
	/// Wrap a concrete value, marking it present and valid.
	pub fn of(value: T) -> Self {
		Self::Value(value)
	}

	/// Explicit null.
	pub fn null() -> Self {
		Self::Null
	}

	/// Never-addressed field.
	pub fn absent() -> Self {
		Self::Absent
	}

	/// Whether the field was addressed by the last decode or scan.
	pub fn is_present(&self) -> bool {
		!self.is_absent()
	}

	/// Whether a non-null value was established.
	pub fn is_valid(&self) -> bool {
		matches!(self, Self::Value(_))
	}

	/// Whether the field was addressed and held null.
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Whether the field was never addressed; encoders use this to omit the field.
	pub fn is_absent(&self) -> bool {
		matches!(self, Self::Absent)
	}

	/// Borrow the value when valid.
	pub fn value(&self) -> Option<&T> {
		match self {
			Self::Value(value) => Some(value),
			Self::Absent | Self::Null => None,
		}
	}

	/// Borrowing view as an [`Option`].
	pub fn as_option(&self) -> Option<&T> {
		self.value()
	}

	/// Consume into an [`Option`], folding absent and null together.
	pub fn into_option(self) -> Option<T> {
		match self {
			Self::Value(value) => Some(value),
			Self::Absent | Self::Null => None,
		}
	}

	/// Return the value when valid, otherwise `default`.
	pub fn or_else(self, default: T) -> T {
		self.into_option().unwrap_or(default)
	}

	/// Return the value when valid, otherwise the zero value of `T`.
	pub fn unwrap_or_default(self) -> T
	where
		T: Default,
	{
		self.into_option().unwrap_or_default()
	}

	/// Produce the driver representation: null unless valid.
	pub fn driver_value(&self) -> Result<DriverValue>
	where
		T: ToDriverValue,
	{
		match self {
			Self::Value(value) => value.to_driver_value(),
			Self::Absent | Self::Null => Ok(DriverValue::Null),
		}
	}
}

impl<T: FromValue> Nullable<T> {
	/// Scan one loosely-typed row value, overwriting prior state.
	///
	/// The field is always present afterwards. On error it is left null.
	pub fn scan(&mut self, value: Value) -> Result<()> {
		*self = Self::Null;
		if value.is_null() {
			return Ok(());
		}

		let kind = value.kind();
		match T::from_value(value) {
			Ok(value) => {
				*self = Self::Value(value);
				Ok(())
			}
			Err(err) => {
				tracing::trace!(source = %kind, error = %err, "scan failed");
				Err(err)
			}
		}
	}
}

impl<T> From<T> for Nullable<T> {
	fn from(value: T) -> Self {
		Self::of(value)
	}
}

impl<T: FromValue> FromValue for Nullable<T> {
	fn from_value(value: Value) -> Result<Self> {
		let mut out = Self::Absent;
		out.scan(value)?;
		Ok(out)
	}
}

impl<T: ToDriverValue> ToDriverValue for Nullable<T> {
	fn to_driver_value(&self) -> Result<DriverValue> {
		self.driver_value()
	}
}
