//! Structured-text hooks for [`Nullable`].
//!
//! Host structs must mark nullable fields `#[serde(default)]`: serde feeds a missing key to
//! `deserialize` as null, so only the default keeps a missing key absent. Pair it with
//! `#[serde(skip_serializing_if = "Nullable::is_absent")]` to omit never-present fields.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::nullable::Nullable;

impl<T: Serialize> Serialize for Nullable<T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.as_option().serialize(serializer)
	}
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		Ok(match Option::<T>::deserialize(deserializer)? {
			Some(value) => Self::Value(value),
			None => Self::Null,
		})
	}
}

impl<T> Nullable<T> {
	/// Decode one raw JSON token, overwriting prior state.
	///
	/// The field is marked present before the inner decode runs and stays present (as null)
	/// when it fails. Decoder errors are returned unchanged.
	pub fn decode_json(&mut self, raw: impl AsRef<[u8]>) -> serde_json::Result<()>
	where
		T: for<'de> Deserialize<'de>,
	{
		*self = Self::Null;
		match serde_json::from_slice::<Option<T>>(raw.as_ref()) {
			Ok(Some(value)) => {
				*self = Self::Value(value);
				Ok(())
			}
			Ok(None) => Ok(()),
			Err(err) => {
				tracing::trace!(error = %err, "json decode failed");
				Err(err)
			}
		}
	}

	/// Encode as one JSON token: `null` unless valid.
	pub fn encode_json(&self) -> serde_json::Result<String>
	where
		T: Serialize,
	{
		serde_json::to_string(self)
	}
}
