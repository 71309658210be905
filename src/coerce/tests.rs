use time::OffsetDateTime;
use time::macros::datetime;

use crate::{ConvertError, DriverValue, FromValue, Kind, ToDriverValue, Value, coerce, driver_value};

#[test]
fn identical_kind_passes_through() {
	let value = coerce(Value::from("test"), Kind::String).expect("same kind");
	assert_eq!(value, Value::String("test".to_owned()));
}

#[test]
fn null_yields_zero_of_every_target() {
	assert_eq!(i8::from_value(Value::Null).expect("i8 zero"), 0);
	assert_eq!(u64::from_value(Value::Null).expect("u64 zero"), 0);
	assert_eq!(f32::from_value(Value::Null).expect("f32 zero"), 0.0);
	assert!(!bool::from_value(Value::Null).expect("bool zero"));
	assert_eq!(String::from_value(Value::Null).expect("string zero"), "");
	assert_eq!(Vec::<u8>::from_value(Value::Null).expect("bytes zero"), Vec::<u8>::new());
	assert_eq!(OffsetDateTime::from_value(Value::Null).expect("time zero"), OffsetDateTime::UNIX_EPOCH);
}

#[test]
fn bytes_decode_to_text() {
	assert_eq!(String::from_value(Value::Bytes(b"test".to_vec())).expect("utf-8 bytes"), "test");
	assert_eq!(String::from_value(Value::Bytes(Vec::new())).expect("empty bytes"), "");
}

#[test]
fn invalid_utf8_bytes_are_unsupported() {
	let err = String::from_value(Value::Bytes(vec![0xff, 0xfe])).expect_err("invalid utf-8");
	assert!(err.is_unsupported());
}

#[test]
fn integers_widen_and_narrow_within_range() {
	assert_eq!(i8::from_value(Value::I64(2)).expect("fits i8"), 2);
	assert_eq!(i16::from_value(Value::I64(3)).expect("fits i16"), 3);
	assert_eq!(i32::from_value(Value::I64(4)).expect("fits i32"), 4);
	assert_eq!(isize::from_value(Value::I64(1)).expect("fits isize"), 1);
	assert_eq!(usize::from_value(Value::I64(5)).expect("fits usize"), 5);
	assert_eq!(u8::from_value(Value::I64(6)).expect("fits u8"), 6);
	assert_eq!(u16::from_value(Value::I64(7)).expect("fits u16"), 7);
	assert_eq!(u32::from_value(Value::I64(8)).expect("fits u32"), 8);
	assert_eq!(i64::from_value(Value::U8(200)).expect("widens"), 200);
}

#[test]
fn out_of_range_integer_is_unsupported() {
	let err = i8::from_value(Value::I64(300)).expect_err("300 does not fit i8");
	assert!(err.is_unsupported());

	let err = u32::from_value(Value::I64(-1)).expect_err("negative does not fit u32");
	assert!(err.is_unsupported());
}

#[test]
fn numbers_cross_integer_and_float_kinds() {
	assert_eq!(f32::from_value(Value::I64(0)).expect("int to f32"), 0.0);
	assert_eq!(f64::from_value(Value::F32(0.25)).expect("f32 to f64"), 0.25);
	assert_eq!(f32::from_value(Value::F64(0.25)).expect("f64 to f32"), 0.25);
	assert_eq!(i32::from_value(Value::F64(7.9)).expect("float truncates"), 7);

	let err = i64::from_value(Value::F64(f64::NAN)).expect_err("nan has no integer");
	assert!(err.is_unsupported());
}

#[test]
fn booleans_come_from_zero_or_one() {
	assert!(bool::from_value(Value::I64(1)).expect("one"));
	assert!(!bool::from_value(Value::I64(0)).expect("zero"));
	assert!(bool::from_value(Value::U8(1)).expect("unsigned one"));

	let err = bool::from_value(Value::I64(100)).expect_err("100 is not a boolean");
	assert!(err.is_unsupported());
}

#[test]
fn float_text_bytes_parse_at_target_width() {
	assert_eq!(f32::from_value(Value::Bytes(b"0.25".to_vec())).expect("f32 literal"), 0.25);
	assert_eq!(f64::from_value(Value::Bytes(b"0.25".to_vec())).expect("f64 literal"), 0.25);

	let err = f64::from_value(Value::Bytes(Vec::new())).expect_err("empty text");
	assert!(matches!(err, ConvertError::Parse { ref text, .. } if text.is_empty()));

	let err = f64::from_value(Value::Bytes(b"not a number".to_vec())).expect_err("garbage text");
	assert!(matches!(err, ConvertError::Parse { .. }));

	let err = f32::from_value(Value::Bytes(vec![1, 2, 3])).expect_err("control bytes");
	assert!(matches!(err, ConvertError::Parse { .. }));
}

#[test]
fn float_literals_beyond_target_width_are_unsupported() {
	let err = f32::from_value(Value::Bytes(b"1e40".to_vec())).expect_err("1e40 overflows f32");
	assert!(err.is_unsupported());

	let err = f64::from_value(Value::Bytes(b"-1e400".to_vec())).expect_err("-1e400 overflows f64");
	assert!(err.is_unsupported());

	assert_eq!(f64::from_value(Value::Bytes(b"1e40".to_vec())).expect("1e40 fits f64"), 1e40);
	assert_eq!(f32::from_value(Value::Bytes(b"-inf".to_vec())).expect("explicit infinity"), f32::NEG_INFINITY);
	assert_eq!(f64::from_value(Value::Bytes(b"Infinity".to_vec())).expect("explicit infinity"), f64::INFINITY);
}

#[test]
fn platform_integers_convert_both_ways() {
	assert_eq!(i64::from_value(Value::Isize(-5)).expect("isize widens"), -5);
	assert_eq!(u8::from_value(Value::Usize(200)).expect("usize narrows"), 200);
	assert_eq!(driver_value(Value::Isize(-5)).expect("isize produces"), DriverValue::I64(-5));
	assert_eq!(driver_value(Value::Usize(7)).expect("usize produces"), DriverValue::I64(7));
}

#[test]
fn kind_tags_classify_numbers() {
	assert!(Value::U16(1).kind().is_unsigned());
	assert!(Value::Usize(1).kind().is_unsigned());
	assert!(!Value::I64(1).kind().is_unsigned());
	assert!(!Value::F64(1.0).kind().is_unsigned());
	assert!(Value::F32(1.0).kind().is_numeric());
	assert!(!Value::Bytes(Vec::new()).kind().is_numeric());
}

#[test]
fn unmatched_pairs_are_unsupported() {
	let err = String::from_value(Value::I64(123_456_789_012_345)).expect_err("int to string");
	assert!(err.is_unsupported());

	let err = String::from_value(Value::Array(vec![Value::I64(1), Value::I64(2)])).expect_err("array to string");
	assert!(err.is_unsupported());

	let err = f64::from_value(Value::String("0.25".to_owned())).expect_err("text is not bytes");
	assert!(err.is_unsupported());

	let err = bool::from_value(Value::F64(1.0)).expect_err("float is not an integer");
	assert!(err.is_unsupported());
}

#[test]
fn signed_integers_widen_to_i64() {
	assert_eq!(123_isize.to_driver_value().expect("isize"), DriverValue::I64(123));
	assert_eq!(12_i8.to_driver_value().expect("i8"), DriverValue::I64(12));
	assert_eq!(1234_i16.to_driver_value().expect("i16"), DriverValue::I64(1234));
	assert_eq!(12345_i32.to_driver_value().expect("i32"), DriverValue::I64(12345));
	assert_eq!(123456_i64.to_driver_value().expect("i64"), DriverValue::I64(123456));
}

#[test]
fn unsigned_integers_must_fit_i64() {
	assert_eq!(12_u8.to_driver_value().expect("u8"), DriverValue::I64(12));
	assert_eq!(12345_u32.to_driver_value().expect("u32"), DriverValue::I64(12345));
	assert_eq!((1_u64 << 62).to_driver_value().expect("below 2^63"), DriverValue::I64(1 << 62));
	assert_eq!((i64::MAX as u64).to_driver_value().expect("i64::MAX"), DriverValue::I64(i64::MAX));

	let err = (1_u64 << 63).to_driver_value().expect_err("high bit set");
	assert!(matches!(err, ConvertError::Overflow { value } if value == 1 << 63));
}

#[test]
fn other_primitives_pass_through() {
	let at = datetime!(2006-01-02 15:04:05 UTC);

	assert_eq!(12.34_f32.to_driver_value().expect("f32"), DriverValue::F64(f64::from(12.34_f32)));
	assert_eq!(123.456_f64.to_driver_value().expect("f64"), DriverValue::F64(123.456));
	assert_eq!(true.to_driver_value().expect("bool"), DriverValue::Bool(true));
	assert_eq!("test".to_driver_value().expect("str"), DriverValue::Text("test".to_owned()));
	assert_eq!(b"byte slice".to_vec().to_driver_value().expect("bytes"), DriverValue::Bytes(b"byte slice".to_vec()));
	assert_eq!(at.to_driver_value().expect("time"), DriverValue::Time(at));
}

#[test]
fn indirections_recurse_or_yield_null() {
	let boxed: Box<i32> = Box::new(123);
	assert_eq!(boxed.to_driver_value().expect("box"), DriverValue::I64(123));
	assert_eq!(Some(123_i32).to_driver_value().expect("some"), DriverValue::I64(123));
	assert!(None::<i32>.to_driver_value().expect("none").is_null());
	assert!(!Some(0_i32).to_driver_value().expect("some zero").is_null());
}

#[test]
fn arrays_have_no_driver_representation() {
	let err = driver_value(Value::Array(vec![Value::I64(1)])).expect_err("array");
	assert!(matches!(err, ConvertError::UnsupportedKind { kind: Kind::Array }));
}
