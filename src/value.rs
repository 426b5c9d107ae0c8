//! Dynamic value representation for flat TOON encoding.
//!
//! [`ToonValue`] is the structured input of the encoder: a tagged variant whose
//! containers (`Array`, `Object`) contribute path segments and whose leaves
//! each produce exactly one token. Matching on it is exhaustive, so there is
//! never a question of what counts as a container.
//!
//! ## Core Types
//!
//! - [`ToonValue`]: null, undefined, bool, number, string, array, object, date, bigint
//! - [`Number`]: integers, floats, and the JavaScript-style specials
//!   (`Infinity`, `-Infinity`, `NaN`)
//!
//! ## Scalar rendering
//!
//! Every leaf has one textual form, shared by [`Display`](std::fmt::Display)
//! and the encoder:
//!
//! ```rust
//! use toon_flat::{Number, Value};
//!
//! assert_eq!(Value::Null.to_string(), "null");
//! assert_eq!(Value::Undefined.to_string(), "undefined");
//! assert_eq!(Value::from(1.0).to_string(), "1");
//! assert_eq!(Value::from(0.1).to_string(), "0.1");
//! assert_eq!(Value::Number(Number::NaN).to_string(), "NaN");
//! assert_eq!(Value::from("a;b").to_string(), "a;b");
//! ```
//!
//! ## Parsing JSON
//!
//! Deserializing keeps object keys in document order:
//!
//! ```rust
//! use toon_flat::Value;
//!
//! let value = Value::from_json(r#"{"z": 1, "a": 2}"#).unwrap();
//! let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
//! assert_eq!(keys, vec!["z", "a"]);
//! ```

use crate::ToonMap;
use chrono::{DateTime, SecondsFormat, Utc};
use num_bigint::{BigInt, Sign};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Text written for [`ToonValue::Undefined`] leaves.
pub const UNDEFINED: &str = "undefined";

/// Unit struct name that carries [`ToonValue::Undefined`] through serde.
///
/// Formats that know nothing about it (serde_json) write `null`.
pub(crate) const UNDEFINED_MARKER: &str = "$toon_flat::private::Undefined";

/// A dynamically-typed structured value.
///
/// # Examples
///
/// ```rust
/// use toon_flat::{Number, ToonValue};
///
/// let null = ToonValue::Null;
/// let num = ToonValue::Number(Number::Integer(42));
/// let text = ToonValue::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_leaf());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ToonValue {
    #[default]
    Null,
    /// A key that is present with no value, distinct from `Null`.
    Undefined,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<ToonValue>),
    Object(ToonMap),
    Date(DateTime<Utc>),
    BigInt(BigInt),
}

/// A numeric value that can be an integer, float, or JavaScript-style special value.
///
/// Rendering rule:
///
/// - `Integer` prints as plain decimal.
/// - A finite `Float` prints the shortest decimal that reads back as the same
///   `f64`, in positional notation. Integral floats have no fraction
///   (`2.0` → `2`) and negative zero prints as `0`.
/// - `NaN`, `Infinity` and `-Infinity` print by name, as do non-finite floats.
///
/// # Examples
///
/// ```rust
/// use toon_flat::Number;
///
/// assert_eq!(Number::Integer(-7).to_string(), "-7");
/// assert_eq!(Number::Float(2.5).to_string(), "2.5");
/// assert_eq!(Number::Float(2.0).to_string(), "2");
/// assert_eq!(Number::Float(-0.0).to_string(), "0");
/// assert_eq!(Number::Float(f64::INFINITY).to_string(), "Infinity");
/// assert_eq!(Number::NegativeInfinity.to_string(), "-Infinity");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
    Infinity,
    NegativeInfinity,
    NaN,
}

impl Number {
    /// Returns `true` if this is an integer value.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Returns `true` if this is a special value (Infinity, -Infinity, or NaN).
    #[inline]
    #[must_use]
    pub const fn is_special(&self) -> bool {
        matches!(
            self,
            Number::Infinity | Number::NegativeInfinity | Number::NaN
        )
    }

    /// Converts this number to an `i64` if possible.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_flat::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// assert_eq!(Number::Infinity.as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Converts this number to an `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
            Number::Infinity => f64::INFINITY,
            Number::NegativeInfinity => f64::NEG_INFINITY,
            Number::NaN => f64::NAN,
        }
    }

    /// Returns `true` for zero and NaN, the numbers JavaScript treats as false.
    #[must_use]
    pub fn is_falsy(&self) -> bool {
        match self {
            Number::Integer(i) => *i == 0,
            Number::Float(f) => *f == 0.0 || f.is_nan(),
            Number::NaN => true,
            Number::Infinity | Number::NegativeInfinity => false,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) if fl.is_nan() => f.write_str("NaN"),
            Number::Float(fl) if fl.is_infinite() => {
                f.write_str(if *fl > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Number::Float(fl) if *fl == 0.0 => f.write_str("0"),
            Number::Float(fl) => write!(f, "{}", fl),
            Number::Infinity => f.write_str("Infinity"),
            Number::NegativeInfinity => f.write_str("-Infinity"),
            Number::NaN => f.write_str("NaN"),
        }
    }
}

/// Widens an `f32` through its own shortest representation, so `0.1f32`
/// becomes `0.1f64` rather than `0.10000000149011612`.
pub(crate) fn widen_f32(v: f32) -> f64 {
    v.to_string().parse().unwrap_or(f64::from(v))
}

macro_rules! number_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::Integer(i64::from(value))
                }
            }

            impl From<$ty> for ToonValue {
                fn from(value: $ty) -> Self {
                    ToonValue::Number(Number::from(value))
                }
            }
        )*
    };
}

number_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(widen_f32(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl ToonValue {
    /// Parses JSON text into a value, keeping object keys in document order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if the text is not valid JSON.
    pub fn from_json(s: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, ToonValue::Null)
    }

    /// Returns `true` if the value is the explicit absent leaf.
    #[inline]
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, ToonValue::Undefined)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, ToonValue::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, ToonValue::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, ToonValue::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, ToonValue::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, ToonValue::Object(_))
    }

    /// Returns `true` for every value that produces a token of its own,
    /// i.e. everything except arrays and objects.
    #[inline]
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        !matches!(self, ToonValue::Array(_) | ToonValue::Object(_))
    }

    /// Returns `true` for the values JavaScript treats as false:
    /// null, undefined, `false`, zero, NaN and the empty string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_flat::{toon, Value};
    ///
    /// assert!(Value::Null.is_falsy());
    /// assert!(Value::from("").is_falsy());
    /// assert!(Value::from(0).is_falsy());
    /// assert!(!toon!({}).is_falsy());
    /// assert!(!toon!([]).is_falsy());
    /// ```
    #[must_use]
    pub fn is_falsy(&self) -> bool {
        match self {
            ToonValue::Null | ToonValue::Undefined => true,
            ToonValue::Bool(b) => !b,
            ToonValue::Number(n) => n.is_falsy(),
            ToonValue::String(s) => s.is_empty(),
            ToonValue::BigInt(bi) => bi.sign() == Sign::NoSign,
            ToonValue::Array(_) | ToonValue::Object(_) | ToonValue::Date(_) => false,
        }
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ToonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ToonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an i64 integer or a whole-number float, returns it.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ToonValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<ToonValue>> {
        match self {
            ToonValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&ToonMap> {
        match self {
            ToonValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// If the value is a date, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            ToonValue::Date(dt) => Some(dt),
            _ => None,
        }
    }

    /// If the value is a big integer, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            ToonValue::BigInt(bi) => Some(bi),
            _ => None,
        }
    }

    /// Returns the token text of a leaf, or `None` for arrays and objects.
    ///
    /// Strings are returned verbatim; `:` and `;` are not escaped.
    #[must_use]
    pub fn scalar_text(&self) -> Option<String> {
        match self {
            ToonValue::Null => Some("null".to_string()),
            ToonValue::Undefined => Some(UNDEFINED.to_string()),
            ToonValue::Bool(b) => Some(b.to_string()),
            ToonValue::Number(n) => Some(n.to_string()),
            ToonValue::String(s) => Some(s.clone()),
            ToonValue::Date(dt) => Some(format_date(dt)),
            ToonValue::BigInt(bi) => Some(bi.to_string()),
            ToonValue::Array(_) | ToonValue::Object(_) => None,
        }
    }
}

pub(crate) fn format_date(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

impl fmt::Display for ToonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToonValue::Array(arr) => write!(f, "[array; {}]", arr.len()),
            ToonValue::Object(obj) => write!(f, "{{object; {}}}", obj.len()),
            ToonValue::Number(n) => write!(f, "{}", n),
            ToonValue::String(s) => f.write_str(s),
            leaf => f.write_str(&leaf.scalar_text().unwrap_or_default()),
        }
    }
}

impl Serialize for ToonValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ToonValue::Null => serializer.serialize_unit(),
            ToonValue::Undefined => serializer.serialize_unit_struct(UNDEFINED_MARKER),
            ToonValue::Bool(b) => serializer.serialize_bool(*b),
            ToonValue::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            ToonValue::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            ToonValue::Number(Number::Infinity) => serializer.serialize_f64(f64::INFINITY),
            ToonValue::Number(Number::NegativeInfinity) => {
                serializer.serialize_f64(f64::NEG_INFINITY)
            }
            ToonValue::Number(Number::NaN) => serializer.serialize_f64(f64::NAN),
            ToonValue::String(s) => serializer.serialize_str(s),
            ToonValue::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            ToonValue::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            ToonValue::Date(dt) => serializer.serialize_str(&format_date(dt)),
            ToonValue::BigInt(bi) => {
                if let Ok(i) = i64::try_from(bi) {
                    serializer.serialize_i64(i)
                } else if let Ok(u) = u64::try_from(bi) {
                    serializer.serialize_u64(u)
                } else if let Ok(i) = i128::try_from(bi) {
                    serializer.serialize_i128(i)
                } else if let Ok(u) = u128::try_from(bi) {
                    serializer.serialize_u128(u)
                } else {
                    serializer.serialize_str(&bi.to_string())
                }
            }
        }
    }
}

impl<'de> Deserialize<'de> for ToonValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ToonValueVisitor;

        impl<'de> Visitor<'de> for ToonValueVisitor {
            type Value = ToonValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any structured value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(ToonValue::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(ToonValue::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(ToonValue::from(value))
            }

            fn visit_i128<E>(self, value: i128) -> Result<Self::Value, E> {
                Ok(ToonValue::from(value))
            }

            fn visit_u128<E>(self, value: u128) -> Result<Self::Value, E> {
                Ok(ToonValue::from(value))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(ToonValue::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(ToonValue::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(ToonValue::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(ToonValue::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(ToonValue::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(ToonValue::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = ToonMap::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(ToonValue::Object(values))
            }
        }

        deserializer.deserialize_any(ToonValueVisitor)
    }
}

impl TryFrom<ToonValue> for i64 {
    type Error = crate::Error;

    fn try_from(value: ToonValue) -> crate::Result<Self> {
        match &value {
            ToonValue::Number(n) => n
                .as_i64()
                .ok_or_else(|| crate::Error::custom(format!("cannot convert {} to i64", n))),
            ToonValue::BigInt(bi) => i64::try_from(bi)
                .map_err(|_| crate::Error::custom(format!("cannot convert {} to i64", bi))),
            _ => Err(crate::Error::unsupported_type(&format!(
                "expected integer, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<ToonValue> for f64 {
    type Error = crate::Error;

    fn try_from(value: ToonValue) -> crate::Result<Self> {
        match value {
            ToonValue::Number(n) => Ok(n.as_f64()),
            _ => Err(crate::Error::unsupported_type(&format!(
                "expected number, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<ToonValue> for bool {
    type Error = crate::Error;

    fn try_from(value: ToonValue) -> crate::Result<Self> {
        match value {
            ToonValue::Bool(b) => Ok(b),
            _ => Err(crate::Error::unsupported_type(&format!(
                "expected bool, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<ToonValue> for String {
    type Error = crate::Error;

    fn try_from(value: ToonValue) -> crate::Result<Self> {
        match value {
            ToonValue::String(s) => Ok(s),
            _ => Err(crate::Error::unsupported_type(&format!(
                "expected string, found {:?}",
                value
            ))),
        }
    }
}

impl From<bool> for ToonValue {
    fn from(value: bool) -> Self {
        ToonValue::Bool(value)
    }
}

impl From<u64> for ToonValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => ToonValue::Number(Number::Integer(i)),
            Err(_) => ToonValue::BigInt(BigInt::from(value)),
        }
    }
}

impl From<i128> for ToonValue {
    fn from(value: i128) -> Self {
        match i64::try_from(value) {
            Ok(i) => ToonValue::Number(Number::Integer(i)),
            Err(_) => ToonValue::BigInt(BigInt::from(value)),
        }
    }
}

impl From<u128> for ToonValue {
    fn from(value: u128) -> Self {
        match i64::try_from(value) {
            Ok(i) => ToonValue::Number(Number::Integer(i)),
            Err(_) => ToonValue::BigInt(BigInt::from(value)),
        }
    }
}

impl From<f32> for ToonValue {
    fn from(value: f32) -> Self {
        ToonValue::Number(Number::from(value))
    }
}

impl From<f64> for ToonValue {
    fn from(value: f64) -> Self {
        ToonValue::Number(Number::Float(value))
    }
}

impl From<Number> for ToonValue {
    fn from(value: Number) -> Self {
        ToonValue::Number(value)
    }
}

impl From<String> for ToonValue {
    fn from(value: String) -> Self {
        ToonValue::String(value)
    }
}

impl From<&str> for ToonValue {
    fn from(value: &str) -> Self {
        ToonValue::String(value.to_string())
    }
}

impl From<DateTime<Utc>> for ToonValue {
    fn from(value: DateTime<Utc>) -> Self {
        ToonValue::Date(value)
    }
}

impl From<BigInt> for ToonValue {
    fn from(value: BigInt) -> Self {
        ToonValue::BigInt(value)
    }
}

impl From<Vec<ToonValue>> for ToonValue {
    fn from(value: Vec<ToonValue>) -> Self {
        ToonValue::Array(value)
    }
}

impl From<ToonMap> for ToonValue {
    fn from(value: ToonMap) -> Self {
        ToonValue::Object(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_float_rendering_rule() {
        assert_eq!(Number::Float(1.0).to_string(), "1");
        assert_eq!(Number::Float(-2.5).to_string(), "-2.5");
        assert_eq!(Number::Float(0.1 + 0.2).to_string(), "0.30000000000000004");
        assert_eq!(Number::Float(1e21).to_string(), "1000000000000000000000");
        assert_eq!(Number::Float(-0.0).to_string(), "0");
        assert_eq!(Number::Float(f64::NAN).to_string(), "NaN");
        assert_eq!(Number::Float(f64::NEG_INFINITY).to_string(), "-Infinity");
    }

    #[test]
    fn test_f32_widening_keeps_short_form() {
        assert_eq!(ToonValue::from(0.1f32).to_string(), "0.1");
        assert_eq!(ToonValue::from(f32::INFINITY).to_string(), "Infinity");
    }

    #[test]
    fn test_scalar_text_for_leaves_only() {
        assert_eq!(ToonValue::Undefined.scalar_text().as_deref(), Some("undefined"));
        assert_eq!(ToonValue::Bool(false).scalar_text().as_deref(), Some("false"));
        assert_eq!(ToonValue::Array(vec![]).scalar_text(), None);
        assert_eq!(ToonValue::Object(ToonMap::new()).scalar_text(), None);
    }

    #[test]
    fn test_date_renders_rfc3339_utc() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(ToonValue::from(dt).to_string(), "2024-01-15T10:30:00Z");
    }

    #[test]
    fn test_date_keeps_sub_second_digits() {
        let millis = Utc.timestamp_millis_opt(1_705_314_600_123).unwrap();
        assert_eq!(ToonValue::from(millis).to_string(), "2024-01-15T10:30:00.123Z");

        let nanos = Utc.timestamp_opt(1_705_314_600, 123_456_789).unwrap();
        assert_eq!(ToonValue::from(nanos).to_string(), "2024-01-15T10:30:00.123456789Z");

        let micros = Utc.timestamp_opt(1_705_314_600, 5_000).unwrap();
        assert_eq!(ToonValue::from(micros).to_string(), "2024-01-15T10:30:00.000005Z");
    }

    #[test]
    fn test_large_unsigned_becomes_bigint() {
        let value = ToonValue::from(u64::MAX);
        assert!(value.as_bigint().is_some());
        assert_eq!(value.to_string(), "18446744073709551615");
        assert_eq!(ToonValue::from(7u64), ToonValue::Number(Number::Integer(7)));
    }

    #[test]
    fn test_falsy_values() {
        assert!(ToonValue::Undefined.is_falsy());
        assert!(ToonValue::Bool(false).is_falsy());
        assert!(ToonValue::Number(Number::NaN).is_falsy());
        assert!(ToonValue::from(-0.0).is_falsy());
        assert!(ToonValue::BigInt(BigInt::from(0)).is_falsy());
        assert!(!ToonValue::from("0").is_falsy());
        assert!(!ToonValue::Number(Number::Infinity).is_falsy());
    }

    #[test]
    fn test_json_keeps_key_order() {
        let value = ToonValue::from_json(r#"{"b": 1, "a": {"d": 2, "c": 3}}"#).unwrap();
        let outer: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(outer, vec!["b", "a"]);
        let inner = value.as_object().unwrap().get("a").unwrap();
        let inner: Vec<_> = inner.as_object().unwrap().keys().cloned().collect();
        assert_eq!(inner, vec!["d", "c"]);
    }

    #[test]
    fn test_json_rejects_invalid_text() {
        assert!(matches!(
            ToonValue::from_json("{\"a\":"),
            Err(crate::Error::Json(_))
        ));
    }

    #[test]
    fn test_undefined_serializes_as_json_null() {
        let mut map = ToonMap::new();
        map.insert("a".to_string(), ToonValue::Undefined);
        let json = serde_json::to_string(&ToonValue::Object(map)).unwrap();
        assert_eq!(json, r#"{"a":null}"#);
    }

    #[test]
    fn test_bigint_serializes_as_json_number() {
        let json = serde_json::to_string(&ToonValue::from(u64::MAX)).unwrap();
        assert_eq!(json, "18446744073709551615");
    }

    #[test]
    fn test_tryfrom_i64() {
        assert_eq!(i64::try_from(ToonValue::from(42)).unwrap(), 42);
        assert_eq!(i64::try_from(ToonValue::from(42.0)).unwrap(), 42);
        assert!(i64::try_from(ToonValue::from(42.5)).is_err());
        assert!(i64::try_from(ToonValue::from("42")).is_err());
        assert!(i64::try_from(ToonValue::from(u64::MAX)).is_err());
    }

    #[test]
    fn test_tryfrom_other_scalars() {
        assert_eq!(f64::try_from(ToonValue::from(3.5)).unwrap(), 3.5);
        assert!(bool::try_from(ToonValue::Bool(true)).unwrap());
        assert_eq!(String::try_from(ToonValue::from("x")).unwrap(), "x");
        assert!(String::try_from(ToonValue::Null).is_err());
        assert!(matches!(
            bool::try_from(ToonValue::from(1)),
            Err(crate::Error::UnsupportedType(_))
        ));
    }
}
