//! Attribute values.
//!
//! `Value` is the closed set of scalars the parameter-binding layer accepts
//! natively. Values are stored exactly as supplied; nothing here coerces
//! between variants.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::Serialize;

/// A single attribute or column value.
///
/// Serializes to the matching JSON scalar. Deserialization accepts `null`,
/// integers within the `i64` range, floats and strings. Out-of-range
/// integers, booleans, arrays and objects are rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Real(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Parse a bare literal as typed on a command line or in a URL.
    ///
    /// Tries integer, then finite float, and falls back to text. The literal
    /// `null` (any case) is `Value::Null`. Numerals with a leading zero such
    /// as `007` stay text, as do `nan` and `inf`.
    #[must_use]
    pub fn parse_literal(s: &str) -> Self {
        if s.eq_ignore_ascii_case("null") {
            return Self::Null;
        }
        if !has_leading_zero(s) {
            if let Ok(v) = s.parse::<i64>() {
                return Self::Integer(v);
            }
            if let Some(v) = s.parse::<f64>().ok().filter(|v| v.is_finite()) {
                return Self::Real(v);
            }
        }
        Self::Text(s.to_string())
    }
}

fn has_leading_zero(s: &str) -> bool {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s).as_bytes();
    digits.first() == Some(&b'0') && digits.get(1).is_some_and(u8::is_ascii_digit)
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ValueVisitor;

        impl Visitor<'_> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("null, a 64-bit integer, a float or a string")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E: de::Error>(self) -> Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
                Ok(Value::Integer(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
                i64::try_from(v).map(Value::Integer).map_err(E::custom)
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
                Ok(Value::Real(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
                Ok(Value::Text(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
                Ok(Value::Text(v))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Real(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("42", Value::Integer(42))]
    #[case("-7", Value::Integer(-7))]
    #[case("2.5", Value::Real(2.5))]
    #[case("NULL", Value::Null)]
    #[case("null", Value::Null)]
    #[case("Le Wagon", Value::Text("Le Wagon".into()))]
    #[case("007", Value::Text("007".into()))]
    #[case("-01.5", Value::Text("-01.5".into()))]
    #[case("0", Value::Integer(0))]
    #[case("0.5", Value::Real(0.5))]
    #[case("NaN", Value::Text("NaN".into()))]
    #[case("inf", Value::Text("inf".into()))]
    #[case("infinity", Value::Text("infinity".into()))]
    fn parse_literal_picks_narrowest_variant(#[case] input: &str, #[case] expected: Value) {
        assert_eq!(Value::parse_literal(input), expected);
    }

    #[test]
    fn option_none_is_null() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::Text("x".into()));
    }

    #[test]
    fn json_scalars_map_to_variants() {
        let values: Vec<Value> = serde_json::from_str(r#"[null, 22, 1.5, "Rafa"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                Value::Null,
                Value::Integer(22),
                Value::Real(1.5),
                Value::Text("Rafa".into())
            ]
        );
    }

    #[test]
    fn json_booleans_are_rejected() {
        assert!(serde_json::from_str::<Value>("true").is_err());
        assert!(serde_json::from_str::<Value>("[1]").is_err());
    }

    #[test]
    fn integers_beyond_i64_are_rejected_not_widened() {
        assert!(serde_json::from_str::<Value>("18446744073709551615").is_err());
        assert!(serde_json::from_str::<Value>("9223372036854775808").is_err());
        assert_eq!(
            serde_json::from_str::<Value>("9223372036854775807").unwrap(),
            Value::Integer(i64::MAX)
        );
        assert_eq!(
            serde_json::from_str::<Value>("-9223372036854775808").unwrap(),
            Value::Integer(i64::MIN)
        );
    }

    #[test]
    fn display_renders_raw_text() {
        assert_eq!(Value::Text("abc".into()).to_string(), "abc");
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(Value::Integer(3).to_string(), "3");
    }
}
