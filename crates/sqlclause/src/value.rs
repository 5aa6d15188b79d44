//! Bound parameter values.
//!
//! [`Value`] is what every leaf expression hands to the [`Builder`](crate::Builder)
//! for parameterization. The renderer only ever looks at a value to decide
//! three things: whether it is NULL, whether it is a list, and whether it is
//! a string (for LIKE). Everything else is opaque to rendering.
//!
//! `Value` implements [`ToSql`], so the parameter list collected by a
//! [`SqlBuilder`](crate::SqlBuilder) can be passed straight to tokio-postgres.

use bytes::BytesMut;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::error::Error;
use tokio_postgres::types::{IsNull, ToSql, Type};
use uuid::Uuid;

/// A single bound parameter value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// SQL NULL. Also what `None` converts into.
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Uuid(Uuid),
    Timestamp(DateTime<Utc>),
    Json(serde_json::Value),
    #[cfg(feature = "rust_decimal")]
    Decimal(rust_decimal::Decimal),
    #[cfg(feature = "time")]
    OffsetDateTime(time::OffsetDateTime),
    /// A list of values. Eq/Neq render lists as `IN (...)` / `NOT IN (...)`.
    List(Vec<Value>),
}

impl Value {
    /// Wrap raw bytes (BYTEA).
    pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(data.into())
    }

    /// Build a list value from anything convertible.
    pub fn list<T: Into<Value>>(values: impl IntoIterator<Item = T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }

    /// Whether this value renders as SQL NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Whether this value is a list.
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// The string payload, if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The elements, if this is a list value.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(values) => Some(values),
            _ => None,
        }
    }

    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Bytes(_) => "bytes",
            Value::Uuid(_) => "uuid",
            Value::Timestamp(_) => "timestamp",
            Value::Json(_) => "json",
            #[cfg(feature = "rust_decimal")]
            Value::Decimal(_) => "decimal",
            #[cfg(feature = "time")]
            Value::OffsetDateTime(_) => "offset_datetime",
            Value::List(_) => "list",
        }
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(v as $target)
                }
            }
        )*
    };
}

impl_from_int!(Int, i64: i8, i16, i32, i64, isize);
impl_from_int!(UInt, u64: u8, u16, u32, u64, usize);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v as f64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Text(v.clone())
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Uuid(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Timestamp(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Json(v)
    }
}

#[cfg(feature = "rust_decimal")]
impl From<rust_decimal::Decimal> for Value {
    fn from(v: rust_decimal::Decimal) -> Self {
        Value::Decimal(v)
    }
}

#[cfg(feature = "time")]
impl From<time::OffsetDateTime> for Value {
    fn from(v: time::OffsetDateTime) -> Self {
        Value::OffsetDateTime(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::list(values)
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(values: &[T]) -> Self {
        Value::list(values.iter().cloned())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(values: [T; N]) -> Self {
        Value::list(values)
    }
}

// ─── ToSql ──────────────────────────────────────────────────────────────────

impl ToSql for Value {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        match self {
            Value::Null => Ok(IsNull::Yes),
            Value::Bool(v) => v.to_sql(ty, out),
            Value::Int(v) => encode_int(*v, ty, out),
            Value::UInt(v) => encode_int(i64::try_from(*v)?, ty, out),
            Value::Float(v) => match *ty {
                Type::FLOAT4 => (*v as f32).to_sql(ty, out),
                _ => v.to_sql(ty, out),
            },
            Value::Text(v) => v.to_sql(ty, out),
            Value::Bytes(v) => v.to_sql(ty, out),
            Value::Uuid(v) => v.to_sql(ty, out),
            Value::Timestamp(v) => v.to_sql(ty, out),
            Value::Json(v) => v.to_sql(ty, out),
            #[cfg(feature = "rust_decimal")]
            Value::Decimal(v) => v.to_sql(ty, out),
            #[cfg(feature = "time")]
            Value::OffsetDateTime(v) => v.to_sql(ty, out),
            Value::List(values) => values.to_sql(ty, out),
        }
    }

    fn accepts(_ty: &Type) -> bool {
        // The concrete variant decides at encode time.
        true
    }

    tokio_postgres::types::to_sql_checked!();
}

/// Narrow an integer to the column's width so INT2/INT4 parameters encode correctly.
fn encode_int(
    v: i64,
    ty: &Type,
    out: &mut BytesMut,
) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
    match *ty {
        Type::INT2 => i16::try_from(v)?.to_sql(ty, out),
        Type::INT4 => i32::try_from(v)?.to_sql(ty, out),
        _ => v.to_sql(ty, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_none_is_null() {
        let v: Value = Option::<i32>::None.into();
        assert!(v.is_null());
        let v: Value = Some("x").into();
        assert_eq!(v, Value::Text("x".into()));
    }

    #[test]
    fn test_vec_becomes_list() {
        let v: Value = vec![1i32, 2, 3].into();
        assert_eq!(
            v.as_list(),
            Some(&[Value::Int(1), Value::Int(2), Value::Int(3)][..])
        );
        let v: Value = ["a", "b"].into();
        assert_eq!(v.kind(), "list");
    }

    #[test]
    fn test_scalar_kinds() {
        assert_eq!(Value::from(7u32), Value::UInt(7));
        assert_eq!(Value::from(-7i8), Value::Int(-7));
        assert_eq!(Value::from(true).kind(), "bool");
        assert_eq!(Value::from("abc").as_str(), Some("abc"));
        assert_eq!(Value::from(1.5f64).as_str(), None);
    }

    #[test]
    fn test_to_sql_null() {
        let mut out = BytesMut::new();
        let is_null = Value::Null.to_sql(&Type::INT4, &mut out).unwrap();
        assert!(matches!(is_null, IsNull::Yes));
        assert!(out.is_empty());
    }

    #[test]
    fn test_to_sql_narrows_ints() {
        let mut out = BytesMut::new();
        Value::Int(5).to_sql(&Type::INT4, &mut out).unwrap();
        assert_eq!(&out[..], &5i32.to_be_bytes());

        let mut out = BytesMut::new();
        assert!(Value::Int(i64::MAX).to_sql(&Type::INT2, &mut out).is_err());
    }

    #[cfg(feature = "rust_decimal")]
    #[test]
    fn test_decimal_encodes_as_numeric() {
        let v = Value::from(rust_decimal::Decimal::new(1234, 2));
        assert_eq!(v.kind(), "decimal");
        let mut out = BytesMut::new();
        v.to_sql(&Type::NUMERIC, &mut out).unwrap();
        assert!(!out.is_empty());
    }

    #[test]
    fn test_serialize_untagged() {
        let v = Value::list(vec![Value::Int(1), Value::Text("a".into()), Value::Null]);
        assert_eq!(serde_json::to_string(&v).unwrap(), r#"[1,"a",null]"#);
    }
}
