//! Literal operand values.
//!
//! Conditions keep their literals as [`Value`] so descriptions can be compared and
//! inspected before compilation. The compiler binds them through [`Value::as_param`],
//! which exposes each variant as a `tokio_postgres` parameter.
//!
//! Integers are stored as `i64`. Types that can exceed that range (`u64`,
//! `usize`, `i128`) convert through `TryFrom` instead of `From`:
//!
//! ```
//! use pgcond::{CondResult, StatementContext, Value, WhereStatement};
//!
//! fn by_id(id: u64) -> CondResult<WhereStatement> {
//!     Ok(WhereStatement::new().where_("id").is(Value::try_from(id)?))
//! }
//!
//! assert!(by_id(7).is_ok());
//! assert!(by_id(u64::MAX).unwrap_err().is_out_of_range());
//! ```

use crate::error::CondError;
use chrono::{DateTime, Utc};
use tokio_postgres::types::ToSql;
use uuid::Uuid;

static NULL_PARAM: Option<i32> = None;

/// A literal destined for parameter binding.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL NULL
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Uuid(Uuid),
    Timestamp(DateTime<Utc>),
    Json(serde_json::Value),
}

impl Value {
    /// Borrow the inner string if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Check if this value is SQL NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// View this value as a tokio-postgres parameter.
    pub fn as_param(&self) -> &(dyn ToSql + Sync) {
        match self {
            Value::Null => &NULL_PARAM,
            Value::Bool(v) => v,
            Value::Int(v) => v,
            Value::Float(v) => v,
            Value::Text(v) => v,
            Value::Uuid(v) => v,
            Value::Timestamp(v) => v,
            Value::Json(v) => v,
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_try_from_int {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for Value {
                type Error = CondError;

                fn try_from(v: $t) -> Result<Self, Self::Error> {
                    i64::try_from(v)
                        .map(Value::Int)
                        .map_err(|_| CondError::out_of_range(v))
                }
            }
        )*
    };
}

impl_try_from_int!(u64, usize, i128, u128, isize);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
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

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BytesMut;
    use tokio_postgres::types::{IsNull, Type};

    #[test]
    fn converts_rust_scalars() {
        assert_eq!(Value::from(18), Value::Int(18));
        assert_eq!(Value::from(7u32), Value::Int(7));
        assert_eq!(Value::from(1.5f64), Value::Float(1.5));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from("a"), Value::Text("a".into()));
        assert_eq!(Value::from(String::from("b")), Value::Text("b".into()));
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::Text("x".into()));
    }

    #[test]
    fn as_text_only_for_text() {
        assert_eq!(Value::from("users.id").as_text(), Some("users.id"));
        assert_eq!(Value::from(3).as_text(), None);
        assert!(Value::Null.is_null());
    }

    #[test]
    fn as_param_encodes_literals() {
        let mut buf = BytesMut::new();
        let is_null = Value::Int(42)
            .as_param()
            .to_sql_checked(&Type::INT8, &mut buf)
            .unwrap();
        assert!(matches!(is_null, IsNull::No));
        assert_eq!(&buf[..], &42i64.to_be_bytes());

        let mut buf = BytesMut::new();
        let is_null = Value::Null
            .as_param()
            .to_sql_checked(&Type::INT4, &mut buf)
            .unwrap();
        assert!(matches!(is_null, IsNull::Yes));

        let mut buf = BytesMut::new();
        Value::from("abc")
            .as_param()
            .to_sql_checked(&Type::TEXT, &mut buf)
            .unwrap();
        assert_eq!(&buf[..], b"abc");
    }

    #[test]
    fn wide_integers_convert_when_in_range() {
        assert_eq!(Value::try_from(42u64), Ok(Value::Int(42)));
        assert_eq!(Value::try_from(7usize), Ok(Value::Int(7)));
        assert_eq!(Value::try_from(-3i128), Ok(Value::Int(-3)));
        assert_eq!(
            Value::try_from(i64::MAX as u64),
            Ok(Value::Int(i64::MAX))
        );
    }

    #[test]
    fn wide_integers_out_of_range_are_rejected() {
        let err = Value::try_from(u64::MAX).unwrap_err();
        assert_eq!(err, CondError::OutOfRange(u64::MAX.to_string()));
        assert!(err.is_out_of_range());
        assert_eq!(
            err.to_string(),
            "Integer 18446744073709551615 out of range for BIGINT"
        );

        assert!(Value::try_from(i128::MIN).is_err());
        assert!(Value::try_from(u128::MAX).is_err());
    }

    #[test]
    fn as_param_encodes_typed_literals() {
        let id = Uuid::from_u128(0x0123_4567_89ab_cdef_0123_4567_89ab_cdef);
        let epoch = DateTime::<Utc>::from_timestamp(0, 0).unwrap();

        let cases: Vec<(Value, Type, Vec<u8>)> = vec![
            (Value::Bool(true), Type::BOOL, vec![1]),
            (Value::Float(1.5), Type::FLOAT8, 1.5f64.to_be_bytes().to_vec()),
            (Value::Uuid(id), Type::UUID, id.as_bytes().to_vec()),
            // postgres timestamps count microseconds from 2000-01-01
            (
                Value::Timestamp(epoch),
                Type::TIMESTAMPTZ,
                (-946_684_800_000_000i64).to_be_bytes().to_vec(),
            ),
            (
                Value::Json(serde_json::json!({"k": 1})),
                Type::JSONB,
                b"\x01{\"k\":1}".to_vec(),
            ),
        ];

        for (value, ty, expected) in cases {
            let mut buf = BytesMut::new();
            let is_null = value
                .as_param()
                .to_sql_checked(&ty, &mut buf)
                .unwrap_or_else(|e| panic!("{value:?} as {ty}: {e}"));
            assert!(matches!(is_null, IsNull::No), "{value:?} as {ty}");
            assert_eq!(&buf[..], &expected[..], "{value:?} as {ty}");
        }
    }

    #[test]
    fn as_param_rejects_mismatched_type() {
        let mut buf = BytesMut::new();
        assert!(
            Value::Bool(true)
                .as_param()
                .to_sql_checked(&Type::TEXT, &mut buf)
                .is_err()
        );
    }
}
