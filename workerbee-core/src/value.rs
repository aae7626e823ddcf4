//! Values bound to `?` placeholders

use serde::{Deserialize, Serialize};

/// A parameter value for a WHERE condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Bool(bool),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    String(String),
    Bytes(Vec<u8>),
    Json(serde_json::Value),
    /// Bound as a single parameter, e.g. `id IN (?)`
    Array(Vec<Value>),
}

impl Value {
    /// Placeholder text this value takes in the statement
    pub fn placeholder(&self) -> &'static str {
        match self {
            Value::Array(_) => "(?)",
            _ => "?",
        }
    }
}

macro_rules! value_from {
    ($($source:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$source> for Value {
                fn from(val: $source) -> Self {
                    Value::$variant(val)
                }
            }
        )*
    };
}

value_from! {
    bool => Bool,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    String => String,
    Vec<u8> => Bytes,
    serde_json::Value => Json,
}

// Unary operators (`IS NULL`) still carry a value; `()` fills that slot.
impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<&str> for Value {
    fn from(val: &str) -> Self {
        Value::String(val.to_owned())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(vals: Vec<T>) -> Self {
        Value::Array(vals.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

#[cfg(feature = "uuid-support")]
impl From<uuid::Uuid> for Value {
    fn from(val: uuid::Uuid) -> Self {
        Value::String(val.hyphenated().to_string())
    }
}

// Hive-style literals: `yyyy-MM-dd` and `yyyy-MM-dd HH:mm:ss[.fff]`.
#[cfg(feature = "datetime-support")]
impl From<chrono::NaiveDate> for Value {
    fn from(val: chrono::NaiveDate) -> Self {
        Value::String(val.format("%Y-%m-%d").to_string())
    }
}

#[cfg(feature = "datetime-support")]
impl From<chrono::NaiveDateTime> for Value {
    fn from(val: chrono::NaiveDateTime) -> Self {
        Value::String(val.format("%Y-%m-%d %H:%M:%S%.f").to_string())
    }
}

#[cfg(feature = "decimal-support")]
impl From<rust_decimal::Decimal> for Value {
    fn from(val: rust_decimal::Decimal) -> Self {
        Value::String(val.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_conversions() {
        assert_eq!(Value::from(42i32), Value::I32(42));
        assert_eq!(Value::from(7i64), Value::I64(7));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from("hello"), Value::String("hello".to_string()));
        assert_eq!(Value::from(()), Value::Null);
    }

    #[test]
    fn test_list_becomes_one_array_parameter() {
        let value = Value::from(vec!["a", "b"]);
        assert_eq!(
            value,
            Value::Array(vec![Value::from("a"), Value::from("b")])
        );
        assert_eq!(value.placeholder(), "(?)");
    }

    #[test]
    fn test_scalar_placeholder() {
        assert_eq!(Value::I32(1).placeholder(), "?");
        assert_eq!(Value::Null.placeholder(), "?");
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(Some(42i32)), Value::I32(42));
        assert_eq!(Value::from(None::<&str>), Value::Null);
    }

    #[cfg(feature = "datetime-support")]
    #[test]
    fn test_date_conversion() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(Value::from(date), Value::String("2024-01-15".to_string()));
    }
}
