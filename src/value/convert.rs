//! Conversions out of [`Value`] — the coercion seam.

use crate::error::ArgError;
use crate::value::Value;

/// A primitive type a [`Value`] can be projected onto.
///
/// The numeric variants convert freely among themselves (widening and
/// narrowing follow the usual `as` semantics, bools read as 0/1); strings
/// convert only to `String`.
pub trait FromValue: Sized {
    /// Type name used in coercion error messages.
    const NAME: &'static str;

    fn from_value(value: &Value) -> Result<Self, ArgError>;
}

fn coercion<T: FromValue>(value: &Value) -> ArgError {
    ArgError::Coercion {
        from: value.kind(),
        to: T::NAME,
    }
}

impl FromValue for bool {
    const NAME: &'static str = "bool";

    fn from_value(value: &Value) -> Result<Self, ArgError> {
        match value {
            Value::Bool(b) => Ok(*b),
            Value::Int(i) => Ok(*i != 0),
            Value::Float(x) => Ok(*x != 0.0),
            Value::Str(_) => Err(coercion::<Self>(value)),
        }
    }
}

impl FromValue for i64 {
    const NAME: &'static str = "i64";

    fn from_value(value: &Value) -> Result<Self, ArgError> {
        match value {
            Value::Bool(b) => Ok(i64::from(*b)),
            Value::Int(i) => Ok(*i),
            Value::Float(x) => Ok(*x as i64),
            Value::Str(_) => Err(coercion::<Self>(value)),
        }
    }
}

impl FromValue for f64 {
    const NAME: &'static str = "f64";

    fn from_value(value: &Value) -> Result<Self, ArgError> {
        match value {
            Value::Bool(b) => Ok(f64::from(u8::from(*b))),
            Value::Int(i) => Ok(*i as f64),
            Value::Float(x) => Ok(*x),
            Value::Str(_) => Err(coercion::<Self>(value)),
        }
    }
}

impl FromValue for String {
    const NAME: &'static str = "String";

    fn from_value(value: &Value) -> Result<Self, ArgError> {
        match value {
            Value::Str(s) => Ok(s.clone()),
            _ => Err(coercion::<Self>(value)),
        }
    }
}
