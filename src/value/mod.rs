//! Weak-typed values — the dynamic payload of every parsed argument.
//!
//! A [`Value`] holds exactly one of four primitive variants at a time, and
//! the active variant may change across its lifetime: plain reassignment
//! swaps the type, arithmetic promotes it, and conversion happens at the
//! call site rather than at parse time.

mod convert;
mod ops;

pub use convert::FromValue;

use std::fmt;

use crate::error::ArgError;

/// A dynamically-typed argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

/// The active variant of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Bool,
    Int,
    Float,
    Str,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::Str => "string",
        };
        f.write_str(name)
    }
}

impl Value {
    /// Build a value from a raw token, inferring the most specific type.
    ///
    /// A token that parses completely as an integer becomes `Int`; failing
    /// that, a token that parses completely as a float becomes `Float`;
    /// everything else stays `Str`. Partial numeric prefixes (`10x`) are
    /// not numbers.
    pub fn infer(token: &str) -> Value {
        if let Ok(int) = token.parse::<i64>() {
            return Value::Int(int);
        }
        if let Ok(float) = token.parse::<f64>() {
            return Value::Float(float);
        }
        Value::Str(token.to_string())
    }

    /// The active variant.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::Str(_) => Kind::Str,
        }
    }

    /// Project the value onto a concrete primitive type.
    ///
    /// Bool/Int/Float convert into each other; `Str` converts only to
    /// `String`. Every other pairing fails with [`ArgError::Coercion`].
    pub fn cast<T: FromValue>(&self) -> Result<T, ArgError> {
        T::from_value(self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}
