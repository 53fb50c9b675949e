//! Error types for parsing, lookup, and value coercion.

use thiserror::Error;

use crate::value::Kind;

/// Errors surfaced by the argument store and the value type.
///
/// All variants are fatal at the point of detection — there is no internal
/// retry and no partial result. Callers that want a fallback use the
/// `get_or`/`free_or` accessors instead of handling `Lookup`.
#[derive(Debug, Error)]
pub enum ArgError {
    /// A named key or free position was requested but is not present.
    #[error("{what} '{key}' not found")]
    Lookup { what: &'static str, key: String },

    /// A value could not satisfy a requested conversion, or an arithmetic
    /// operator combined incompatible variants.
    #[error("cannot coerce {from} to {to}")]
    Coercion { from: Kind, to: &'static str },

    /// An identifier was set as both a flag and a named argument.
    #[error("'{name}' cannot be both a flag and a named argument")]
    NameCollision { name: String },

    /// `pwd`/`progname` requested on a store that was not built from a
    /// process argument vector.
    #[error("{field} is not set (store was not built from an argument vector)")]
    AuxUnset { field: &'static str },
}
