//! A command-line argument parser that does not require registration.
//!
//! Nothing is declared up front. Raw tokens are classified on the fly into
//! free arguments, flags, and named key/value pairs:
//!
//! ```text
//! Raw tokens → Classify → Parse → ArgStore   (merge, file loading)
//! ```
//!
//! Values are weakly typed: a [`Value`] infers int/float/string from the
//! token text and coerces at the call site, so callers never pre-declare
//! types.
//!
//! ```
//! use anyargs::ArgStore;
//!
//! let store: ArgStore = "--mcs 20 --type=sim --slow -n10 free0".parse().unwrap();
//! assert_eq!(store.get_or("mcs", 0i64).unwrap(), 20);
//! assert!(store.has_flag("slow"));
//! assert_eq!(store.free_len(), 1);
//! ```

pub mod classifier;
pub mod config;
pub mod error;
mod merge;
mod parser;
pub mod store;
pub mod value;

pub use classifier::{classify, TokenKind};
pub use config::ConfigError;
pub use error::ArgError;
pub use store::ArgStore;
pub use value::{FromValue, Kind, Value};
