//! Argument store — the structured result of parsing.
//!
//! An [`ArgStore`] owns three collections (named arguments, position-keyed
//! free arguments, flags) plus the auxiliary fields captured at
//! construction time. Names are unique across the named map and the flag
//! list — an identifier may never be both.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::ArgError;
use crate::parser;
use crate::value::{FromValue, Value};

/// Parsed command-line arguments, queryable without prior registration.
#[derive(Debug, Clone, Default)]
pub struct ArgStore {
    pub(crate) named: BTreeMap<String, Value>,
    pub(crate) free: Vec<Value>,
    pub(crate) flags: Vec<String>,
    pub(crate) cwd: PathBuf,
    pub(crate) pwd: Option<PathBuf>,
    pub(crate) progname: Option<String>,
}

/// Current working directory, captured once at store construction.
fn current_dir_or_dot() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

impl ArgStore {
    fn empty(cwd: PathBuf) -> Self {
        ArgStore {
            cwd,
            ..ArgStore::default()
        }
    }

    /// Build from the real process argument vector.
    ///
    /// The only construction surface that sets `pwd` and `progname`, since
    /// they are extracted from `argv[0]`.
    pub fn from_env() -> Result<Self, ArgError> {
        Self::from_argv(std::env::args())
    }

    /// Build from an explicit argument vector, `argv[0]` included.
    ///
    /// Testable seam for [`ArgStore::from_env`].
    pub fn from_argv<I>(argv: I) -> Result<Self, ArgError>
    where
        I: IntoIterator<Item = String>,
    {
        let cwd = current_dir_or_dot();
        let mut argv = argv.into_iter();
        let mut store = Self::empty(cwd);

        if let Some(argv0) = argv.next() {
            let (pwd, progname) = split_argv0(&argv0, &store.cwd);
            store.pwd = Some(pwd);
            store.progname = Some(progname.to_string());
        }

        let tokens: Vec<String> = argv.collect();
        parser::parse_into(&mut store, &tokens)?;
        Ok(store)
    }

    /// Build from a plain token slice — no `argv[0]` slot, so no `pwd` or
    /// `progname`.
    pub fn from_tokens(tokens: &[String]) -> Result<Self, ArgError> {
        let mut store = Self::empty(current_dir_or_dot());
        parser::parse_into(&mut store, tokens)?;
        Ok(store)
    }

    // === const getters ===

    /// Named argument by name; fails with [`ArgError::Lookup`] if absent.
    pub fn get(&self, name: &str) -> Result<&Value, ArgError> {
        self.named.get(name).ok_or_else(|| ArgError::Lookup {
            what: "named argument",
            key: name.to_string(),
        })
    }

    /// Free argument by position; fails with [`ArgError::Lookup`] if out of
    /// range.
    pub fn free(&self, pos: usize) -> Result<&Value, ArgError> {
        self.free.get(pos).ok_or_else(|| ArgError::Lookup {
            what: "free argument",
            key: pos.to_string(),
        })
    }

    /// Named argument converted to `T`, or `default` if the name is absent.
    ///
    /// Fails only when the argument is present but not convertible.
    pub fn get_or<T: FromValue>(&self, name: &str, default: T) -> Result<T, ArgError> {
        match self.named.get(name) {
            Some(value) => value.cast(),
            None => Ok(default),
        }
    }

    /// Free argument converted to `T`, or `default` if the position is out
    /// of range.
    pub fn free_or<T: FromValue>(&self, pos: usize, default: T) -> Result<T, ArgError> {
        match self.free.get(pos) {
            Some(value) => value.cast(),
            None => Ok(default),
        }
    }

    /// True if `name` is set as a flag or as a named argument.
    pub fn is_set(&self, name: &str) -> bool {
        self.has_flag(name) || self.named.contains_key(name)
    }

    /// True if `name` is set as a flag specifically.
    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.iter().any(|flag| flag == name)
    }

    /// True if there is a free argument at `pos`.
    pub fn is_free_set(&self, pos: usize) -> bool {
        pos < self.free.len()
    }

    /// Number of free arguments.
    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    /// Current working directory; always set.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Program working directory; set only by the argv constructors.
    pub fn pwd(&self) -> Result<&Path, ArgError> {
        self.pwd
            .as_deref()
            .ok_or(ArgError::AuxUnset { field: "pwd" })
    }

    /// Program name; set only by the argv constructors.
    pub fn progname(&self) -> Result<&str, ArgError> {
        self.progname
            .as_deref()
            .ok_or(ArgError::AuxUnset { field: "progname" })
    }

    // === modifiers ===

    /// Insert a named argument only if `name` is not already set.
    ///
    /// Collision with an existing flag of the same name is fatal.
    pub fn set_default(&mut self, name: &str, value: impl Into<Value>) -> Result<(), ArgError> {
        if !self.named.contains_key(name) {
            self.set_named(name, value.into(), true)?;
        }
        Ok(())
    }

    /// Register a flag.
    ///
    /// Re-setting an existing flag is a warned no-op; collision with a
    /// named argument of the same name is fatal.
    pub fn set_flag(&mut self, name: &str) -> Result<(), ArgError> {
        if self.has_flag(name) {
            tracing::warn!(name, "setting flag a second time has no effect");
            return Ok(());
        }
        if self.named.contains_key(name) {
            return Err(ArgError::NameCollision {
                name: name.to_string(),
            });
        }
        self.flags.push(name.to_string());
        Ok(())
    }

    /// Insert or (when `overwrite` is set) replace a named argument.
    ///
    /// Overwriting an existing value is warned but not an error; a flag of
    /// the same name is always fatal.
    pub(crate) fn set_named(
        &mut self,
        name: &str,
        value: Value,
        overwrite: bool,
    ) -> Result<(), ArgError> {
        if let Some(existing) = self.named.get_mut(name) {
            if overwrite {
                tracing::warn!(name, old = %existing, new = %value, "overwriting named argument");
                *existing = value;
            }
            return Ok(());
        }
        if self.has_flag(name) {
            return Err(ArgError::NameCollision {
                name: name.to_string(),
            });
        }
        self.named.insert(name.to_string(), value);
        Ok(())
    }

    pub(crate) fn push_free(&mut self, value: Value) {
        self.free.push(value);
    }
}

/// Split `argv[0]` into the program working directory and program name.
///
/// `dir/prog` yields `(cwd/dir, prog)`; a bare `prog` yields `(cwd, prog)`.
fn split_argv0<'a>(argv0: &'a str, cwd: &Path) -> (PathBuf, &'a str) {
    match argv0.rfind('/') {
        Some(pos) => (cwd.join(&argv0[..pos]), &argv0[pos + 1..]),
        None => (cwd.to_path_buf(), argv0),
    }
}

impl FromStr for ArgStore {
    type Err = ArgError;

    /// Parse a whitespace-delimited command line. No quoting support.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<String> = s.split_whitespace().map(String::from).collect();
        Self::from_tokens(&tokens)
    }
}

impl fmt::Display for ArgStore {
    /// Diagnostic dump: free, named (`name <tab> value`), flags, auxiliary.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=======ArgStore=======")?;
        writeln!(f, "free_args:")?;
        for value in &self.free {
            writeln!(f, "    {value}")?;
        }
        writeln!(f, "named_args:")?;
        for (name, value) in &self.named {
            writeln!(f, "    {name} \t{value}")?;
        }
        writeln!(f, "flags:")?;
        for flag in &self.flags {
            writeln!(f, "    {flag}")?;
        }
        writeln!(f, "special member:")?;
        writeln!(f, "    cwd \t{}", self.cwd.display())?;
        writeln!(
            f,
            "    pwd \t{}",
            self.pwd.as_deref().unwrap_or(Path::new("")).display()
        )?;
        write!(
            f,
            "    progname \t{}",
            self.progname.as_deref().unwrap_or("")
        )
    }
}
