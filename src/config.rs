//! Config-file loading — token streams read from disk.
//!
//! A config file is nothing special: its whole contents are one
//! whitespace-delimited command line. The file is parsed into a scratch
//! store and merged under the usual policy, so everything the grammar
//! allows on the command line works in a file too.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::error::ArgError;
use crate::store::ArgStore;

/// Errors that can occur when loading an argument file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read argument file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ArgError),
}

impl ArgStore {
    /// Parse a whole file as a token stream.
    ///
    /// Like the string constructor, the result carries no `pwd` or
    /// `progname`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(content.parse::<ArgStore>()?)
    }

    /// Parse `path` and merge the result into this store.
    ///
    /// See [`ArgStore::merge`] for the `overwrite` policy.
    pub fn merge_file(&mut self, path: impl AsRef<Path>, overwrite: bool) -> Result<(), ConfigError> {
        let incoming = ArgStore::from_file(path)?;
        self.merge(&incoming, overwrite)?;
        Ok(())
    }
}
