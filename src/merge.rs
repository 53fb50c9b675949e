//! Merge — combine two argument stores under an overwrite policy.

use crate::error::ArgError;
use crate::store::ArgStore;

impl ArgStore {
    /// Merge `incoming` into `self`.
    ///
    /// * Named arguments are merged; on conflict the incoming value wins
    ///   only when `overwrite` is set.
    /// * Flags are unioned.
    /// * Free arguments are never merged element-wise — position is
    ///   significant. With `overwrite` the incoming free sequence replaces
    ///   this store's wholesale; without it, nothing happens.
    /// * `cwd`, `pwd`, and `progname` are replaced wholesale from
    ///   `incoming` only when `overwrite` is set.
    ///
    /// A flag/named collision in either direction is fatal regardless of
    /// `overwrite`.
    pub fn merge(&mut self, incoming: &ArgStore, overwrite: bool) -> Result<(), ArgError> {
        for (name, value) in &incoming.named {
            self.set_named(name, value.clone(), overwrite)?;
        }

        if overwrite {
            self.free = incoming.free.clone();
        }

        for flag in &incoming.flags {
            self.set_flag(flag)?;
        }

        if overwrite {
            self.cwd = incoming.cwd.clone();
            self.pwd = incoming.pwd.clone();
            self.progname = incoming.progname.clone();
        }

        Ok(())
    }
}
