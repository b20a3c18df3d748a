//! Target module resolution.
//!
//! The host enumerates modules in whatever order it pleases; nothing here
//! may depend on that order. A missing target is an explicit error rather
//! than a silent fallback to some arbitrary module, since scanning the
//! wrong image would instrument the wrong code without any symptom.

use crate::error::{Error, Result};
use crate::host::ModuleInfo;

/// Find the module whose name matches `name` case-insensitively.
pub fn resolve_module<'a>(modules: &'a [ModuleInfo], name: &str) -> Result<&'a ModuleInfo> {
    modules
        .iter()
        .find(|module| module.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| Error::ModuleNotFound(name.to_string()))
}
