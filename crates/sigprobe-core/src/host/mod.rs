//! Capability traits supplied by the instrumentation host.
//!
//! The probe never talks to a concrete process directly. A host adapter
//! (live injector, offline image, test mock) provides three capabilities:
//! module enumeration, first-match signature scanning, and call
//! interception with register/context access.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use thiserror::Error;

use crate::error::Result;

#[cfg(test)]
pub mod mock;

/// A loaded module inside the target process, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleInfo {
    pub name: String,
    pub base: u64,
    pub size: u64,
}

impl ModuleInfo {
    pub fn new(name: impl Into<String>, base: u64, size: u64) -> Self {
        Self {
            name: name.into(),
            base,
            size,
        }
    }

    /// End of the module's address range (exclusive)
    pub fn end(&self) -> u64 {
        self.base.saturating_add(self.size)
    }
}

/// General-purpose register designator for the probed call context.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Register {
    Rax,
    Rbx,
    Rcx,
    Rdx,
    Rsi,
    Rdi,
    Rbp,
    Rsp,
    R8,
    R9,
    R10,
    R11,
    R12,
    R13,
    R14,
    R15,
}

/// A memory read that could not be serviced.
///
/// Raised per firing when the target address is unmapped or protected.
/// Never escalated beyond the firing that hit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unreadable memory at {address:#x}")]
pub struct ReadFault {
    pub address: u64,
}

/// Raw 32-bit memory reads against the target address space.
pub trait ReadMemory {
    fn read_u32(&self, address: u64) -> std::result::Result<u32, ReadFault>;
}

/// Read-only view of the intercepted call: register state plus memory access.
pub trait CallContext: ReadMemory {
    /// Full 64-bit value of the given register at the time of the call.
    fn register(&self, reg: Register) -> u64;
}

/// Enumerate the modules loaded in the target process.
pub trait ModuleDirectory {
    fn modules(&self) -> Result<Vec<ModuleInfo>>;
}

/// Find the first occurrence of a byte pattern in a memory range.
///
/// `Ok(None)` means the pattern is absent; only a failure to access the
/// range at all is an error.
pub trait MemoryScanner {
    fn find_first(&self, base: u64, size: u64, pattern: &[u8]) -> Result<Option<u64>>;
}

/// Handler invoked on each entry to the instrumented address.
///
/// Must be re-entrancy safe: hosts may deliver firings from multiple
/// execution contexts concurrently.
pub type CallHandler = Box<dyn Fn(&dyn CallContext) + Send + Sync>;

/// Install an entry probe at an address inside the target process.
pub trait CallProbe {
    fn attach(&self, address: u64, handler: CallHandler) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_register_parse_case_insensitive() {
        assert_eq!(Register::from_str("rdx").unwrap(), Register::Rdx);
        assert_eq!(Register::from_str("RDX").unwrap(), Register::Rdx);
        assert_eq!(Register::from_str("R8").unwrap(), Register::R8);
        assert!(Register::from_str("xmm0").is_err());
    }

    #[test]
    fn test_register_display_lowercase() {
        assert_eq!(Register::R8.to_string(), "r8");
        assert_eq!(Register::Rdx.to_string(), "rdx");
    }

    #[test]
    fn test_register_serde_roundtrip() {
        let json = serde_json::to_string(&Register::R8).unwrap();
        assert_eq!(json, "\"r8\"");
        let back: Register = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Register::R8);
    }

    #[test]
    fn test_module_end() {
        let module = ModuleInfo::new("target.exe", 0x1000, 0x2000);
        assert_eq!(module.end(), 0x3000);
    }
}
