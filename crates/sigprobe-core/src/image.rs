//! Offline memory image.
//!
//! A byte buffer pinned at a base address, standing in for a live module.
//! Implements the directory and scanner capabilities so the resolution and
//! scanning pipeline can run against a dump file or a synthetic buffer,
//! without a host process anywhere near the tests or the CLI.

use memchr::memmem;

use crate::error::Result;
use crate::host::{MemoryScanner, ModuleDirectory, ModuleInfo, ReadFault, ReadMemory};

pub struct MemoryImage {
    name: String,
    base: u64,
    bytes: Vec<u8>,
}

impl MemoryImage {
    pub fn new(name: impl Into<String>, base: u64, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            base,
            bytes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    fn end(&self) -> u64 {
        self.base + self.size()
    }
}

impl ModuleDirectory for MemoryImage {
    fn modules(&self) -> Result<Vec<ModuleInfo>> {
        Ok(vec![ModuleInfo::new(
            self.name.clone(),
            self.base,
            self.size(),
        )])
    }
}

impl MemoryScanner for MemoryImage {
    fn find_first(&self, base: u64, size: u64, pattern: &[u8]) -> Result<Option<u64>> {
        // Intersect the requested range with what the image covers.
        let start = base.max(self.base);
        let end = base.saturating_add(size).min(self.end());
        if start >= end {
            return Ok(None);
        }

        let slice = &self.bytes[(start - self.base) as usize..(end - self.base) as usize];
        Ok(memmem::find(slice, pattern).map(|pos| start + pos as u64))
    }
}

impl ReadMemory for MemoryImage {
    fn read_u32(&self, address: u64) -> std::result::Result<u32, ReadFault> {
        if address < self.base || address.saturating_add(4) > self.end() {
            return Err(ReadFault { address });
        }

        let offset = (address - self.base) as usize;
        let word: [u8; 4] = self.bytes[offset..offset + 4]
            .try_into()
            .map_err(|_| ReadFault { address })?;
        Ok(u32::from_le_bytes(word))
    }
}
