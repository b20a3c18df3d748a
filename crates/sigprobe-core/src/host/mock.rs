//! Mock instrumentation host for tests.
//!
//! Provides module enumeration, buffer-backed scanning, an attach recorder
//! and a way to drive firings with chosen register state, so probe tests
//! can run the whole pipeline without a live process.

use std::collections::HashMap;
use std::sync::Mutex;

use memchr::memmem;

use super::{
    CallContext, CallHandler, CallProbe, MemoryScanner, ModuleDirectory, ModuleInfo, ReadFault,
    ReadMemory, Register,
};
use crate::error::Result;

struct Region {
    base: u64,
    bytes: Vec<u8>,
}

impl Region {
    fn end(&self) -> u64 {
        self.base + self.bytes.len() as u64
    }
}

#[derive(Default)]
pub struct MockHostBuilder {
    modules: Vec<ModuleInfo>,
    regions: Vec<Region>,
    faults: Vec<u64>,
}

impl MockHostBuilder {
    pub fn module(mut self, name: &str, base: u64, size: u64) -> Self {
        self.modules.push(ModuleInfo::new(name, base, size));
        self
    }

    pub fn region(mut self, base: u64, bytes: &[u8]) -> Self {
        self.regions.push(Region {
            base,
            bytes: bytes.to_vec(),
        });
        self
    }

    /// Writes `value` as a little-endian u32 region at `address`.
    pub fn word(self, address: u64, value: u32) -> Self {
        self.region(address, &value.to_le_bytes())
    }

    /// Marks a single address as unreadable even if a region covers it.
    pub fn fault_at(mut self, address: u64) -> Self {
        self.faults.push(address);
        self
    }

    pub fn build(self) -> MockHost {
        MockHost {
            modules: self.modules,
            regions: self.regions,
            faults: self.faults,
            attached: Mutex::new(Vec::new()),
        }
    }
}

pub struct MockHost {
    modules: Vec<ModuleInfo>,
    regions: Vec<Region>,
    faults: Vec<u64>,
    attached: Mutex<Vec<(u64, CallHandler)>>,
}

impl MockHost {
    pub fn builder() -> MockHostBuilder {
        MockHostBuilder::default()
    }

    pub fn attach_count(&self) -> usize {
        self.attached.lock().unwrap().len()
    }

    pub fn attached_address(&self) -> Option<u64> {
        self.attached.lock().unwrap().first().map(|(addr, _)| *addr)
    }

    /// Drive one firing of every attached handler with the given registers.
    pub fn fire(&self, registers: &[(Register, u64)]) {
        let context = MockContext {
            host: self,
            registers: registers.iter().copied().collect(),
        };

        let attached = self.attached.lock().unwrap();
        for (_, handler) in attached.iter() {
            handler(&context);
        }
    }

    fn read_word(&self, address: u64) -> std::result::Result<u32, ReadFault> {
        if self.faults.contains(&address) {
            return Err(ReadFault { address });
        }

        for region in &self.regions {
            if address >= region.base && address.saturating_add(4) <= region.end() {
                let offset = (address - region.base) as usize;
                let word: [u8; 4] = region.bytes[offset..offset + 4]
                    .try_into()
                    .map_err(|_| ReadFault { address })?;
                return Ok(u32::from_le_bytes(word));
            }
        }

        Err(ReadFault { address })
    }
}

impl ModuleDirectory for MockHost {
    fn modules(&self) -> Result<Vec<ModuleInfo>> {
        Ok(self.modules.clone())
    }
}

impl MemoryScanner for MockHost {
    fn find_first(&self, base: u64, size: u64, pattern: &[u8]) -> Result<Option<u64>> {
        let end = base.saturating_add(size);
        for region in &self.regions {
            let start = base.max(region.base);
            let stop = end.min(region.end());
            if start >= stop {
                continue;
            }

            let slice = &region.bytes[(start - region.base) as usize..(stop - region.base) as usize];
            if let Some(pos) = memmem::find(slice, pattern) {
                return Ok(Some(start + pos as u64));
            }
        }
        Ok(None)
    }
}

impl CallProbe for MockHost {
    fn attach(&self, address: u64, handler: CallHandler) -> Result<()> {
        self.attached.lock().unwrap().push((address, handler));
        Ok(())
    }
}

struct MockContext<'a> {
    host: &'a MockHost,
    registers: HashMap<Register, u64>,
}

impl ReadMemory for MockContext<'_> {
    fn read_u32(&self, address: u64) -> std::result::Result<u32, ReadFault> {
        self.host.read_word(address)
    }
}

impl CallContext for MockContext<'_> {
    fn register(&self, reg: Register) -> u64 {
        self.registers.get(&reg).copied().unwrap_or(0)
    }
}
