//! Probe orchestration.
//!
//! Ties the pieces together: resolve the target module, scan it for the
//! byte signature, attach the entry handler at the first match, and run
//! the per-firing extraction pipeline. At most one site is ever
//! instrumented; a scan miss leaves the component inert for the run.

use std::sync::{Arc, Mutex};

use tracing::{debug, info, warn};

use crate::config::ProbeConfig;
use crate::error::Result;
use crate::extract::ExtractionPolicy;
use crate::host::{CallContext, CallProbe, MemoryScanner, ModuleDirectory, Register};
use crate::resolve::resolve_module;
use crate::signature::Signature;
use crate::sink::RecordSink;

/// Result of an installation attempt. A missing pattern is an absence of
/// effect, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed { address: u64 },
    PatternNotFound,
}

#[derive(Debug)]
pub struct SignatureProbe<S> {
    config: ProbeConfig,
    signature: Signature,
    sink: Arc<S>,
}

impl<S: RecordSink + 'static> SignatureProbe<S> {
    /// Compile the configured signature and wrap the sink.
    pub fn new(config: ProbeConfig, sink: S) -> Result<Self> {
        let signature = Signature::parse(&config.pattern)?;
        Ok(Self {
            config,
            signature,
            sink: Arc::new(sink),
        })
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Resolve, scan and attach.
    ///
    /// The scan stops at the first match. Handler firings are serviced by
    /// the host from then on; nothing that happens inside a firing can
    /// escape back to it.
    pub fn install<D, M, P>(
        &self,
        directory: &D,
        scanner: &M,
        interceptor: &P,
    ) -> Result<InstallOutcome>
    where
        D: ModuleDirectory,
        M: MemoryScanner,
        P: CallProbe,
    {
        let modules = directory.modules()?;
        let module = resolve_module(&modules, &self.config.module)
            .inspect_err(|e| warn!("module resolution failed: {}", e))?;
        debug!(
            "resolved module {} (base {:#x}, size {:#x})",
            module.name, module.base, module.size
        );

        let Some(address) = scanner.find_first(module.base, module.size, self.signature.bytes())?
        else {
            warn!(
                "signature {} not found in {}; probe is inert for this run",
                self.signature, module.name
            );
            return Ok(InstallOutcome::PatternNotFound);
        };

        let state = Arc::new(FiringState {
            guard: self.config.guard_register,
            pointer: self.config.pointer_register,
            policy: self.config.extraction.clone(),
            last_pointer: Mutex::new(None),
            sink: Arc::clone(&self.sink),
        });
        interceptor.attach(address, Box::new(move |ctx| state.on_call(ctx)))?;

        info!("probe installed at {:#x}", address);
        Ok(InstallOutcome::Installed { address })
    }
}

/// Shared per-site state behind the installed handler.
struct FiringState<S> {
    guard: Register,
    pointer: Register,
    policy: ExtractionPolicy,
    /// Last qualifying base pointer. Lock covers the whole
    /// check-and-update so concurrent firings cannot race it.
    last_pointer: Mutex<Option<u64>>,
    sink: Arc<S>,
}

impl<S: RecordSink> FiringState<S> {
    fn on_call(&self, ctx: &dyn CallContext) {
        // Qualifying calls carry zero in the guard register's lower 32
        // bits; everything else is a different sub-case of the hooked
        // function and is skipped.
        if ctx.register(self.guard) as u32 != 0 {
            return;
        }

        let base = ctx.register(self.pointer);

        if self.policy.dedup {
            let mut last = self.last_pointer.lock().unwrap_or_else(|e| e.into_inner());
            if *last == Some(base) {
                return;
            }
            // Updated before extraction: a firing that later faults still
            // consumes the dedup slot.
            *last = Some(base);
        }

        match self.policy.extract(base, ctx) {
            Ok(record) => self.sink.emit(&record),
            Err(fault) => debug!("firing dropped: {}", fault),
        }
    }
}
