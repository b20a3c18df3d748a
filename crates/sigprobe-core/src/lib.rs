//! # sigprobe-core
//!
//! Core library for the sigprobe status-effect tracer.
//!
//! This crate provides:
//! - Capability traits for the instrumentation host (module enumeration,
//!   signature scanning, call interception)
//! - Byte signature parsing and module resolution
//! - A configurable field-extraction policy (offset layout, sentinel
//!   filtering, pointer dedup)
//! - Probe orchestration and fire-and-forget record sinks
//!
//! The library never talks to a concrete process itself; a host adapter
//! supplies the [`ModuleDirectory`], [`MemoryScanner`] and [`CallProbe`]
//! capabilities, and the probe supplies only configuration and the per-call
//! extraction logic.

pub mod config;
pub mod error;
pub mod extract;
pub mod host;
pub mod image;
pub mod probe;
pub mod resolve;
pub mod signature;
pub mod sink;

pub use config::{ProbeConfig, load_config, presets, save_config};
pub use error::{Error, Result};
pub use extract::{ABSENT_SENTINEL, ExtractionPolicy, FieldLayout, Record};
pub use host::{
    CallContext, CallHandler, CallProbe, MemoryScanner, ModuleDirectory, ModuleInfo, ReadFault,
    ReadMemory, Register,
};
pub use image::MemoryImage;
pub use probe::{InstallOutcome, SignatureProbe};
pub use resolve::resolve_module;
pub use signature::Signature;
pub use sink::{JsonLineSink, RecordSink};
