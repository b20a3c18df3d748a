//! Record delivery to the controlling process.
//!
//! Delivery is fire-and-forget: a sink that cannot serialize or write
//! drops the record and the probe moves on. Nothing downstream is ever
//! allowed to disturb the instrumented process.

use std::io::{self, Write};
use std::sync::Mutex;

use tracing::debug;

use crate::extract::Record;

/// Consumer of extracted records. One call per qualifying probe firing.
pub trait RecordSink: Send + Sync {
    fn emit(&self, record: &Record);
}

/// NDJSON sink: one record per line on the wrapped writer.
pub struct JsonLineSink<W: Write> {
    writer: Mutex<W>,
}

impl<W: Write> JsonLineSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }
}

impl JsonLineSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> RecordSink for JsonLineSink<W> {
    fn emit(&self, record: &Record) {
        let line = match serde_json::to_string(record) {
            Ok(line) => line,
            Err(e) => {
                debug!("record dropped: serialization failed: {}", e);
                return;
            }
        };

        let mut writer = self.writer.lock().unwrap_or_else(|e| e.into_inner());
        if writeln!(writer, "{}", line).and_then(|_| writer.flush()).is_err() {
            debug!("record dropped: sink write failed");
        }
    }
}
