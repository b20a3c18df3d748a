//! Field extraction policy.
//!
//! The two deployed probe variants differ only in four parameters: the
//! offset layout, whether sentinel values are filtered, whether the base
//! pointer is deduplicated, and the wire shape. One policy covers both.

use serde::{Deserialize, Serialize};

use crate::host::{ReadFault, ReadMemory};

/// Raw value the target writes for "slot unused". Filtered, never emitted.
pub const ABSENT_SENTINEL: u32 = 0xFFFF_FFFF;

/// Offset layout relative to the extraction base pointer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldLayout {
    /// Plain offset list, emitted as one `raw_entries` array plus the
    /// base pointer itself.
    Flat { offsets: Vec<u64> },
    /// Paired buff/debuff offset lists, emitted as two named arrays.
    Grouped { buff: Vec<u64>, debuff: Vec<u64> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionPolicy {
    pub layout: FieldLayout,
    /// Drop fields whose raw value equals [`ABSENT_SENTINEL`].
    #[serde(default)]
    pub sentinel_filter: bool,
    /// Skip the firing entirely when the base pointer is unchanged from
    /// the previous qualifying call.
    #[serde(default)]
    pub dedup: bool,
}

/// One extracted message, built fresh per qualifying firing and handed to
/// the sink immediately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Grouped { buff: Vec<u32>, debuff: Vec<u32> },
    Flat { ptr: String, raw_entries: Vec<u32> },
}

impl ExtractionPolicy {
    /// Read every configured field from `base` and build a [`Record`].
    ///
    /// All-or-nothing: the first unreadable field aborts the whole firing
    /// and nothing is emitted for it.
    pub fn extract<M: ReadMemory + ?Sized>(&self, base: u64, mem: &M) -> Result<Record, ReadFault> {
        match &self.layout {
            FieldLayout::Grouped { buff, debuff } => {
                let mut buff_values = Vec::with_capacity(buff.len());
                let mut debuff_values = Vec::with_capacity(debuff.len());

                // Interleaved read order, matching the instrumented site's
                // access pattern: buff[i] then debuff[i].
                for i in 0..buff.len().max(debuff.len()) {
                    if let Some(offset) = buff.get(i) {
                        buff_values.push(mem.read_u32(base.wrapping_add(*offset))?);
                    }
                    if let Some(offset) = debuff.get(i) {
                        debuff_values.push(mem.read_u32(base.wrapping_add(*offset))?);
                    }
                }

                if self.sentinel_filter {
                    buff_values.retain(|value| *value != ABSENT_SENTINEL);
                    debuff_values.retain(|value| *value != ABSENT_SENTINEL);
                }

                Ok(Record::Grouped {
                    buff: buff_values,
                    debuff: debuff_values,
                })
            }
            FieldLayout::Flat { offsets } => {
                let mut entries = Vec::with_capacity(offsets.len());
                for offset in offsets {
                    entries.push(mem.read_u32(base.wrapping_add(*offset))?);
                }

                if self.sentinel_filter {
                    entries.retain(|value| *value != ABSENT_SENTINEL);
                }

                Ok(Record::Flat {
                    ptr: format!("{:#x}", base),
                    raw_entries: entries,
                })
            }
        }
    }
}
