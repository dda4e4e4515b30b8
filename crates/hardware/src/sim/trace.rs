//! Recorded access traces.
//!
//! A trace is a JSON array of accesses replayed in order:
//!
//! ```json
//! [
//!   { "op": "read",  "width": "byte", "addr": 0 },
//!   { "op": "write", "width": "word", "addr": 5888 }
//! ]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::data::{AccessKind, AccessWidth};
use crate::common::error::SimError;

use super::AccessSink;

/// One recorded access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEntry {
    /// Read or write.
    pub op: AccessKind,
    /// Operand width.
    pub width: AccessWidth,
    /// Byte address.
    pub addr: u64,
}

/// An ordered sequence of accesses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    entries: Vec<TraceEntry>,
}

impl Trace {
    /// Wraps already-built entries.
    pub const fn new(entries: Vec<TraceEntry>) -> Self {
        Self { entries }
    }

    /// Parses a trace from a JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Json`] if the document is malformed.
    pub fn from_json_str(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON trace file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be read and
    /// [`SimError::Json`] if it is malformed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let trace = Self::from_json_str(&text)?;
        tracing::info!(path = %path.display(), accesses = trace.len(), "trace loaded");
        Ok(trace)
    }

    /// The recorded accesses in order.
    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    /// Number of recorded accesses.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the trace has no accesses.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replays every access into `sink` in order.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first access the sink rejects.
    pub fn replay<S: AccessSink + ?Sized>(&self, sink: &mut S) -> Result<(), SimError> {
        for entry in &self.entries {
            sink.access(entry.op, entry.width, entry.addr)?;
        }
        Ok(())
    }
}

impl FromIterator<TraceEntry> for Trace {
    fn from_iter<I: IntoIterator<Item = TraceEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
