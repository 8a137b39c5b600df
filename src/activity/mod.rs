//! Activity log: the human-readable lines every device emits.
//!
//! State changes and successful operations each produce exactly one line.
//! Lines go to an [`ActivitySink`]; production code writes to stdout and
//! tests capture into a [`MemorySink`].

mod sink;

pub use sink::{ActivitySink, MemorySink, StdoutSink};

use chrono::Local;
use std::sync::Arc;

/// Timestamp layout prefixed to operation lines.
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Cloneable handle to a shared sink.
///
/// A composite device hands clones of its log to every module it owns so
/// all lines land in one place.
#[derive(Clone)]
pub struct ActivityLog {
    sink: Arc<dyn ActivitySink>,
}

impl ActivityLog {
    pub fn new(sink: Arc<dyn ActivitySink>) -> Self {
        Self { sink }
    }

    /// Log writing to standard output.
    pub fn stdout() -> Self {
        Self::new(Arc::new(StdoutSink))
    }

    /// Log writing into a fresh in-memory buffer, returned alongside.
    pub fn memory() -> (Self, MemorySink) {
        let sink = MemorySink::default();
        (Self::new(Arc::new(sink.clone())), sink)
    }

    /// Emit one line verbatim.
    pub fn line(&self, line: impl AsRef<str>) {
        self.sink.write_line(line.as_ref());
    }

    /// Emit one operation line prefixed with the local time.
    pub fn operation(&self, line: impl AsRef<str>) {
        let stamp = Local::now().format(TIMESTAMP_FORMAT);
        self.sink.write_line(&format!("{stamp} {}", line.as_ref()));
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::stdout()
    }
}

impl std::fmt::Debug for ActivityLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivityLog").finish_non_exhaustive()
    }
}
