use super::{ModuleCore, ModuleKind, ScanCapable};
use crate::activity::ActivityLog;
use crate::document::{Document, DocumentFormat};

/// Standalone scanner.
///
/// Scanned filenames embed the format and the number of scans done so far,
/// so they are unique per scanner: `PDFScan0.pdf`, `PDFScan1.pdf`, ...
#[derive(Debug)]
pub struct Scanner {
    core: ModuleCore,
}

powered_module!(Scanner);

impl Scanner {
    pub fn new() -> Self {
        Self::with_activity_log(ActivityLog::stdout())
    }

    pub fn with_activity_log(log: ActivityLog) -> Self {
        Self {
            core: ModuleCore::new(ModuleKind::Scanner, log),
        }
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanCapable for Scanner {
    fn scan(&mut self, format: DocumentFormat) -> Option<Document> {
        if !self.core.is_ready() {
            tracing::debug!(state = %self.core.state(), %format, "scan skipped");
            return None;
        }
        let document = Document::scanned(format, self.core.operation_count());
        self.core
            .log()
            .operation(format!("Scan: {}", document.filename()));
        self.core.record_operation();
        Some(document)
    }

    fn scan_counter(&self) -> u64 {
        self.core.operation_count()
    }
}
