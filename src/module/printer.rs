use super::{ModuleCore, ModuleKind, PrintCapable};
use crate::activity::ActivityLog;
use crate::document::Document;

/// Standalone printer.
#[derive(Debug)]
pub struct Printer {
    core: ModuleCore,
}

powered_module!(Printer);

impl Printer {
    pub fn new() -> Self {
        Self::with_activity_log(ActivityLog::stdout())
    }

    pub fn with_activity_log(log: ActivityLog) -> Self {
        Self {
            core: ModuleCore::new(ModuleKind::Printer, log),
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl PrintCapable for Printer {
    fn print(&mut self, document: &Document) {
        if !self.core.is_ready() {
            tracing::debug!(state = %self.core.state(), file = document.filename(), "print skipped");
            return;
        }
        self.core
            .log()
            .operation(format!("Print: {}", document.filename()));
        self.core.record_operation();
    }

    fn print_counter(&self) -> u64 {
        self.core.operation_count()
    }
}
