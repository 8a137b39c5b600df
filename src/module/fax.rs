use super::{FaxCapable, ModuleCore, ModuleKind};
use crate::activity::ActivityLog;
use crate::document::Document;

/// Standalone fax.
#[derive(Debug)]
pub struct Fax {
    core: ModuleCore,
}

powered_module!(Fax);

impl Fax {
    pub fn new() -> Self {
        Self::with_activity_log(ActivityLog::stdout())
    }

    pub fn with_activity_log(log: ActivityLog) -> Self {
        Self {
            core: ModuleCore::new(ModuleKind::Fax, log),
        }
    }
}

impl Default for Fax {
    fn default() -> Self {
        Self::new()
    }
}

impl FaxCapable for Fax {
    fn send_fax(&mut self, document: &Document, fax_number: &str) {
        if !self.core.is_ready() {
            tracing::debug!(state = %self.core.state(), fax_number, "fax skipped");
            return;
        }
        self.core.log().operation(format!(
            "Send Fax: {} to {}",
            document.filename(),
            fax_number
        ));
        self.core.record_operation();
    }

    fn fax_counter(&self) -> u64 {
        self.core.operation_count()
    }
}
