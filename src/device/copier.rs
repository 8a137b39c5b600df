use super::coordinator::Coordinator;
use crate::activity::ActivityLog;

/// Printer and scanner sharing one mechanism.
///
/// # Example
///
/// ```rust
/// use office_sim::activity::ActivityLog;
/// use office_sim::device::Copier;
/// use office_sim::module::{PoweredDevice, PrintCapable, ScanCapable};
///
/// let (log, sink) = ActivityLog::memory();
/// let mut copier = Copier::with_activity_log(log);
/// copier.power_on();
/// copier.scan_and_print();
///
/// assert_eq!(copier.scan_counter(), 1);
/// assert_eq!(copier.print_counter(), 1);
/// assert!(sink.contains("Print: JPGScan0.jpg"));
/// ```
#[derive(Debug)]
pub struct Copier {
    inner: Coordinator,
}

impl Copier {
    pub fn new() -> Self {
        Self::with_activity_log(ActivityLog::stdout())
    }

    pub fn with_activity_log(log: ActivityLog) -> Self {
        Self {
            inner: Coordinator::new(false, log),
        }
    }
}

impl Default for Copier {
    fn default() -> Self {
        Self::new()
    }
}

coordinated_device!(Copier);
