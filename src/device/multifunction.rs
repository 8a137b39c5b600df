use super::coordinator::Coordinator;
use crate::activity::ActivityLog;
use crate::document::Document;
use crate::module::{Fax, FaxCapable};

/// Printer, scanner and fax in one housing.
///
/// Faxing stays outside the printer/scanner exclusion: it only requires the
/// fax module to be powered and manual standby to be off.
#[derive(Debug)]
pub struct MultifunctionalDevice {
    inner: Coordinator,
}

impl MultifunctionalDevice {
    pub fn new() -> Self {
        Self::with_activity_log(ActivityLog::stdout())
    }

    pub fn with_activity_log(log: ActivityLog) -> Self {
        Self {
            inner: Coordinator::new(true, log),
        }
    }

    pub fn fax(&self) -> Option<&Fax> {
        self.inner.fax()
    }
}

impl Default for MultifunctionalDevice {
    fn default() -> Self {
        Self::new()
    }
}

coordinated_device!(MultifunctionalDevice);

impl FaxCapable for MultifunctionalDevice {
    fn send_fax(&mut self, document: &Document, fax_number: &str) {
        self.inner.send_fax(document, fax_number);
    }

    fn fax_counter(&self) -> u64 {
        self.inner.fax_counter().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::MemorySink;
    use crate::core::OperatingState;
    use crate::document::DocumentFormat;
    use crate::module::{PoweredDevice, PrintCapable, ScanCapable};

    fn device() -> (MultifunctionalDevice, MemorySink) {
        let (log, sink) = ActivityLog::memory();
        (MultifunctionalDevice::with_activity_log(log), sink)
    }

    #[test]
    fn print_when_on() {
        let (mut device, sink) = device();
        device.power_on();
        device.print(&Document::new("test.pdf"));

        assert!(sink.contains("Print: test.pdf"));
        assert_eq!(device.print_counter(), 1);
    }

    #[test]
    fn fax_after_power_on() {
        let (mut device, sink) = device();
        device.power_on();
        device.send_fax(&Document::new("test.pdf"), "123456789");

        assert!(sink.contains("Send Fax: test.pdf to 123456789"));
        assert_eq!(device.fax_counter(), 1);
    }

    #[test]
    fn fax_does_not_touch_printer_or_scanner() {
        let (mut device, _) = device();
        device.power_on();
        device.print(&Document::new("a.pdf"));
        device.send_fax(&Document::new("a.pdf"), "555");

        assert_eq!(device.printer().core().state(), OperatingState::On);
        assert_eq!(device.scanner().core().state(), OperatingState::Standby);
        assert_eq!(device.fax_counter(), 1);
    }

    #[test]
    fn fax_refused_when_never_powered() {
        let (mut device, sink) = device();
        device.power_off();
        device.send_fax(&Document::new("test.pdf"), "123456789");

        assert!(!sink.contains("Send Fax"));
        assert_eq!(device.fax_counter(), 0);
    }

    #[test]
    fn fax_refused_in_manual_standby() {
        let (mut device, sink) = device();
        device.power_on();
        device.standby_on();
        device.send_fax(&Document::new("test.pdf"), "123456789");

        assert!(!sink.contains("Send Fax"));
        assert_eq!(device.fax_counter(), 0);
        assert_eq!(device.state(), OperatingState::Standby);
    }

    #[test]
    fn standby_off_resumes_operations() {
        let (mut device, _) = device();
        device.power_on();
        device.standby_on();
        assert!(device.scan(DocumentFormat::Pdf).is_none());

        device.standby_off();
        assert!(!device.is_manual_standby());
        assert_eq!(device.state(), OperatingState::On);
        assert_eq!(
            device.scan(DocumentFormat::Pdf).map(|d| d.filename().to_string()),
            Some("PDFScan0.pdf".to_string())
        );
    }

    #[test]
    fn counter_sums_module_activations() {
        let (mut device, _) = device();
        device.power_on();
        device.power_on();
        assert_eq!(device.counter(), 3);

        device.standby_on();
        device.standby_off();
        assert_eq!(device.counter(), 3);

        device.power_off();
        device.power_on();
        assert_eq!(device.counter(), 6);
    }
}
