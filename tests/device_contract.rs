//! Activity-line contract of modules and composite devices, checked on
//! captured output.

use office_sim::activity::{ActivityLog, MemorySink};
use office_sim::core::OperatingState;
use office_sim::device::{Copier, MultifunctionalDevice};
use office_sim::document::{Document, DocumentFormat};
use office_sim::module::{
    Fax, FaxCapable, PoweredDevice, PrintCapable, Printer, ScanCapable, Scanner,
};

fn capture() -> (ActivityLog, MemorySink) {
    ActivityLog::memory()
}

fn position(lines: &[String], needle: &str) -> Option<usize> {
    lines.iter().position(|line| line.contains(needle))
}

#[test]
fn printer_print_device_on() {
    let (log, sink) = capture();
    let mut printer = Printer::with_activity_log(log);
    printer.power_on();

    printer.print(&Document::new("test.pdf"));

    assert!(sink.contains("Print: test.pdf"));
    assert_eq!(printer.print_counter(), 1);
}

#[test]
fn printer_print_device_off() {
    let (log, sink) = capture();
    let mut printer = Printer::with_activity_log(log);
    printer.power_off();

    printer.print(&Document::new("test.pdf"));

    assert!(!sink.contains("Print"));
    assert_eq!(printer.print_counter(), 0);
}

#[test]
fn scanner_scan_device_on() {
    let (log, sink) = capture();
    let mut scanner = Scanner::with_activity_log(log);
    scanner.power_on();

    let doc = scanner.scan(DocumentFormat::Pdf);

    assert!(sink.contains("Scan: PDFScan0.pdf"));
    assert_eq!(doc.map(|d| d.format()), Some(DocumentFormat::Pdf));
    assert_eq!(scanner.scan_counter(), 1);
}

#[test]
fn scanner_scan_device_off() {
    let (log, sink) = capture();
    let mut scanner = Scanner::with_activity_log(log);
    scanner.power_off();

    assert!(scanner.scan(DocumentFormat::Pdf).is_none());
    assert!(!sink.contains("Scan"));
    assert_eq!(scanner.scan_counter(), 0);
}

#[test]
fn fax_send_device_on() {
    let (log, sink) = capture();
    let mut fax = Fax::with_activity_log(log);
    fax.power_on();

    fax.send_fax(&Document::new("test.pdf"), "123456789");

    assert!(sink.contains("Send Fax: test.pdf to 123456789"));
    assert_eq!(fax.fax_counter(), 1);
}

#[test]
fn module_state_changes_are_logged() {
    let (log, sink) = capture();
    let mut scanner = Scanner::with_activity_log(log);

    scanner.power_on();
    scanner.standby_on();
    scanner.standby_off();
    scanner.power_off();

    assert_eq!(
        sink.lines(),
        vec![
            "Scanner state changed to: on",
            "Device is on ...",
            "Scanner state changed to: standby",
            "Scanner state changed to: on",
            "Scanner state changed to: off",
            "... Device is off !",
        ]
    );
    assert_eq!(scanner.counter(), 1);
}

#[test]
fn multifunctional_print_device_on() {
    let (log, sink) = capture();
    let mut device = MultifunctionalDevice::with_activity_log(log);
    device.power_on();

    device.print(&Document::new("test.pdf"));

    assert!(sink.contains("Print: test.pdf"));
    assert_eq!(device.print_counter(), 1);
}

#[test]
fn multifunctional_scan_and_print_device_on() {
    let (log, sink) = capture();
    let mut device = MultifunctionalDevice::with_activity_log(log);
    device.power_on();
    sink.clear();

    let scanned = device.scan_and_print();

    assert!(sink.contains("Scan"));
    assert!(sink.contains("Print"));
    assert_eq!(scanned.map(|d| d.filename().to_string()), Some("JPGScan0.jpg".to_string()));
    assert_eq!(device.scan_counter(), 1);
    assert_eq!(device.print_counter(), 1);
}

#[test]
fn multifunctional_send_fax_device_off() {
    let (log, sink) = capture();
    let mut device = MultifunctionalDevice::with_activity_log(log);
    device.power_off();

    device.send_fax(&Document::new("test.pdf"), "123456789");

    assert!(!sink.contains("Send Fax"));
    assert_eq!(device.fax_counter(), 0);
}

#[test]
fn fourth_print_wakes_printer_first() {
    let (log, sink) = capture();
    let mut device = MultifunctionalDevice::with_activity_log(log);
    device.power_on();

    for name in ["1.pdf", "2.pdf", "3.pdf"] {
        device.print(&Document::new(name));
    }
    assert!(sink.contains("Printer module entering standby after 3 prints."));
    assert_eq!(device.printer().core().state(), OperatingState::Standby);

    sink.clear();
    device.print(&Document::new("4.pdf"));

    let lines = sink.lines();
    let wake = position(&lines, "Printer module waking up from standby...").unwrap();
    let print = position(&lines, "Print: 4.pdf").unwrap();
    assert!(wake < print);
}

#[test]
fn second_scan_rests_scanner() {
    let (log, sink) = capture();
    let mut device = Copier::with_activity_log(log);
    device.power_on();

    let first = device.scan(DocumentFormat::Pdf).unwrap();
    assert_eq!(device.scanner().core().state(), OperatingState::On);
    let second = device.scan(DocumentFormat::Pdf).unwrap();

    assert_eq!(first.filename(), "PDFScan0.pdf");
    assert_eq!(second.filename(), "PDFScan1.pdf");
    assert_eq!(device.scanner().core().state(), OperatingState::Standby);
    assert!(sink.contains("Scanner module entering standby after 2 scans."));

    sink.clear();
    device.scan(DocumentFormat::Pdf);
    assert!(sink.contains("Scanner module waking up from standby..."));
}

#[test]
fn manual_standby_blocks_operations() {
    let (log, sink) = capture();
    let mut device = MultifunctionalDevice::with_activity_log(log);
    device.power_on();
    device.standby_on();
    let snapshot = device.snapshot();
    sink.clear();

    device.print(&Document::new("test.pdf"));
    let scanned = device.scan(DocumentFormat::Pdf);
    let both = device.scan_and_print();

    assert!(scanned.is_none());
    assert!(both.is_none());
    assert_eq!(device.print_counter(), 0);
    assert_eq!(device.scan_counter(), 0);
    assert_eq!(device.snapshot(), snapshot);
    assert_eq!(device.state(), OperatingState::Standby);
    assert!(sink.lines().is_empty());
}

#[test]
fn aggregate_state_needs_every_module_on() {
    let (log, _sink) = capture();
    let mut device = MultifunctionalDevice::with_activity_log(log);
    assert_eq!(device.state(), OperatingState::Off);

    device.power_on();
    assert_eq!(device.state(), OperatingState::On);

    device.scan(DocumentFormat::Jpg);
    assert_eq!(device.state(), OperatingState::Off);

    device.standby_off();
    assert_eq!(device.state(), OperatingState::On);
}

#[test]
fn power_on_twice_keeps_counters() {
    let (log, _sink) = capture();
    let mut device = MultifunctionalDevice::with_activity_log(log);
    device.power_on();
    device.print(&Document::new("a.pdf"));
    let report = device.report();

    device.power_on();

    assert_eq!(device.report().counter, report.counter);
    assert_eq!(device.report().print_counter, report.print_counter);
}

#[test]
fn demo_sequence_counts() {
    let (log, sink) = capture();
    let mut xerox = MultifunctionalDevice::with_activity_log(log);
    xerox.power_on();
    let doc1 = Document::new("aaa.pdf");
    xerox.print(&doc1);
    xerox.scan(DocumentFormat::default());
    xerox.scan_and_print();
    xerox.send_fax(&doc1, "123456789");

    let report = xerox.report();
    assert_eq!(report.counter, 3);
    assert_eq!(report.print_counter, 2);
    assert_eq!(report.scan_counter, 2);
    assert_eq!(report.fax_counter, Some(1));
    assert!(sink.contains("Scan: JPGScan0.jpg"));
    assert!(sink.contains("Print: JPGScan1.jpg"));
    assert!(sink.contains("Send Fax: aaa.pdf to 123456789"));
    assert!(xerox.audit().is_success());
}
