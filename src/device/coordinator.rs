//! Coordination policy shared by every composite device.
//!
//! A composite owns one printer, one scanner and optionally one fax. The
//! printer and scanner share one mechanism: using one forces the other to
//! standby, and each drops back to standby after a fixed batch of
//! consecutive operations. A manual standby flag suppresses every
//! operation until power or standby is explicitly changed again.

use super::report::{DeviceReport, DeviceSnapshot, ModuleSnapshot};
use crate::activity::ActivityLog;
use crate::core::{OperatingState, State};
use crate::document::{Document, DocumentFormat};
use crate::module::{
    FaxCapable, Fax, ModuleCore, PrintCapable, Printer, ScanCapable, Scanner,
};

/// Consecutive prints after which the printer module rests in standby.
pub const PRINT_BATCH_LIMIT: u32 = 3;

/// Consecutive scans after which the scanner module rests in standby.
pub const SCAN_BATCH_LIMIT: u32 = 2;

#[derive(Debug)]
pub(crate) struct Coordinator {
    printer: Printer,
    scanner: Scanner,
    fax: Option<Fax>,
    manual_standby: bool,
    log: ActivityLog,
}

impl Coordinator {
    pub(crate) fn new(with_fax: bool, log: ActivityLog) -> Self {
        Self {
            printer: Printer::with_activity_log(log.clone()),
            scanner: Scanner::with_activity_log(log.clone()),
            fax: with_fax.then(|| Fax::with_activity_log(log.clone())),
            manual_standby: false,
            log,
        }
    }

    fn modules(&self) -> impl Iterator<Item = &ModuleCore> {
        [
            Some(self.printer.core()),
            Some(self.scanner.core()),
            self.fax.as_ref().map(Fax::core),
        ]
        .into_iter()
        .flatten()
    }

    fn modules_mut(&mut self) -> impl Iterator<Item = &mut ModuleCore> {
        [
            Some(self.printer.core_mut()),
            Some(self.scanner.core_mut()),
            self.fax.as_mut().map(Fax::core_mut),
        ]
        .into_iter()
        .flatten()
    }

    fn assign_all(&mut self, state: OperatingState) {
        for module in self.modules_mut() {
            module.set_state(state);
        }
    }

    /// Standby while the manual flag is set, On only when every module is
    /// on, Off otherwise.
    pub(crate) fn state(&self) -> OperatingState {
        if self.manual_standby {
            return OperatingState::Standby;
        }
        if self.modules().all(|m| m.state() == OperatingState::On) {
            OperatingState::On
        } else {
            OperatingState::Off
        }
    }

    /// At least one module is powered; operations are refused otherwise.
    fn is_powered(&self) -> bool {
        self.modules().any(|m| m.state().is_powered())
    }

    /// Reason an operation must be refused, if any.
    fn refusal(&self) -> Option<&'static str> {
        if self.manual_standby {
            Some("manual standby active")
        } else if !self.is_powered() {
            Some("device is off")
        } else {
            None
        }
    }

    pub(crate) fn is_manual_standby(&self) -> bool {
        self.manual_standby
    }

    pub(crate) fn power_on(&mut self) {
        self.assign_all(OperatingState::On);
        self.manual_standby = false;
        tracing::info!("device powered on");
        self.log.line("Device is on ...");
    }

    pub(crate) fn power_off(&mut self) {
        self.assign_all(OperatingState::Off);
        self.manual_standby = false;
        tracing::info!("device powered off");
        self.log.line("... Device is off !");
    }

    pub(crate) fn standby_on(&mut self) {
        self.manual_standby = true;
        self.assign_all(OperatingState::Standby);
    }

    pub(crate) fn standby_off(&mut self) {
        self.manual_standby = false;
        self.assign_all(OperatingState::On);
    }

    pub(crate) fn set_state(&mut self, state: OperatingState) {
        match state {
            OperatingState::Standby => self.manual_standby = true,
            OperatingState::On => self.manual_standby = false,
            OperatingState::Off => {}
        }
        self.assign_all(state);
    }

    pub(crate) fn print(&mut self, document: &Document) {
        if let Some(reason) = self.refusal() {
            tracing::debug!(reason, file = document.filename(), "print refused");
            return;
        }
        self.scanner.core_mut().set_state(OperatingState::Standby);
        self.printer.core_mut().wake();
        self.printer.print(document);
        self.printer.core_mut().advance_batch(PRINT_BATCH_LIMIT);
    }

    pub(crate) fn scan(&mut self, format: DocumentFormat) -> Option<Document> {
        if let Some(reason) = self.refusal() {
            tracing::debug!(reason, %format, "scan refused");
            return None;
        }
        self.printer.core_mut().set_state(OperatingState::Standby);
        self.scanner.core_mut().wake();
        let document = self.scanner.scan(format);
        self.scanner.core_mut().advance_batch(SCAN_BATCH_LIMIT);
        document
    }

    /// Scan an image and print it; each half is coordinated on its own.
    pub(crate) fn scan_and_print(&mut self) -> Option<Document> {
        let document = self.scan(DocumentFormat::Jpg)?;
        self.print(&document);
        Some(document)
    }

    /// Faxing leaves the printer and scanner alone and has no batch limit.
    /// It needs the fax module powered and no manual standby.
    pub(crate) fn send_fax(&mut self, document: &Document, fax_number: &str) {
        let manual_standby = self.manual_standby;
        let Some(fax) = self.fax.as_mut() else {
            return;
        };
        if manual_standby || !fax.core().state().is_powered() {
            tracing::debug!(
                manual_standby,
                state = %fax.core().state(),
                fax_number,
                "fax refused"
            );
            return;
        }
        fax.core_mut().wake();
        fax.send_fax(document, fax_number);
    }

    pub(crate) fn counter(&self) -> u64 {
        self.modules().map(ModuleCore::activation_count).sum()
    }

    pub(crate) fn print_counter(&self) -> u64 {
        self.printer.print_counter()
    }

    pub(crate) fn scan_counter(&self) -> u64 {
        self.scanner.scan_counter()
    }

    pub(crate) fn fax_counter(&self) -> Option<u64> {
        self.fax.as_ref().map(FaxCapable::fax_counter)
    }

    pub(crate) fn printer(&self) -> &Printer {
        &self.printer
    }

    pub(crate) fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    pub(crate) fn fax(&self) -> Option<&Fax> {
        self.fax.as_ref()
    }

    pub(crate) fn report(&self) -> DeviceReport {
        DeviceReport {
            state: self.state(),
            counter: self.counter(),
            print_counter: self.print_counter(),
            scan_counter: self.scan_counter(),
            fax_counter: self.fax_counter(),
        }
    }

    pub(crate) fn snapshot(&self) -> DeviceSnapshot {
        let limit = |module: &ModuleCore| match module.kind() {
            crate::module::ModuleKind::Printer => Some(PRINT_BATCH_LIMIT),
            crate::module::ModuleKind::Scanner => Some(SCAN_BATCH_LIMIT),
            crate::module::ModuleKind::Fax => None,
        };
        DeviceSnapshot {
            reported: self.state(),
            manual_standby: self.manual_standby,
            modules: self
                .modules()
                .map(|m| ModuleSnapshot {
                    kind: m.kind(),
                    state: m.state(),
                    batch_count: m.batch_count(),
                    batch_limit: limit(m),
                })
                .collect(),
        }
    }
}
