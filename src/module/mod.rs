//! Single-function modules and the capability traits they implement.
//!
//! Each capability is its own trait; a composite device picks the set it
//! supports. No trait carries default method bodies: every transition goes
//! through the implementor's own `set_state`.

#[macro_use]
mod macros;

mod base;
mod fax;
mod printer;
mod scanner;

pub use base::{ModuleCore, ModuleKind};
pub use fax::Fax;
pub use printer::Printer;
pub use scanner::Scanner;

use crate::core::OperatingState;
use crate::document::{Document, DocumentFormat};

/// Power control shared by every device.
pub trait PoweredDevice {
    fn state(&self) -> OperatingState;

    /// Unconditional state assignment.
    fn set_state(&mut self, state: OperatingState);

    fn power_on(&mut self);

    fn power_off(&mut self);

    fn standby_on(&mut self);

    fn standby_off(&mut self);

    /// Number of times the device was switched on from off.
    fn counter(&self) -> u64;
}

/// Prints documents while on; silently ignores the call otherwise.
pub trait PrintCapable: PoweredDevice {
    fn print(&mut self, document: &Document);

    fn print_counter(&self) -> u64;
}

/// Scans documents while on.
///
/// Returns `None` when the scan was gated out.
pub trait ScanCapable: PoweredDevice {
    fn scan(&mut self, format: DocumentFormat) -> Option<Document>;

    fn scan_counter(&self) -> u64;
}

/// Sends faxes while on; silently ignores the call otherwise.
pub trait FaxCapable: PoweredDevice {
    fn send_fax(&mut self, document: &Document, fax_number: &str);

    fn fax_counter(&self) -> u64;
}
