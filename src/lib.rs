//! Office Sim: simulated office equipment with power-state control.
//!
//! Printers, scanners and faxes are modelled as single-function modules
//! with an operating state and counters. Copiers and multifunctional
//! devices compose modules and coordinate them: only one of printer and
//! scanner is active at a time, each rests in standby after a fixed batch,
//! and a manual standby override blocks every operation.
//!
//! Nothing here performs real I/O. Each state change and each successful
//! operation emits one human-readable line to an [`activity::ActivityLog`].
//! Operations never fail: a call made in the wrong state is a silent no-op
//! that leaves every counter unchanged.
//!
//! # Core Concepts
//!
//! - **State**: `OperatingState` {On, Off, Standby} via the `State` trait
//! - **Guards**: pure predicates that gate each module's operation
//! - **History**: per-module record of every state assignment
//! - **Capabilities**: `PoweredDevice`, `PrintCapable`, `ScanCapable`, `FaxCapable`
//!
//! # Example
//!
//! ```rust
//! use office_sim::activity::ActivityLog;
//! use office_sim::device::MultifunctionalDevice;
//! use office_sim::document::{Document, DocumentFormat};
//! use office_sim::module::{FaxCapable, PoweredDevice, PrintCapable, ScanCapable};
//!
//! let (log, sink) = ActivityLog::memory();
//! let mut xerox = MultifunctionalDevice::with_activity_log(log);
//! xerox.power_on();
//!
//! let doc = Document::new("aaa.pdf");
//! xerox.print(&doc);
//! let scanned = xerox.scan(DocumentFormat::Pdf);
//! assert_eq!(scanned.unwrap().filename(), "PDFScan0.pdf");
//!
//! xerox.send_fax(&doc, "123456789");
//! assert!(sink.contains("Send Fax: aaa.pdf to 123456789"));
//! assert_eq!(xerox.print_counter(), 1);
//! assert_eq!(xerox.fax_counter(), 1);
//! ```

pub mod activity;
pub mod audit;
pub mod core;
pub mod device;
pub mod document;
pub mod module;

// Re-export commonly used types
pub use activity::ActivityLog;
pub use crate::core::{Guard, OperatingState, State, StateHistory, StateTransition};
pub use device::{Copier, DeviceReport, MultifunctionalDevice};
pub use document::{Document, DocumentFormat};
pub use module::{Fax, FaxCapable, PoweredDevice, PrintCapable, Printer, ScanCapable, Scanner};
