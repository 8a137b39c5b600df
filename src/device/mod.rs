//! Composite devices built from single-function modules.
//!
//! - [`Copier`]: printer + scanner
//! - [`MultifunctionalDevice`]: printer + scanner + fax
//!
//! Both forward to their modules through one coordination policy: using the
//! printer rests the scanner and vice versa, each rests after a fixed batch
//! ([`PRINT_BATCH_LIMIT`], [`SCAN_BATCH_LIMIT`]), and manual standby blocks
//! all operations. Refused calls are silent no-ops.

#[macro_use]
mod macros;

mod coordinator;
mod copier;
mod multifunction;
mod report;

pub use coordinator::{PRINT_BATCH_LIMIT, SCAN_BATCH_LIMIT};
pub use copier::Copier;
pub use multifunction::MultifunctionalDevice;
pub use report::{DeviceReport, DeviceSnapshot, ModuleSnapshot};
