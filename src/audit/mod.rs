//! Invariant audit for composite devices.
//!
//! Uses Stillwater's `Validation` so one audit run reports every broken
//! invariant instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use office_sim::activity::ActivityLog;
//! use office_sim::audit::AuditRules;
//! use office_sim::device::MultifunctionalDevice;
//! use office_sim::module::PoweredDevice;
//!
//! let (log, _sink) = ActivityLog::memory();
//! let mut device = MultifunctionalDevice::with_activity_log(log);
//! device.power_on();
//! device.standby_on();
//!
//! let result = AuditRules::standard().enforce(&device.snapshot());
//! assert!(result.is_success());
//! ```

pub mod rules;
pub mod violations;

pub use rules::{AuditCheck, AuditResult, AuditRules};
pub use violations::InvariantViolation;
