//! Read-only views of a composite device.

use crate::core::OperatingState;
use crate::module::ModuleKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregated counters of a composite device.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceReport {
    pub state: OperatingState,
    /// Sum of module activations
    pub counter: u64,
    pub print_counter: u64,
    pub scan_counter: u64,
    /// Absent for devices without a fax module
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fax_counter: Option<u64>,
}

/// One counter per line, in the order the demo prints them.
impl fmt::Display for DeviceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.counter)?;
        writeln!(f, "{}", self.print_counter)?;
        write!(f, "{}", self.scan_counter)?;
        if let Some(fax) = self.fax_counter {
            write!(f, "\n{fax}")?;
        }
        Ok(())
    }
}

/// Module state as seen by the invariant audit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSnapshot {
    pub kind: ModuleKind,
    pub state: OperatingState,
    pub batch_count: u32,
    /// `None` for modules without auto-standby
    pub batch_limit: Option<u32>,
}

/// Device state captured at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSnapshot {
    pub reported: OperatingState,
    pub manual_standby: bool,
    pub modules: Vec<ModuleSnapshot>,
}
