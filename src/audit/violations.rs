//! Broken coordination invariants.

use crate::core::OperatingState;
use crate::module::ModuleKind;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvariantViolation {
    #[error("Manual standby is set but the device reports '{reported}'")]
    StandbyNotReported { reported: OperatingState },

    #[error("Manual standby is set but the {module} module is on")]
    ModuleOnDuringStandby { module: ModuleKind },

    #[error("{module} batch counter {count} reached its limit {limit}")]
    BatchLimitReached {
        module: ModuleKind,
        count: u32,
        limit: u32,
    },

    #[error("Device reports on but the {module} module is '{state}'")]
    ModuleNotOn {
        module: ModuleKind,
        state: OperatingState,
    },

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}
