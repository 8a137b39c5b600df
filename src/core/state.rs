//! Operating states shared by every simulated device.
//!
//! The `State` trait keeps state inspection pure. `OperatingState` is the
//! one concrete state set used by modules and composite devices.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::str::FromStr;
use thiserror::Error;

/// Trait for device states.
///
/// All methods are pure. Implementors are small value types that can be
/// copied into transition history and compared for gating.
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Label used in activity lines and diagnostics.
    fn name(&self) -> &str;

    /// Whether the state draws power (anything but fully off).
    ///
    /// Default implementation returns `true`.
    fn is_powered(&self) -> bool {
        true
    }
}

/// Power/operating state of a module or device.
///
/// Equality-comparable only; there is no ordering between states.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingState {
    On,
    #[default]
    Off,
    Standby,
}

impl State for OperatingState {
    fn name(&self) -> &str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Standby => "standby",
        }
    }

    fn is_powered(&self) -> bool {
        !matches!(self, Self::Off)
    }
}

impl Display for OperatingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when text does not name an operating state.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("unknown operating state '{0}', expected one of: on, off, standby")]
pub struct ParseStateError(pub String);

impl FromStr for OperatingState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            "standby" => Ok(Self::Standby),
            _ => Err(ParseStateError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_off() {
        assert_eq!(OperatingState::default(), OperatingState::Off);
    }

    #[test]
    fn names_are_lowercase_labels() {
        assert_eq!(OperatingState::On.name(), "on");
        assert_eq!(OperatingState::Off.name(), "off");
        assert_eq!(OperatingState::Standby.name(), "standby");
        assert_eq!(OperatingState::Standby.to_string(), "standby");
    }

    #[test]
    fn only_off_is_unpowered() {
        assert!(OperatingState::On.is_powered());
        assert!(OperatingState::Standby.is_powered());
        assert!(!OperatingState::Off.is_powered());
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("ON".parse::<OperatingState>(), Ok(OperatingState::On));
        assert_eq!(" standby ".parse::<OperatingState>(), Ok(OperatingState::Standby));
        assert_eq!("off".parse::<OperatingState>(), Ok(OperatingState::Off));
    }

    #[test]
    fn rejects_unknown_labels() {
        let err = "sleeping".parse::<OperatingState>().unwrap_err();
        assert_eq!(err, ParseStateError("sleeping".to_string()));
        assert!(err.to_string().contains("sleeping"));
    }

    #[test]
    fn state_serializes_lowercase() {
        let json = serde_json::to_string(&OperatingState::Standby).unwrap();
        assert_eq!(json, "\"standby\"");
        let back: OperatingState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, OperatingState::Standby);
    }
}
