//! State and counters shared by every single-function module.

use crate::activity::ActivityLog;
use crate::core::{Guard, OperatingState, StateHistory, StateTransition};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which function a module performs.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum ModuleKind {
    Printer,
    Scanner,
    Fax,
}

impl ModuleKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Printer => "Printer",
            Self::Scanner => "Scanner",
            Self::Fax => "Fax",
        }
    }

    /// Plural noun for the module's primary operation.
    pub fn operations_noun(&self) -> &'static str {
        match self {
            Self::Printer => "prints",
            Self::Scanner => "scans",
            Self::Fax => "faxes",
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One operating state, its counters and its transition history.
///
/// `set_state` is the only primitive that changes the state; every other
/// transition is a thin wrapper around it.
#[derive(Debug)]
pub struct ModuleCore {
    kind: ModuleKind,
    state: OperatingState,
    activation_count: u64,
    operation_count: u64,
    batch_count: u32,
    ready: Guard<OperatingState>,
    history: StateHistory<OperatingState>,
    log: ActivityLog,
}

impl ModuleCore {
    pub(crate) fn new(kind: ModuleKind, log: ActivityLog) -> Self {
        Self {
            kind,
            state: OperatingState::Off,
            activation_count: 0,
            operation_count: 0,
            batch_count: 0,
            ready: Guard::only(OperatingState::On),
            history: StateHistory::new(),
            log,
        }
    }

    /// Unconditional state assignment.
    ///
    /// Counts an activation on every Off -> On edge.
    pub fn set_state(&mut self, new_state: OperatingState) {
        let prior = self.state;
        self.state = new_state;
        self.history.record(StateTransition::new(prior, new_state));
        if prior == OperatingState::Off && new_state == OperatingState::On {
            self.activation_count += 1;
        }
        tracing::debug!(module = %self.kind, from = %prior, to = %new_state, "state assigned");
        self.log
            .line(format!("{} state changed to: {}", self.kind, new_state));
    }

    /// Switch on unless already on.
    pub fn power_on(&mut self) {
        if self.state == OperatingState::On {
            tracing::debug!(module = %self.kind, "power on ignored: already on");
            return;
        }
        self.set_state(OperatingState::On);
        self.log.line("Device is on ...");
    }

    /// Switch off only from On.
    pub fn power_off(&mut self) {
        if self.state != OperatingState::On {
            tracing::debug!(module = %self.kind, state = %self.state, "power off ignored");
            return;
        }
        self.set_state(OperatingState::Off);
        self.log.line("... Device is off !");
    }

    pub fn standby_on(&mut self) {
        self.set_state(OperatingState::Standby);
    }

    pub fn standby_off(&mut self) {
        self.set_state(OperatingState::On);
    }

    /// Force the module on ahead of an operation, announcing a wake-up
    /// when it was resting in standby.
    pub(crate) fn wake(&mut self) {
        if self.state == OperatingState::Standby {
            self.log
                .line(format!("{} module waking up from standby...", self.kind));
        }
        self.set_state(OperatingState::On);
    }

    /// Count one operation towards the batch. When `limit` is reached the
    /// module drops to standby and the batch restarts.
    pub(crate) fn advance_batch(&mut self, limit: u32) -> bool {
        self.batch_count += 1;
        if self.batch_count < limit {
            return false;
        }
        self.batch_count = 0;
        self.set_state(OperatingState::Standby);
        self.log.line(format!(
            "{} module entering standby after {} {}.",
            self.kind,
            limit,
            self.kind.operations_noun()
        ));
        tracing::debug!(module = %self.kind, limit, "batch limit reached");
        true
    }

    /// Whether the primary operation may run right now.
    pub(crate) fn is_ready(&self) -> bool {
        self.ready.check(&self.state)
    }

    pub(crate) fn record_operation(&mut self) {
        self.operation_count += 1;
    }

    pub(crate) fn log(&self) -> &ActivityLog {
        &self.log
    }

    pub fn kind(&self) -> ModuleKind {
        self.kind
    }

    pub fn state(&self) -> OperatingState {
        self.state
    }

    /// Number of Off -> On edges.
    pub fn activation_count(&self) -> u64 {
        self.activation_count
    }

    /// Number of successful primary operations.
    pub fn operation_count(&self) -> u64 {
        self.operation_count
    }

    /// Consecutive operations since the last batch standby.
    pub fn batch_count(&self) -> u32 {
        self.batch_count
    }

    pub fn history(&self) -> &StateHistory<OperatingState> {
        &self.history
    }
}
