//! Audit rules evaluated against a device snapshot.

use crate::audit::violations::InvariantViolation;
use crate::core::OperatingState;
use crate::device::DeviceSnapshot;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of an audit: success, or every violation found.
pub type AuditResult = Validation<(), NonEmptyVec<InvariantViolation>>;

/// One audit check.
pub type AuditCheck = Box<dyn Fn(&DeviceSnapshot) -> AuditResult + Send + Sync>;

/// Set of checks run together; every failure is collected.
pub struct AuditRules {
    checks: Vec<AuditCheck>,
}

impl AuditRules {
    /// No checks at all.
    pub fn empty() -> Self {
        Self { checks: Vec::new() }
    }

    /// The coordination invariants every composite device keeps.
    pub fn standard() -> Self {
        Self::empty()
            .require(standby_is_reported)
            .require(no_module_on_during_standby)
            .require(batches_below_limit)
            .require(reported_on_means_all_on)
    }

    /// Add a custom validation check.
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&DeviceSnapshot) -> AuditResult + Send + Sync + 'static,
    {
        self.checks.push(Box::new(check));
        self
    }

    /// Add a predicate check with an error message.
    pub fn require_pred<F>(self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&DeviceSnapshot) -> bool + Send + Sync + 'static,
    {
        self.require(move |snapshot: &DeviceSnapshot| {
            if predicate(snapshot) {
                Validation::success(())
            } else {
                Validation::fail(InvariantViolation::CustomCheckFailed {
                    message: error_msg.clone(),
                })
            }
        })
    }

    /// Run every check, accumulating all violations.
    pub fn enforce(&self, snapshot: &DeviceSnapshot) -> AuditResult {
        if self.checks.is_empty() {
            return Validation::success(());
        }
        let checks: Vec<AuditResult> =
            self.checks.iter().map(|check| check(snapshot)).collect();
        Validation::all_vec(checks).map(|_| ())
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl Default for AuditRules {
    fn default() -> Self {
        Self::standard()
    }
}

fn collect(violations: impl IntoIterator<Item = InvariantViolation>) -> AuditResult {
    let checks: Vec<AuditResult> =
        violations.into_iter().map(Validation::fail).collect();
    if checks.is_empty() {
        return Validation::success(());
    }
    Validation::all_vec(checks).map(|_| ())
}

fn standby_is_reported(snapshot: &DeviceSnapshot) -> AuditResult {
    if snapshot.manual_standby && snapshot.reported != OperatingState::Standby {
        Validation::fail(InvariantViolation::StandbyNotReported {
            reported: snapshot.reported,
        })
    } else {
        Validation::success(())
    }
}

fn no_module_on_during_standby(snapshot: &DeviceSnapshot) -> AuditResult {
    if !snapshot.manual_standby {
        return Validation::success(());
    }
    collect(
        snapshot
            .modules
            .iter()
            .filter(|m| m.state == OperatingState::On)
            .map(|m| InvariantViolation::ModuleOnDuringStandby { module: m.kind }),
    )
}

fn batches_below_limit(snapshot: &DeviceSnapshot) -> AuditResult {
    collect(snapshot.modules.iter().filter_map(|m| {
        let limit = m.batch_limit?;
        (m.batch_count >= limit).then_some(InvariantViolation::BatchLimitReached {
            module: m.kind,
            count: m.batch_count,
            limit,
        })
    }))
}

fn reported_on_means_all_on(snapshot: &DeviceSnapshot) -> AuditResult {
    if snapshot.reported != OperatingState::On {
        return Validation::success(());
    }
    collect(
        snapshot
            .modules
            .iter()
            .filter(|m| m.state != OperatingState::On)
            .map(|m| InvariantViolation::ModuleNotOn {
                module: m.kind,
                state: m.state,
            }),
    )
}
