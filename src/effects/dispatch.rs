//! Runs an effect plan against the bound ports.

use super::notify::{notify_fire_alarm, NotificationOutcome};
use super::plan::{Action, PlannedAction, Requirement};
use crate::config::ControllerConfig;
use crate::error::{EffectFailure, TransitionError};
use crate::ports::{PortError, Ports};
use tracing::{debug, warn};

/// Result of a single attempted action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Done,
    /// The port the action needs is not bound.
    Unbound,
    /// The device answered but did not carry out the command.
    Refused,
    Failed(PortError),
}

impl ActionOutcome {
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    fn into_failure(self) -> Option<EffectFailure> {
        match self {
            Self::Done => None,
            Self::Unbound => Some(EffectFailure::Unbound),
            Self::Refused => Some(EffectFailure::Refused),
            Self::Failed(err) => Some(EffectFailure::Port(err)),
        }
    }
}

impl From<Result<(), PortError>> for ActionOutcome {
    fn from(result: Result<(), PortError>) -> Self {
        match result {
            Ok(()) => Self::Done,
            Err(err) => Self::Failed(err),
        }
    }
}

/// Everything that was attempted while entering a mode.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub outcomes: Vec<(Action, ActionOutcome)>,
    pub notification: Option<NotificationOutcome>,
}

impl DispatchReport {
    pub fn outcome(&self, action: Action) -> Option<&ActionOutcome> {
        self.outcomes
            .iter()
            .find(|(attempted, _)| *attempted == action)
            .map(|(_, outcome)| outcome)
    }

    /// Best-effort actions whose port was bound but did not complete.
    /// Skips for unbound ports are not counted.
    pub fn tolerated_failures(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| {
                matches!(outcome, ActionOutcome::Refused | ActionOutcome::Failed(_))
            })
            .count()
    }
}

/// Execute `plan` in order.
///
/// The first mandatory action that does not complete aborts the dispatch
/// with [`TransitionError::MandatoryEffect`]. Best-effort actions are
/// attempted when their port is bound and their failures are recorded in
/// the report.
pub fn dispatch(
    plan: &[PlannedAction],
    ports: &Ports,
    config: &ControllerConfig,
) -> Result<DispatchReport, TransitionError> {
    let mut report = DispatchReport::default();

    for planned in plan {
        let outcome = match planned.action {
            Action::NotifyFireAlarm => {
                let notification = notify_fire_alarm(ports, config);
                let outcome = if notification.is_logged() {
                    ActionOutcome::Done
                } else if ports.reporting.is_none() {
                    ActionOutcome::Unbound
                } else {
                    ActionOutcome::Refused
                };
                report.notification = Some(notification);
                outcome
            }
            action => perform(action, ports),
        };

        match (planned.requirement, outcome) {
            (_, ActionOutcome::Done) => {
                debug!(action = %planned.action, "action completed");
                report.outcomes.push((planned.action, ActionOutcome::Done));
            }
            (Requirement::Mandatory, outcome) => {
                let reason = outcome.into_failure().unwrap_or(EffectFailure::Refused);
                warn!(action = %planned.action, %reason, "mandatory action failed");
                return Err(TransitionError::MandatoryEffect {
                    action: planned.action,
                    reason,
                });
            }
            (Requirement::BestEffort, ActionOutcome::Unbound) => {
                debug!(action = %planned.action, "port not bound, skipping");
                report.outcomes.push((planned.action, ActionOutcome::Unbound));
            }
            (Requirement::BestEffort, outcome) => {
                warn!(action = %planned.action, ?outcome, "best-effort action failed");
                report.outcomes.push((planned.action, outcome));
            }
        }
    }

    Ok(report)
}

fn perform(action: Action, ports: &Ports) -> ActionOutcome {
    match action {
        Action::OpenAllDoors => match ports.doors.as_ref().map(|doors| doors.open_all()) {
            None => ActionOutcome::Unbound,
            Some(Ok(true)) => ActionOutcome::Done,
            Some(Ok(false)) => ActionOutcome::Refused,
            Some(Err(err)) => ActionOutcome::Failed(err),
        },
        Action::LockAllDoors => ports
            .doors
            .as_ref()
            .map_or(ActionOutcome::Unbound, |doors| doors.lock_all().into()),
        Action::LightsOn | Action::LightsOff => {
            let on = action == Action::LightsOn;
            ports
                .lights
                .as_ref()
                .map_or(ActionOutcome::Unbound, |lights| lights.set_all(on).into())
        }
        Action::SoundAlarm => ports
            .fire_alarm
            .as_ref()
            .map_or(ActionOutcome::Unbound, |alarm| alarm.set_alarm(true).into()),
        Action::NotifyFireAlarm => ActionOutcome::Unbound,
    }
}
