//! What has to happen in the building when it enters a mode.

use crate::core::Mode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single command sent to a collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    OpenAllDoors,
    LockAllDoors,
    LightsOn,
    LightsOff,
    SoundAlarm,
    NotifyFireAlarm,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Self::OpenAllDoors => "open all doors",
            Self::LockAllDoors => "lock all doors",
            Self::LightsOn => "lights on",
            Self::LightsOff => "lights off",
            Self::SoundAlarm => "sound alarm",
            Self::NotifyFireAlarm => "notify fire alarm",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a failed action blocks the transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Requirement {
    /// Absence or failure aborts the transition.
    Mandatory,
    /// Attempted when the port is bound; failures are tolerated.
    BestEffort,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlannedAction {
    pub action: Action,
    pub requirement: Requirement,
}

impl PlannedAction {
    const fn mandatory(action: Action) -> Self {
        Self {
            action,
            requirement: Requirement::Mandatory,
        }
    }

    const fn best_effort(action: Action) -> Self {
        Self {
            action,
            requirement: Requirement::BestEffort,
        }
    }
}

/// Actions to run, in order, when entering `destination`.
///
/// Mandatory actions always come first so that a plan which is going to be
/// rejected fails before any best-effort command reaches a device.
///
/// # Example
///
/// ```rust
/// use building_controller::core::Mode;
/// use building_controller::effects::{plan, Action, Requirement};
///
/// let open = plan(Mode::Open);
/// assert_eq!(open.len(), 1);
/// assert_eq!(open[0].action, Action::OpenAllDoors);
/// assert_eq!(open[0].requirement, Requirement::Mandatory);
///
/// assert!(plan(Mode::OutOfHours).is_empty());
/// ```
pub fn plan(destination: Mode) -> Vec<PlannedAction> {
    use PlannedAction as P;

    match destination {
        Mode::Closed => vec![
            P::best_effort(Action::LockAllDoors),
            P::best_effort(Action::LightsOff),
        ],
        Mode::Open => vec![P::mandatory(Action::OpenAllDoors)],
        Mode::OutOfHours => Vec::new(),
        // A drill evacuates the building but leaves the alarm silent.
        Mode::FireDrill => vec![
            P::best_effort(Action::LightsOn),
            P::best_effort(Action::OpenAllDoors),
        ],
        Mode::FireAlarm => vec![
            P::best_effort(Action::SoundAlarm),
            P::best_effort(Action::OpenAllDoors),
            P::best_effort(Action::LightsOn),
            P::best_effort(Action::NotifyFireAlarm),
        ],
    }
}
