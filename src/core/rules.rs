//! Transition legality rules.
//!
//! Everything here is pure: given where the building is, what it remembers,
//! and where it has been asked to go, decide whether the move is allowed and
//! what the controller's state must look like once it commits. Effects are
//! planned and dispatched elsewhere.

use super::mode::{Mode, NormalMode};
use crate::error::TransitionError;

/// Normal-to-normal moves. Every normal mode may additionally enter either
/// emergency mode; emergency modes may only return to the remembered mode.
const NORMAL_TABLE: [(NormalMode, &[NormalMode]); 3] = [
    (NormalMode::Closed, &[NormalMode::OutOfHours]),
    (
        NormalMode::OutOfHours,
        &[NormalMode::Open, NormalMode::Closed],
    ),
    (NormalMode::Open, &[NormalMode::OutOfHours]),
];

/// Outcome of resolving a requested mode against the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Already in the requested mode; nothing to do.
    Unchanged,
    /// The controller must run the effects for `step.to` and then commit.
    Move(Step),
}

/// A legal move, with the history value to store once it commits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub from: Mode,
    pub to: Mode,
    pub history: Option<NormalMode>,
}

/// Modes reachable from `from` in a single request.
///
/// # Example
///
/// ```rust
/// use building_controller::core::{legal_targets, Mode, NormalMode};
///
/// assert_eq!(
///     legal_targets(Mode::Closed, None),
///     vec![Mode::OutOfHours, Mode::FireDrill, Mode::FireAlarm]
/// );
/// assert_eq!(
///     legal_targets(Mode::FireAlarm, Some(NormalMode::Open)),
///     vec![Mode::Open]
/// );
/// ```
pub fn legal_targets(from: Mode, history: Option<NormalMode>) -> Vec<Mode> {
    match from.as_normal() {
        Some(normal) => NORMAL_TABLE
            .iter()
            .find(|(source, _)| *source == normal)
            .map(|(_, targets)| targets.iter().copied().map(Mode::from).collect::<Vec<_>>())
            .unwrap_or_default()
            .into_iter()
            .chain([Mode::FireDrill, Mode::FireAlarm])
            .collect(),
        None => history.map(Mode::from).into_iter().collect(),
    }
}

/// Check whether `from -> to` is allowed.
pub fn is_legal(from: Mode, history: Option<NormalMode>, to: Mode) -> bool {
    legal_targets(from, history).contains(&to)
}

/// Resolve a request for `target` while in `current`.
///
/// Entering an emergency from a normal mode remembers that normal mode.
/// Leaving an emergency is only possible towards the remembered mode, which
/// stays remembered until the next emergency overwrites it.
pub fn resolve(
    current: Mode,
    history: Option<NormalMode>,
    target: Mode,
) -> Result<Resolution, TransitionError> {
    if current == target {
        return Ok(Resolution::Unchanged);
    }

    if !is_legal(current, history, target) {
        return Err(TransitionError::Illegal {
            from: current,
            to: target,
        });
    }

    let history = match (current.as_normal(), target.is_emergency()) {
        (Some(normal), true) => Some(normal),
        _ => history,
    };

    Ok(Resolution::Move(Step {
        from: current,
        to: target,
        history,
    }))
}
