//! Errors surfaced by the controller.

use crate::config::ConfigViolation;
use crate::core::{Mode, ParseModeError};
use crate::effects::Action;
use crate::ports::PortError;
use thiserror::Error;

/// Errors that prevent a controller from being created.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ControllerError {
    #[error(
        "controller can only be initialised to 'open', 'closed', 'out of hours' (got {})",
        describe_given(.given)
    )]
    InvalidInitialMode { given: Option<String> },

    #[error("invalid controller configuration: {}", format_violations(.0))]
    InvalidConfig(Vec<ConfigViolation>),
}

/// Errors that reject a mode change. The controller's mode is unchanged
/// whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransitionError {
    #[error(transparent)]
    UnknownMode(#[from] ParseModeError),

    #[error("transition from '{from}' to '{to}' is not allowed")]
    Illegal { from: Mode, to: Mode },

    #[error("mandatory action '{action}' failed: {reason}")]
    MandatoryEffect { action: Action, reason: EffectFailure },
}

/// Why a mandatory action did not complete.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EffectFailure {
    #[error("port is not configured")]
    Unbound,

    #[error("device refused the command")]
    Refused,

    #[error(transparent)]
    Port(#[from] PortError),
}

fn describe_given(given: &Option<String>) -> String {
    match given {
        Some(mode) => format!("'{mode}'"),
        None => "nothing".to_string(),
    }
}

fn format_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
