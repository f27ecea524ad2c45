//! Core building state model.
//!
//! This module contains the pure part of the controller:
//! - Operating modes via `Mode` and `NormalMode`
//! - The transition legality table and destination resolution
//! - The in-memory journal of committed transitions
//!
//! Nothing in this module talks to a device. Effects live in
//! [`crate::effects`].

mod journal;
mod mode;
mod rules;

pub use journal::{Journal, TransitionRecord};
pub use mode::{Mode, NormalMode, ParseModeError};
pub use rules::{is_legal, legal_targets, resolve, Resolution, Step};
