//! Side effects of entering a mode.
//!
//! This module is the imperative shell around [`crate::core`]:
//!
//! - **Plan**: the ordered actions each destination mode requires, each one
//!   tagged mandatory or best-effort
//! - **Dispatch**: runs a plan against the bound ports and aborts on the
//!   first mandatory failure
//! - **Notify**: reports a fire alarm, falling back to mail when reporting
//!   fails

mod dispatch;
mod notify;
mod plan;

pub use dispatch::{dispatch, ActionOutcome, DispatchReport};
pub use notify::{notify_fire_alarm, NotificationOutcome};
pub use plan::{plan, Action, PlannedAction, Requirement};
