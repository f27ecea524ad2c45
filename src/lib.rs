//! Building controller: a supervisory state machine for a building's
//! safety systems.
//!
//! The controller keeps the building in one of five modes and decides which
//! mode changes are legal. Each change drives the door, light and fire alarm
//! managers and the reporting channel through injected ports. The pure
//! decision logic is kept apart from the code that talks to devices.
//!
//! # Core Concepts
//!
//! - **Mode**: `Closed`, `OutOfHours`, `Open`, `FireDrill`, `FireAlarm`
//! - **History**: the normal mode an emergency interrupted, and the only way
//!   out of that emergency
//! - **Effects**: per-mode actions, either mandatory (failure aborts the
//!   change) or best-effort (failure is tolerated)
//! - **Status**: a digest of every device manager with fault escalation
//!
//! # Example
//!
//! ```rust
//! use building_controller::{BuildingController, Mode, NormalMode};
//!
//! let mut controller = BuildingController::with_start_mode("Main", Some("Open")).unwrap();
//!
//! // Without a door manager the building cannot be reopened after an alarm.
//! assert!(controller.request_mode("fire alarm"));
//! assert_eq!(controller.history_mode(), Some(NormalMode::Open));
//! assert!(!controller.request_mode("open"));
//! assert_eq!(controller.current_mode(), Mode::FireAlarm);
//! ```

pub mod config;
pub mod controller;
pub mod core;
pub mod effects;
pub mod error;
pub mod ports;
pub mod status;

// Re-export commonly used types
pub use config::ControllerConfig;
pub use controller::{BuildingController, BuildingId, ControllerBuilder};
pub use self::core::{Mode, NormalMode};
pub use error::{ControllerError, TransitionError};
pub use ports::{AlertPort, DoorPort, FireAlarmPort, LightPort, PortError, Ports, ReportingPort};
pub use status::{Device, StatusReport};
