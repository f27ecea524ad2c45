//! Capability ports the controller drives.
//!
//! Ports are the boundary between the controller and the building's
//! hardware managers, the logging web service and the mail transport. The
//! controller only knows these traits; concrete drivers live outside this
//! crate.
//!
//! Every port is optional. A controller built without ports still enforces
//! the legality table and simply has nothing to drive.

use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Failure reported by a collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortError {
    #[error("device unavailable: {0}")]
    Unavailable(String),

    #[error("{0}")]
    Failed(String),
}

impl PortError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// Manager for every door in the building.
pub trait DoorPort: Send + Sync {
    /// Unlock and open all doors. `Ok(false)` means the doors did not open.
    fn open_all(&self) -> Result<bool, PortError>;

    fn lock_all(&self) -> Result<(), PortError>;

    /// Comma separated device entries, e.g. `Doors,OK,OK,FAULT,`.
    fn status(&self) -> Result<String, PortError>;
}

/// Manager for every light in the building.
pub trait LightPort: Send + Sync {
    fn set_all(&self, on: bool) -> Result<(), PortError>;

    fn status(&self) -> Result<String, PortError>;
}

/// Building fire alarm.
pub trait FireAlarmPort: Send + Sync {
    fn set_alarm(&self, on: bool) -> Result<(), PortError>;

    fn status(&self) -> Result<String, PortError>;
}

/// Remote logging web service.
pub trait ReportingPort: Send + Sync {
    fn log_fire_alarm(&self, detail: &str) -> Result<(), PortError>;

    /// `detail` lists the faulty devices, comma separated with a trailing comma.
    fn log_engineer_required(&self, detail: &str) -> Result<(), PortError>;
}

/// Mail transport used when the reporting service cannot be reached.
pub trait AlertPort: Send + Sync {
    fn send_mail(&self, to: &str, subject: &str, body: &str) -> Result<(), PortError>;
}

/// The set of collaborators bound to a controller.
///
/// # Example
///
/// ```rust
/// use building_controller::ports::Ports;
///
/// let ports = Ports::none();
/// assert!(ports.doors.is_none());
/// assert_eq!(ports.bound_count(), 0);
/// ```
#[derive(Clone, Default)]
pub struct Ports {
    pub doors: Option<Arc<dyn DoorPort>>,
    pub lights: Option<Arc<dyn LightPort>>,
    pub fire_alarm: Option<Arc<dyn FireAlarmPort>>,
    pub reporting: Option<Arc<dyn ReportingPort>>,
    pub alerts: Option<Arc<dyn AlertPort>>,
}

impl Ports {
    /// Bind all five collaborators.
    pub fn new(
        doors: Arc<dyn DoorPort>,
        lights: Arc<dyn LightPort>,
        fire_alarm: Arc<dyn FireAlarmPort>,
        reporting: Arc<dyn ReportingPort>,
        alerts: Arc<dyn AlertPort>,
    ) -> Self {
        Self {
            doors: Some(doors),
            lights: Some(lights),
            fire_alarm: Some(fire_alarm),
            reporting: Some(reporting),
            alerts: Some(alerts),
        }
    }

    /// No collaborators at all.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_doors(mut self, doors: Arc<dyn DoorPort>) -> Self {
        self.doors = Some(doors);
        self
    }

    pub fn with_lights(mut self, lights: Arc<dyn LightPort>) -> Self {
        self.lights = Some(lights);
        self
    }

    pub fn with_fire_alarm(mut self, fire_alarm: Arc<dyn FireAlarmPort>) -> Self {
        self.fire_alarm = Some(fire_alarm);
        self
    }

    pub fn with_reporting(mut self, reporting: Arc<dyn ReportingPort>) -> Self {
        self.reporting = Some(reporting);
        self
    }

    pub fn with_alerts(mut self, alerts: Arc<dyn AlertPort>) -> Self {
        self.alerts = Some(alerts);
        self
    }

    /// How many of the five collaborators are bound.
    pub fn bound_count(&self) -> usize {
        [
            self.doors.is_some(),
            self.lights.is_some(),
            self.fire_alarm.is_some(),
            self.reporting.is_some(),
            self.alerts.is_some(),
        ]
        .into_iter()
        .filter(|bound| *bound)
        .count()
    }
}

impl fmt::Debug for Ports {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ports")
            .field("doors", &self.doors.is_some())
            .field("lights", &self.lights.is_some())
            .field("fire_alarm", &self.fire_alarm.is_some())
            .field("reporting", &self.reporting.is_some())
            .field("alerts", &self.alerts.is_some())
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod fake;
