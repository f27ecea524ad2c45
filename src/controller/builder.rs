//! Builder for constructing controllers.

use super::{BuildingController, BuildingId};
use crate::config::ControllerConfig;
use crate::core::NormalMode;
use crate::error::ControllerError;
use crate::ports::{AlertPort, DoorPort, FireAlarmPort, LightPort, Ports, ReportingPort};
use std::sync::Arc;

/// Builder for [`BuildingController`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use building_controller::{BuildingController, Mode};
///
/// let controller = BuildingController::builder("Library")
///     .start_mode("OPEN")
///     .build()
///     .unwrap();
///
/// assert_eq!(controller.id().as_str(), "library");
/// assert_eq!(controller.current_mode(), Mode::Open);
/// ```
pub struct ControllerBuilder {
    id: BuildingId,
    start_mode: Option<String>,
    ports: Ports,
    config: ControllerConfig,
}

impl ControllerBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: BuildingId::new(id),
            start_mode: None,
            ports: Ports::none(),
            config: ControllerConfig::default(),
        }
    }

    /// Starting mode by name. Must name a normal mode; checked by
    /// [`build`](Self::build). Defaults to out of hours.
    pub fn start_mode(mut self, mode: &str) -> Self {
        self.start_mode = Some(mode.to_string());
        self
    }

    pub fn doors(mut self, doors: Arc<dyn DoorPort>) -> Self {
        self.ports.doors = Some(doors);
        self
    }

    pub fn lights(mut self, lights: Arc<dyn LightPort>) -> Self {
        self.ports.lights = Some(lights);
        self
    }

    pub fn fire_alarm(mut self, fire_alarm: Arc<dyn FireAlarmPort>) -> Self {
        self.ports.fire_alarm = Some(fire_alarm);
        self
    }

    pub fn reporting(mut self, reporting: Arc<dyn ReportingPort>) -> Self {
        self.ports.reporting = Some(reporting);
        self
    }

    pub fn alerts(mut self, alerts: Arc<dyn AlertPort>) -> Self {
        self.ports.alerts = Some(alerts);
        self
    }

    /// Replace every binding at once.
    pub fn ports(mut self, ports: Ports) -> Self {
        self.ports = ports;
        self
    }

    pub fn config(mut self, config: ControllerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<BuildingController, ControllerError> {
        let start = match self.start_mode {
            None => NormalMode::default(),
            Some(name) => name
                .parse::<NormalMode>()
                .map_err(|_| ControllerError::InvalidInitialMode { given: Some(name) })?,
        };

        self.config.check().map_err(ControllerError::InvalidConfig)?;

        Ok(BuildingController::assemble(
            self.id,
            start,
            self.ports,
            self.config,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigViolation;
    use crate::core::Mode;
    use crate::ports::fake::FakeDoors;

    #[test]
    fn builder_defaults_to_out_of_hours() {
        let controller = ControllerBuilder::new("B1").build().unwrap();
        assert_eq!(controller.current_mode(), Mode::OutOfHours);
        assert_eq!(controller.history_mode(), None);
    }

    #[test]
    fn builder_rejects_emergency_start() {
        let result = ControllerBuilder::new("B1").start_mode("FIRE ALARM").build();
        assert!(matches!(
            result,
            Err(ControllerError::InvalidInitialMode { given: Some(ref g) }) if g == "FIRE ALARM"
        ));
    }

    #[test]
    fn builder_rejects_empty_start() {
        let result = ControllerBuilder::new("B1").start_mode("").build();
        assert!(matches!(
            result,
            Err(ControllerError::InvalidInitialMode { .. })
        ));
    }

    #[test]
    fn builder_rejects_invalid_config() {
        let result = ControllerBuilder::new("B1")
            .config(ControllerConfig {
                fault_marker: String::new(),
                ..Default::default()
            })
            .build();

        assert_eq!(
            result.err(),
            Some(ControllerError::InvalidConfig(vec![
                ConfigViolation::EmptyFaultMarker
            ]))
        );
    }

    #[test]
    fn builder_binds_individual_ports() {
        let controller = ControllerBuilder::new("B1")
            .doors(Arc::new(FakeDoors::default()))
            .build()
            .unwrap();

        assert!(controller.ports().doors.is_some());
        assert_eq!(controller.ports().bound_count(), 1);
    }
}
