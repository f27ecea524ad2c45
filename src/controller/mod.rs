//! The building state controller.
//!
//! [`BuildingController`] owns the authoritative mode of one building. It
//! resolves requests against the legality rules in [`crate::core`], drives
//! the bound ports through [`crate::effects`], and only commits a new mode
//! once every mandatory action has succeeded.
//!
//! All operations take the controller by reference and run to completion on
//! the caller's thread. Share a controller between threads by wrapping it in
//! a `Mutex`.

mod builder;
mod id;

pub use builder::ControllerBuilder;
pub use id::BuildingId;

use crate::config::ControllerConfig;
use crate::core::{resolve, Journal, Mode, NormalMode, Resolution, Step, TransitionRecord};
use crate::effects::{dispatch, plan, DispatchReport};
use crate::error::{ControllerError, TransitionError};
use crate::ports::Ports;
use crate::status::StatusReport;
use tracing::{debug, info, warn};

/// Supervisory state machine for one building.
///
/// # Example
///
/// ```rust
/// use building_controller::{BuildingController, Mode};
///
/// let mut controller = BuildingController::new("HQ");
/// assert_eq!(controller.current_mode(), Mode::OutOfHours);
///
/// assert!(controller.request_mode("Closed"));
/// assert!(controller.request_mode("fire drill"));
///
/// // Only the mode the drill interrupted is a legal way out.
/// assert!(!controller.request_mode("out of hours"));
/// assert!(controller.request_mode("closed"));
/// assert_eq!(controller.current_mode(), Mode::Closed);
/// ```
#[derive(Debug)]
pub struct BuildingController {
    id: BuildingId,
    current: Mode,
    history: Option<NormalMode>,
    ports: Ports,
    config: ControllerConfig,
    journal: Journal,
    last_dispatch: Option<DispatchReport>,
}

impl BuildingController {
    /// Controller in out of hours mode with no ports bound.
    pub fn new(id: &str) -> Self {
        Self::assemble(
            BuildingId::new(id),
            NormalMode::default(),
            Ports::none(),
            ControllerConfig::default(),
        )
    }

    /// Controller starting in the named normal mode.
    ///
    /// `start` is matched case-insensitively against `closed`,
    /// `out of hours` and `open`; anything else, including an empty name or
    /// `None`, fails with [`ControllerError::InvalidInitialMode`].
    pub fn with_start_mode(id: &str, start: Option<&str>) -> Result<Self, ControllerError> {
        match start {
            Some(start) => Self::builder(id).start_mode(start).build(),
            None => Err(ControllerError::InvalidInitialMode { given: None }),
        }
    }

    /// Controller in out of hours mode driving the given ports.
    pub fn with_ports(id: &str, ports: Ports) -> Self {
        Self::assemble(
            BuildingId::new(id),
            NormalMode::default(),
            ports,
            ControllerConfig::default(),
        )
    }

    pub fn builder(id: &str) -> ControllerBuilder {
        ControllerBuilder::new(id)
    }

    pub(crate) fn assemble(
        id: BuildingId,
        start: NormalMode,
        ports: Ports,
        config: ControllerConfig,
    ) -> Self {
        debug!(building = %id, mode = %start, ?ports, "controller created");
        Self {
            id,
            current: start.into(),
            history: None,
            ports,
            config,
            journal: Journal::new(),
            last_dispatch: None,
        }
    }

    pub fn id(&self) -> &BuildingId {
        &self.id
    }

    pub fn set_id(&mut self, id: &str) {
        self.id = BuildingId::new(id);
    }

    pub fn current_mode(&self) -> Mode {
        self.current
    }

    /// Normal mode the most recent emergency interrupted.
    ///
    /// `None` until the building first enters an emergency. While in an
    /// emergency this is the only mode it may return to.
    pub fn history_mode(&self) -> Option<NormalMode> {
        self.history
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn ports(&self) -> &Ports {
        &self.ports
    }

    /// Actions attempted by the last committed transition.
    pub fn last_dispatch(&self) -> Option<&DispatchReport> {
        self.last_dispatch.as_ref()
    }

    /// Request a mode change by name.
    ///
    /// Returns `true` when the building is in the requested mode afterwards,
    /// `false` when the request was rejected. A rejected request leaves the
    /// controller unchanged.
    pub fn request_mode(&mut self, target: &str) -> bool {
        let result = target
            .parse::<Mode>()
            .map_err(TransitionError::from)
            .and_then(|mode| self.transition_to(mode));

        match result {
            Ok(_) => true,
            Err(err) => {
                warn!(
                    building = %self.id,
                    current = %self.current,
                    requested = target,
                    error = %err,
                    "mode change rejected"
                );
                false
            }
        }
    }

    /// Move to `target`, running its effects.
    ///
    /// Requesting the current mode succeeds without touching any port.
    /// Returns the mode the building is in afterwards.
    #[tracing::instrument(skip(self), fields(building = %self.id, from = %self.current))]
    pub fn transition_to(&mut self, target: Mode) -> Result<Mode, TransitionError> {
        let step = match resolve(self.current, self.history, target)? {
            Resolution::Unchanged => {
                debug!("already in requested mode");
                return Ok(self.current);
            }
            Resolution::Move(step) => step,
        };

        let report = dispatch(&plan(step.to), &self.ports, &self.config)?;
        Ok(self.commit(step, report))
    }

    fn commit(&mut self, step: Step, report: DispatchReport) -> Mode {
        let record = TransitionRecord::new(step.from, step.to);
        info!(
            transition = %record.id,
            to = %step.to,
            tolerated_failures = report.tolerated_failures(),
            "mode changed"
        );

        self.current = step.to;
        self.history = step.history;
        self.journal.record(record);
        self.last_dispatch = Some(report);
        self.current
    }

    /// Collect device statuses and report any faults.
    ///
    /// When at least one device manager reports the fault marker, the
    /// reporting port receives exactly one engineer-required request listing
    /// the faulty devices.
    #[tracing::instrument(skip(self), fields(building = %self.id))]
    pub fn status_report(&self) -> StatusReport {
        let report = StatusReport::collect(&self.ports, &self.config.fault_marker);

        if let Some(request) = report.engineer_request() {
            warn!(faults = %request, "engineer required");
            if let Some(reporting) = self.ports.reporting.as_ref() {
                if let Err(err) = reporting.log_engineer_required(&request) {
                    warn!(error = %err, "failed to log engineer request");
                }
            }
        }

        report
    }
}
