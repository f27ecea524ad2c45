//! Building status digest and fault detection.

use crate::ports::{PortError, Ports};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// A device family with its own manager port.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Device {
    Lights,
    Doors,
    FireAlarm,
}

impl Device {
    /// Label used in engineer-required reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Lights => "Lights",
            Self::Doors => "Doors",
            Self::FireAlarm => "FireAlarm",
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw statuses of the three device managers plus the faults found in them.
///
/// Displays as the three raw status strings joined by commas, in the order
/// lights, doors, fire alarm. A missing status renders as an empty segment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub lights: Option<String>,
    pub doors: Option<String>,
    pub fire_alarm: Option<String>,
    faults: Vec<Device>,
}

impl StatusReport {
    /// Query every bound device manager and scan the answers for `fault_marker`.
    pub fn collect(ports: &Ports, fault_marker: &str) -> Self {
        let lights = read(Device::Lights, ports.lights.as_ref().map(|p| p.status()));
        let doors = read(Device::Doors, ports.doors.as_ref().map(|p| p.status()));
        let fire_alarm = read(
            Device::FireAlarm,
            ports.fire_alarm.as_ref().map(|p| p.status()),
        );

        Self::from_statuses(lights, doors, fire_alarm, fault_marker)
    }

    /// Build a report from statuses that were already read.
    pub fn from_statuses(
        lights: Option<String>,
        doors: Option<String>,
        fire_alarm: Option<String>,
        fault_marker: &str,
    ) -> Self {
        let faults = [
            (Device::Lights, &lights),
            (Device::Doors, &doors),
            (Device::FireAlarm, &fire_alarm),
        ]
        .into_iter()
        .filter(|(_, status)| {
            status
                .as_deref()
                .is_some_and(|status| status.contains(fault_marker))
        })
        .map(|(device, _)| device)
        .collect();

        Self {
            lights,
            doors,
            fire_alarm,
            faults,
        }
    }

    /// Devices whose status carries the fault marker, in report order.
    pub fn faults(&self) -> &[Device] {
        &self.faults
    }

    pub fn has_faults(&self) -> bool {
        !self.faults.is_empty()
    }

    /// Payload for the engineer-required log, e.g. `Lights,FireAlarm,`.
    ///
    /// `None` when nothing is faulty.
    pub fn engineer_request(&self) -> Option<String> {
        if !self.has_faults() {
            return None;
        }
        Some(
            self.faults
                .iter()
                .map(|device| format!("{},", device.label()))
                .collect(),
        )
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{}",
            self.lights.as_deref().unwrap_or_default(),
            self.doors.as_deref().unwrap_or_default(),
            self.fire_alarm.as_deref().unwrap_or_default(),
        )
    }
}

fn read(device: Device, status: Option<Result<String, PortError>>) -> Option<String> {
    match status? {
        Ok(status) => Some(status),
        Err(err) => {
            warn!(%device, error = %err, "failed to read device status");
            None
        }
    }
}
