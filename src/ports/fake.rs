//! Recording port doubles for unit tests.

use super::{AlertPort, DoorPort, FireAlarmPort, LightPort, PortError, ReportingPort};
use std::sync::Mutex;

#[derive(Default)]
pub(crate) struct CallLog(Mutex<Vec<String>>);

impl CallLog {
    fn push(&self, call: impl Into<String>) {
        self.0.lock().unwrap().push(call.into());
    }

    pub(crate) fn all(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub(crate) fn count(&self, call: &str) -> usize {
        self.0.lock().unwrap().iter().filter(|c| *c == call).count()
    }
}

fn outcome(fail: bool) -> Result<(), PortError> {
    if fail {
        Err(PortError::failed("injected failure"))
    } else {
        Ok(())
    }
}

pub(crate) struct FakeDoors {
    pub opens: bool,
    pub fail: bool,
    pub status: String,
    pub calls: CallLog,
}

impl Default for FakeDoors {
    fn default() -> Self {
        Self {
            opens: true,
            fail: false,
            status: "Doors,OK,OK,".to_string(),
            calls: CallLog::default(),
        }
    }
}

impl DoorPort for FakeDoors {
    fn open_all(&self) -> Result<bool, PortError> {
        self.calls.push("open_all");
        outcome(self.fail).map(|()| self.opens)
    }

    fn lock_all(&self) -> Result<(), PortError> {
        self.calls.push("lock_all");
        outcome(self.fail)
    }

    fn status(&self) -> Result<String, PortError> {
        self.calls.push("status");
        outcome(self.fail).map(|()| self.status.clone())
    }
}

pub(crate) struct FakeLights {
    pub fail: bool,
    pub status: String,
    pub calls: CallLog,
}

impl Default for FakeLights {
    fn default() -> Self {
        Self {
            fail: false,
            status: "Lights,OK,OK,".to_string(),
            calls: CallLog::default(),
        }
    }
}

impl LightPort for FakeLights {
    fn set_all(&self, on: bool) -> Result<(), PortError> {
        self.calls.push(format!("set_all({on})"));
        outcome(self.fail)
    }

    fn status(&self) -> Result<String, PortError> {
        self.calls.push("status");
        outcome(self.fail).map(|()| self.status.clone())
    }
}

pub(crate) struct FakeFireAlarm {
    pub fail: bool,
    pub status: String,
    pub calls: CallLog,
}

impl Default for FakeFireAlarm {
    fn default() -> Self {
        Self {
            fail: false,
            status: "FireAlarm,OK,OK,".to_string(),
            calls: CallLog::default(),
        }
    }
}

impl FireAlarmPort for FakeFireAlarm {
    fn set_alarm(&self, on: bool) -> Result<(), PortError> {
        self.calls.push(format!("set_alarm({on})"));
        outcome(self.fail)
    }

    fn status(&self) -> Result<String, PortError> {
        self.calls.push("status");
        outcome(self.fail).map(|()| self.status.clone())
    }
}

#[derive(Default)]
pub(crate) struct FakeReporting {
    pub fail: bool,
    pub calls: CallLog,
}

impl ReportingPort for FakeReporting {
    fn log_fire_alarm(&self, detail: &str) -> Result<(), PortError> {
        self.calls.push(format!("log_fire_alarm({detail})"));
        outcome(self.fail)
    }

    fn log_engineer_required(&self, detail: &str) -> Result<(), PortError> {
        self.calls.push(format!("log_engineer_required({detail})"));
        outcome(self.fail)
    }
}

#[derive(Default)]
pub(crate) struct FakeAlerts {
    pub fail: bool,
    pub calls: CallLog,
}

impl AlertPort for FakeAlerts {
    fn send_mail(&self, to: &str, subject: &str, body: &str) -> Result<(), PortError> {
        self.calls.push(format!("send_mail({to}|{subject}|{body})"));
        outcome(self.fail)
    }
}
