//! Recording doubles for every port.

#![allow(dead_code)]

use building_controller::{
    AlertPort, BuildingController, DoorPort, FireAlarmPort, LightPort, PortError, Ports,
    ReportingPort,
};
use std::sync::{Arc, Mutex};

/// Every call made to any port, in order, as `port.method(args)`.
#[derive(Clone, Default)]
pub struct Recorder(Arc<Mutex<Vec<String>>>);

impl Recorder {
    pub fn push(&self, call: String) {
        self.0.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls().iter().filter(|c| *c == call).count()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

/// Knobs for how the doubles behave.
#[derive(Clone, Debug)]
pub struct Behaviour {
    pub doors_open: bool,
    pub doors_fail: bool,
    pub lights_fail: bool,
    pub alarm_fail: bool,
    pub reporting_fails: bool,
    pub mail_fails: bool,
    pub light_status: String,
    pub door_status: String,
    pub alarm_status: String,
}

impl Default for Behaviour {
    fn default() -> Self {
        Self {
            doors_open: true,
            doors_fail: false,
            lights_fail: false,
            alarm_fail: false,
            reporting_fails: false,
            mail_fails: false,
            light_status: "Lights,OK,OK,OK,".to_string(),
            door_status: "Doors,OK,OK,".to_string(),
            alarm_status: "FireAlarm,OK,".to_string(),
        }
    }
}

fn result(fail: bool, what: &str) -> Result<(), PortError> {
    if fail {
        Err(PortError::failed(format!("{what} unreachable")))
    } else {
        Ok(())
    }
}

pub struct Doors(Recorder, Behaviour);
pub struct Lights(Recorder, Behaviour);
pub struct Alarm(Recorder, Behaviour);
pub struct Reporting(Recorder, Behaviour);
pub struct Mail(Recorder, Behaviour);

impl DoorPort for Doors {
    fn open_all(&self) -> Result<bool, PortError> {
        self.0.push("doors.open_all()".to_string());
        result(self.1.doors_fail, "door bus").map(|()| self.1.doors_open)
    }

    fn lock_all(&self) -> Result<(), PortError> {
        self.0.push("doors.lock_all()".to_string());
        result(self.1.doors_fail, "door bus")
    }

    fn status(&self) -> Result<String, PortError> {
        self.0.push("doors.status()".to_string());
        result(self.1.doors_fail, "door bus").map(|()| self.1.door_status.clone())
    }
}

impl LightPort for Lights {
    fn set_all(&self, on: bool) -> Result<(), PortError> {
        self.0.push(format!("lights.set_all({on})"));
        result(self.1.lights_fail, "lighting bus")
    }

    fn status(&self) -> Result<String, PortError> {
        self.0.push("lights.status()".to_string());
        result(self.1.lights_fail, "lighting bus").map(|()| self.1.light_status.clone())
    }
}

impl FireAlarmPort for Alarm {
    fn set_alarm(&self, on: bool) -> Result<(), PortError> {
        self.0.push(format!("alarm.set_alarm({on})"));
        result(self.1.alarm_fail, "alarm panel")
    }

    fn status(&self) -> Result<String, PortError> {
        self.0.push("alarm.status()".to_string());
        result(self.1.alarm_fail, "alarm panel").map(|()| self.1.alarm_status.clone())
    }
}

impl ReportingPort for Reporting {
    fn log_fire_alarm(&self, detail: &str) -> Result<(), PortError> {
        self.0.push(format!("reporting.log_fire_alarm({detail})"));
        result(self.1.reporting_fails, "web service")
    }

    fn log_engineer_required(&self, detail: &str) -> Result<(), PortError> {
        self.0.push(format!("reporting.log_engineer_required({detail})"));
        result(self.1.reporting_fails, "web service")
    }
}

impl AlertPort for Mail {
    fn send_mail(&self, to: &str, subject: &str, body: &str) -> Result<(), PortError> {
        self.0.push(format!("mail.send_mail({to}, {subject}, {body})"));
        result(self.1.mail_fails, "smtp relay")
    }
}

/// All five ports sharing one recorder.
pub fn ports(behaviour: &Behaviour) -> (Ports, Recorder) {
    let recorder = Recorder::default();
    let ports = Ports::new(
        Arc::new(Doors(recorder.clone(), behaviour.clone())),
        Arc::new(Lights(recorder.clone(), behaviour.clone())),
        Arc::new(Alarm(recorder.clone(), behaviour.clone())),
        Arc::new(Reporting(recorder.clone(), behaviour.clone())),
        Arc::new(Mail(recorder.clone(), behaviour.clone())),
    );
    (ports, recorder)
}

/// Fully wired controller starting in `start`.
pub fn controller(start: &str, behaviour: &Behaviour) -> (BuildingController, Recorder) {
    let (ports, recorder) = ports(behaviour);
    let controller = BuildingController::builder("TestBuilding")
        .start_mode(start)
        .ports(ports)
        .build()
        .expect("valid start mode");
    (controller, recorder)
}
