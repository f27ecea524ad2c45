//! Controller configuration.
//!
//! The defaults are the values the building has always used; a deployment
//! only needs to supply the fields it wants to change.
//!
//! Validation uses Stillwater's `Validation` so every problem with a
//! configuration is reported at once instead of one per attempt.
//!
//! # Example
//!
//! ```rust
//! use building_controller::config::ControllerConfig;
//!
//! let config = ControllerConfig::from_json(r#"{ "alert_recipient": "ops@example.org" }"#).unwrap();
//! assert_eq!(config.alert_recipient, "ops@example.org");
//! assert_eq!(config.fault_marker, "FAULT");
//! ```

use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

pub const DEFAULT_ALERT_RECIPIENT: &str = "smartbuilding@uclan.ac.uk";
pub const DEFAULT_ALERT_SUBJECT: &str = "failed to log alarm";
pub const DEFAULT_FIRE_ALARM_DETAIL: &str = "fire alarm";
pub const DEFAULT_FAULT_MARKER: &str = "FAULT";

/// A single problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigViolation {
    #[error("alert recipient is empty")]
    EmptyRecipient,

    #[error("alert recipient '{0}' is not a mail address")]
    MalformedRecipient(String),

    #[error("alert subject is empty")]
    EmptySubject,

    #[error("fault marker is empty")]
    EmptyFaultMarker,
}

/// Errors from loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {0:?}")]
    Invalid(Vec<ConfigViolation>),
}

/// Tunables for notification and fault detection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Where fire alarm logging failures are mailed
    pub alert_recipient: String,
    pub alert_subject: String,
    /// Detail string sent with every fire alarm log
    pub fire_alarm_detail: String,
    /// Substring of a device status that means an engineer is required
    pub fault_marker: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            alert_recipient: DEFAULT_ALERT_RECIPIENT.to_string(),
            alert_subject: DEFAULT_ALERT_SUBJECT.to_string(),
            fire_alarm_detail: DEFAULT_FIRE_ALARM_DETAIL.to_string(),
            fault_marker: DEFAULT_FAULT_MARKER.to_string(),
        }
    }
}

impl ControllerConfig {
    /// Parse and validate a JSON configuration. Missing fields take their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.check().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Run every check, accumulating all violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let checks = vec![
            self.check_recipient(),
            required(&self.alert_subject, ConfigViolation::EmptySubject),
            required(&self.fault_marker, ConfigViolation::EmptyFaultMarker),
        ];

        Validation::all_vec(checks).map(|_| ())
    }

    /// [`validate`](Self::validate) as a plain `Result`.
    pub fn check(&self) -> Result<(), Vec<ConfigViolation>> {
        match self.validate() {
            Validation::Success(()) => Ok(()),
            Validation::Failure(violations) => Err(violations.iter().cloned().collect()),
        }
    }

    fn check_recipient(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        if self.alert_recipient.is_empty() {
            Validation::fail(ConfigViolation::EmptyRecipient)
        } else if !self.alert_recipient.contains('@') {
            Validation::fail(ConfigViolation::MalformedRecipient(
                self.alert_recipient.clone(),
            ))
        } else {
            Validation::success(())
        }
    }
}

fn required(value: &str, violation: ConfigViolation) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    if value.is_empty() {
        Validation::fail(violation)
    } else {
        Validation::success(())
    }
}
