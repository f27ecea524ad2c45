//! Fire alarm notification with mail fallback.
//!
//! The reporting service is told about every fire alarm. When that call
//! fails the failure is mailed to a fixed address instead. Neither step can
//! fail the transition that triggered it; the outcome is only returned for
//! diagnostics.

use crate::config::ControllerConfig;
use crate::ports::{PortError, Ports};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// What happened to a fire alarm notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationOutcome {
    /// The reporting service accepted the event.
    Logged,
    /// No reporting service is bound.
    Skipped,
    /// Logging failed and the failure was mailed instead.
    Escalated { error: String },
    /// Logging failed and no mail transport is bound.
    Unreported { error: String },
    /// Logging failed and so did the mail.
    EscalationFailed { error: String, alert_error: String },
}

impl NotificationOutcome {
    /// True when the reporting service itself received the event.
    pub fn is_logged(&self) -> bool {
        matches!(self, Self::Logged)
    }
}

/// Log the fire alarm, mailing the failure if logging is not possible.
pub fn notify_fire_alarm(ports: &Ports, config: &ControllerConfig) -> NotificationOutcome {
    let Some(reporting) = ports.reporting.as_ref() else {
        return NotificationOutcome::Skipped;
    };

    let failure = match reporting.log_fire_alarm(&config.fire_alarm_detail) {
        Ok(()) => return NotificationOutcome::Logged,
        Err(failure) => failure,
    };
    warn!(error = %failure, "failed to log fire alarm, falling back to mail");

    escalate(ports, config, failure)
}

fn escalate(ports: &Ports, config: &ControllerConfig, failure: PortError) -> NotificationOutcome {
    let error = failure.to_string();

    let Some(alerts) = ports.alerts.as_ref() else {
        error!(%error, "fire alarm went unreported: no alert transport bound");
        return NotificationOutcome::Unreported { error };
    };

    match alerts.send_mail(&config.alert_recipient, &config.alert_subject, &error) {
        Ok(()) => NotificationOutcome::Escalated { error },
        Err(alert_failure) => {
            error!(%error, alert_error = %alert_failure, "fire alarm went unreported");
            NotificationOutcome::EscalationFailed {
                error,
                alert_error: alert_failure.to_string(),
            }
        }
    }
}
