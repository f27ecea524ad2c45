//! Building operating modes.
//!
//! A building is always in exactly one of five modes. Three of them are
//! *normal* modes that the building moves between during an ordinary day;
//! the other two are *emergency* modes that can interrupt any normal mode
//! and must eventually hand control back to it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Returned when a mode name does not match any known mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown building mode '{0}'")]
pub struct ParseModeError(pub String);

/// Operating mode of the building.
///
/// Names are matched case-insensitively and rendered in their canonical
/// lowercase form.
///
/// # Example
///
/// ```rust
/// use building_controller::core::Mode;
///
/// let mode: Mode = "Fire Alarm".parse().unwrap();
/// assert_eq!(mode, Mode::FireAlarm);
/// assert_eq!(mode.name(), "fire alarm");
/// assert!(mode.is_emergency());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum Mode {
    #[serde(rename = "closed")]
    Closed,
    #[default]
    #[serde(rename = "out of hours")]
    OutOfHours,
    #[serde(rename = "open")]
    Open,
    #[serde(rename = "fire drill")]
    FireDrill,
    #[serde(rename = "fire alarm")]
    FireAlarm,
}

impl Mode {
    /// Every mode, in declaration order.
    pub const ALL: [Mode; 5] = [
        Mode::Closed,
        Mode::OutOfHours,
        Mode::Open,
        Mode::FireDrill,
        Mode::FireAlarm,
    ];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::OutOfHours => "out of hours",
            Self::Open => "open",
            Self::FireDrill => "fire drill",
            Self::FireAlarm => "fire alarm",
        }
    }

    /// `FireDrill` and `FireAlarm`.
    pub fn is_emergency(&self) -> bool {
        matches!(self, Self::FireDrill | Self::FireAlarm)
    }

    /// The normal mode this value corresponds to, if any.
    pub fn as_normal(&self) -> Option<NormalMode> {
        match self {
            Self::Closed => Some(NormalMode::Closed),
            Self::OutOfHours => Some(NormalMode::OutOfHours),
            Self::Open => Some(NormalMode::Open),
            Self::FireDrill | Self::FireAlarm => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    /// Lowercases the input and matches it against the canonical names.
    /// Surrounding whitespace is not trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Mode::ALL
            .into_iter()
            .find(|mode| mode.name() == lowered)
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}

/// A mode the building can occupy outside of an emergency.
///
/// Only normal modes are valid starting points for a controller and only a
/// normal mode can be remembered as the place to return to after an
/// emergency.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum NormalMode {
    #[serde(rename = "closed")]
    Closed,
    #[default]
    #[serde(rename = "out of hours")]
    OutOfHours,
    #[serde(rename = "open")]
    Open,
}

impl NormalMode {
    pub fn name(&self) -> &'static str {
        Mode::from(*self).name()
    }
}

impl From<NormalMode> for Mode {
    fn from(mode: NormalMode) -> Self {
        match mode {
            NormalMode::Closed => Mode::Closed,
            NormalMode::OutOfHours => Mode::OutOfHours,
            NormalMode::Open => Mode::Open,
        }
    }
}

impl fmt::Display for NormalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NormalMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Mode>()?
            .as_normal()
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_canonical_lowercase() {
        assert_eq!(Mode::Closed.name(), "closed");
        assert_eq!(Mode::OutOfHours.name(), "out of hours");
        assert_eq!(Mode::Open.name(), "open");
        assert_eq!(Mode::FireDrill.name(), "fire drill");
        assert_eq!(Mode::FireAlarm.name(), "fire alarm");
    }

    #[test]
    fn parsing_ignores_case() {
        assert_eq!("OPEN".parse::<Mode>(), Ok(Mode::Open));
        assert_eq!("Closed".parse::<Mode>(), Ok(Mode::Closed));
        assert_eq!("OUT OF HOURS".parse::<Mode>(), Ok(Mode::OutOfHours));
        assert_eq!("fIrE dRiLl".parse::<Mode>(), Ok(Mode::FireDrill));
    }

    #[test]
    fn parsing_rejects_unknown_names() {
        assert!("invalid".parse::<Mode>().is_err());
        assert!("".parse::<Mode>().is_err());
        assert!("history".parse::<Mode>().is_err());
        assert!(" open".parse::<Mode>().is_err());
    }

    #[test]
    fn parse_error_keeps_original_input() {
        let err = "Lobby".parse::<Mode>().unwrap_err();
        assert_eq!(err, ParseModeError("Lobby".to_string()));
        assert_eq!(err.to_string(), "unknown building mode 'Lobby'");
    }

    #[test]
    fn emergency_modes_are_identified() {
        let emergencies: Vec<_> = Mode::ALL.into_iter().filter(Mode::is_emergency).collect();
        assert_eq!(emergencies, vec![Mode::FireDrill, Mode::FireAlarm]);
    }

    #[test]
    fn normal_modes_convert_both_ways() {
        for mode in Mode::ALL {
            match mode.as_normal() {
                Some(normal) => assert_eq!(Mode::from(normal), mode),
                None => assert!(mode.is_emergency()),
            }
        }
    }

    #[test]
    fn normal_mode_parsing_rejects_emergencies() {
        assert_eq!("Open".parse::<NormalMode>(), Ok(NormalMode::Open));
        assert!("FIRE ALARM".parse::<NormalMode>().is_err());
        assert!("fire drill".parse::<NormalMode>().is_err());
    }

    #[test]
    fn default_mode_is_out_of_hours() {
        assert_eq!(Mode::default(), Mode::OutOfHours);
        assert_eq!(NormalMode::default(), NormalMode::OutOfHours);
    }

    #[test]
    fn mode_serializes_with_canonical_name() {
        let json = serde_json::to_string(&Mode::OutOfHours).unwrap();
        assert_eq!(json, "\"out of hours\"");
        let back: Mode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Mode::OutOfHours);
    }
}
