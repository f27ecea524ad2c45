//! Building identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Case-insensitive building identifier.
///
/// Stored in lowercase; no other normalisation is applied, so whitespace
/// and punctuation are kept as given and the empty identifier is allowed.
///
/// # Example
///
/// ```rust
/// use building_controller::BuildingId;
///
/// let id = BuildingId::new("Main-Campus_B#2");
/// assert_eq!(id.as_str(), "main-campus_b#2");
/// assert_eq!(id, BuildingId::new("MAIN-CAMPUS_B#2"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct BuildingId(String);

impl BuildingId {
    pub fn new(id: &str) -> Self {
        Self(id.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for BuildingId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for BuildingId {
    fn from(id: String) -> Self {
        Self::new(&id)
    }
}

impl From<BuildingId> for String {
    fn from(id: BuildingId) -> Self {
        id.0
    }
}

impl AsRef<str> for BuildingId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for BuildingId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other.to_lowercase()
    }
}

impl PartialEq<&str> for BuildingId {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl fmt::Display for BuildingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
