//! GitLab access levels and the role-name tables used by `create_access_level`.
//!
//! Both tables are compile-time constants; nothing mutates them at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer access level as reported by the GitLab API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessLevel(pub u32);

impl AccessLevel {
    pub const NO_ONE: Self = Self(0);
    pub const MINIMAL: Self = Self(5);
    pub const GUEST: Self = Self(10);
    pub const REPORTER: Self = Self(20);
    pub const DEVELOPER: Self = Self(30);
    pub const MAINTAINER: Self = Self(40);
    pub const OWNER: Self = Self(50);
    pub const ADMIN: Self = Self(60);

    /// Raw integer value sent on the wire.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role names accepted for `create_access_level`, in display order.
///
/// `master` is the deprecated spelling of `maintainer` and maps to the same level.
pub const CREATE_ACCESS_LEVELS: &[(&str, AccessLevel)] = &[
    ("no one", AccessLevel::NO_ONE),
    ("developer", AccessLevel::DEVELOPER),
    ("maintainer", AccessLevel::MAINTAINER),
    ("master", AccessLevel::MAINTAINER),
];

/// Reverse table used when reading a protection back from the API.
pub const ACCESS_LEVEL_NAMES: &[(AccessLevel, &str)] = &[
    (AccessLevel::NO_ONE, "no one"),
    (AccessLevel::MINIMAL, "minimal"),
    (AccessLevel::GUEST, "guest"),
    (AccessLevel::REPORTER, "reporter"),
    (AccessLevel::DEVELOPER, "developer"),
    (AccessLevel::MAINTAINER, "maintainer"),
    (AccessLevel::OWNER, "owner"),
    (AccessLevel::ADMIN, "admin"),
];

/// Look up the integer level for an accepted `create_access_level` name.
#[must_use]
pub fn create_access_level_by_name(name: &str) -> Option<AccessLevel> {
    CREATE_ACCESS_LEVELS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, level)| *level)
}

/// Look up the canonical role name for an integer level.
#[must_use]
pub fn access_level_name(level: AccessLevel) -> Option<&'static str> {
    ACCESS_LEVEL_NAMES
        .iter()
        .find(|(candidate, _)| *candidate == level)
        .map(|(_, name)| *name)
}

/// Accepted `create_access_level` names.
#[must_use]
pub fn accepted_create_access_levels() -> Vec<&'static str> {
    CREATE_ACCESS_LEVELS.iter().map(|(name, _)| *name).collect()
}
