use serde::{Deserialize, Serialize};

use crate::access_level::AccessLevel;

/// A protected tag as returned by `GET /projects/:id/protected_tags/:name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectedTag {
    /// Tag name or wildcard pattern
    pub name: String,
    /// Who may create tags matching `name`
    #[serde(default)]
    pub create_access_levels: Vec<TagAccessDescription>,
}

impl ProtectedTag {
    /// The level the resource tracks: the first create access level entry.
    #[must_use]
    pub fn create_access_level(&self) -> Option<AccessLevel> {
        self.create_access_levels.first().map(|d| d.access_level)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagAccessDescription {
    pub access_level: AccessLevel,
    #[serde(default)]
    pub access_level_description: String,
}

/// Body for `POST /projects/:id/protected_tags`.
#[derive(Debug, Clone, Serialize)]
pub struct ProtectTagOptions<'a> {
    pub name: &'a str,
    pub create_access_level: AccessLevel,
}

/// GitLab error body, e.g. `{"message": "404 Not found"}` or `{"error": "..."}`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// Best-effort human-readable message.
    pub(crate) fn into_message(self) -> Option<String> {
        match self.message {
            Some(serde_json::Value::String(s)) => Some(s),
            Some(other) => Some(other.to_string()),
            None => self.error,
        }
    }
}
