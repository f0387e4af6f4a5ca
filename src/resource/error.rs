use thiserror::Error;

use crate::gitlab::GitLabError;

/// Errors from tag protection resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error(transparent)]
    Api(#[from] GitLabError),

    #[error("expected {attribute} to be one of [{accepted}], got '{value}'")]
    InvalidAccessLevelName {
        attribute: &'static str,
        value: String,
        accepted: String,
    },

    #[error("{0} must not be empty")]
    EmptyAttribute(&'static str),

    #[error("{attribute} must not contain '|', got '{value}'")]
    ReservedDelimiter {
        attribute: &'static str,
        value: String,
    },

    #[error("unknown access level: {0}")]
    UnknownAccessLevel(u32),

    #[error("protected tag '{0}' has no create access levels")]
    MissingCreateAccessLevel(String),

    #[error("invalid tag protection import format; expected '{{project_id}}:{{tag_name}}', got '{0}'")]
    InvalidImportId(String),

    #[error("malformed resource ID '{0}'; expected two parts")]
    MalformedId(String),

    #[error("protected tag '{tag}' on project '{project}' was not found right after it was created")]
    VanishedAfterCreate { project: String, tag: String },
}

impl ResourceError {
    /// The underlying API error, if this came from GitLab.
    #[must_use]
    pub fn api_error(&self) -> Option<&GitLabError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_access_level_message() {
        assert_eq!(
            ResourceError::UnknownAccessLevel(45).to_string(),
            "unknown access level: 45"
        );
    }

    #[test]
    fn test_import_format_message() {
        assert_eq!(
            ResourceError::InvalidImportId("123".to_string()).to_string(),
            "invalid tag protection import format; expected '{project_id}:{tag_name}', got '123'"
        );
    }

    #[test]
    fn test_api_error_passthrough() {
        let err = ResourceError::from(GitLabError::Forbidden("403 Forbidden".to_string()));
        assert!(matches!(err.api_error(), Some(GitLabError::Forbidden(_))));
        assert!(ResourceError::MalformedId("x".to_string()).api_error().is_none());
    }
}
