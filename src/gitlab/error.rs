use http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitLabError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    #[error("Permission denied: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("GitLab API returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to decode GitLab response: {0}")]
    Decode(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GitLabError {
    /// Map a non-success HTTP status and its message to an error.
    #[must_use]
    pub fn from_status(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::NOT_FOUND => Self::NotFound(message),
            StatusCode::UNAUTHORIZED => Self::Unauthorized(message),
            StatusCode::FORBIDDEN => Self::Forbidden(message),
            StatusCode::CONFLICT => Self::Conflict(message),
            other => Self::Status {
                status: other.as_u16(),
                message,
            },
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<reqwest::Error> for GitLabError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if err.is_builder() {
            Self::InvalidConfig(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_mapping() {
        assert!(GitLabError::from_status(StatusCode::NOT_FOUND, "404 Not found".into()).is_not_found());
        assert!(matches!(
            GitLabError::from_status(StatusCode::UNAUTHORIZED, "401".into()),
            GitLabError::Unauthorized(_)
        ));
        assert!(matches!(
            GitLabError::from_status(StatusCode::FORBIDDEN, "403".into()),
            GitLabError::Forbidden(_)
        ));
        assert!(matches!(
            GitLabError::from_status(StatusCode::CONFLICT, "Protected tag 'v1' already exists".into()),
            GitLabError::Conflict(_)
        ));
        match GitLabError::from_status(StatusCode::UNPROCESSABLE_ENTITY, "bad".into()) {
            GitLabError::Status { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "bad");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_display() {
        let err = GitLabError::Status {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "GitLab API returned 500: boom");
        assert_eq!(
            GitLabError::NotFound("404 Not found".to_string()).to_string(),
            "Resource not found: 404 Not found"
        );
    }
}
