use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use std::fmt;
use tracing::debug;

use super::api::ProtectedTagsApi;
use super::error::GitLabError;
use super::types::{ApiErrorBody, ProtectTagOptions, ProtectedTag};
use crate::access_level::AccessLevel;

/// Header GitLab reads personal/project access tokens from.
pub const PRIVATE_TOKEN_HEADER: &str = "PRIVATE-TOKEN";

/// GitLab REST API v4 client for the protected tags endpoints.
#[derive(Clone)]
pub struct GitLabClient {
    http: Client,
    base_url: Url,
    token: Option<String>,
}

impl fmt::Debug for GitLabClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitLabClient")
            .field("base_url", &self.base_url.as_str())
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

impl GitLabClient {
    /// Client with default transport settings.
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, GitLabError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| GitLabError::InvalidConfig(format!("invalid base URL '{base_url}': {e}")))?;
        Ok(Self::with_http_client(Client::new(), base_url, token))
    }

    /// Client over a preconfigured `reqwest::Client` (TLS roots, proxies, ...).
    #[must_use]
    pub fn with_http_client(http: Client, base_url: Url, token: Option<String>) -> Self {
        Self {
            http,
            base_url,
            token: token.filter(|t| !t.is_empty()),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/projects/{project}/protected_tags[/{name}]`, each part one encoded segment.
    fn protected_tags_url(&self, project: &str, name: Option<&str>) -> Result<Url, GitLabError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                GitLabError::InvalidConfig(format!("base URL '{}' cannot carry a path", self.base_url))
            })?;
            segments
                .pop_if_empty()
                .push("projects")
                .push(project)
                .push("protected_tags");
            if let Some(name) = name {
                segments.push(name);
            }
        }
        Ok(url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.token {
            Some(ref token) => request.header(PRIVATE_TOKEN_HEADER, token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, GitLabError> {
        let response = self.authorize(request).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .inspect_err(|e| debug!("failed to read GitLab error body for {}: {}", status, e))
            .ok();
        let message = error_message(status, body);
        Err(GitLabError::from_status(status, message))
    }
}

/// Message for a failed response: the JSON `message`/`error` field, else the raw
/// body, else the status line when the body is empty or could not be read.
fn error_message(status: StatusCode, body: Option<String>) -> String {
    let body = body.unwrap_or_default();
    serde_json::from_str::<ApiErrorBody>(&body)
        .ok()
        .and_then(ApiErrorBody::into_message)
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                status.to_string()
            } else {
                body
            }
        })
}

#[async_trait]
impl ProtectedTagsApi for GitLabClient {
    async fn protect_tag(
        &self,
        project: &str,
        name: &str,
        create_access_level: AccessLevel,
    ) -> Result<ProtectedTag, GitLabError> {
        let url = self.protected_tags_url(project, None)?;
        debug!("POST {}", url);
        let body = ProtectTagOptions {
            name,
            create_access_level,
        };
        let response = self.send(self.http.post(url).json(&body)).await?;
        Ok(response.json::<ProtectedTag>().await?)
    }

    async fn unprotect_tag(&self, project: &str, name: &str) -> Result<(), GitLabError> {
        let url = self.protected_tags_url(project, Some(name))?;
        debug!("DELETE {}", url);
        self.send(self.http.delete(url)).await?;
        Ok(())
    }

    async fn get_protected_tag(
        &self,
        project: &str,
        name: &str,
    ) -> Result<ProtectedTag, GitLabError> {
        let url = self.protected_tags_url(project, Some(name))?;
        debug!("GET {}", url);
        let response = self.send(self.http.get(url)).await?;
        Ok(response.json::<ProtectedTag>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_tags_url_encodes_segments() {
        let client = GitLabClient::new("https://gitlab.example.com/api/v4/", None).unwrap();
        let url = client.protected_tags_url("group/sub/app", Some("release/v1")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://gitlab.example.com/api/v4/projects/group%2Fsub%2Fapp/protected_tags/release%2Fv1"
        );
    }

    #[test]
    fn test_protected_tags_url_without_trailing_slash() {
        let client = GitLabClient::new("https://gitlab.example.com/api/v4", None).unwrap();
        let url = client.protected_tags_url("42", None).unwrap();
        assert_eq!(
            url.as_str(),
            "https://gitlab.example.com/api/v4/projects/42/protected_tags"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = GitLabClient::new("not a url", None).unwrap_err();
        assert!(matches!(err, GitLabError::InvalidConfig(_)));
    }

    #[test]
    fn test_error_message_fallbacks() {
        assert_eq!(
            error_message(StatusCode::CONFLICT, Some(r#"{"message":"already exists"}"#.to_string())),
            "already exists"
        );
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, Some("Bad Gateway".to_string())),
            "Bad Gateway"
        );
        assert_eq!(
            error_message(StatusCode::INTERNAL_SERVER_ERROR, None),
            "500 Internal Server Error"
        );
        assert_eq!(error_message(StatusCode::FORBIDDEN, Some("  ".to_string())), "403 Forbidden");
    }

    #[test]
    fn test_empty_token_is_dropped() {
        let client = GitLabClient::new("https://gitlab.com/api/v4/", Some(String::new())).unwrap();
        assert!(client.token.is_none());
    }
}
