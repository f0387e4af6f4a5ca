use async_trait::async_trait;

use super::error::GitLabError;
use super::types::ProtectedTag;
use crate::access_level::AccessLevel;

/// The subset of the GitLab "protected tags" API the resource relies on.
///
/// `project` is either a numeric project ID or a `namespace/name` path;
/// `name` is a tag name or wildcard pattern.
#[async_trait]
pub trait ProtectedTagsApi: Send + Sync {
    /// Protect tags matching `name`
    ///
    /// # Returns
    /// * `Ok(ProtectedTag)` with the protection as stored by GitLab
    /// * `Err(GitLabError)` if GitLab rejects it (e.g. already protected)
    async fn protect_tag(
        &self,
        project: &str,
        name: &str,
        create_access_level: AccessLevel,
    ) -> Result<ProtectedTag, GitLabError>;

    /// Remove the protection for `name`
    async fn unprotect_tag(&self, project: &str, name: &str) -> Result<(), GitLabError>;

    /// Fetch a single protection
    ///
    /// # Returns
    /// * `Err(GitLabError::NotFound)` if there is no protection for `name`
    async fn get_protected_tag(&self, project: &str, name: &str)
        -> Result<ProtectedTag, GitLabError>;
}
