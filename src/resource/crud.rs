//! Tag protection CRUD operations.
//!
//! Each operation takes the GitLab client explicitly. There is no update:
//! every attribute forces replacement.

use tracing::{debug, info, warn};

use super::error::ResourceError;
use super::id::{build_two_part_id, parse_import_id, parse_two_part_id};
use super::schema::validate_config;
use super::types::{TagProtectionConfig, TagProtectionState};
use crate::access_level::{access_level_name, AccessLevel};
use crate::gitlab::{GitLabError, ProtectedTag, ProtectedTagsApi};

/// Protect a tag and return its state as read back from GitLab.
///
/// If the first protect call fails (typically because the tag is already
/// protected with other settings) the existing protection is removed and the
/// protect call is retried once. A failing unprotect or retry is returned as is.
pub async fn create_tag_protection<C>(
    client: &C,
    config: &TagProtectionConfig,
) -> Result<TagProtectionState, ResourceError>
where
    C: ProtectedTagsApi + ?Sized,
{
    let level = validate_config(config)?;
    let project = config.project.as_str();
    let tag = config.tag.as_str();

    debug!("create gitlab tag protection on {} for project {}", tag, project);

    let protected = match client.protect_tag(project, tag, level).await {
        Ok(protected) => protected,
        Err(err) => reprotect(client, config, level, &err).await?,
    };

    let id = build_two_part_id(project, &protected.name);
    let state = read_tag_protection(client, &id)
        .await?
        .ok_or_else(|| ResourceError::VanishedAfterCreate {
            project: project.to_string(),
            tag: protected.name.clone(),
        })?;

    info!("Created tag protection: {}", state.id);
    Ok(state)
}

async fn reprotect<C>(
    client: &C,
    config: &TagProtectionConfig,
    level: AccessLevel,
    cause: &GitLabError,
) -> Result<ProtectedTag, ResourceError>
where
    C: ProtectedTagsApi + ?Sized,
{
    warn!(
        "protecting {} on project {} failed ({}); removing existing protection and retrying",
        config.tag, config.project, cause
    );
    client.unprotect_tag(&config.project, &config.tag).await?;
    Ok(client.protect_tag(&config.project, &config.tag, level).await?)
}

/// Read a tag protection by resource ID.
///
/// # Returns
/// * `Ok(Some(state))` with the state as stored by GitLab
/// * `Ok(None)` if the protection no longer exists
/// * `Err(ResourceError)` for a malformed ID, an unmapped access level or any other API error
pub async fn read_tag_protection<C>(
    client: &C,
    id: &str,
) -> Result<Option<TagProtectionState>, ResourceError>
where
    C: ProtectedTagsApi + ?Sized,
{
    let (project, tag) = parse_two_part_id(id)
        .inspect_err(|_| warn!("cannot get project and tag from resource ID: {}", id))?;

    debug!("read gitlab tag protection for project {}, tag {}", project, tag);

    let protected = match client.get_protected_tag(&project, &tag).await {
        Ok(protected) => protected,
        Err(err) if err.is_not_found() => {
            debug!("gitlab tag protection not found {}/{}", project, tag);
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };

    let level = protected
        .create_access_level()
        .ok_or_else(|| ResourceError::MissingCreateAccessLevel(protected.name.clone()))?;
    let level_name =
        access_level_name(level).ok_or(ResourceError::UnknownAccessLevel(level.value()))?;

    Ok(Some(TagProtectionState::new(
        project,
        protected.name,
        Some(level_name.to_string()),
    )))
}

/// Remove the protection recorded in `state`.
///
/// Uses the recorded `project` and `tag`, not the ID. Errors, including
/// not-found, are returned unchanged.
pub async fn delete_tag_protection<C>(
    client: &C,
    state: &TagProtectionState,
) -> Result<(), ResourceError>
where
    C: ProtectedTagsApi + ?Sized,
{
    debug!("delete gitlab protected tag {} for project {}", state.tag, state.project);

    client.unprotect_tag(&state.project, &state.tag).await?;

    info!("Deleted tag protection: {}", state.id);
    Ok(())
}

/// Build state from an import ID of the form `{project}:{tag}`.
///
/// GitLab is not contacted; the access level stays unknown until the next read.
pub fn import_tag_protection(import_id: &str) -> Result<TagProtectionState, ResourceError> {
    let (project, tag) = parse_import_id(import_id)?;
    debug!("import gitlab tag protection for project {}, tag {}", project, tag);
    Ok(TagProtectionState::new(project, tag, None))
}
