use serde::{Deserialize, Serialize};

use super::id::build_two_part_id;

/// Desired configuration of a `gitlab_tag_protection` resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagProtectionConfig {
    /// Project ID or `namespace/name` path
    pub project: String,
    /// Tag name or wildcard pattern
    pub tag: String,
    /// Role name allowed to create matching tags (e.g. "maintainer")
    pub create_access_level: String,
}

/// Recorded state of a `gitlab_tag_protection` resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagProtectionState {
    /// Composite ID, always `build_two_part_id(project, tag)`
    pub id: String,
    pub project: String,
    pub tag: String,
    /// `None` until read back from GitLab (e.g. right after an import)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_access_level: Option<String>,
}

impl TagProtectionState {
    /// State with the ID derived from `project` and `tag`.
    #[must_use]
    pub fn new(project: String, tag: String, create_access_level: Option<String>) -> Self {
        Self {
            id: build_two_part_id(&project, &tag),
            project,
            tag,
            create_access_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_id() {
        let state = TagProtectionState::new("123".to_string(), "main".to_string(), None);
        assert_eq!(state.id, build_two_part_id("123", "main"));
        assert!(state.create_access_level.is_none());
    }

    #[test]
    fn test_state_serialization_skips_unknown_level() {
        let state = TagProtectionState::new("123".to_string(), "main".to_string(), None);
        let json = serde_json::to_string(&state).unwrap();
        assert!(!json.contains("create_access_level"));

        let state = TagProtectionState::new(
            "123".to_string(),
            "main".to_string(),
            Some("maintainer".to_string()),
        );
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["create_access_level"], "maintainer");
        assert_eq!(json["id"], "123|main");
    }

    #[test]
    fn test_config_deserialization() {
        let config: TagProtectionConfig = serde_json::from_str(
            r#"{"project":"group/app","tag":"v*","create_access_level":"developer"}"#,
        )
        .unwrap();
        assert_eq!(config.project, "group/app");
        assert_eq!(config.tag, "v*");
        assert_eq!(config.create_access_level, "developer");
    }
}
