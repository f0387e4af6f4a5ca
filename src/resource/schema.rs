//! Resource schema, attribute validation and replacement planning.

use serde::Serialize;

use super::error::ResourceError;
use super::id::ensure_no_id_delimiter;
use super::types::TagProtectionConfig;
use crate::access_level::{accepted_create_access_levels, create_access_level_by_name, AccessLevel};

/// Resource type name as used in configuration.
pub const RESOURCE_TYPE: &str = "gitlab_tag_protection";

pub const ATTR_PROJECT: &str = "project";
pub const ATTR_TAG: &str = "tag";
pub const ATTR_CREATE_ACCESS_LEVEL: &str = "create_access_level";
pub const ATTR_ID: &str = "id";

/// Description of one resource attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeSchema {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: &'static str,
    pub required: bool,
    pub computed: bool,
    pub force_new: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<&'static str>>,
}

impl AttributeSchema {
    fn required_string(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: "string",
            description,
            required: true,
            computed: false,
            force_new: true,
            allowed_values: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceSchema {
    pub type_name: &'static str,
    pub attributes: Vec<AttributeSchema>,
}

impl ResourceSchema {
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&AttributeSchema> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

/// Schema of `gitlab_tag_protection`. Every user-set attribute forces replacement.
#[must_use]
pub fn schema() -> ResourceSchema {
    let mut create_access_level = AttributeSchema::required_string(
        ATTR_CREATE_ACCESS_LEVEL,
        "Access level allowed to create matching tags.",
    );
    create_access_level.allowed_values = Some(accepted_create_access_levels());

    ResourceSchema {
        type_name: RESOURCE_TYPE,
        attributes: vec![
            AttributeSchema {
                name: ATTR_ID,
                kind: "string",
                description: "Composite of project and tag.",
                required: false,
                computed: true,
                force_new: false,
                allowed_values: None,
            },
            AttributeSchema::required_string(ATTR_PROJECT, "ID or full path of the project."),
            AttributeSchema::required_string(ATTR_TAG, "Name of the tag or wildcard pattern."),
            create_access_level,
        ],
    }
}

/// Check a `create_access_level` value and resolve it to its integer level.
pub fn validate_create_access_level(value: &str) -> Result<AccessLevel, ResourceError> {
    create_access_level_by_name(value).ok_or_else(|| ResourceError::InvalidAccessLevelName {
        attribute: ATTR_CREATE_ACCESS_LEVEL,
        value: value.to_string(),
        accepted: accepted_create_access_levels().join(", "),
    })
}

/// Validate a whole configuration block before any API call.
pub fn validate_config(config: &TagProtectionConfig) -> Result<AccessLevel, ResourceError> {
    if config.project.is_empty() {
        return Err(ResourceError::EmptyAttribute(ATTR_PROJECT));
    }
    if config.tag.is_empty() {
        return Err(ResourceError::EmptyAttribute(ATTR_TAG));
    }
    ensure_no_id_delimiter(ATTR_PROJECT, &config.project)?;
    ensure_no_id_delimiter(ATTR_TAG, &config.tag)?;
    validate_create_access_level(&config.create_access_level)
}

/// Attributes whose change between `prior` and `proposed` forces replacement.
#[must_use]
pub fn replacement_fields(
    prior: &TagProtectionConfig,
    proposed: &TagProtectionConfig,
) -> Vec<&'static str> {
    [
        (ATTR_PROJECT, prior.project == proposed.project),
        (ATTR_TAG, prior.tag == proposed.tag),
        (
            ATTR_CREATE_ACCESS_LEVEL,
            prior.create_access_level == proposed.create_access_level,
        ),
    ]
    .into_iter()
    .filter(|(_, unchanged)| !unchanged)
    .map(|(name, _)| name)
    .collect()
}
