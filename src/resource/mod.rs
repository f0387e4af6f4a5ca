//! The `gitlab_tag_protection` resource.
//!
//! This module provides:
//! - Create, read, delete and import of tag protections
//! - The resource schema and configuration validation
//! - Encoding and decoding of the composite resource ID

mod crud;
mod error;
mod id;
mod schema;
mod types;

pub use crud::{
    create_tag_protection, delete_tag_protection, import_tag_protection, read_tag_protection,
};
pub use error::ResourceError;
pub use id::{build_two_part_id, parse_import_id, parse_two_part_id, ID_DELIMITER, IMPORT_DELIMITER};
pub use schema::{
    replacement_fields, schema, validate_config, validate_create_access_level, AttributeSchema,
    ResourceSchema, ATTR_CREATE_ACCESS_LEVEL, ATTR_ID, ATTR_PROJECT, ATTR_TAG, RESOURCE_TYPE,
};
pub use types::{TagProtectionConfig, TagProtectionState};
