//! GitLab tag protection resource.
//!
//! Manages `gitlab_tag_protection` resources: protects a tag pattern on a
//! GitLab project, reads the protection back, removes it, and imports
//! existing protections by `{project}:{tag}`.

// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::indexing_slicing
    )
)]

pub mod access_level;
pub mod config;
pub mod gitlab;
pub mod logging;
pub mod resource;

// Re-export commonly used types
pub use access_level::{
    access_level_name, accepted_create_access_levels, create_access_level_by_name, AccessLevel,
};
pub use config::{load_provider_config, ConfigError, ConfigOverrides, GitLabSettings, ProviderConfig};
pub use gitlab::{GitLabClient, GitLabError, ProtectedTag, ProtectedTagsApi, TagAccessDescription};
pub use resource::{
    build_two_part_id, create_tag_protection, delete_tag_protection, import_tag_protection,
    parse_import_id, parse_two_part_id, read_tag_protection, schema, validate_config,
    ResourceError, TagProtectionConfig, TagProtectionState,
};
