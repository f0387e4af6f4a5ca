//! GitLab protected tags API.
//!
//! This module provides:
//! - The [`ProtectedTagsApi`] trait the resource manager is written against
//! - [`GitLabClient`], the REST v4 implementation over `reqwest`
//! - Response types and the [`GitLabError`] type

mod api;
mod client;
mod error;
mod types;

pub use api::ProtectedTagsApi;
pub use client::{GitLabClient, PRIVATE_TOKEN_HEADER};
pub use error::GitLabError;
pub use types::{ProtectTagOptions, ProtectedTag, TagAccessDescription};
