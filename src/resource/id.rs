//! Composite resource identifiers.
//!
//! The stored ID joins project and tag with [`ID_DELIMITER`]. Users import
//! with the colon form `{project}:{tag}` instead.

use super::error::ResourceError;
use super::schema::{ATTR_PROJECT, ATTR_TAG};

/// Delimiter inside stored resource IDs.
pub const ID_DELIMITER: char = '|';

/// Delimiter of the user-facing import ID.
pub const IMPORT_DELIMITER: char = ':';

/// Join project and tag into a resource ID.
#[must_use]
pub fn build_two_part_id(project: &str, tag: &str) -> String {
    format!("{project}{ID_DELIMITER}{tag}")
}

/// Split a resource ID back into `(project, tag)`.
pub fn parse_two_part_id(id: &str) -> Result<(String, String), ResourceError> {
    split_exactly_two(id, ID_DELIMITER).ok_or_else(|| ResourceError::MalformedId(id.to_string()))
}

/// Parse an import ID of the form `{project}:{tag}`.
pub fn parse_import_id(import_id: &str) -> Result<(String, String), ResourceError> {
    let (project, tag) = split_exactly_two(import_id, IMPORT_DELIMITER)
        .ok_or_else(|| ResourceError::InvalidImportId(import_id.to_string()))?;
    ensure_no_id_delimiter(ATTR_PROJECT, &project)?;
    ensure_no_id_delimiter(ATTR_TAG, &tag)?;
    Ok((project, tag))
}

/// Reject values that would not survive a round trip through the resource ID.
pub(crate) fn ensure_no_id_delimiter(
    attribute: &'static str,
    value: &str,
) -> Result<(), ResourceError> {
    if value.contains(ID_DELIMITER) {
        return Err(ResourceError::ReservedDelimiter {
            attribute,
            value: value.to_string(),
        });
    }
    Ok(())
}

fn split_exactly_two(value: &str, delimiter: char) -> Option<(String, String)> {
    let mut parts = value.split(delimiter);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(first), Some(second), None) => Some((first.to_string(), second.to_string())),
        _ => None,
    }
}
