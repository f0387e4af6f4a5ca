//! Common test utilities

use async_trait::async_trait;
use gitlab_tag_protection::{
    AccessLevel, GitLabError, ProtectedTag, ProtectedTagsApi, TagAccessDescription,
    TagProtectionConfig,
};
use std::collections::{BTreeMap, VecDeque};
use std::sync::Mutex;

/// A call recorded by [`FakeGitLab`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Protect {
        project: String,
        name: String,
        level: AccessLevel,
    },
    Unprotect {
        project: String,
        name: String,
    },
    Get {
        project: String,
        name: String,
    },
}

/// In-memory stand-in for the GitLab protected tags API.
///
/// Behaves like GitLab: protecting an already protected tag is a conflict,
/// unprotecting or reading a missing one is not found. Failures can be queued
/// per operation and are returned before the in-memory behavior applies.
#[derive(Default)]
pub struct FakeGitLab {
    protections: Mutex<BTreeMap<(String, String), ProtectedTag>>,
    calls: Mutex<Vec<Call>>,
    protect_failures: Mutex<VecDeque<GitLabError>>,
    unprotect_failures: Mutex<VecDeque<GitLabError>>,
    get_failures: Mutex<VecDeque<GitLabError>>,
    /// Name GitLab reports back for a protected tag, keyed by requested name.
    renames: Mutex<BTreeMap<String, String>>,
}

#[allow(dead_code)] // Not every test binary uses every helper
impl FakeGitLab {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an existing protection with an arbitrary create access level.
    pub fn with_protection(self, project: &str, name: &str, level: u32) -> Self {
        self.protections.lock().unwrap().insert(
            (project.to_string(), name.to_string()),
            protected_tag(name, level),
        );
        self
    }

    /// Seed an existing protection exactly as GitLab would return it.
    pub fn with_tag(self, project: &str, tag: ProtectedTag) -> Self {
        self.protections
            .lock()
            .unwrap()
            .insert((project.to_string(), tag.name.clone()), tag);
        self
    }

    pub fn fail_next_protect(&self, err: GitLabError) {
        self.protect_failures.lock().unwrap().push_back(err);
    }

    pub fn fail_next_unprotect(&self, err: GitLabError) {
        self.unprotect_failures.lock().unwrap().push_back(err);
    }

    pub fn fail_next_get(&self, err: GitLabError) {
        self.get_failures.lock().unwrap().push_back(err);
    }

    /// Make GitLab store `requested` under the name `stored`.
    pub fn rename(&self, requested: &str, stored: &str) {
        self.renames
            .lock()
            .unwrap()
            .insert(requested.to_string(), stored.to_string());
    }

    /// Remove a protection behind the resource's back.
    pub fn remove_out_of_band(&self, project: &str, name: &str) {
        self.protections
            .lock()
            .unwrap()
            .remove(&(project.to_string(), name.to_string()));
    }

    pub fn protection(&self, project: &str, name: &str) -> Option<ProtectedTag> {
        self.protections
            .lock()
            .unwrap()
            .get(&(project.to_string(), name.to_string()))
            .cloned()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ProtectedTagsApi for FakeGitLab {
    async fn protect_tag(
        &self,
        project: &str,
        name: &str,
        create_access_level: AccessLevel,
    ) -> Result<ProtectedTag, GitLabError> {
        self.record(Call::Protect {
            project: project.to_string(),
            name: name.to_string(),
            level: create_access_level,
        });
        if let Some(err) = self.protect_failures.lock().unwrap().pop_front() {
            return Err(err);
        }

        let stored_name = self
            .renames
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .unwrap_or_else(|| name.to_string());
        let key = (project.to_string(), stored_name.clone());
        let mut protections = self.protections.lock().unwrap();
        if protections.contains_key(&key) {
            return Err(GitLabError::Conflict(format!(
                "Protected tag '{stored_name}' already exists"
            )));
        }
        let tag = protected_tag(&stored_name, create_access_level.value());
        protections.insert(key, tag.clone());
        Ok(tag)
    }

    async fn unprotect_tag(&self, project: &str, name: &str) -> Result<(), GitLabError> {
        self.record(Call::Unprotect {
            project: project.to_string(),
            name: name.to_string(),
        });
        if let Some(err) = self.unprotect_failures.lock().unwrap().pop_front() {
            return Err(err);
        }
        self.protections
            .lock()
            .unwrap()
            .remove(&(project.to_string(), name.to_string()))
            .map(|_| ())
            .ok_or_else(|| GitLabError::NotFound("404 Not found".to_string()))
    }

    async fn get_protected_tag(
        &self,
        project: &str,
        name: &str,
    ) -> Result<ProtectedTag, GitLabError> {
        self.record(Call::Get {
            project: project.to_string(),
            name: name.to_string(),
        });
        if let Some(err) = self.get_failures.lock().unwrap().pop_front() {
            return Err(err);
        }
        self.protection(project, name)
            .ok_or_else(|| GitLabError::NotFound("404 Not found".to_string()))
    }
}

pub fn protected_tag(name: &str, level: u32) -> ProtectedTag {
    ProtectedTag {
        name: name.to_string(),
        create_access_levels: vec![TagAccessDescription {
            access_level: AccessLevel(level),
            access_level_description: String::new(),
        }],
    }
}

#[allow(dead_code)]
pub fn config(project: &str, tag: &str, level: &str) -> TagProtectionConfig {
    TagProtectionConfig {
        project: project.to_string(),
        tag: tag.to_string(),
        create_access_level: level.to_string(),
    }
}
