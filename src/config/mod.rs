//! Provider configuration loaded from `~/.gitlab-tag-protection/config.toml`.
//!
//! The file is optional; missing fields fall back to their defaults and
//! command-line / environment values override whatever the file sets.

mod loader;
pub use loader::{load_provider_config, load_provider_config_from};

use reqwest::{Certificate, Client, Url};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::gitlab::GitLabClient;

/// GitLab.com REST API root.
pub const DEFAULT_BASE_URL: &str = "https://gitlab.com/api/v4/";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const PEM_CERTIFICATE_HEADER: &str = "-----BEGIN CERTIFICATE-----";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse provider config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid GitLab base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Invalid CA certificate {path}: {reason}")]
    Certificate { path: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Connection settings (`[gitlab]` table in the TOML file).
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GitLabSettings {
    /// Personal or project access token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// API root, e.g. `https://gitlab.example.com/api/v4/`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// PEM file with an additional trusted root certificate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cacert_file: Option<PathBuf>,
    /// Skip TLS certificate verification
    #[serde(default)]
    pub insecure: bool,
}

impl Default for GitLabSettings {
    fn default() -> Self {
        Self {
            token: None,
            base_url: default_base_url(),
            cacert_file: None,
            insecure: false,
        }
    }
}

impl fmt::Debug for GitLabSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitLabSettings")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("cacert_file", &self.cacert_file)
            .field("insecure", &self.insecure)
            .finish()
    }
}

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub token: Option<String>,
    pub base_url: Option<String>,
    pub cacert_file: Option<PathBuf>,
    pub insecure: Option<bool>,
}

/// Top-level provider configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderConfig {
    #[serde(default)]
    pub gitlab: GitLabSettings,
}

impl ProviderConfig {
    /// Apply overrides; set values win over the file.
    #[must_use]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(token) = overrides.token {
            self.gitlab.token = Some(token);
        }
        if let Some(base_url) = overrides.base_url {
            self.gitlab.base_url = base_url;
        }
        if let Some(cacert_file) = overrides.cacert_file {
            self.gitlab.cacert_file = Some(cacert_file);
        }
        if let Some(insecure) = overrides.insecure {
            self.gitlab.insecure = insecure;
        }
        self
    }

    /// Build the GitLab client described by this configuration.
    pub fn build_client(&self) -> Result<GitLabClient, ConfigError> {
        let base_url = normalize_base_url(&self.gitlab.base_url)?;

        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(ref path) = self.gitlab.cacert_file {
            let pem = std::fs::read_to_string(path)?;
            let invalid = |reason: String| ConfigError::Certificate {
                path: path.display().to_string(),
                reason,
            };
            if !pem.contains(PEM_CERTIFICATE_HEADER) {
                return Err(invalid("no PEM certificate found".to_string()));
            }
            let cert = Certificate::from_pem(pem.as_bytes()).map_err(|e| invalid(e.to_string()))?;
            builder = builder.add_root_certificate(cert);
        }
        if self.gitlab.insecure {
            builder = builder.danger_accept_invalid_certs(true);
        }
        let http = builder
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(GitLabClient::with_http_client(
            http,
            base_url,
            self.gitlab.token.clone(),
        ))
    }
}

/// Parse the base URL and make sure its path ends with `/`.
pub fn normalize_base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let mut url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot carry a path".to_string()));
    }
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Resolve the canonical path for the provider config file.
#[must_use]
pub fn provider_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".gitlab-tag-protection").join("config.toml"))
}

#[cfg(test)]
#[path = "../config_tests.rs"]
mod config_tests;
