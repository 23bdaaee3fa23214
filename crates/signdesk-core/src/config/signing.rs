//! Signing link configuration.

use serde::{Deserialize, Serialize};

/// Controls how client-facing signing URLs are built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigningConfig {
    /// Public base URL of the signing front end, e.g. `https://sign.example.com`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path prefix placed between the base URL and the token.
    #[serde(default = "default_path_prefix")]
    pub path_prefix: String,
}

impl SigningConfig {
    /// Build the signing URL for a token: `{base_url}{path_prefix}/{token}`.
    pub fn signing_url(&self, token: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let prefix = self.path_prefix.trim_matches('/');
        if prefix.is_empty() {
            format!("{base}/{token}")
        } else {
            format!("{base}/{prefix}/{token}")
        }
    }
}

impl Default for SigningConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            path_prefix: default_path_prefix(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_path_prefix() -> String {
    "/sign".to_string()
}
