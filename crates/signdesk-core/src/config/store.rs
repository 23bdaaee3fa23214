//! Document store configuration.

use serde::{Deserialize, Serialize};

/// Selects the persistence backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store provider type. Only `"memory"` ships today.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Whether to seed the built-in template catalog at startup.
    #[serde(default = "default_seed_templates")]
    pub seed_templates: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            seed_templates: default_seed_templates(),
        }
    }
}

fn default_provider() -> String {
    "memory".to_string()
}

fn default_seed_templates() -> bool {
    true
}
