//! Signing link token generation.

use std::fmt::Write;

use rand::Rng;

use signdesk_core::config::SigningConfig;

/// Number of random bytes behind each token.
const TOKEN_BYTES: usize = 32;

/// Generates signing tokens and builds the client-facing URLs that carry them.
#[derive(Debug, Clone)]
pub struct LinkService {
    config: SigningConfig,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(config: SigningConfig) -> Self {
        Self { config }
    }

    /// Generates a cryptographically secure random token (256 bits, hex).
    pub fn generate_token(&self) -> String {
        let mut bytes = [0u8; TOKEN_BYTES];
        rand::thread_rng().fill(&mut bytes[..]);
        bytes
            .iter()
            .fold(String::with_capacity(TOKEN_BYTES * 2), |mut out, b| {
                let _ = write!(out, "{b:02x}");
                out
            })
    }

    /// Full signing URL for a token.
    pub fn signing_url(&self, token: &str) -> String {
        self.config.signing_url(token)
    }
}

impl Default for LinkService {
    fn default() -> Self {
        Self::new(SigningConfig::default())
    }
}
