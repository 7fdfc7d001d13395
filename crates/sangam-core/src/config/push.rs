//! Browser push delivery configuration.

use serde::{Deserialize, Serialize};

/// Browser push (Push API) delivery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushConfig {
    /// Whether push delivery is enabled.
    #[serde(default)]
    pub enabled: bool,
    /// VAPID public key handed to subscribing clients.
    #[serde(default)]
    pub vapid_public_key: String,
    /// VAPID private key (server-side only).
    #[serde(default)]
    pub vapid_private_key: String,
    /// Contact address sent in the VAPID subject claim.
    #[serde(default = "default_subject")]
    pub subject: String,
    /// Delivery request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            vapid_public_key: String::new(),
            vapid_private_key: String::new(),
            subject: default_subject(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_subject() -> String {
    "mailto:admin@sangam.example".to_string()
}

fn default_timeout() -> u64 {
    10
}
