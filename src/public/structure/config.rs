use rand::{TryRngCore, rngs::OsRng};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Runtime configuration. Loaded from the environment at startup and
/// hot-updatable over the settings route; field names double as the
/// environment variable names (upper-cased).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Admin password checked by the authenticate route.
    pub password: String,
    /// JWT signing secret. Falls back to a per-process random key.
    pub auth_key: Option<String>,
    /// Operational mode gating the data routes: "--", "r-" or "rw".
    /// Kept as the raw operator-supplied string so an invalid value
    /// surfaces per request instead of crashing startup.
    pub maintenance_mode: String,
    /// Where the maintenance response points clients for more info.
    pub status_page_url: String,
    /// Optional webhook notified when the maintenance mode changes.
    pub webhook_url: Option<String>,
    /// Upload content size limit (KiB).
    pub upload_limit_kb: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            password: "admin".to_string(),
            auth_key: None,
            maintenance_mode: "rw".to_string(),
            status_page_url: "/get/status".to_string(),
            webhook_url: None,
            upload_limit_kb: 1024,
        }
    }
}

static FALLBACK_SECRET_KEY: LazyLock<Vec<u8>> = LazyLock::new(|| {
    let mut secret = vec![0u8; 32];
    OsRng
        .try_fill_bytes(&mut secret)
        .expect("Failed to generate random secret key");
    secret
});

impl AppConfig {
    pub fn get_jwt_secret_key(&self) -> Vec<u8> {
        match self.auth_key.as_ref() {
            Some(auth_key) => auth_key.as_bytes().to_vec(),
            None => FALLBACK_SECRET_KEY.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_a_running_service() {
        let config = AppConfig::default();
        assert_eq!(config.maintenance_mode, "rw");
        assert_eq!(config.status_page_url, "/get/status");
        assert!(config.auth_key.is_none());
    }

    #[test]
    fn jwt_secret_prefers_the_configured_key() {
        let config = AppConfig {
            auth_key: Some("topsecret".to_string()),
            ..AppConfig::default()
        };
        assert_eq!(config.get_jwt_secret_key(), b"topsecret".to_vec());
    }

    #[test]
    fn jwt_secret_fallback_is_stable_within_the_process() {
        let config = AppConfig::default();
        assert_eq!(config.get_jwt_secret_key(), config.get_jwt_secret_key());
        assert_eq!(config.get_jwt_secret_key().len(), 32);
    }
}
