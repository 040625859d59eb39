use dotenv::dotenv;
use log::{error, info, warn};
use std::sync::{LazyLock, RwLock};

use crate::public::structure::config::AppConfig;

pub static APP_CONFIG: LazyLock<RwLock<AppConfig>> = LazyLock::new(|| {
    dotenv().ok();
    let config = match envy::from_env::<AppConfig>() {
        Ok(config) => config,
        Err(err) => {
            warn!("Failed to read configuration from environment, using defaults: {err}");
            AppConfig::default()
        }
    };
    RwLock::new(config)
});

/// Snapshot of the current configuration. Taken fresh wherever current
/// values matter, so operator updates apply without a restart.
pub fn get_config() -> AppConfig {
    APP_CONFIG.read().unwrap().clone()
}

/// Replace the runtime configuration. A maintenance mode transition is
/// logged and, when a webhook is configured, announced.
pub fn update_config(new_config: AppConfig) -> anyhow::Result<()> {
    let old_mode = {
        let mut w = APP_CONFIG.write().unwrap();
        let old_mode = w.maintenance_mode.clone();
        *w = new_config.clone();
        old_mode
    };

    if old_mode != new_config.maintenance_mode {
        info!(
            "Maintenance mode changed from '{}' to '{}'",
            old_mode, new_config.maintenance_mode
        );
        notify_mode_change(&new_config, &old_mode);
    }

    Ok(())
}

fn notify_mode_change(config: &AppConfig, old_mode: &str) {
    let Some(webhook_url) = config.webhook_url.clone() else {
        return;
    };
    let body = serde_json::json!({
        "content": format!(
            "Maintenance mode changed from '{}' to '{}'",
            old_mode, config.maintenance_mode
        ),
    });
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            handle.spawn(async move {
                let result = reqwest::Client::new()
                    .post(&webhook_url)
                    .json(&body)
                    .send()
                    .await;
                if let Err(err) = result {
                    error!("Failed to deliver mode change webhook: {err}");
                }
            });
        }
        Err(_) => warn!("Skipping mode change webhook, no async runtime available"),
    }
}

#[cfg(test)]
pub mod test_support {
    use std::sync::{Mutex, MutexGuard};

    // The configuration is process-global, so tests that rewrite it take
    // this lock to keep from observing each other's modes.
    static CONFIG_LOCK: Mutex<()> = Mutex::new(());

    pub fn lock_config() -> MutexGuard<'static, ()> {
        CONFIG_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::lock_config;
    use super::*;

    #[test]
    fn updates_are_visible_to_fresh_snapshots() {
        let _guard = lock_config();

        let mut config = AppConfig::default();
        config.maintenance_mode = "r-".to_string();
        update_config(config).unwrap();
        assert_eq!(get_config().maintenance_mode, "r-");

        update_config(AppConfig::default()).unwrap();
        assert_eq!(get_config().maintenance_mode, "rw");
    }

    #[test]
    fn snapshots_do_not_track_later_updates() {
        let _guard = lock_config();

        update_config(AppConfig::default()).unwrap();
        let snapshot = get_config();

        let mut config = AppConfig::default();
        config.maintenance_mode = "--".to_string();
        update_config(config).unwrap();

        assert_eq!(snapshot.maintenance_mode, "rw");
        assert_eq!(get_config().maintenance_mode, "--");

        update_config(AppConfig::default()).unwrap();
    }
}
