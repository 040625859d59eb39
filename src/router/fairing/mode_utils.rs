use anyhow::anyhow;
use log::warn;
use rocket::http::Status;

use crate::public::config::get_config;
use crate::public::structure::mode::{AccessRequirement, ModeError, VALID_MODES, evaluate};
use crate::router::GuardError;

/// Re-read the configured maintenance mode and decide whether a handler
/// requiring `required` may run. Both failure kinds answer 503, with
/// messages an operator can tell apart.
pub fn check_current_mode(required: AccessRequirement) -> Result<(), GuardError> {
    let config = get_config();
    match evaluate(required, &config.maintenance_mode) {
        Ok(()) => Ok(()),
        Err(ModeError::Maintenance) => Err(GuardError {
            status: Status::ServiceUnavailable,
            error: anyhow!(
                "API undergoing maintenance, check {} for more info",
                config.status_page_url
            ),
        }),
        Err(ModeError::BadConfig { configured }) => {
            warn!("Rejecting request under invalid maintenance mode '{configured}'");
            Err(GuardError {
                status: Status::ServiceUnavailable,
                error: anyhow!(
                    "invalid maintenance mode '{}', must be one of {}",
                    configured,
                    VALID_MODES.join(", ")
                ),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::public::config::APP_CONFIG;
    use crate::public::config::test_support::lock_config;
    use crate::public::structure::config::AppConfig;

    #[test]
    fn maintenance_and_bad_config_carry_distinct_messages() {
        let _guard = lock_config();

        {
            let mut w = APP_CONFIG.write().unwrap();
            *w = AppConfig {
                maintenance_mode: "r-".to_string(),
                status_page_url: "https://status.example.net".to_string(),
                ..AppConfig::default()
            };
        }
        let err = check_current_mode(AccessRequirement::ReadWrite).unwrap_err();
        assert_eq!(err.status, Status::ServiceUnavailable);
        let message = err.error.to_string();
        assert!(message.contains("API undergoing maintenance"));
        assert!(message.contains("https://status.example.net"));

        APP_CONFIG.write().unwrap().maintenance_mode = "oops".to_string();
        let err = check_current_mode(AccessRequirement::Read).unwrap_err();
        assert_eq!(err.status, Status::ServiceUnavailable);
        let message = err.error.to_string();
        assert!(message.contains("invalid maintenance mode 'oops'"));
        assert!(message.contains("--, r-, rw"));

        let mut w = APP_CONFIG.write().unwrap();
        *w = AppConfig::default();
    }
}
