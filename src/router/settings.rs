use log::error;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{get, put};

use crate::public::config::{get_config, update_config};
use crate::public::structure::config::AppConfig;
use crate::router::fairing::guard_auth::GuardAuth;
use crate::router::{AppResult, GuardResult};

// Neither route takes a maintenance guard: the settings surface is how an
// operator flips the mode back, so it has to stay reachable under "--"
// and under a misconfigured mode.

#[get("/get/settings")]
pub fn get_settings(auth: GuardResult<GuardAuth>) -> AppResult<Json<AppConfig>> {
    let _ = auth?;
    Ok(Json(get_config()))
}

#[put("/put/settings", format = "json", data = "<settings>")]
pub fn update_settings(
    auth: GuardResult<GuardAuth>,
    settings: Json<AppConfig>,
) -> AppResult<Status> {
    let _ = auth?;
    match update_config(settings.into_inner()) {
        Ok(_) => Ok(Status::Ok),
        Err(e) => {
            error!("Failed to update settings: {}", e);
            Err(e.into())
        }
    }
}
