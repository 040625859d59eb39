use rocket::get;
use rocket::serde::json::Json;
use serde::Serialize;

use crate::common::STARTED_AT;
use crate::public::config::get_config;
use crate::public::db::objects::OBJECT_STORE;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStatus {
    pub version: &'static str,
    /// The raw configured mode, so an operator sees a bad value too.
    pub maintenance_mode: String,
    pub object_count: usize,
    pub uptime_secs: u64,
}

/// Deliberately unauthenticated and never maintenance-gated: this is
/// where the maintenance response points clients while data routes are
/// blocked.
#[get("/get/status")]
pub fn status() -> Json<ServiceStatus> {
    Json(ServiceStatus {
        version: env!("CARGO_PKG_VERSION"),
        maintenance_mode: get_config().maintenance_mode,
        object_count: OBJECT_STORE.len(),
        uptime_secs: STARTED_AT.elapsed().as_secs(),
    })
}
