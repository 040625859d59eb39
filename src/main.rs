#[macro_use]
extern crate rocket;
use anyhow::Result;

mod common;
mod public;
mod router;

use crate::common::{ROCKET_RUNTIME, STARTED_AT};
use crate::public::config::get_config;
use crate::router::generate_routes;

use env_logger::Builder;
use log::info;
use std::sync::LazyLock;

pub fn build_rocket() -> rocket::Rocket<rocket::Build> {
    rocket::build().mount("/", generate_routes())
}

fn initialize_logger() {
    Builder::new()
        // Only show INFO+ globally, WARN+ for Rocket
        .filter(None, log::LevelFilter::Info)
        .filter(Some("rocket"), log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    initialize_logger();
    LazyLock::force(&STARTED_AT);

    let config = get_config();
    info!(
        "Starting cyanopica v{} in maintenance mode '{}'",
        env!("CARGO_PKG_VERSION"),
        config.maintenance_mode
    );

    ROCKET_RUNTIME.block_on(async {
        let rocket_instance = build_rocket().ignite().await?;
        rocket_instance.launch().await
    })?;

    Ok(())
}
