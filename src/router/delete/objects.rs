use anyhow::anyhow;
use log::info;
use rocket::delete;
use rocket::http::Status;
use uuid::Uuid;

use crate::public::db::objects::OBJECT_STORE;
use crate::router::fairing::guard_auth::GuardAuth;
use crate::router::fairing::guard_write_access::GuardWriteAccess;
use crate::router::{AppError, AppResult, GuardResult};

#[delete("/delete/objects/<id>")]
pub fn delete_object(
    write_access: GuardResult<GuardWriteAccess>,
    auth: GuardResult<GuardAuth>,
    id: &str,
) -> AppResult<()> {
    let _ = write_access?;
    let _ = auth?;

    let id = Uuid::parse_str(id).map_err(|_| AppError {
        status: Status::BadRequest,
        error: anyhow!("Invalid object id '{}'", id),
    })?;

    match OBJECT_STORE.remove(&id) {
        Some(object) => {
            info!(size = object.content.len(); "Deleted object '{}' ({})", object.name, id);
            Ok(())
        }
        None => Err(AppError {
            status: Status::NotFound,
            error: anyhow!("Object '{}' not found", id),
        }),
    }
}
