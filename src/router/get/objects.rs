use anyhow::anyhow;
use rocket::get;
use rocket::http::Status;
use rocket::serde::json::Json;
use uuid::Uuid;

use crate::common::MAX_LIST_BATCH;
use crate::public::db::objects::OBJECT_STORE;
use crate::public::structure::object::{ObjectSummary, StoredObject};
use crate::router::fairing::guard_read_access::GuardReadAccess;
use crate::router::{AppError, AppResult, GuardResult};

#[get("/get/objects?<start>&<end>")]
pub fn list_objects(
    read_access: GuardResult<GuardReadAccess>,
    start: Option<usize>,
    end: Option<usize>,
) -> AppResult<Json<Vec<ObjectSummary>>> {
    let _ = read_access?;

    let start = start.unwrap_or(0);
    let end = end
        .unwrap_or(usize::MAX)
        .min(start.saturating_add(MAX_LIST_BATCH));

    Ok(Json(OBJECT_STORE.summaries(start, end)))
}

#[get("/get/objects/<id>")]
pub fn get_object(
    read_access: GuardResult<GuardReadAccess>,
    id: &str,
) -> AppResult<Json<StoredObject>> {
    let _ = read_access?;

    let id = Uuid::parse_str(id).map_err(|_| AppError {
        status: Status::BadRequest,
        error: anyhow!("Invalid object id '{}'", id),
    })?;

    match OBJECT_STORE.fetch(&id) {
        Some(object) => Ok(Json(object)),
        None => Err(AppError {
            status: Status::NotFound,
            error: anyhow!("Object '{}' not found", id),
        }),
    }
}
