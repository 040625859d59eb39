use anyhow::anyhow;
use log::info;
use rocket::http::Status;
use rocket::post;
use rocket::serde::json::Json;

use crate::public::config::get_config;
use crate::public::db::objects::OBJECT_STORE;
use crate::public::structure::object::{StoredObject, UploadObject};
use crate::router::fairing::guard_auth::GuardAuth;
use crate::router::fairing::guard_write_access::GuardWriteAccess;
use crate::router::{AppError, AppResult, GuardResult};

#[post("/post/objects", format = "json", data = "<upload>")]
pub fn upload_object(
    write_access: GuardResult<GuardWriteAccess>,
    auth: GuardResult<GuardAuth>,
    upload: Json<UploadObject>,
) -> AppResult<Json<StoredObject>> {
    // Mode first: during maintenance even unauthenticated clients get
    // the 503 answer rather than a 401.
    let _ = write_access?;
    let _ = auth?;

    let upload = upload.into_inner();
    let limit_kb = get_config().upload_limit_kb;
    let limit_bytes = limit_kb.saturating_mul(1024) as usize;
    if upload.content.len() > limit_bytes {
        return Err(AppError {
            status: Status::PayloadTooLarge,
            error: anyhow!(
                "Object of {} bytes exceeds the {} KiB upload limit",
                upload.content.len(),
                limit_kb
            ),
        });
    }

    let object = StoredObject::new(upload.name, upload.content);
    OBJECT_STORE.insert(object.clone());
    info!(size = object.content.len(); "Stored object '{}' as {}", object.name, object.id);
    Ok(Json(object))
}
