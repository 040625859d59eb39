use anyhow::anyhow;
use rocket::http::Status;
use rocket::post;
use rocket::serde::json::Json;

use crate::public::config::get_config;
use crate::router::claims::claims::Claims;
use crate::router::{AppError, AppResult};

#[post("/post/authenticate", data = "<password>")]
pub async fn authenticate(password: Json<String>) -> AppResult<Json<String>> {
    let input_password = password.into_inner();
    if input_password == get_config().password {
        let token = Claims::new_admin().encode_with_key(&get_config().get_jwt_secret_key());
        Ok(Json(token))
    } else {
        Err(AppError {
            status: Status::Unauthorized,
            error: anyhow!("Invalid password").context("Authentication failed"),
        })
    }
}
