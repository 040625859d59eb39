pub mod claims;
pub mod delete;
pub mod fairing;
pub mod get;
pub mod post;
pub mod settings;

use rocket::Route;
use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::{self, Responder, Response};
use serde_json::json;
use std::io::Cursor;

pub fn generate_routes() -> Vec<Route> {
    routes![
        get::status::status,
        get::objects::list_objects,
        get::objects::get_object,
        post::authenticate::authenticate,
        post::objects::upload_object,
        delete::objects::delete_object,
        settings::get_settings,
        settings::update_settings,
    ]
}

fn error_body(error: &anyhow::Error) -> String {
    let chain: Vec<String> = error.chain().map(|cause| cause.to_string()).collect();
    json!({
        "error": error.to_string(),
        "chain": chain,
    })
    .to_string()
}

#[derive(Debug)]
pub struct AppError {
    pub status: Status,
    pub error: anyhow::Error,
}

#[rocket::async_trait]
impl<'r, 'o: 'r> Responder<'r, 'o> for AppError {
    fn respond_to(self, _req: &'r Request<'_>) -> response::Result<'o> {
        let body = error_body(&self.error);

        Response::build()
            .status(self.status)
            .header(ContentType::JSON)
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}

impl<E> From<E> for AppError
where
    anyhow::Error: From<E>,
{
    fn from(err: E) -> Self {
        AppError {
            status: Status::InternalServerError,
            error: anyhow::Error::from(err),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub struct GuardError {
    pub status: Status,
    pub error: anyhow::Error,
}

impl From<GuardError> for AppError {
    fn from(err: GuardError) -> Self {
        AppError {
            status: err.status,
            error: err.error,
        }
    }
}

pub type GuardResult<T> = Result<T, GuardError>;

impl<E> From<E> for GuardError
where
    anyhow::Error: From<E>,
{
    fn from(err: E) -> Self {
        // Plain errors out of a guard default to an auth failure; the
        // maintenance guards construct their own status explicitly.
        GuardError {
            status: Status::Unauthorized,
            error: anyhow::Error::from(err),
        }
    }
}
