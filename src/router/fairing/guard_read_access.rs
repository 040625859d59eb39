use rocket::Request;
use rocket::request::{FromRequest, Outcome};

use crate::public::structure::mode::AccessRequirement;
use crate::router::GuardError;
use crate::router::fairing::mode_utils::check_current_mode;

/// Declares that a handler needs read capability: satisfied under "r-"
/// and "rw", blocked under "--".
pub struct GuardReadAccess;

#[rocket::async_trait]
impl<'r> FromRequest<'r> for GuardReadAccess {
    type Error = GuardError;

    async fn from_request(_req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match check_current_mode(AccessRequirement::Read) {
            Ok(()) => Outcome::Success(GuardReadAccess),
            Err(err) => Outcome::Error((err.status, err)),
        }
    }
}
