use rocket::Request;
use rocket::request::{FromRequest, Outcome};

use crate::public::structure::mode::AccessRequirement;
use crate::router::GuardError;
use crate::router::fairing::mode_utils::check_current_mode;

/// Declares that a handler needs read and write capability: satisfied
/// only under "rw".
pub struct GuardWriteAccess;

#[rocket::async_trait]
impl<'r> FromRequest<'r> for GuardWriteAccess {
    type Error = GuardError;

    async fn from_request(_req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match check_current_mode(AccessRequirement::ReadWrite) {
            Ok(()) => Outcome::Success(GuardWriteAccess),
            Err(err) => Outcome::Error((err.status, err)),
        }
    }
}
