pub mod auth_utils;
pub mod guard_auth;
pub mod guard_read_access;
pub mod guard_write_access;
pub mod mode_utils;

use jsonwebtoken::{Algorithm, Validation};
use std::sync::LazyLock;

pub static VALIDATION: LazyLock<Validation> = LazyLock::new(|| Validation::new(Algorithm::HS256));
