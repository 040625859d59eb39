use anyhow::{Error, Result, anyhow};
use jsonwebtoken::{DecodingKey, Validation, decode};
use rocket::Request;
use serde::de::DeserializeOwned;

use crate::public::config::get_config;
use crate::router::claims::claims::Claims;

/// Extract and validate Authorization header Bearer token
pub fn extract_bearer_token<'a>(req: &'a Request<'_>) -> Result<&'a str> {
    let auth_header = match req.headers().get_one("Authorization") {
        Some(header) => header,
        None => {
            return Err(anyhow!("Request is missing the Authorization header"));
        }
    };

    match auth_header.strip_prefix("Bearer ") {
        Some(token) => Ok(token),
        None => Err(anyhow!(
            "Authorization header format is invalid, expected 'Bearer <token>'"
        )),
    }
}

/// Decode a JWT against the currently configured signing key.
pub fn decode_token<T: DeserializeOwned>(token: &str, validation: &Validation) -> Result<T> {
    match decode::<T>(
        token,
        &DecodingKey::from_secret(&get_config().get_jwt_secret_key()),
        validation,
    ) {
        Ok(token_data) => Ok(token_data.claims),
        Err(err) => Err(Error::from(err).context("Failed to decode JWT token")),
    }
}

/// Authenticate via bearer token and require admin claims.
pub fn try_bearer_admin_auth(req: &Request<'_>, validation: &Validation) -> Result<Claims> {
    let token = extract_bearer_token(req)?;
    let claims = decode_token::<Claims>(token, validation)?;
    if claims.is_admin() {
        Ok(claims)
    } else {
        Err(anyhow!("Token does not carry admin privileges"))
    }
}
